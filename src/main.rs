//! csp-create CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use csp_create::cli::{resolve_options, Cli};
use csp_create::fetch::NpmInstaller;
use csp_create::pipeline::Pipeline;
use csp_create::registry::NpmRegistry;
use csp_create::ui::{Output, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("csp_create=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("csp_create=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("csp-create starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let output = Output::new(output_mode);

    let options = match resolve_options(&cli) {
        Ok(options) => options,
        Err(e) => {
            output.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let registry = NpmRegistry::new(&cli.registry);
    let installer = NpmInstaller::new();
    let pipeline = Pipeline::new(&registry, &installer, &output);

    match pipeline.run(&options) {
        Ok(()) => {
            output.success(&format!(
                "Project ready in {}",
                options.target_dir.display()
            ));
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.error(&format!("Error: {}", e));
            output.error("Cannot continue safely. Exiting...");
            ExitCode::from(1)
        }
    }
}
