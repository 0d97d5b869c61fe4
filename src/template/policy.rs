//! Declarative script rewrite policy.

use serde_json::{Map, Value};

/// Script entry points that are pinned to the front of the rewritten
/// `scripts` block, in this order.
pub const DEFAULT_ALLOW: [&str; 4] = ["prepare", "start", "build", "test"];

/// Policy governing which script entries survive the manifest rewrite.
///
/// Two named sets: `allow` entries are emitted first (in allow order) when the
/// template defines them; everything else passes through in template order
/// unless named in `drop`.
#[derive(Debug, Clone)]
pub struct ScriptPolicy {
    allow: Vec<String>,
    drop: Vec<String>,
}

impl Default for ScriptPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOW.iter().map(|s| s.to_string()).collect(), Vec::new())
    }
}

impl ScriptPolicy {
    /// Create a policy from explicit allow and drop sets.
    pub fn new(allow: Vec<String>, drop: Vec<String>) -> Self {
        Self { allow, drop }
    }

    /// The pinned entry points.
    pub fn allowed(&self) -> &[String] {
        &self.allow
    }

    /// Check whether a script entry is explicitly dropped.
    pub fn is_dropped(&self, name: &str) -> bool {
        self.drop.iter().any(|d| d == name)
    }

    /// Apply the policy to a template's scripts.
    ///
    /// Allow-listed entries come first, then the remaining entries in their
    /// original order, minus anything in the drop set.
    pub fn apply(&self, scripts: &Map<String, Value>) -> Map<String, Value> {
        let mut result = Map::new();

        for name in &self.allow {
            if let Some(value) = scripts.get(name) {
                result.insert(name.clone(), value.clone());
            }
        }

        for (name, value) in scripts {
            if self.allow.iter().any(|a| a == name) || self.is_dropped(name) {
                continue;
            }
            result.insert(name.clone(), value.clone());
        }

        result
    }
}
