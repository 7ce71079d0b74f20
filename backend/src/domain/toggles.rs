//! Feature-toggle resolution.
//!
//! Toggles have a static default loaded once from configuration and may be
//! overridden per request through a query parameter carrying the toggle
//! name. Resolution is stateless: nothing is cached between requests.

use std::collections::HashMap;

use tracing::info;

/// Immutable set of configured toggle defaults.
///
/// Built once at startup from the static configuration and shared read-only
/// by every request handler.
#[derive(Debug, Clone, Default)]
pub struct FeatureToggles {
    toggles: HashMap<String, bool>,
}

/// Per-request override values extracted from the query string.
///
/// Scoped to a single request and never persisted.
#[derive(Debug, Clone, Default)]
pub struct ToggleOverrides {
    values: HashMap<String, String>,
}

impl ToggleOverrides {
    /// Capture raw query parameters as candidate overrides.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    fn get(&self, toggle_name: &str) -> Option<&str> {
        self.values.get(toggle_name).map(String::as_str)
    }
}

impl FeatureToggles {
    /// Build the toggle set from configured defaults.
    pub fn new(toggles: HashMap<String, bool>) -> Self {
        Self { toggles }
    }

    /// Resolve a toggle for the current request.
    ///
    /// Precedence: `false` when the toggle is not configured, then the
    /// configured value, then a request override when present. An override
    /// that does not parse as a boolean resolves to `false` rather than
    /// falling back to the configured value.
    pub fn is_enabled(&self, toggle_name: &str, overrides: &ToggleOverrides) -> bool {
        let configured = self.toggles.get(toggle_name).copied().unwrap_or(false);

        let state = match overrides.get(toggle_name) {
            Some(raw) => {
                let overridden = parse_bool(raw).unwrap_or(false);
                info!(
                    toggle = toggle_name,
                    from = configured,
                    to = overridden,
                    raw,
                    "overriding toggle from request"
                );
                overridden
            }
            None => configured,
        };

        info!(toggle = toggle_name, state, "toggle resolved");
        state
    }
}

/// Parse the boolean lexicon accepted for overrides.
///
/// Mirrors `1/t/T/TRUE/true/True` and `0/f/F/FALSE/false/False`; anything
/// else is no boolean at all.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
