#![forbid(unsafe_code)]

//! Placement configuration.
//!
//! Defaults match the usual tooltip styling: an 8px gap between trigger and
//! tooltip and an 8px safety margin from the edges of the containing bounds.
//! Hosts can override each value in code or through the environment.

use crate::position::Position;

/// Environment variable overriding the trigger/tooltip gap in pixels.
const ENV_GAP: &str = "PERCH_TOOLTIP_GAP";
/// Environment variable overriding the margin kept from the bounds edges.
const ENV_VIEWPORT_MARGIN: &str = "PERCH_VIEWPORT_MARGIN";
/// Environment variable overriding the fallback direction (`left|right|top|bottom`).
const ENV_DEFAULT_POSITION: &str = "PERCH_DEFAULT_POSITION";

pub const DEFAULT_GAP: f64 = 8.0;
pub const DEFAULT_VIEWPORT_MARGIN: f64 = 8.0;

/// Tunables shared by space calculation, auto positioning and overflow
/// adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    /// Distance between the trigger edge and the tooltip (default: 8).
    pub gap: f64,
    /// Distance kept from the edges of the containing bounds (default: 8).
    pub viewport_margin: f64,
    /// Direction used when the caller states no preference (default: right).
    pub default_position: Position,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            viewport_margin: DEFAULT_VIEWPORT_MARGIN,
            default_position: Position::Right,
        }
    }
}

impl PlacementConfig {
    /// Set the trigger/tooltip gap.
    ///
    /// Negative or non-finite values are ignored.
    #[must_use]
    pub fn gap(mut self, gap: f64) -> Self {
        if valid_length("gap", gap) {
            self.gap = gap;
        }
        self
    }

    /// Set the margin kept from the bounds edges.
    ///
    /// Negative or non-finite values are ignored.
    #[must_use]
    pub fn viewport_margin(mut self, margin: f64) -> Self {
        if valid_length("viewport_margin", margin) {
            self.viewport_margin = margin;
        }
        self
    }

    /// Set the fallback direction.
    #[must_use]
    pub fn default_position(mut self, position: Position) -> Self {
        self.default_position = position;
        self
    }

    /// Defaults with overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from a custom environment lookup (for tests).
    ///
    /// Values that do not parse, are negative, or are not finite are ignored.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(gap) = env_length(&get_env, ENV_GAP) {
            config.gap = gap;
        }
        if let Some(margin) = env_length(&get_env, ENV_VIEWPORT_MARGIN) {
            config.viewport_margin = margin;
        }
        if let Some(raw) = get_env(ENV_DEFAULT_POSITION) {
            match raw.parse::<Position>() {
                Ok(position) => config.default_position = position,
                Err(_err) => {
                    perch_core::warn!(var = ENV_DEFAULT_POSITION, error = %_err, "ignoring override");
                }
            }
        }
        config
    }

    /// Serialize to JSON (for diagnostics/evidence logs).
    #[must_use]
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"gap":{},"viewport_margin":{},"default_position":"{}"}}"#,
            self.gap,
            self.viewport_margin,
            self.default_position.as_str()
        )
    }
}

fn is_length(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn valid_length(_field: &str, value: f64) -> bool {
    let valid = is_length(value);
    if !valid {
        perch_core::warn!(field = _field, value, "ignoring invalid length");
    }
    valid
}

fn env_length<F>(get_env: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = get_env(key)?;
    match raw.trim().parse::<f64>() {
        Ok(value) if is_length(value) => Some(value),
        _ => {
            perch_core::warn!(var = key, value = %raw, "ignoring override");
            None
        }
    }
}
