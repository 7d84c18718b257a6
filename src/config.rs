//! Run configuration.
//!
//! Stock defaults, optionally overridden by a `renumber.toml` in the target
//! directory. Config files are sparse — override just the values you want:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! protected = { min = 1, max = 19 }   # Numeric names never renamed
//! start_number = 20                   # Floor for new allocations
//! zero_pad_width = 0                  # 0 = plain, N = pad to N digits
//! extensions = ["jpg", "jpeg", "png", "gif", "webp"]
//! manifest_file = "manifest.js"       # Written inside the target directory
//! label = "image"                     # Display label on every manifest entry
//! ```
//!
//! Unknown keys are rejected to catch typos early. The loaded value is
//! scoped to a single pipeline invocation — there is no process-wide config.

use crate::classify::ProtectedRange;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration for one renumbering run.
///
/// All fields have defaults; `renumber.toml` and CLI flags only override.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenumberConfig {
    /// Numeric names in this inclusive range are never renamed.
    pub protected: ProtectedRange,
    /// Floor for new allocations.
    pub start_number: u32,
    /// Zero padding for assigned names; 0 disables padding.
    pub zero_pad_width: usize,
    /// Recognized image extensions, matched case-insensitively.
    pub extensions: Vec<String>,
    /// Manifest filename, written inside the target directory.
    pub manifest_file: String,
    /// Display label attached to every manifest entry.
    pub label: String,
}

impl Default for RenumberConfig {
    fn default() -> Self {
        Self {
            protected: ProtectedRange { min: 1, max: 19 },
            start_number: 20,
            zero_pad_width: 0,
            extensions: ["jpg", "jpeg", "png", "gif", "webp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            manifest_file: "manifest.js".to_string(),
            label: "image".to_string(),
        }
    }
}

impl RenumberConfig {
    /// Validate invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.protected.min > self.protected.max {
            return Err(ConfigError::Validation(format!(
                "protected range min ({}) exceeds max ({})",
                self.protected.min, self.protected.max
            )));
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".to_string(),
            ));
        }
        if self.manifest_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "manifest_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

const CONFIG_FILE: &str = "renumber.toml";

/// Load config for `dir`: stock defaults overridden by `renumber.toml` if
/// present. Extensions are normalized to lowercase before validation.
pub fn load_config(dir: &Path) -> Result<RenumberConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    let mut config: RenumberConfig = if path.exists() {
        toml::from_str(&fs::read_to_string(&path)?)?
    } else {
        RenumberConfig::default()
    };
    for ext in &mut config.extensions {
        *ext = ext.to_lowercase();
    }
    config.validate()?;
    Ok(config)
}

/// A fully documented stock config, for `photo-renumber gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = RenumberConfig::default();
    format!(
        r#"# photo-renumber configuration
# All options are optional - defaults shown below.

# Files whose name is a bare number in this inclusive range are never
# renamed. Reserve a low block for hand-curated ordering.
protected = {{ min = {min}, max = {max} }}

# First number considered when assigning names to un-numbered files.
# Numbers already in use are skipped, never reassigned.
start_number = {start}

# Zero-pad assigned numbers to this many digits. 0 = no padding.
# With 3, the number 20 becomes "020".
zero_pad_width = {pad}

# Recognized image extensions (case-insensitive).
extensions = [{exts}]

# Manifest module written inside the target directory after renumbering.
manifest_file = "{manifest}"

# Display label attached to every manifest entry.
label = "{label}"
"#,
        min = defaults.protected.min,
        max = defaults.protected.max,
        start = defaults.start_number,
        pad = defaults.zero_pad_width,
        exts = defaults
            .extensions
            .iter()
            .map(|e| format!("\"{e}\""))
            .collect::<Vec<_>>()
            .join(", "),
        manifest = defaults.manifest_file,
        label = defaults.label,
    )
}
