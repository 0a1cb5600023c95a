//! Linter configuration.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::LinterError;
use crate::diagnostic::Severity;
use crate::line_length::LineLengthOptions;
use crate::rule::LINE_LENGTH_RULE;

/// Configuration for the linter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinterConfig {
    /// Rule configuration keyed by rule ID or alias.
    #[serde(default)]
    pub options: HashMap<String, RuleOption>,

    /// File patterns to include.
    #[serde(default)]
    pub include: Vec<String>,

    /// File patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Base directory for resolving glob patterns.
    /// This is usually the directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Configuration for a single rule (in options map).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RuleOption {
    /// Rule is enabled/disabled (boolean).
    Enabled(bool),
    /// Rule is enabled with severity string ("error", "warning", "info", "off").
    Severity(String),
    /// Rule is enabled with specific options object.
    Options(serde_json::Value),
}

/// Resolved settings for the line-length rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleSettings {
    /// Severity of reported diagnostics.
    pub severity: Severity,
    /// Rule options.
    pub options: LineLengthOptions,
}

/// Parses a severity string. `"off"` yields `None`.
fn parse_severity(value: &str) -> Result<Option<Severity>, LinterError> {
    if value.eq_ignore_ascii_case("off") {
        return Ok(None);
    }
    value.parse::<Severity>().map(Some).map_err(LinterError::config)
}

impl RuleOption {
    /// Resolves this option into rule settings. Returns `None` if the rule is off.
    pub fn resolve(&self) -> Result<Option<RuleSettings>, LinterError> {
        match self {
            RuleOption::Enabled(false) => Ok(None),
            RuleOption::Enabled(true) => Ok(Some(RuleSettings::default())),
            RuleOption::Severity(s) => Ok(parse_severity(s)?.map(|severity| RuleSettings {
                severity,
                ..Default::default()
            })),
            RuleOption::Options(value) => {
                let mut map = value.as_object().cloned().ok_or_else(|| {
                    LinterError::config(format!(
                        "Options for '{}' must be a boolean, a severity or an object",
                        LINE_LENGTH_RULE.display_name()
                    ))
                })?;

                let severity = match map.remove("severity") {
                    None => Severity::Error,
                    Some(serde_json::Value::String(s)) => match parse_severity(&s)? {
                        Some(severity) => severity,
                        None => return Ok(None),
                    },
                    Some(other) => {
                        return Err(LinterError::config(format!(
                            "Invalid severity value: {}",
                            other
                        )));
                    }
                };

                let options: LineLengthOptions =
                    serde_json::from_value(serde_json::Value::Object(map)).map_err(|e| {
                        LinterError::config(format!(
                            "Invalid options for '{}': {}",
                            LINE_LENGTH_RULE.display_name(),
                            e
                        ))
                    })?;

                Ok(Some(RuleSettings { severity, options }))
            }
        }
    }
}

impl LinterConfig {
    /// Config file names searched by [`discover`](Self::discover), in priority order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".strictlen.jsonc", ".strictlen.json"];

    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinterError::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let mut config = Self::from_jsonc(&content)?;

        config.base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Some(parent.to_path_buf()),
            _ => Some(PathBuf::from(".")),
        };

        Ok(config)
    }

    /// Parses configuration from JSON, allowing comments and trailing commas.
    pub fn from_jsonc(content: &str) -> Result<Self, LinterError> {
        let parse_options = jsonc_parser::ParseOptions::default();
        let value = jsonc_parser::parse_to_serde_value(content, &parse_options)
            .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        serde_json::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))
    }

    /// Finds the first config file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Resolves the line-length rule settings.
    ///
    /// Returns defaults when the rule is not mentioned and `None` when it is
    /// turned off. Keys naming other rules are ignored with a warning.
    pub fn rule_settings(&self) -> Result<Option<RuleSettings>, LinterError> {
        let mut matching = Vec::new();
        for (name, option) in &self.options {
            if LINE_LENGTH_RULE.matches_name(name) {
                matching.push((name.as_str(), option));
            } else {
                warn!("Unknown rule '{}' in options, ignoring", name);
            }
        }

        match matching.as_slice() {
            [] => Ok(Some(RuleSettings::default())),
            [(_, option)] => option.resolve(),
            _ => {
                let mut names: Vec<_> = matching.iter().map(|(name, _)| *name).collect();
                names.sort_unstable();
                Err(LinterError::config(format!(
                    "Rule '{}' is configured more than once: {}",
                    LINE_LENGTH_RULE.display_name(),
                    names.join(", ")
                )))
            }
        }
    }
}
