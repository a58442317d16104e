//! Configuration schema types.
//!
//! [`ConfigRecord`] mirrors what users write on disk: every key is optional
//! and the same struct deserializes from the `tool.lint-python` table of
//! `pyproject.toml` and from the `with:` mapping of a workflow step.
//! [`LintConfig`] is the validated shape the runner consumes; it is only
//! built by [`crate::config::validate`].

use serde::{Deserialize, Deserializer, Serialize};

/// Prefix identifying the companion GitHub Action in a step's `uses` field.
pub const ACTION_PREFIX: &str = "CERT-Polska/lint-python-action";

/// Marker separating the action name from its pinned version.
pub const VERSION_MARKER: &str = "@v";

/// Raw lint-python configuration as found on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRecord {
    /// Path or glob the linters operate on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Required lint-python version, e.g. `"2"` or `"2.3"`.
    #[serde(
        default,
        deserialize_with = "deserialize_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub lint_version: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub use_isort: Option<bool>,

    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub use_black: Option<bool>,

    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub use_flake8: Option<bool>,

    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub use_mypy: Option<bool>,

    /// Whitespace-separated extra pip install targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_requirements: Option<String>,
}

/// A workflow step referencing the companion action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStep {
    /// The `uses` reference, e.g. `CERT-Polska/lint-python-action@v2`.
    pub uses: String,
    /// The step's `with` inputs.
    pub with: ConfigRecord,
}

impl WorkflowStep {
    /// Version pinned in the `uses` reference: everything after the first `@v`.
    pub fn pinned_version(&self) -> Option<&str> {
        self.uses
            .split_once(VERSION_MARKER)
            .map(|(_, version)| version)
    }

    /// Build the configuration record this step describes.
    ///
    /// All `with` inputs are copied; a version pinned in `uses` overrides
    /// any `lint-version` input.
    pub fn to_record(&self) -> ConfigRecord {
        let mut record = self.with.clone();
        if let Some(version) = self.pinned_version() {
            record.lint_version = Some(version.to_string());
        }
        record
    }
}

/// Validated lint-python configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LintConfig {
    pub source: String,
    pub lint_version: Option<String>,
    pub use_isort: bool,
    pub use_black: bool,
    pub use_flake8: bool,
    pub use_mypy: bool,
    pub extra_requirements: Vec<String>,
}

impl LintConfig {
    /// Fill defaults for every optional field of `record`.
    ///
    /// Returns `None` when `source` is missing.
    pub(crate) fn from_record(record: &ConfigRecord) -> Option<Self> {
        let source = record.source.clone()?;
        Some(Self {
            source,
            lint_version: record.lint_version.clone(),
            use_isort: record.use_isort.unwrap_or(true),
            use_black: record.use_black.unwrap_or(true),
            use_flake8: record.use_flake8.unwrap_or(true),
            use_mypy: record.use_mypy.unwrap_or(true),
            extra_requirements: record
                .extra_requirements
                .as_deref()
                .unwrap_or_default()
                .split_whitespace()
                .map(String::from)
                .collect(),
        })
    }

    /// Whether the given linter should run.
    pub fn is_enabled(&self, linter: Linter) -> bool {
        match linter {
            Linter::Isort => self.use_isort,
            Linter::Black => self.use_black,
            Linter::Flake8 => self.use_flake8,
            Linter::Mypy => self.use_mypy,
        }
    }
}

/// The external code-quality tools, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linter {
    Isort,
    Black,
    Flake8,
    Mypy,
}

impl Linter {
    /// All linters in run order.
    pub const ALL: [Linter; 4] = [Linter::Isort, Linter::Black, Linter::Flake8, Linter::Mypy];

    /// Python module (and pip package) name.
    pub fn module(self) -> &'static str {
        match self {
            Linter::Isort => "isort",
            Linter::Black => "black",
            Linter::Flake8 => "flake8",
            Linter::Mypy => "mypy",
        }
    }

    /// Whether the tool rewrites files and therefore understands `--check`.
    pub fn supports_check(self) -> bool {
        matches!(self, Linter::Isort | Linter::Black)
    }
}

/// Accept `true`/`false` as booleans or as strings.
///
/// Workflow inputs are frequently quoted (`use-mypy: "false"`).
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(b)) => Ok(Some(b)),
        Some(Flag::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "expected a boolean, found '{}'",
                other
            ))),
        },
    }
}

/// Accept a version as a string or a bare major number (`lint-version = 2`).
///
/// Fractional numbers are rejected: `2.10` would read back as `2.1`.
fn deserialize_version<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Version {
        Text(String),
        Int(u64),
        Float(f64),
    }

    match Option::<Version>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Version::Text(s)) => Ok(Some(s)),
        Some(Version::Int(i)) => Ok(Some(i.to_string())),
        Some(Version::Float(f)) => Err(serde::de::Error::custom(format!(
            "lint-version {} must be quoted, e.g. \"{}\"",
            f, f
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(uses: &str, with: ConfigRecord) -> WorkflowStep {
        WorkflowStep {
            uses: uses.to_string(),
            with,
        }
    }

    #[test]
    fn parses_toml_section() {
        let record: ConfigRecord = toml::from_str(
            r#"
source = "src/"
lint-version = "2"
use-mypy = false
extra-requirements = "types-requests pytest"
"#,
        )
        .unwrap();

        assert_eq!(record.source.as_deref(), Some("src/"));
        assert_eq!(record.lint_version.as_deref(), Some("2"));
        assert_eq!(record.use_mypy, Some(false));
        assert_eq!(record.use_black, None);
    }

    #[test]
    fn parses_yaml_with_quoted_flags() {
        let record: ConfigRecord =
            serde_yaml::from_str("source: src/\nuse-black: \"false\"\nuse-isort: true").unwrap();

        assert_eq!(record.use_black, Some(false));
        assert_eq!(record.use_isort, Some(true));
    }

    #[test]
    fn rejects_non_boolean_flag_text() {
        let result: std::result::Result<ConfigRecord, _> =
            serde_yaml::from_str("source: src/\nuse-black: maybe");
        assert!(result.is_err());
    }

    #[test]
    fn accepts_numeric_lint_version() {
        let record: ConfigRecord = toml::from_str("source = \".\"\nlint-version = 2").unwrap();
        assert_eq!(record.lint_version.as_deref(), Some("2"));

        let record: ConfigRecord = serde_yaml::from_str("lint-version: 2").unwrap();
        assert_eq!(record.lint_version.as_deref(), Some("2"));
    }

    #[test]
    fn rejects_fractional_lint_version() {
        let toml_result: std::result::Result<ConfigRecord, _> =
            toml::from_str("source = \".\"\nlint-version = 2.10");
        assert!(toml_result.is_err());

        for content in ["lint-version: 2.10", "lint-version: 2.0"] {
            let yaml_result: std::result::Result<ConfigRecord, _> = serde_yaml::from_str(content);
            assert!(yaml_result.is_err(), "{content} should be rejected");
        }

        let record: ConfigRecord = serde_yaml::from_str("lint-version: \"2.10\"").unwrap();
        assert_eq!(record.lint_version.as_deref(), Some("2.10"));
    }

    #[test]
    fn ignores_unknown_keys() {
        let record: ConfigRecord =
            serde_yaml::from_str("source: src/\npython-version: '3.11'").unwrap();
        assert_eq!(record.source.as_deref(), Some("src/"));
    }

    #[test]
    fn pinned_version_takes_text_after_first_marker() {
        let s = step("CERT-Polska/lint-python-action@v2.3.1", ConfigRecord::default());
        assert_eq!(s.pinned_version(), Some("2.3.1"));

        let s = step("CERT-Polska/lint-python-action@v2@v3", ConfigRecord::default());
        assert_eq!(s.pinned_version(), Some("2@v3"));

        let s = step("CERT-Polska/lint-python-action@main", ConfigRecord::default());
        assert_eq!(s.pinned_version(), None);
    }

    #[test]
    fn to_record_overrides_lint_version_from_uses() {
        let with = ConfigRecord {
            source: Some("src/".to_string()),
            lint_version: Some("1".to_string()),
            ..Default::default()
        };
        let record = step("CERT-Polska/lint-python-action@v2", with).to_record();

        assert_eq!(record.lint_version.as_deref(), Some("2"));
        assert_eq!(record.source.as_deref(), Some("src/"));
    }

    #[test]
    fn to_record_keeps_lint_version_without_marker() {
        let with = ConfigRecord {
            lint_version: Some("1".to_string()),
            ..Default::default()
        };
        let record = step("CERT-Polska/lint-python-action", with).to_record();
        assert_eq!(record.lint_version.as_deref(), Some("1"));
    }

    #[test]
    fn lint_config_fills_defaults() {
        let record = ConfigRecord {
            source: Some("pkg".to_string()),
            use_flake8: Some(false),
            extra_requirements: Some("  types-toml\n  pytest ".to_string()),
            ..Default::default()
        };
        let config = LintConfig::from_record(&record).unwrap();

        assert!(config.use_isort && config.use_black && config.use_mypy);
        assert!(!config.use_flake8);
        assert_eq!(config.extra_requirements, vec!["types-toml", "pytest"]);
        assert!(!config.is_enabled(Linter::Flake8));
    }

    #[test]
    fn lint_config_requires_source() {
        assert!(LintConfig::from_record(&ConfigRecord::default()).is_none());
    }

    #[test]
    fn only_formatters_support_check() {
        let checked: Vec<_> = Linter::ALL
            .iter()
            .filter(|l| l.supports_check())
            .map(|l| l.module())
            .collect();
        assert_eq!(checked, vec!["isort", "black"]);
    }
}
