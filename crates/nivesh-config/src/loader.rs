//! Loading limits files.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::limits::{LimitOverrides, LimitsConfig};

/// Environment variable naming a limits file.
pub const CONFIG_ENV_VAR: &str = "NIVESH_CONFIG";

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML (`.toml`)
    Toml,
    /// JSON (`.json`)
    Json,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat { extension }),
        }
    }
}

/// Parses limit overrides from a string.
pub fn parse_overrides(content: &str, format: ConfigFormat) -> ConfigResult<LimitOverrides> {
    let overrides = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(overrides)
}

/// Loads a limits file and merges it over the standard limits.
pub fn load_limits(path: impl AsRef<Path>) -> ConfigResult<LimitsConfig> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let overrides = parse_overrides(&content, format)?;
    let config = LimitsConfig::standard().with_overrides(&overrides)?;
    tracing::info!(path = %path.display(), "loaded limits file");
    Ok(config)
}

/// Returns the limits file to use: `explicit` if given, else the path in
/// [`CONFIG_ENV_VAR`], else none.
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Loads the limits named by [`resolve_path`], or the standard limits when
/// there is no file.
pub fn load_effective(explicit: Option<&Path>) -> ConfigResult<LimitsConfig> {
    match resolve_path(explicit) {
        Some(path) => load_limits(path),
        None => {
            tracing::debug!("no limits file; using standard limits");
            Ok(LimitsConfig::standard())
        }
    }
}

/// Renders a configuration as pretty TOML.
pub fn to_toml(config: &LimitsConfig) -> ConfigResult<String> {
    toml::to_string_pretty(config).map_err(|e| ConfigError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nivesh_core::types::{InstrumentKind, ParamId};

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("limits.TOML")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/b.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("limits.yaml")),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_parse_toml_overrides() {
        let content = r#"
            [sip.monthly_amount]
            min = 500

            [compound-interest.years]
            max = 40
            default = 10
        "#;
        let overrides = parse_overrides(content, ConfigFormat::Toml).unwrap();
        let sip = &overrides.0[&InstrumentKind::Sip];
        assert_eq!(sip[&ParamId::MonthlyAmount].min, Some(500.0));
        let ci = &overrides.0[&InstrumentKind::CompoundInterest];
        assert_eq!(ci[&ParamId::Years].max, Some(40.0));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let content = r#"{"ppf": {"years": {"maximum": 30}}}"#;
        assert!(matches!(
            parse_overrides(content, ConfigFormat::Json),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_to_toml_round_trips() {
        let standard = LimitsConfig::standard();
        let rendered = to_toml(&standard).unwrap();
        let back: LimitsConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(back, standard);
    }
}
