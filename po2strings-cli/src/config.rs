use std::path::{Path, PathBuf};

use po2strings::{ConvertOptions, Escaping, OrphanPolicy, OutputEncoding};
use serde::Deserialize;

/// Looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "po2strings.toml";

/// Table name used by `batch` when neither the flag nor the config sets one.
pub const DEFAULT_TABLE: &str = "Localizable";

/// Contents of `po2strings.toml`. Every key is optional.
///
/// ```toml
/// input-encoding = "latin1"
/// output-encoding = "utf-8"
/// escape = "stray-quotes"
/// header = false
/// convert-orphans = true
/// table = "InfoPlist"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CliConfig {
    pub input_encoding: Option<String>,
    pub output_encoding: Option<String>,
    pub escape: Option<String>,
    pub header: Option<bool>,
    pub convert_orphans: Option<bool>,
    pub table: Option<String>,
}

impl CliConfig {
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid configuration: {}", e))
    }
}

/// Loads the configuration file.
///
/// An explicit path must exist. Without one, `po2strings.toml` in the current
/// directory is used if present, and the defaults otherwise.
pub fn load_config(path: Option<&str>) -> Result<CliConfig, String> {
    let path = match path {
        Some(path) => PathBuf::from(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                return Ok(CliConfig::default());
            }
            default.to_path_buf()
        }
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
    log::info!("Loaded configuration from {}", path.display());
    CliConfig::from_toml(&content).map_err(|e| format!("{} ({})", e, path.display()))
}

/// Conversion flags shared by every converting subcommand. Set flags win over
/// the configuration file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConversionFlags {
    /// Encoding of the PO input (any WHATWG label, e.g. latin1). Defaults to UTF-8.
    #[arg(long)]
    pub input_encoding: Option<String>,

    /// Encoding of the output: utf-16 (with BOM), utf-16le, utf-16be or utf-8
    #[arg(long)]
    pub output_encoding: Option<String>,

    /// Quote escaping applied to keys and values: disabled, stray-quotes or backslash
    #[arg(long)]
    pub escape: Option<String>,

    /// Omit the "Automatically generated" header line
    #[arg(long)]
    pub no_header: bool,

    /// Also convert entries that have no `#:` reference comment
    #[arg(long)]
    pub convert_orphans: bool,
}

impl ConversionFlags {
    /// Merges the flags over `config` into library options.
    pub fn resolve(&self, config: &CliConfig) -> Result<ConvertOptions, String> {
        let mut options = ConvertOptions::new();

        if let Some(label) = self.escape.as_ref().or(config.escape.as_ref()) {
            let escaping = label.parse::<Escaping>().map_err(|e| e.to_string())?;
            options = options.with_escaping(escaping);
        }

        if let Some(label) = self.output_encoding.as_ref().or(config.output_encoding.as_ref()) {
            let encoding = label.parse::<OutputEncoding>().map_err(|e| e.to_string())?;
            options = options.with_output_encoding(encoding);
        }

        let input_encoding = self
            .input_encoding
            .clone()
            .or_else(|| config.input_encoding.clone());
        if let Some(label) = &input_encoding {
            po2strings::encoding::resolve_input_encoding(Some(label)).map_err(|e| e.to_string())?;
        }
        options = options.with_input_encoding(input_encoding);

        let header = !self.no_header && config.header.unwrap_or(true);
        options = options.with_header(header);

        if self.convert_orphans || config.convert_orphans.unwrap_or(false) {
            options = options.with_orphans(OrphanPolicy::Convert);
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let config = CliConfig::from_toml(
            r#"
input-encoding = "latin1"
output-encoding = "utf-8"
escape = "backslash"
header = false
convert-orphans = true
table = "InfoPlist"
"#,
        )
        .unwrap();
        assert_eq!(config.input_encoding.as_deref(), Some("latin1"));
        assert_eq!(config.output_encoding.as_deref(), Some("utf-8"));
        assert_eq!(config.escape.as_deref(), Some("backslash"));
        assert_eq!(config.header, Some(false));
        assert_eq!(config.convert_orphans, Some(true));
        assert_eq!(config.table.as_deref(), Some("InfoPlist"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = CliConfig::from_toml("colour = \"red\"").unwrap_err();
        assert!(err.contains("Invalid configuration"));
    }

    #[test]
    fn test_defaults_without_flags_or_config() {
        let options = ConversionFlags::default()
            .resolve(&CliConfig::default())
            .unwrap();
        assert_eq!(options, ConvertOptions::new());
    }

    #[test]
    fn test_config_values_apply() {
        let config = CliConfig {
            output_encoding: Some("utf-8".to_string()),
            escape: Some("stray-quotes".to_string()),
            header: Some(false),
            convert_orphans: Some(true),
            ..CliConfig::default()
        };
        let options = ConversionFlags::default().resolve(&config).unwrap();
        assert_eq!(options.output_encoding, OutputEncoding::Utf8);
        assert_eq!(options.escaping, Escaping::StrayQuotes);
        assert!(!options.header);
        assert_eq!(options.orphans, OrphanPolicy::Convert);
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig {
            output_encoding: Some("utf-8".to_string()),
            escape: Some("stray-quotes".to_string()),
            ..CliConfig::default()
        };
        let flags = ConversionFlags {
            output_encoding: Some("utf-16be".to_string()),
            escape: Some("backslash".to_string()),
            no_header: true,
            ..ConversionFlags::default()
        };
        let options = flags.resolve(&config).unwrap();
        assert_eq!(options.output_encoding, OutputEncoding::Utf16Be);
        assert_eq!(options.escaping, Escaping::Backslash);
        assert!(!options.header);
    }

    #[test]
    fn test_invalid_labels_are_reported() {
        let flags = ConversionFlags {
            escape: Some("html".to_string()),
            ..ConversionFlags::default()
        };
        assert!(flags.resolve(&CliConfig::default()).is_err());

        let flags = ConversionFlags {
            input_encoding: Some("klingon".to_string()),
            ..ConversionFlags::default()
        };
        let err = flags.resolve(&CliConfig::default()).unwrap_err();
        assert!(err.contains("klingon"));
    }

    #[test]
    fn test_explicit_config_path_must_exist() {
        let err = load_config(Some("/definitely/not/here/po2strings.toml")).unwrap_err();
        assert!(err.contains("Cannot read config"));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "table = \"Main\"\n").unwrap();
        let config = load_config(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.table.as_deref(), Some("Main"));
    }
}
