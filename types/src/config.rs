//! Calendar configuration.
//!
//! The web build embeds a TOML file with these fields; every field has a
//! default so a partial (or empty) file is valid.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

fn default_data_url() -> String {
    "./data/races.json".to_string()
}

fn default_animation_step_ms() -> u32 {
    50
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Location of the race document, relative to the page
    #[serde(default = "default_data_url")]
    pub data_url: String,

    #[serde(default)]
    pub locale: Locale,

    /// Per-card entry animation delay. Cosmetic only.
    #[serde(default = "default_animation_step_ms")]
    pub animation_step_ms: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
            locale: Locale::default(),
            animation_step_ms: default_animation_step_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: CalendarConfig = toml::from_str("").unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.data_url, "./data/races.json");
        assert_eq!(config.locale, Locale::Es);
        assert_eq!(config.animation_step_ms, 50);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml = r#"
locale = "en"
animation_step_ms = 0
"#;
        let config: CalendarConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.animation_step_ms, 0);
        assert_eq!(config.data_url, "./data/races.json");
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        assert!(toml::from_str::<CalendarConfig>(r#"locale = "fr""#).is_err());
    }
}
