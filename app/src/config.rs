//! Calendar settings embedded at build time.

use racecal_types::CalendarConfig;

const CALENDAR_TOML: &str = include_str!("../calendar.toml");

/// Parse the embedded settings, falling back to defaults on error.
pub fn load_config() -> CalendarConfig {
    match toml::from_str::<CalendarConfig>(CALENDAR_TOML) {
        Ok(config) => {
            tracing::info!(
                locale = ?config.locale,
                data_url = %config.data_url,
                "Loaded calendar config"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse calendar.toml, using defaults");
            CalendarConfig::default()
        }
    }
}
