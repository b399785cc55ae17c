//! Configuration loading.
//!
//! Sources, later overriding earlier:
//! 1. Defaults
//! 2. TOML file at `~/.config/waktu/config.toml`
//! 3. Environment variables prefixed with `WAKTU_`, sections separated by
//!    a double underscore (`WAKTU_LOCATION__ZERO_GPS=true`)

use std::path::PathBuf;

use chrono::Duration;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use waktu_astronomy::LocalPrayerTimesCalculator;
use waktu_location::LocaleHints;
use waktu_types::{AsrJuristic, CalculationMethod, WaktuError};

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "waktu";
const STORE_FILE_NAME: &str = "store.json";

pub const MAX_REMINDER_LEAD_MINUTES: i64 = 120;
pub const MAX_HIJRI_ADJUSTMENT: i64 = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calculation: CalculationConfig,
    pub location: LocationConfig,
    pub notifications: NotificationConfig,
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Method id, e.g. `"kemenag"` or `"mwl"`.
    pub method: String,
    pub asr: AsrJuristic,
    /// Days added to the tabular Hijri date for local sighting.
    pub hijri_adjustment: i64,
    /// Forces the clock times are expressed in. `None` uses the region's zone.
    pub utc_offset_minutes: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    /// Never ask for live GPS.
    pub zero_gps: bool,
    pub cache_max_age_hours: u32,
    /// Overrides the detected IANA zone used as a location hint.
    pub timezone: Option<String>,
    /// Overrides the detected language used as a location hint.
    pub language: Option<String>,
    /// Defaults to `~/.local/share/waktu/store.json`.
    pub store_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub enabled: bool,
    pub reminder_lead_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Cross-check local estimates against MyQuran (needs the `remote` feature).
    pub enabled: bool,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            method: CalculationMethod::default().id().to_string(),
            asr: AsrJuristic::default(),
            hijri_adjustment: 0,
            utc_offset_minutes: None,
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            zero_gps: false,
            cache_max_age_hours: 24,
            timezone: None,
            language: None,
            store_path: None,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reminder_lead_minutes: 10,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://api.myquran.com/v2".to_string(),
            timeout_secs: 8,
        }
    }
}

impl Config {
    /// Loads from defaults, the user config file and the environment.
    ///
    /// # Errors
    /// `InvalidConfiguration` if a source cannot be parsed or a value fails validation.
    pub fn load() -> Result<Self, WaktuError> {
        Self::load_from(None)
    }

    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self, WaktuError> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("WAKTU_").split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| WaktuError::invalid_config(format!("failed to load configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(APP_DIR_NAME)
    }

    pub fn validate(&self) -> Result<(), WaktuError> {
        self.method()?;

        if self.location.cache_max_age_hours == 0 {
            return Err(WaktuError::invalid_config("cache_max_age_hours must be greater than 0"));
        }

        let lead = self.notifications.reminder_lead_minutes;
        if !(0..=MAX_REMINDER_LEAD_MINUTES).contains(&lead) {
            return Err(WaktuError::invalid_config(format!(
                "reminder_lead_minutes ({lead}) must be between 0 and {MAX_REMINDER_LEAD_MINUTES}"
            )));
        }

        if self.calculation.hijri_adjustment.abs() > MAX_HIJRI_ADJUSTMENT {
            return Err(WaktuError::invalid_config(format!(
                "hijri_adjustment ({}) must be within ±{MAX_HIJRI_ADJUSTMENT}",
                self.calculation.hijri_adjustment
            )));
        }

        if let Some(offset) = self.calculation.utc_offset_minutes {
            if !(-12 * 60..=14 * 60).contains(&offset) {
                return Err(WaktuError::invalid_config(format!("utc_offset_minutes ({offset}) out of range")));
            }
        }

        if self.remote.enabled && self.remote.timeout_secs == 0 {
            return Err(WaktuError::invalid_config("remote.timeout_secs must be greater than 0"));
        }

        Ok(())
    }

    pub fn method(&self) -> Result<CalculationMethod, WaktuError> {
        self.calculation.method.parse()
    }

    /// A calculator set up from the `[calculation]` section.
    pub fn calculator(&self) -> Result<LocalPrayerTimesCalculator, WaktuError> {
        Ok(LocalPrayerTimesCalculator::new(self.method()?)
            .asr_juristic(self.calculation.asr)
            .utc_offset(self.calculation.utc_offset_minutes))
    }

    #[must_use]
    pub fn cache_max_age(&self) -> Duration {
        Duration::hours(i64::from(self.location.cache_max_age_hours))
    }

    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.location
            .store_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(STORE_FILE_NAME))
    }

    /// Configured hints layered over `detected`.
    #[must_use]
    pub fn hints(&self, detected: LocaleHints) -> LocaleHints {
        LocaleHints {
            timezone: self.location.timezone.clone().or(detected.timezone),
            language: self.location.language.clone().or(detected.language),
            utc_offset_minutes: detected.utc_offset_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.method().unwrap(), CalculationMethod::Kemenag);
        assert_eq!(config.cache_max_age(), Duration::hours(24));
        assert!(config.notifications.enabled);
        assert!(!config.remote.enabled);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.location.cache_max_age_hours = 0;
        assert!(config.validate().unwrap_err().to_string().contains("cache_max_age_hours"));

        let mut config = Config::default();
        config.notifications.reminder_lead_minutes = 121;
        assert!(config.validate().unwrap_err().to_string().contains("reminder_lead_minutes"));

        let mut config = Config::default();
        config.calculation.method = "julian".into();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.calculation.hijri_adjustment = -3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [calculation]
                method = "mwl"
                asr = "hanafi"

                [location]
                cache_max_age_hours = 6
                "#,
            )?;
            jail.set_env("WAKTU_LOCATION__ZERO_GPS", "true");
            jail.set_env("WAKTU_NOTIFICATIONS__REMINDER_LEAD_MINUTES", "15");

            let config = Config::load_from(Some("config.toml".into())).map_err(|e| e.to_string())?;
            assert_eq!(config.method().unwrap(), CalculationMethod::MuslimWorldLeague);
            assert_eq!(config.calculation.asr, AsrJuristic::Hanafi);
            assert_eq!(config.location.cache_max_age_hours, 6);
            assert!(config.location.zero_gps);
            assert_eq!(config.notifications.reminder_lead_minutes, 15);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::load_from(Some("absent.toml".into())).map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_invalid_file_value_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[notifications]\nreminder_lead_minutes = 500\n")?;
            let err = Config::load_from(Some("config.toml".into())).unwrap_err();
            assert!(matches!(err, WaktuError::InvalidConfiguration { .. }));
            Ok(())
        });
    }

    #[test]
    fn test_hints_prefer_configured_values() {
        let mut config = Config::default();
        config.location.timezone = Some("Asia/Makassar".into());
        let hints = config.hints(LocaleHints::new().timezone("Asia/Jakarta").language("id-ID").utc_offset(420));
        assert_eq!(hints.timezone.as_deref(), Some("Asia/Makassar"));
        assert_eq!(hints.language.as_deref(), Some("id-ID"));
        assert_eq!(hints.utc_offset_minutes, Some(420));
    }

    #[test]
    fn test_store_path_default_and_custom() {
        let config = Config::default();
        assert!(config.store_path().ends_with("waktu/store.json"));

        let mut config = Config::default();
        config.location.store_path = Some("/tmp/x.json".into());
        assert_eq!(config.store_path(), PathBuf::from("/tmp/x.json"));
    }
}
