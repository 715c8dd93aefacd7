//! # Application configuration — `booking.toml`
//!
//! The web bundle embeds a `booking.toml` that tells the app where the hosted
//! table store lives and a few presentation defaults.
//!
//! ## Structure
//!
//! ```toml
//! [backend]
//! url = "https://project.supabase.co"   # empty = offline demo data
//! anon_key = "..."
//!
//! [booking]
//! default_service_id = "00000000-0000-0000-0000-000000000001"
//!
//! [ui]
//! snackbar_hide_ms = 6000
//! currency_symbol = "R$"
//! ```
//!
//! Every section and field has a default, so a missing or partial file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `booking.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub booking: BookingDefaults,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Hosted table store endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, without the `/rest/v1` suffix.
    #[serde(default)]
    pub url: String,
    /// Public (anon) API key sent with every request.
    #[serde(default)]
    pub anon_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingDefaults {
    /// Service id attached to appointments created from the form.
    #[serde(default = "default_service_id")]
    pub default_service_id: String,
}

fn default_service_id() -> String {
    "00000000-0000-0000-0000-000000000001".to_string()
}

impl Default for BookingDefaults {
    fn default() -> Self {
        Self {
            default_service_id: default_service_id(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_snackbar_hide_ms")]
    pub snackbar_hide_ms: u64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_snackbar_hide_ms() -> u64 {
    6000
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            snackbar_hide_ms: default_snackbar_hide_ms(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl BookingConfig {
    /// Create a config pointing at the given backend.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            backend: BackendConfig {
                url: url.into(),
                anon_key: anon_key.into(),
            },
            ..Default::default()
        }
    }

    /// Builder method to set the service id used for new appointments.
    pub fn with_default_service(mut self, id: impl Into<String>) -> Self {
        self.booking.default_service_id = id.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "booking.toml"
    }

    /// No backend URL means the app runs against in-memory demo data.
    pub fn is_offline(&self) -> bool {
        self.backend.url.trim().is_empty()
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = BookingConfig::from_toml("").unwrap();
        assert_eq!(config, BookingConfig::default());
        assert!(config.is_offline());
        assert_eq!(config.ui.snackbar_hide_ms, 6000);
        assert_eq!(
            config.booking.default_service_id,
            "00000000-0000-0000-0000-000000000001"
        );
    }

    #[test]
    fn test_partial_file() {
        let config = BookingConfig::from_toml(
            r#"
            [backend]
            url = "https://demo.supabase.co"
            anon_key = "public-key"

            [ui]
            currency_symbol = "€"
            "#,
        )
        .unwrap();
        assert!(!config.is_offline());
        assert_eq!(config.backend.anon_key, "public-key");
        assert_eq!(config.ui.currency_symbol, "€");
        assert_eq!(config.ui.snackbar_hide_ms, 6000);
    }

    #[test]
    fn test_builder_roundtrip() {
        let config = BookingConfig::new("https://x.supabase.co", "k").with_default_service("svc-1");
        let text = config.to_toml().unwrap();
        assert_eq!(BookingConfig::from_toml(&text).unwrap(), config);
    }
}
