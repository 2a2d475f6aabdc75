//! Signup form configuration.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use domain::{
    StrengthLevel, ValidationRules, COMPARISON_DEBOUNCE_MS, PASSWORD_DEBOUNCE_MS,
    STRENGTH_DEBOUNCE_MS, USERNAME_DEBOUNCE_MS,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Quiet intervals of the debounced field streams, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DebounceConfig {
    pub username_ms: u64,
    pub password_ms: u64,
    /// Password/confirmation comparison
    pub comparison_ms: u64,
    /// Password strength comparison
    pub strength_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            username_ms: USERNAME_DEBOUNCE_MS,
            password_ms: PASSWORD_DEBOUNCE_MS,
            comparison_ms: COMPARISON_DEBOUNCE_MS,
            strength_ms: STRENGTH_DEBOUNCE_MS,
        }
    }
}

impl DebounceConfig {
    pub fn username(&self) -> Duration {
        Duration::from_millis(self.username_ms)
    }

    pub fn password(&self) -> Duration {
        Duration::from_millis(self.password_ms)
    }

    pub fn comparison(&self) -> Duration {
        Duration::from_millis(self.comparison_ms)
    }

    pub fn strength(&self) -> Duration {
        Duration::from_millis(self.strength_ms)
    }

    /// Reject zero intervals; a zero debounce would emit in the same poll
    /// that received the value.
    pub fn validate(&self) -> AppResult<()> {
        let intervals = [
            ("username", self.username_ms),
            ("password", self.password_ms),
            ("comparison", self.comparison_ms),
            ("strength", self.strength_ms),
        ];
        for (name, millis) in intervals {
            if millis == 0 {
                return Err(AppError::config(format!(
                    "{} debounce interval must be at least 1 ms",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Longest quiet interval; after this much idle time every stream has settled
    pub fn longest(&self) -> Duration {
        [self.username(), self.password(), self.comparison(), self.strength()]
            .into_iter()
            .max()
            .unwrap_or_default()
    }
}

/// Full configuration of a signup form session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormConfig {
    pub debounce: DebounceConfig,
    pub rules: ValidationRules,
}

impl FormConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            debounce: DebounceConfig {
                username_ms: parse_or(
                    &lookup,
                    "SIGNUP_USERNAME_DEBOUNCE_MS",
                    defaults.debounce.username_ms,
                ),
                password_ms: parse_or(
                    &lookup,
                    "SIGNUP_PASSWORD_DEBOUNCE_MS",
                    defaults.debounce.password_ms,
                ),
                comparison_ms: parse_or(
                    &lookup,
                    "SIGNUP_COMPARISON_DEBOUNCE_MS",
                    defaults.debounce.comparison_ms,
                ),
                strength_ms: parse_or(
                    &lookup,
                    "SIGNUP_STRENGTH_DEBOUNCE_MS",
                    defaults.debounce.strength_ms,
                ),
            },
            rules: ValidationRules {
                strength_threshold: parse_or::<StrengthLevel>(
                    &lookup,
                    "SIGNUP_STRENGTH_THRESHOLD",
                    defaults.rules.strength_threshold,
                ),
            },
        }
    }

    /// Check the configuration for values the form cannot work with
    pub fn validate(&self) -> AppResult<()> {
        self.debounce.validate()
    }

    /// Idle time after which the pipeline has settled
    pub fn settle_time(&self) -> Duration {
        self.debounce.longest()
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}={:?}: {}", key, raw, e);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FormConfig::default();
        assert_eq!(config.debounce.username(), Duration::from_millis(800));
        assert_eq!(config.debounce.password(), Duration::from_millis(800));
        assert_eq!(config.debounce.comparison(), Duration::from_millis(200));
        assert_eq!(config.debounce.strength(), Duration::from_millis(200));
        assert_eq!(config.rules.strength_threshold, StrengthLevel::Reasonable);
        assert_eq!(config.settle_time(), Duration::from_millis(800));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = FormConfig::from_lookup(lookup(&[
            ("SIGNUP_USERNAME_DEBOUNCE_MS", "1500"),
            ("SIGNUP_STRENGTH_THRESHOLD", "strong"),
        ]));
        assert_eq!(config.debounce.username_ms, 1500);
        assert_eq!(config.debounce.password_ms, 800);
        assert_eq!(config.rules.strength_threshold, StrengthLevel::Strong);
        assert_eq!(config.settle_time(), Duration::from_millis(1500));
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = FormConfig::from_lookup(lookup(&[
            ("SIGNUP_PASSWORD_DEBOUNCE_MS", "soon"),
            ("SIGNUP_STRENGTH_THRESHOLD", "unbreakable"),
        ]));
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        assert!(FormConfig::default().validate().is_ok());

        for key in [
            "SIGNUP_USERNAME_DEBOUNCE_MS",
            "SIGNUP_PASSWORD_DEBOUNCE_MS",
            "SIGNUP_COMPARISON_DEBOUNCE_MS",
            "SIGNUP_STRENGTH_DEBOUNCE_MS",
        ] {
            let config = FormConfig::from_lookup(lookup(&[(key, "0")]));
            assert!(
                matches!(config.validate(), Err(AppError::Config(_))),
                "{} = 0 accepted",
                key
            );
        }
    }

    #[test]
    fn test_username_length_is_not_configurable() {
        let config = FormConfig::from_lookup(lookup(&[("SIGNUP_MIN_USERNAME_LENGTH", "5")]));
        assert_eq!(config, FormConfig::default());
        assert!(config.rules.username_is_valid("abcd"));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: FormConfig =
            serde_json::from_str(r#"{"debounce":{"comparison_ms":50}}"#).unwrap();
        assert_eq!(config.debounce.comparison_ms, 50);
        assert_eq!(config.debounce.username_ms, 800);
        assert_eq!(config.rules, ValidationRules::default());
    }

    #[test]
    fn test_deserialize_partial_rules() {
        let config: FormConfig = serde_json::from_str(r#"{"rules":{}}"#).unwrap();
        assert_eq!(config, FormConfig::default());

        let config: FormConfig =
            serde_json::from_str(r#"{"rules":{"strength_threshold":"strong"}}"#).unwrap();
        assert_eq!(config.rules.strength_threshold, StrengthLevel::Strong);
        assert_eq!(config.debounce, DebounceConfig::default());
    }
}
