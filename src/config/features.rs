//! Feature flags configuration

use serde::Deserialize;

/// Switches for optional engine behaviour
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Allow reversed cards; a request can only opt out
    #[serde(default = "enabled")]
    pub enable_reversals: bool,

    /// Keep generated readings for `GET /api/readings/:id`
    #[serde(default = "enabled")]
    pub enable_reading_cache: bool,

    /// Show internal error messages in responses (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_reversals: true,
            enable_reading_cache: true,
            verbose_errors: false,
            json_logs: false,
        }
    }
}

fn enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_reversals);
        assert!(flags.enable_reading_cache);
        assert!(!flags.verbose_errors);
        assert!(!flags.json_logs);
    }

    #[test]
    fn test_missing_fields_match_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "enable_reversals": false,
            "enable_reading_cache": false,
            "verbose_errors": true,
            "json_logs": true
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.enable_reversals);
        assert!(!flags.enable_reading_cache);
        assert!(flags.verbose_errors);
        assert!(flags.json_logs);
    }
}
