//! Navigation configuration

use serde::{Deserialize, Serialize};

use crate::error::{NavigationError, Result};

/// Navigation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationConfig {
    /// Registered URL scheme for deep links (`podium://...`)
    pub scheme: String,
    /// Public web domain used for share links
    pub public_domain: String,
    /// Accept `https://<public_domain>/...` links as deep links
    pub universal_links: bool,
    /// Buffer size of the outbound signal channel
    pub signal_capacity: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scheme: "podium".to_string(),
            public_domain: "podium.app".to_string(),
            universal_links: false,
            signal_capacity: 32,
        }
    }
}

impl NavigationConfig {
    /// Create a configuration for a custom scheme
    pub fn new(scheme: impl Into<String>) -> Self {
        Self { scheme: scheme.into(), ..Default::default() }
    }

    /// Set the public share domain
    pub fn public_domain(mut self, domain: impl Into<String>) -> Self {
        self.public_domain = domain.into();
        self
    }

    /// Enable or disable universal links
    pub fn universal_links(mut self, enabled: bool) -> Self {
        self.universal_links = enabled;
        self
    }

    /// Set the signal buffer size
    pub fn signal_capacity(mut self, capacity: usize) -> Self {
        self.signal_capacity = capacity;
        self
    }

    /// Check the configuration for values the router cannot work with
    pub fn validate(&self) -> Result<()> {
        let scheme_ok = self
            .scheme
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && self
                .scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !scheme_ok {
            return Err(NavigationError::InvalidConfig(format!(
                "invalid URL scheme: {:?}",
                self.scheme
            )));
        }

        if self.public_domain.is_empty() || self.public_domain.contains(['/', ':', ' ']) {
            return Err(NavigationError::InvalidConfig(format!(
                "invalid public domain: {:?}",
                self.public_domain
            )));
        }

        if self.signal_capacity == 0 {
            return Err(NavigationError::InvalidConfig(
                "signal capacity must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = NavigationConfig::default();
        assert_eq!(config.scheme, "podium");
        assert!(!config.universal_links);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = NavigationConfig::new("podium-beta")
            .public_domain("beta.podium.app")
            .universal_links(true)
            .signal_capacity(4);

        assert_eq!(config.scheme, "podium-beta");
        assert_eq!(config.public_domain, "beta.podium.app");
        assert!(config.universal_links);
        assert_eq!(config.signal_capacity, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        assert!(NavigationConfig::new("").validate().is_err());
        assert!(NavigationConfig::new("9lives").validate().is_err());
        assert!(NavigationConfig::new("pod ium").validate().is_err());
        assert!(NavigationConfig::default().public_domain("https://podium.app").validate().is_err());
        assert!(NavigationConfig::default().signal_capacity(0).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: NavigationConfig = serde_json::from_str(r#"{"universalLinks": true}"#).unwrap();
        assert_eq!(config.scheme, "podium");
        assert!(config.universal_links);
    }
}
