//! Frontend configuration module
//!
//! This module provides configuration for the API base URL and related
//! frontend settings.

/// Frontend configuration for URLs and external endpoints
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL for the REST backend
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("PERFNOTES_API_URL")
                .unwrap_or("/api")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
    }

    #[test]
    fn test_frontend_config_debug() {
        let config = FrontendConfig::new();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("FrontendConfig"));
        assert!(debug_str.contains("api_base_url"));
    }
}
