//! Backend endpoint configuration.

pub const API_URL_ENV: &str = "ARROYO_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Reads `ARROYO_API_URL`, falling back to a backend on localhost.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_URL_ENV).unwrap_or(DEFAULT_API_URL.to_string()))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://arroyo.lan:5000/");
        assert_eq!(config.base_url, "http://arroyo.lan:5000");
        assert_eq!(config.endpoint("/introspect/"), "http://arroyo.lan:5000/introspect/");
    }

    #[test]
    fn default_points_to_localhost() {
        assert_eq!(
            ApiConfig::default().endpoint("/downloads/"),
            "http://localhost:5000/downloads/"
        );
    }
}
