use actix_cors::Cors;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8000;
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 4 * 1024 * 1024;
pub const DEFAULT_CORS_MAX_AGE: usize = 3600;

/// Origins accepted by the CORS layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// An empty list or a `*` entry means any origin.
    pub fn from_list(origins: Vec<String>) -> Self {
        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

/// Cross-origin policy, fixed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
    pub allow_credentials: bool,
    pub max_age: Option<usize>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            allow_credentials: true,
            max_age: Some(DEFAULT_CORS_MAX_AGE),
        }
    }
}

impl CorsConfig {
    /// Build the middleware. Methods and headers are always unrestricted.
    ///
    /// With [`AllowedOrigins::Any`] and credentials enabled the request's
    /// `Origin` is echoed back rather than `*`, which browsers require for
    /// credentialed requests.
    pub fn build(&self) -> Cors {
        let cors = Cors::default().allow_any_method().allow_any_header();

        let mut cors = match &self.allowed_origins {
            AllowedOrigins::Any => cors.allow_any_origin(),
            AllowedOrigins::List(origins) => origins
                .iter()
                .fold(cors, |cors, origin| cors.allowed_origin(origin)),
        };

        if self.allow_credentials {
            cors = cors.supports_credentials();
        }

        cors.max_age(self.max_age)
    }
}

/// Process-wide server options, built once from the command line
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker threads; `None` keeps actix's default of one per physical core.
    pub workers: Option<usize>,
    /// Request bodies above this size are rejected with 413.
    pub max_payload_bytes: usize,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            workers: None,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
            cors: CorsConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origins_from_list() {
        assert_eq!(AllowedOrigins::from_list(vec![]), AllowedOrigins::Any);
        assert_eq!(
            AllowedOrigins::from_list(vec!["http://localhost:3000".into(), "*".into()]),
            AllowedOrigins::Any
        );
        assert_eq!(
            AllowedOrigins::from_list(vec!["http://localhost:3000".into()]),
            AllowedOrigins::List(vec!["http://localhost:3000".into()])
        );
    }

    #[test]
    fn test_default_cors_is_permissive() {
        let cors = CorsConfig::default();
        assert_eq!(cors.allowed_origins, AllowedOrigins::Any);
        assert!(cors.allow_credentials);
    }

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.workers, None);
        assert_eq!(config.max_payload_bytes, 4 * 1024 * 1024);
    }
}
