use crate::wellness::{KindPolicy, SeverityThresholds};
use axum::http::HeaderValue;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub wellness: WellnessConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let cors_origin =
            env::var("APP_CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig {
                host,
                port,
                cors_origin,
            },
            telemetry: TelemetryConfig { log_level },
            wellness: WellnessConfig::from_env()?,
        })
    }
}

/// Browser origin of the assessment front end's dev server.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Single origin allowed to call the API with credentials.
    pub cors_origin: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn cors_origin_header(&self) -> Result<HeaderValue, ConfigError> {
        let origin = self.cors_origin.trim();
        if origin.is_empty() || origin == "*" {
            return Err(ConfigError::InvalidCorsOrigin {
                value: self.cors_origin.clone(),
            });
        }

        HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidCorsOrigin {
            value: self.cors_origin.clone(),
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Tunables for the screening bands, unknown-kind handling, and journal scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct WellnessConfig {
    pub thresholds: SeverityThresholds,
    pub kind_policy: KindPolicy,
    /// When set, journal analysis reports this score instead of a random one.
    pub journal_fixed_score: Option<u8>,
}

impl Default for WellnessConfig {
    fn default() -> Self {
        Self {
            thresholds: SeverityThresholds::default(),
            kind_policy: KindPolicy::Lenient,
            journal_fixed_score: None,
        }
    }
}

impl WellnessConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = SeverityThresholds::default();
        let mild = parse_threshold("APP_PHQ_MILD_THRESHOLD", defaults.mild)?;
        let moderate = parse_threshold("APP_PHQ_MODERATE_THRESHOLD", defaults.moderate)?;
        let thresholds = SeverityThresholds::new(mild, moderate)
            .ok_or(ConfigError::UnorderedThresholds { mild, moderate })?;

        let kind_policy = match env::var("APP_STRICT_KINDS") {
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => KindPolicy::Strict,
                "0" | "false" | "no" | "off" | "" => KindPolicy::Lenient,
                _ => return Err(ConfigError::InvalidFlag { name: "APP_STRICT_KINDS" }),
            },
            Err(_) => KindPolicy::Lenient,
        };

        let journal_fixed_score = match env::var("APP_JOURNAL_FIXED_SCORE") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u8>()
                    .ok()
                    .filter(|score| *score < 100)
                    .ok_or(ConfigError::InvalidJournalScore)?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            thresholds,
            kind_policy,
            journal_fixed_score,
        })
    }
}

fn parse_threshold(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidThreshold { name }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold { name: &'static str },
    UnorderedThresholds { mild: u32, moderate: u32 },
    InvalidFlag { name: &'static str },
    InvalidJournalScore,
    InvalidCorsOrigin { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold { name } => {
                write!(f, "{name} must be a non-negative integer")
            }
            ConfigError::UnorderedThresholds { mild, moderate } => write!(
                f,
                "mild threshold {mild} must not exceed moderate threshold {moderate}"
            ),
            ConfigError::InvalidFlag { name } => write!(f, "{name} must be true or false"),
            ConfigError::InvalidCorsOrigin { value } => write!(
                f,
                "APP_CORS_ORIGIN '{value}' must be a single explicit origin such as {DEFAULT_CORS_ORIGIN}"
            ),
            ConfigError::InvalidJournalScore => {
                write!(f, "APP_JOURNAL_FIXED_SCORE must be an integer between 0 and 99")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
