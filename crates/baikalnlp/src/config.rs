// crates/baikalnlp/src/config.rs

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Default host of the public Baikal NLP server.
pub const DEFAULT_HOST: &str = "nlp.baikal.ai";

/// Default gRPC port of the Baikal NLP server.
pub const DEFAULT_PORT: u16 = 5656;

/// Maximum gRPC send/receive message length (bytes).
///
/// Analysis results of long documents easily exceed tonic's 4MB default.
pub const MAX_MESSAGE_LENGTH: usize = 100 * 1024 * 1024;

/// Default connection timeout (milliseconds).
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Environment variable for the server host.
pub const ENV_HOST: &str = "BAIKAL_NLP_HOST";

/// Environment variable for the server port.
pub const ENV_PORT: &str = "BAIKAL_NLP_PORT";

/// Environment variable for the custom dictionary domain.
pub const ENV_DOMAIN: &str = "BAIKAL_NLP_DOMAIN";

/// Connection settings shared by the analysis and custom dictionary clients.
///
/// Every field has a default, so a partial document deserializes:
/// ```rust
/// # use baikalnlp::config::ClientConfig;
/// let config: ClientConfig = serde_json::from_str(r#"{ "host": "localhost" }"#).unwrap();
/// assert_eq!(config.port, 5656);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
  /// Server host name or IP address
  pub host: String,
  /// Server gRPC port
  pub port: u16,
  /// Custom dictionary domain applied to analysis requests
  pub domain: Option<String>,
  /// Connection timeout (milliseconds)
  pub connect_timeout_ms: u64,
  /// Per-request timeout (milliseconds). `None` leaves it to the server.
  pub request_timeout_ms: Option<u64>,
  /// Maximum send/receive message length (bytes)
  pub max_message_length: usize,
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  pub log_level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Returns the directive string understood by `tracing_subscriber::EnvFilter`.
  pub fn as_directive(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      host: DEFAULT_HOST.to_string(),
      port: DEFAULT_PORT,
      domain: None,
      connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
      request_timeout_ms: None,
      max_message_length: MAX_MESSAGE_LENGTH,
      log_level: LogLevel::default(),
    }
  }
}

// ===== Builder Methods =====

impl ClientConfig {
  /// Creates a configuration for `host:port`, everything else default.
  pub fn new(host: impl Into<String>, port: u16) -> Self {
    Self {
      host: host.into(),
      port,
      ..Self::default()
    }
  }

  /// Sets the custom dictionary domain.
  #[must_use]
  pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
    self.domain = Some(domain.into());
    self
  }

  /// Sets the connection timeout.
  #[must_use]
  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout_ms = duration_to_ms(timeout);
    self
  }

  /// Sets the per-request timeout.
  #[must_use]
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.request_timeout_ms = Some(duration_to_ms(timeout));
    self
  }

  /// Loads the configuration from environment variables.
  ///
  /// | Variable            | Field    | Default         |
  /// |---------------------|----------|-----------------|
  /// | `BAIKAL_NLP_HOST`   | `host`   | `nlp.baikal.ai` |
  /// | `BAIKAL_NLP_PORT`   | `port`   | `5656`          |
  /// | `BAIKAL_NLP_DOMAIN` | `domain` | none            |
  ///
  /// # Errors
  /// Returns `ConfigError::InvalidEnvVar` if the port is not a number.
  pub fn from_env() -> Result<Self, ConfigError> {
    let mut config = Self::default();

    if let Ok(host) = std::env::var(ENV_HOST) {
      let host = host.trim();
      if !host.is_empty() {
        config.host = host.to_string();
      }
    }

    if let Ok(port) = std::env::var(ENV_PORT) {
      config.port = parse_port(&port)?;
    }

    if let Ok(domain) = std::env::var(ENV_DOMAIN) {
      let domain = domain.trim();
      if !domain.is_empty() {
        config.domain = Some(domain.to_string());
      }
    }

    Ok(config)
  }
}

/// Milliseconds of `duration`, saturating at `u64::MAX`.
fn duration_to_ms(duration: Duration) -> u64 {
  u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Parses the value of `BAIKAL_NLP_PORT`.
fn parse_port(value: &str) -> Result<u16, ConfigError> {
  u16::from_str(value.trim()).map_err(|e| ConfigError::InvalidEnvVar {
    name: ENV_PORT,
    value: value.to_string(),
    reason: e.to_string(),
  })
}

// ===== Accessor Methods =====

impl ClientConfig {
  /// Returns the `host:port` address.
  pub fn address(&self) -> String {
    format!("{}:{}", self.host.trim(), self.port)
  }

  /// Returns the URI handed to the gRPC endpoint (plain-text HTTP/2).
  ///
  /// # Examples
  /// ```rust
  /// # use baikalnlp::config::ClientConfig;
  /// let config = ClientConfig::new("localhost", 5656);
  /// assert_eq!(config.endpoint_uri(), "http://localhost:5656");
  /// ```
  pub fn endpoint_uri(&self) -> String {
    format!("http://{}", self.address())
  }

  /// Returns the domain, treating an empty string as unset.
  pub fn domain(&self) -> Option<&str> {
    self.domain.as_deref().filter(|d| !d.is_empty())
  }

  /// Returns the connection timeout.
  pub fn connect_timeout(&self) -> Duration {
    Duration::from_millis(self.connect_timeout_ms)
  }

  /// Returns the per-request timeout, if any.
  pub fn request_timeout(&self) -> Option<Duration> {
    self.request_timeout_ms.map(Duration::from_millis)
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.log_level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `host` is not blank
  /// - `port` >= 1
  /// - `max_message_length` >= 1
  /// - `connect_timeout_ms` >= 1, `request_timeout_ms` >= 1 when set
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.host.trim().is_empty() {
      return Err(ConfigError::EmptyHost);
    }

    if self.port == 0 {
      return Err(ConfigError::InvalidPort { actual: self.port });
    }

    if self.max_message_length == 0 {
      return Err(ConfigError::InvalidMaxMessageLength {
        actual: self.max_message_length,
      });
    }

    if self.connect_timeout_ms == 0 {
      return Err(ConfigError::InvalidTimeout {
        field: "connect_timeout_ms",
      });
    }

    if self.request_timeout_ms == Some(0) {
      return Err(ConfigError::InvalidTimeout {
        field: "request_timeout_ms",
      });
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  // ─── Default / Builder Tests ──────────────────────────────────────────────

  #[test]
  fn default_points_to_public_server() {
    let config = ClientConfig::default();

    assert_eq!(config.host, "nlp.baikal.ai");
    assert_eq!(config.port, 5656);
    assert_eq!(config.domain, None);
    assert_eq!(config.max_message_length, 100 * 1024 * 1024);
    assert_eq!(config.log_level(), LogLevel::Info);
  }

  #[test]
  fn new_overrides_host_and_port() {
    let config = ClientConfig::new("10.0.0.5", 15656);

    assert_eq!(config.address(), "10.0.0.5:15656");
    assert_eq!(config.endpoint_uri(), "http://10.0.0.5:15656");
  }

  #[test]
  fn address_trims_host() {
    let config = ClientConfig::new("  localhost ", 5656);
    assert_eq!(config.address(), "localhost:5656");
  }

  #[test]
  fn with_domain_sets_domain() {
    let config = ClientConfig::default().with_domain("law");
    assert_eq!(config.domain(), Some("law"));
  }

  #[test]
  fn empty_domain_is_treated_as_unset() {
    let config = ClientConfig::default().with_domain("");
    assert_eq!(config.domain(), None);
  }

  #[test]
  fn timeouts_convert_to_duration() {
    let config = ClientConfig::default()
      .with_connect_timeout(Duration::from_secs(3))
      .with_request_timeout(Duration::from_millis(1500));

    assert_eq!(config.connect_timeout(), Duration::from_secs(3));
    assert_eq!(config.request_timeout(), Some(Duration::from_millis(1500)));
  }

  // ─── Deserialize Tests ────────────────────────────────────────────────────

  #[test]
  fn deserialize_partial_document_uses_defaults() {
    let config: ClientConfig =
      serde_json::from_str(r#"{ "host": "localhost", "domain": "my" }"#).unwrap();

    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.domain(), Some("my"));
    assert_eq!(config.connect_timeout_ms, DEFAULT_CONNECT_TIMEOUT_MS);
  }

  #[test]
  fn deserialize_log_level_lowercase() {
    let config: ClientConfig = serde_json::from_str(r#"{ "log_level": "debug" }"#).unwrap();
    assert_eq!(config.log_level(), LogLevel::Debug);
    assert_eq!(config.log_level().as_directive(), "debug");
  }

  // ─── validate() Tests ─────────────────────────────────────────────────────

  #[test]
  fn validate_accepts_default() {
    assert!(ClientConfig::default().validate().is_ok());
  }

  #[test]
  fn validate_rejects_blank_host() {
    let config = ClientConfig::new("   ", 5656);

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::EmptyHost));
  }

  #[test]
  fn validate_rejects_port_zero() {
    let config = ClientConfig::new("localhost", 0);

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::InvalidPort { actual } => assert_eq!(actual, 0),
      _ => panic!("expected InvalidPort error"),
    }
  }

  #[test]
  fn validate_rejects_zero_message_length() {
    let mut config = ClientConfig::default();
    config.max_message_length = 0;

    let err = config.validate().unwrap_err();
    assert!(matches!(
      err,
      ConfigError::InvalidMaxMessageLength { actual: 0 }
    ));
  }

  #[test]
  fn validate_rejects_zero_request_timeout() {
    let mut config = ClientConfig::default();
    config.request_timeout_ms = Some(0);

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::InvalidTimeout { field } => assert_eq!(field, "request_timeout_ms"),
      _ => panic!("expected InvalidTimeout error"),
    }
  }

  #[test]
  fn validate_reports_host_first() {
    let mut config = ClientConfig::new("", 0);
    config.max_message_length = 0;

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::EmptyHost));
  }

  #[test]
  fn huge_timeout_saturates() {
    let config = ClientConfig::default().with_request_timeout(Duration::MAX);
    assert_eq!(config.request_timeout_ms, Some(u64::MAX));

    let config = ClientConfig::default().with_connect_timeout(Duration::MAX);
    assert_eq!(config.connect_timeout_ms, u64::MAX);
  }

  // ─── Environment Tests ────────────────────────────────────────────────────
  // set_var / remove_var are unsafe in Rust 2024, so the parsing is tested directly

  #[test]
  fn parse_port_accepts_trimmed_number() {
    assert_eq!(parse_port(" 15656\n").unwrap(), 15656);
  }

  #[test]
  fn parse_port_rejects_garbage() {
    let err = parse_port("fifty").unwrap_err();
    match err {
      ConfigError::InvalidEnvVar { name, value, .. } => {
        assert_eq!(name, ENV_PORT);
        assert_eq!(value, "fifty");
      }
      _ => panic!("expected InvalidEnvVar error"),
    }
  }

  #[test]
  fn parse_port_rejects_out_of_range() {
    assert!(matches!(
      parse_port("70000"),
      Err(ConfigError::InvalidEnvVar { .. })
    ));
  }
}
