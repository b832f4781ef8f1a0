//! gRPC clients for the Baikal NLP services.
//!
//! Both clients share the channel setup in [`connect_channel`]: a lazily
//! connecting plain-text HTTP/2 channel, so constructing a client never
//! touches the network.
//!
//! # Runtime
//! Constructors must run inside a tokio runtime context because tonic
//! spawns the channel's background worker at construction time.

pub mod custom_dict_client;
pub mod language_service_client;

use tonic::transport::{Channel, Endpoint};
use tracing::info;

use crate::config::ClientConfig;
use crate::errors::{BaikalResult, ConfigError};

pub use custom_dict_client::{CustomDictionaryServiceClient, CustomDictionaryStore, build_dict_set};
pub use language_service_client::{LanguageServiceClient, SyntaxAnalyzer};

/// Builds a lazily connecting channel from `config`.
///
/// # Errors
/// - `ConfigError` if the configuration does not validate
/// - `ConfigError::InvalidEndpoint` if `host:port` does not form a URI
pub(crate) fn connect_channel(config: &ClientConfig) -> BaikalResult<Channel> {
  config.validate()?;

  let uri = config.endpoint_uri();
  let mut endpoint = Endpoint::from_shared(uri.clone())
    .map_err(|e| ConfigError::InvalidEndpoint {
      uri: uri.clone(),
      reason: e.to_string(),
    })?
    .connect_timeout(config.connect_timeout());

  if let Some(timeout) = config.request_timeout() {
    endpoint = endpoint.timeout(timeout);
  }

  info!(
    endpoint = %uri,
    connect_timeout_ms = config.connect_timeout_ms,
    request_timeout_ms = ?config.request_timeout_ms,
    "gRPC チャネルを構成しました"
  );

  Ok(endpoint.connect_lazy())
}
