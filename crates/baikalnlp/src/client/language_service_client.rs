// crates/baikalnlp/src/client/language_service_client.rs

//! 形態素解析サービス（`LanguageService`）のクライアント

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::errors::BaikalResult;
use crate::proto::{AnalyzeSyntaxRequest, AnalyzeSyntaxResponse, Document, EncodingType, LanguageServiceStub};

use super::connect_channel;

/// Language code sent with every document.
pub const LANGUAGE_KO_KR: &str = "ko_KR";

/// 形態素解析を行うコンポーネントの抽象
///
/// `Tagger` はこのトレイト越しに解析を依頼する。
/// テストではサーバーの代わりにスタブ実装を差し込む。
#[async_trait]
pub trait SyntaxAnalyzer: Send + Sync {
  /// `content` を解析する。
  ///
  /// - `domain`: 適用するカスタム辞書のドメイン（`None` または空文字なら適用しない）
  /// - `auto_split`: サーバー側で文分割を行うか
  async fn analyze_syntax(
    &self,
    content: &str,
    domain: Option<&str>,
    auto_split: bool,
  ) -> BaikalResult<AnalyzeSyntaxResponse>;
}

/// Client of `baikal.language.LanguageService`.
///
/// Cloning is cheap; clones share the underlying channel.
#[derive(Debug, Clone)]
pub struct LanguageServiceClient {
  stub: LanguageServiceStub,
}

impl LanguageServiceClient {
  /// Creates a client for the server described by `config`.
  ///
  /// The connection is established on the first request.
  ///
  /// # Errors
  /// Returns `BaikalError::Config` if `config` is invalid.
  pub fn new(config: &ClientConfig) -> BaikalResult<Self> {
    let channel = connect_channel(config)?;
    let stub = LanguageServiceStub::new(channel)
      .max_decoding_message_size(config.max_message_length)
      .max_encoding_message_size(config.max_message_length);
    Ok(Self { stub })
  }

  /// Sends one `AnalyzeSyntax` request.
  ///
  /// `content` may hold several newline-separated sentences.
  ///
  /// # Errors
  /// Transport failures and server statuses are returned unchanged inside
  /// `BaikalError::Client`.
  #[instrument(skip(self, content), fields(content_len = content.len()))]
  pub async fn analyze_syntax(
    &self,
    content: &str,
    domain: Option<&str>,
    auto_split: bool,
  ) -> BaikalResult<AnalyzeSyntaxResponse> {
    let request = build_request(content, domain, auto_split);

    let mut stub = self.stub.clone();
    let response = stub.analyze_syntax(request).await?.into_inner();

    debug!(sentences = response.sentences.len(), "AnalyzeSyntax 応答を受信");
    Ok(response)
  }
}

#[async_trait]
impl SyntaxAnalyzer for LanguageServiceClient {
  async fn analyze_syntax(
    &self,
    content: &str,
    domain: Option<&str>,
    auto_split: bool,
  ) -> BaikalResult<AnalyzeSyntaxResponse> {
    LanguageServiceClient::analyze_syntax(self, content, domain, auto_split).await
  }
}

/// Builds the request message. The domain is sent only when non-empty.
fn build_request(content: &str, domain: Option<&str>, auto_split: bool) -> AnalyzeSyntaxRequest {
  AnalyzeSyntaxRequest {
    document: Some(Document {
      content: content.to_string(),
      language: LANGUAGE_KO_KR.to_string(),
    }),
    encoding_type: EncodingType::Utf32 as i32,
    auto_split_sentence: auto_split,
    custom_domain: domain.filter(|d| !d.is_empty()).unwrap_or_default().to_string(),
  }
}
