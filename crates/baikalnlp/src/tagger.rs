// crates/baikalnlp/src/tagger.rs

//! Tagger: baikalnlp クレートの統合ファサード。
//!
//! - 形態素解析 (`SyntaxAnalyzer` 越しに `LanguageService` を呼ぶ)
//! - カスタム辞書ドメインの保持と適用
//! - カスタム辞書ラッパー (`CustomDict`) の生成
//!
//! アプリケーションからは、この構造体だけを意識すればよい。

use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::{LanguageServiceClient, SyntaxAnalyzer};
use crate::config::ClientConfig;
use crate::custom_dict::CustomDict;
use crate::errors::BaikalResult;
use crate::tagged::{PosList, Tagged};

/// Korean POS tagger backed by a Baikal NLP server.
///
/// ```rust,no_run
/// # async fn run() -> baikalnlp::BaikalResult<()> {
/// use baikalnlp::{ClientConfig, Tagger};
///
/// let tagger = Tagger::new(ClientConfig::default())?;
/// let tagged = tagger.tag("오늘은 정말 추운 날이네요.", false).await?;
/// println!("{:?}", tagged.nouns());
/// # Ok(())
/// # }
/// ```
pub struct Tagger {
  config: ClientConfig,
  analyzer: Arc<dyn SyntaxAnalyzer>,
  domain: Option<String>,
}

impl std::fmt::Debug for Tagger {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Tagger")
      .field("address", &self.config.address())
      .field("domain", &self.domain)
      .finish_non_exhaustive()
  }
}

impl Tagger {
  /// 初期化（設定の検証 + 解析クライアントの構築）
  ///
  /// 接続は最初のリクエスト時に確立される。
  /// tokio ランタイムのコンテキスト内で呼ぶこと。
  ///
  /// # エラー
  /// - 設定が不正（host が空、port が 0 等）
  pub fn new(config: ClientConfig) -> BaikalResult<Self> {
    let client = LanguageServiceClient::new(&config)?;
    Ok(Self::with_analyzer(config, Arc::new(client)))
  }

  /// 任意の `SyntaxAnalyzer` を使う Tagger を作る。
  ///
  /// 初期ドメインは `config.domain`。
  pub fn with_analyzer(config: ClientConfig, analyzer: Arc<dyn SyntaxAnalyzer>) -> Self {
    let domain = config.domain().map(str::to_string);
    Self {
      config,
      analyzer,
      domain,
    }
  }

  /// 接続設定
  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// 解析に適用するカスタム辞書ドメイン
  pub fn domain(&self) -> Option<&str> {
    self.domain.as_deref()
  }

  /// 解析に適用するカスタム辞書ドメインを変更する。`None` で解除。
  pub fn set_domain(&mut self, domain: Option<String>) {
    self.domain = domain;
  }

  /// `domain` を以降の解析に適用し、同じサーバーの `CustomDict` を返す。
  ///
  /// # エラー
  /// - `domain` が空
  pub fn custom_dict(&mut self, domain: &str) -> BaikalResult<CustomDict> {
    let dict = CustomDict::new(domain, &self.config)?;
    self.domain = Some(domain.to_string());
    Ok(dict)
  }

  /// 文字列を解析する。
  ///
  /// 空文字列の場合はサーバーを呼ばずに空の `Tagged` を返す。
  ///
  /// # エラー
  /// - サーバー・トランスポートのエラー（変換せずに返す）
  pub async fn tag(&self, phrase: &str, auto_split: bool) -> BaikalResult<Tagged> {
    if phrase.is_empty() {
      warn!("解析対象の文字列が空です");
      return Ok(Tagged::empty());
    }

    debug!(
      content_len = phrase.len(),
      domain = ?self.domain,
      auto_split,
      "形態素解析を依頼"
    );
    let response = self
      .analyzer
      .analyze_syntax(phrase, self.domain.as_deref(), auto_split)
      .await?;
    Ok(Tagged::new(phrase, response))
  }

  /// 複数の文字列を改行で連結して 1 回で解析する（サーバー側の文分割なし）。
  ///
  /// 空の配列の場合はサーバーを呼ばずに空の `Tagged` を返す。
  pub async fn tags<S: AsRef<str>>(&self, phrases: &[S]) -> BaikalResult<Tagged> {
    if phrases.is_empty() {
      warn!("解析対象の文字列が空です");
      return Ok(Tagged::empty());
    }

    let joined = phrases.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join("\n");
    debug!(
      phrases = phrases.len(),
      content_len = joined.len(),
      domain = ?self.domain,
      "形態素解析を依頼"
    );
    let response = self
      .analyzer
      .analyze_syntax(&joined, self.domain.as_deref(), false)
      .await?;
    Ok(Tagged::new(joined, response))
  }

  /// `tag(phrase, false)` の `pos` ビュー
  pub async fn pos(
    &self,
    phrase: &str,
    flatten: bool,
    join: bool,
    detail: bool,
  ) -> BaikalResult<PosList> {
    Ok(self.tag(phrase, false).await?.pos(flatten, join, detail))
  }

  /// `tag(phrase, false)` の形態素一覧
  pub async fn morphs(&self, phrase: &str) -> BaikalResult<Vec<String>> {
    Ok(self.tag(phrase, false).await?.morphs())
  }

  /// `tag(phrase, false)` の名詞一覧
  pub async fn nouns(&self, phrase: &str) -> BaikalResult<Vec<String>> {
    Ok(self.tag(phrase, false).await?.nouns())
  }

  /// `tag(phrase, false)` の動詞一覧
  pub async fn verbs(&self, phrase: &str) -> BaikalResult<Vec<String>> {
    Ok(self.tag(phrase, false).await?.verbs())
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use async_trait::async_trait;

  use super::*;
  use crate::proto::AnalyzeSyntaxResponse;

  /// Records every call and answers with an empty response.
  #[derive(Default)]
  struct RecordingAnalyzer {
    calls: Mutex<Vec<(String, Option<String>, bool)>>,
  }

  #[async_trait]
  impl SyntaxAnalyzer for RecordingAnalyzer {
    async fn analyze_syntax(
      &self,
      content: &str,
      domain: Option<&str>,
      auto_split: bool,
    ) -> BaikalResult<AnalyzeSyntaxResponse> {
      self
        .calls
        .lock()
        .unwrap()
        .push((content.to_string(), domain.map(str::to_string), auto_split));
      Ok(AnalyzeSyntaxResponse {
        language: "ko_KR".to_string(),
        ..Default::default()
      })
    }
  }

  fn tagger(config: ClientConfig) -> (Tagger, Arc<RecordingAnalyzer>) {
    let analyzer = Arc::new(RecordingAnalyzer::default());
    (Tagger::with_analyzer(config, analyzer.clone()), analyzer)
  }

  #[tokio::test]
  async fn empty_phrase_skips_the_server() {
    let (tagger, analyzer) = tagger(ClientConfig::default());

    let tagged = tagger.tag("", true).await.unwrap();

    assert_eq!(tagged, Tagged::empty());
    assert!(analyzer.calls.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn tag_sends_current_domain() {
    let (mut tagger, analyzer) = tagger(ClientConfig::default().with_domain("law"));
    assert_eq!(tagger.domain(), Some("law"));

    tagger.tag("판결", true).await.unwrap();
    tagger.set_domain(None);
    tagger.tag("판결", false).await.unwrap();

    let calls = analyzer.calls.lock().unwrap();
    assert_eq!(calls[0], ("판결".to_string(), Some("law".to_string()), true));
    assert_eq!(calls[1], ("판결".to_string(), None, false));
  }

  #[tokio::test]
  async fn tags_joins_with_newline_without_auto_split() {
    let (tagger, analyzer) = tagger(ClientConfig::default());

    let tagged = tagger.tags(&["첫 문장.", "둘째 문장."]).await.unwrap();

    assert_eq!(tagged.phrase(), "첫 문장.\n둘째 문장.");
    let calls = analyzer.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "첫 문장.\n둘째 문장.");
    assert!(!calls[0].2);
  }

  #[tokio::test]
  async fn tags_with_no_phrases_is_empty() {
    let (tagger, analyzer) = tagger(ClientConfig::default());

    let tagged = tagger.tags::<&str>(&[]).await.unwrap();

    assert_eq!(tagged, Tagged::empty());
    assert!(analyzer.calls.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn custom_dict_switches_domain() {
    let (mut tagger, _) = tagger(ClientConfig::default());

    let dict = tagger.custom_dict("covid").unwrap();

    assert_eq!(dict.domain(), "covid");
    assert_eq!(tagger.domain(), Some("covid"));
  }

  #[tokio::test]
  async fn custom_dict_rejects_empty_domain() {
    let (mut tagger, _) = tagger(ClientConfig::default().with_domain("law"));

    assert!(tagger.custom_dict("").is_err());
    assert_eq!(tagger.domain(), Some("law"));
  }
}
