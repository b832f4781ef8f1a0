// crates/baikalnlp/src/blocking.rs

//! ブロッキング API
//!
//! 非同期版の [`crate::Tagger`] / [`crate::CustomDict`] を、内部に持つ
//! current-thread の tokio ランタイムで駆動する同期ラッパー。
//!
//! # 注意
//! 非同期ランタイムの内部（`#[tokio::main]` の中など）から呼ぶと
//! tokio が panic する。非同期コードからは非同期版を使うこと。
//!
//! ```rust,no_run
//! use baikalnlp::ClientConfig;
//! use baikalnlp::blocking::Tagger;
//!
//! # fn main() -> baikalnlp::BaikalResult<()> {
//! let tagger = Tagger::new(ClientConfig::default())?;
//! let tagged = tagger.tag("오늘은 정말 추운 날이네요.", false)?;
//! tagged.print_as_json()?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use crate::client::SyntaxAnalyzer;
use crate::config::ClientConfig;
use crate::errors::{BaikalResult, ClientError};
use crate::proto::custom_dict::CustomDictionary;
use crate::tagged::{PosList, Tagged};

fn build_runtime() -> BaikalResult<Arc<Runtime>> {
  let runtime = Builder::new_current_thread()
    .enable_all()
    .build()
    .map_err(|e| ClientError::Runtime(Arc::new(e)))?;
  Ok(Arc::new(runtime))
}

/// Blocking version of [`crate::Tagger`].
#[derive(Debug)]
pub struct Tagger {
  inner: crate::Tagger,
  runtime: Arc<Runtime>,
}

impl Tagger {
  /// Creates a tagger with its own runtime.
  ///
  /// # Errors
  /// - `BaikalError::Config` if `config` is invalid
  /// - `ClientError::Runtime` if the runtime cannot be built
  pub fn new(config: ClientConfig) -> BaikalResult<Self> {
    let runtime = build_runtime()?;
    let inner = {
      let _guard = runtime.enter();
      crate::Tagger::new(config)?
    };
    Ok(Self { inner, runtime })
  }

  /// Creates a tagger using `analyzer` instead of a server connection.
  ///
  /// # Errors
  /// Returns `ClientError::Runtime` if the runtime cannot be built.
  pub fn with_analyzer(config: ClientConfig, analyzer: Arc<dyn SyntaxAnalyzer>) -> BaikalResult<Self> {
    Ok(Self {
      inner: crate::Tagger::with_analyzer(config, analyzer),
      runtime: build_runtime()?,
    })
  }

  /// Domain applied to analysis requests.
  pub fn domain(&self) -> Option<&str> {
    self.inner.domain()
  }

  /// Changes the domain applied to analysis requests.
  pub fn set_domain(&mut self, domain: Option<String>) {
    self.inner.set_domain(domain);
  }

  /// See [`crate::Tagger::custom_dict`].
  pub fn custom_dict(&mut self, domain: &str) -> BaikalResult<CustomDict> {
    let inner = {
      let _guard = self.runtime.enter();
      self.inner.custom_dict(domain)?
    };
    Ok(CustomDict {
      inner,
      runtime: Arc::clone(&self.runtime),
    })
  }

  /// See [`crate::Tagger::tag`].
  pub fn tag(&self, phrase: &str, auto_split: bool) -> BaikalResult<Tagged> {
    self.runtime.block_on(self.inner.tag(phrase, auto_split))
  }

  /// See [`crate::Tagger::tags`].
  pub fn tags<S: AsRef<str>>(&self, phrases: &[S]) -> BaikalResult<Tagged> {
    self.runtime.block_on(self.inner.tags(phrases))
  }

  /// See [`crate::Tagger::pos`].
  pub fn pos(&self, phrase: &str, flatten: bool, join: bool, detail: bool) -> BaikalResult<PosList> {
    self.runtime.block_on(self.inner.pos(phrase, flatten, join, detail))
  }

  /// See [`crate::Tagger::morphs`].
  pub fn morphs(&self, phrase: &str) -> BaikalResult<Vec<String>> {
    self.runtime.block_on(self.inner.morphs(phrase))
  }

  /// See [`crate::Tagger::nouns`].
  pub fn nouns(&self, phrase: &str) -> BaikalResult<Vec<String>> {
    self.runtime.block_on(self.inner.nouns(phrase))
  }

  /// See [`crate::Tagger::verbs`].
  pub fn verbs(&self, phrase: &str) -> BaikalResult<Vec<String>> {
    self.runtime.block_on(self.inner.verbs(phrase))
  }
}

/// Blocking version of [`crate::CustomDict`], sharing the runtime of the
/// `Tagger` that created it.
#[derive(Debug)]
pub struct CustomDict {
  inner: crate::CustomDict,
  runtime: Arc<Runtime>,
}

impl CustomDict {
  /// Domain name.
  pub fn domain(&self) -> &str {
    self.inner.domain()
  }

  /// Proper nouns.
  pub fn np_set(&self) -> &BTreeSet<String> {
    self.inner.np_set()
  }

  /// Compound nouns.
  pub fn cp_set(&self) -> &BTreeSet<String> {
    self.inner.cp_set()
  }

  /// Caret compound nouns.
  pub fn cp_caret_set(&self) -> &BTreeSet<String> {
    self.inner.cp_caret_set()
  }

  /// See [`crate::CustomDict::read_np_set_from_file`].
  pub fn read_np_set_from_file(&mut self, path: impl AsRef<Path>) -> BaikalResult<()> {
    self.inner.read_np_set_from_file(path)
  }

  /// See [`crate::CustomDict::read_cp_set_from_file`].
  pub fn read_cp_set_from_file(&mut self, path: impl AsRef<Path>) -> BaikalResult<()> {
    self.inner.read_cp_set_from_file(path)
  }

  /// See [`crate::CustomDict::read_cp_caret_set_from_file`].
  pub fn read_cp_caret_set_from_file(&mut self, path: impl AsRef<Path>) -> BaikalResult<()> {
    self.inner.read_cp_caret_set_from_file(path)
  }

  /// Replaces the proper nouns.
  pub fn copy_np_set<I, S>(&mut self, words: I)
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.inner.copy_np_set(words);
  }

  /// Replaces the compound nouns.
  pub fn copy_cp_set<I, S>(&mut self, words: I)
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.inner.copy_cp_set(words);
  }

  /// Replaces the caret compound nouns.
  pub fn copy_cp_caret_set<I, S>(&mut self, words: I)
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.inner.copy_cp_caret_set(words);
  }

  /// See [`crate::CustomDict::update`].
  pub fn update(&self) -> BaikalResult<bool> {
    self.runtime.block_on(self.inner.update())
  }

  /// See [`crate::CustomDict::get`].
  pub fn get(&self) -> BaikalResult<CustomDictionary> {
    self.runtime.block_on(self.inner.get())
  }

  /// See [`crate::CustomDict::load`].
  pub fn load(&mut self) -> BaikalResult<()> {
    self.runtime.block_on(self.inner.load())
  }

  /// See [`crate::CustomDict::clear`].
  pub fn clear(&mut self) -> BaikalResult<Vec<String>> {
    self.runtime.block_on(self.inner.clear())
  }
}

#[cfg(test)]
mod tests {
  use async_trait::async_trait;

  use super::*;
  use crate::proto::AnalyzeSyntaxResponse;

  struct EchoAnalyzer;

  #[async_trait]
  impl SyntaxAnalyzer for EchoAnalyzer {
    async fn analyze_syntax(
      &self,
      content: &str,
      _domain: Option<&str>,
      _auto_split: bool,
    ) -> BaikalResult<AnalyzeSyntaxResponse> {
      Ok(AnalyzeSyntaxResponse {
        language: content.to_string(),
        ..Default::default()
      })
    }
  }

  #[test]
  fn blocking_tag_runs_without_outer_runtime() {
    let tagger = Tagger::with_analyzer(ClientConfig::default(), Arc::new(EchoAnalyzer)).unwrap();

    let tagged = tagger.tag("안녕하세요", false).unwrap();

    assert_eq!(tagged.msg().language, "안녕하세요");
    assert!(tagger.morphs("").unwrap().is_empty());
  }

  #[test]
  fn blocking_new_builds_lazy_client() {
    // Construction happens inside the private runtime; no server needed.
    let mut tagger = Tagger::new(ClientConfig::new("127.0.0.1", 1)).unwrap();

    let dict = tagger.custom_dict("law").unwrap();
    assert_eq!(dict.domain(), "law");
    assert_eq!(tagger.domain(), Some("law"));
  }
}
