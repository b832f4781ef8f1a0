// crates/baikalnlp/src/custom_dict.rs

//! CustomDict: カスタム辞書を扱いやすくするラッパー
//!
//! 固有名詞（np）・複合名詞（cp）・複合名詞分割（cp-caret）の 3 つの単語集合を
//! ローカルに保持し、サーバー上の辞書との間でまとめてやり取りする。
//!
//! ```rust,no_run
//! # async fn run() -> baikalnlp::BaikalResult<()> {
//! use baikalnlp::{ClientConfig, CustomDict};
//!
//! let mut dict = CustomDict::new("law", &ClientConfig::default())?;
//! dict.read_np_set_from_file("my_np_set.txt")?;
//! dict.copy_cp_set(["새단어", "코로나19", "K방역"]);
//! dict.update().await?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::{CustomDictionaryServiceClient, CustomDictionaryStore};
use crate::config::ClientConfig;
use crate::errors::{BaikalResult, DictionaryError};
use crate::proto::DictSet;
use crate::proto::custom_dict::CustomDictionary;

/// Reads a dictionary file: one word per line.
///
/// Lines starting with `#` are comments. Remaining lines are trimmed and
/// empty ones skipped.
///
/// # Errors
/// Returns `DictionaryError::ReadFailed` if the file cannot be read.
pub fn read_dic_file(path: impl AsRef<Path>) -> Result<BTreeSet<String>, DictionaryError> {
  let path = path.as_ref();
  let content = fs::read_to_string(path).map_err(|e| DictionaryError::ReadFailed {
    path: path.to_path_buf(),
    source: Arc::new(e),
  })?;

  Ok(parse_dic(&content))
}

fn parse_dic(content: &str) -> BTreeSet<String> {
  content
    .lines()
    .filter(|line| !line.starts_with('#'))
    .map(str::trim)
    .filter(|word| !word.is_empty())
    .map(str::to_string)
    .collect()
}

/// Returns the words of a `DictSet` (its keys).
pub fn dict_set_to_set(dict_set: Option<&DictSet>) -> BTreeSet<String> {
  dict_set.map(|ds| ds.items.keys().cloned().collect()).unwrap_or_default()
}

/// Local copy of one domain's custom dictionary.
pub struct CustomDict {
  domain: String,
  store: Arc<dyn CustomDictionaryStore>,
  np_set: BTreeSet<String>,
  cp_set: BTreeSet<String>,
  cp_caret_set: BTreeSet<String>,
}

impl std::fmt::Debug for CustomDict {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CustomDict")
      .field("domain", &self.domain)
      .field("np_set", &self.np_set.len())
      .field("cp_set", &self.cp_set.len())
      .field("cp_caret_set", &self.cp_caret_set.len())
      .finish_non_exhaustive()
  }
}

impl CustomDict {
  /// Creates an empty dictionary for `domain` on the server of `config`.
  ///
  /// Must be called inside a tokio runtime context (see [`crate::client`]).
  ///
  /// # Errors
  /// - `DictionaryError::EmptyDomain` if `domain` is blank
  /// - `BaikalError::Config` if `config` is invalid
  pub fn new(domain: impl Into<String>, config: &ClientConfig) -> BaikalResult<Self> {
    let domain = checked_domain(domain.into())?;
    let client = CustomDictionaryServiceClient::new(config)?;
    Ok(Self::from_parts(domain, Arc::new(client)))
  }

  /// Creates an empty dictionary for `domain` backed by `store`.
  ///
  /// # Errors
  /// Returns `DictionaryError::EmptyDomain` if `domain` is blank.
  pub fn with_store(
    domain: impl Into<String>,
    store: Arc<dyn CustomDictionaryStore>,
  ) -> BaikalResult<Self> {
    let domain = checked_domain(domain.into())?;
    Ok(Self::from_parts(domain, store))
  }

  fn from_parts(domain: String, store: Arc<dyn CustomDictionaryStore>) -> Self {
    Self {
      domain,
      store,
      np_set: BTreeSet::new(),
      cp_set: BTreeSet::new(),
      cp_caret_set: BTreeSet::new(),
    }
  }

  /// Domain name.
  pub fn domain(&self) -> &str {
    &self.domain
  }

  /// Proper nouns.
  pub fn np_set(&self) -> &BTreeSet<String> {
    &self.np_set
  }

  /// Compound nouns.
  pub fn cp_set(&self) -> &BTreeSet<String> {
    &self.cp_set
  }

  /// Compound nouns with `^`-marked split points.
  pub fn cp_caret_set(&self) -> &BTreeSet<String> {
    &self.cp_caret_set
  }

  // ===== Local sets =====

  /// Replaces the proper nouns with the words of a dictionary file.
  ///
  /// # Errors
  /// Returns `DictionaryError::ReadFailed` if the file cannot be read;
  /// the current set is kept in that case.
  pub fn read_np_set_from_file(&mut self, path: impl AsRef<Path>) -> BaikalResult<()> {
    self.np_set = read_dic_file(path)?;
    Ok(())
  }

  /// Replaces the compound nouns with the words of a dictionary file.
  ///
  /// # Errors
  /// Returns `DictionaryError::ReadFailed` if the file cannot be read.
  pub fn read_cp_set_from_file(&mut self, path: impl AsRef<Path>) -> BaikalResult<()> {
    self.cp_set = read_dic_file(path)?;
    Ok(())
  }

  /// Replaces the caret compound nouns with the words of a dictionary file.
  ///
  /// # Errors
  /// Returns `DictionaryError::ReadFailed` if the file cannot be read.
  pub fn read_cp_caret_set_from_file(&mut self, path: impl AsRef<Path>) -> BaikalResult<()> {
    self.cp_caret_set = read_dic_file(path)?;
    Ok(())
  }

  /// Replaces the proper nouns.
  pub fn copy_np_set<I, S>(&mut self, words: I)
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.np_set = words.into_iter().map(Into::into).collect();
  }

  /// Replaces the compound nouns.
  pub fn copy_cp_set<I, S>(&mut self, words: I)
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.cp_set = words.into_iter().map(Into::into).collect();
  }

  /// Replaces the caret compound nouns.
  pub fn copy_cp_caret_set<I, S>(&mut self, words: I)
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.cp_caret_set = words.into_iter().map(Into::into).collect();
  }

  // ===== Server =====

  /// Uploads the three local sets, replacing the server copy.
  ///
  /// Returns `true` if the server confirms the domain.
  pub async fn update(&self) -> BaikalResult<bool> {
    debug!(
      domain = %self.domain,
      np = self.np_set.len(),
      cp = self.cp_set.len(),
      cp_caret = self.cp_caret_set.len(),
      "カスタム辞書を送信"
    );
    self
      .store
      .update(&self.domain, &self.np_set, &self.cp_set, &self.cp_caret_set)
      .await
  }

  /// Fetches the server copy. Local sets are left untouched.
  pub async fn get(&self) -> BaikalResult<CustomDictionary> {
    self.store.get(&self.domain).await
  }

  /// Replaces the local sets with the server copy.
  ///
  /// # Errors
  /// Remote failures are returned and the local sets are kept.
  pub async fn load(&mut self) -> BaikalResult<()> {
    let dict = match self.store.get(&self.domain).await {
      Ok(dict) => dict,
      Err(e) => {
        warn!(domain = %self.domain, error = %e, "カスタム辞書の読み込みに失敗しました");
        return Err(e);
      }
    };

    self.np_set = dict_set_to_set(dict.np_set.as_ref());
    self.cp_set = dict_set_to_set(dict.cp_set.as_ref());
    self.cp_caret_set = dict_set_to_set(dict.cp_caret_set.as_ref());
    Ok(())
  }

  /// Clears the local sets and removes the domain from the server.
  ///
  /// Returns the names the server reports as deleted.
  pub async fn clear(&mut self) -> BaikalResult<Vec<String>> {
    self.np_set.clear();
    self.cp_set.clear();
    self.cp_caret_set.clear();
    self.store.remove(std::slice::from_ref(&self.domain)).await
  }
}

fn checked_domain(domain: String) -> Result<String, DictionaryError> {
  if domain.trim().is_empty() {
    return Err(DictionaryError::EmptyDomain);
  }
  Ok(domain)
}
