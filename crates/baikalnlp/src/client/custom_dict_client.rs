// crates/baikalnlp/src/client/custom_dict_client.rs

//! カスタム辞書サービス（`CustomDictionaryService`）のクライアント

use std::collections::BTreeSet;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::errors::BaikalResult;
use crate::proto::custom_dict::{
  CustomDictionary, CustomDictionaryMeta, GetCustomDictionaryRequest,
  RemoveCustomDictionariesRequest, RemoveCustomDictionariesResponse,
  UpdateCustomDictionaryRequest,
};
use crate::proto::{CustomDictionaryServiceStub, DictSet, DictType};

use super::connect_channel;

/// Name of the proper-noun set.
pub const NP_SET: &str = "np-set";
/// Name of the compound-noun set.
pub const CP_SET: &str = "cp-set";
/// Name of the caret-split compound-noun set.
pub const CP_CARET_SET: &str = "cp-caret-set";

/// Builds a word-list `DictSet` named `"<domain>-<name>"`, every word mapped to 1.
///
/// ```rust
/// # use baikalnlp::client::build_dict_set;
/// let set = build_dict_set("law", "np-set", ["대법원", "헌법재판소"]);
/// assert_eq!(set.name, "law-np-set");
/// assert_eq!(set.items.get("대법원"), Some(&1));
/// ```
pub fn build_dict_set<I, S>(domain: &str, name: &str, words: I) -> DictSet
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  DictSet {
    items: words.into_iter().map(|w| (w.as_ref().to_string(), 1)).collect(),
    r#type: DictType::WordList as i32,
    name: format!("{domain}-{name}"),
  }
}

/// カスタム辞書の保存先の抽象
///
/// `CustomDict` はこのトレイト越しにサーバー上の辞書を操作する。
#[async_trait]
pub trait CustomDictionaryStore: Send + Sync {
  /// 登録済み辞書の一覧を返す。
  async fn get_list(&self) -> BaikalResult<Vec<CustomDictionaryMeta>>;

  /// `domain` の辞書を返す。未登録なら空の辞書。
  async fn get(&self, domain: &str) -> BaikalResult<CustomDictionary>;

  /// `domain` の辞書を 3 つの単語集合で置き換える。
  /// サーバーが同じドメイン名を返した場合に `true`。
  async fn update(
    &self,
    domain: &str,
    np: &BTreeSet<String>,
    cp: &BTreeSet<String>,
    cp_caret: &BTreeSet<String>,
  ) -> BaikalResult<bool>;

  /// 指定ドメインの辞書を削除し、削除されたドメイン名（昇順）を返す。
  async fn remove(&self, domains: &[String]) -> BaikalResult<Vec<String>>;

  /// 全ドメインの辞書を削除し、削除されたドメイン名（昇順）を返す。
  async fn remove_all(&self) -> BaikalResult<Vec<String>>;
}

/// Client of `baikal.language.CustomDictionaryService`.
///
/// Cloning is cheap; clones share the underlying channel.
#[derive(Debug, Clone)]
pub struct CustomDictionaryServiceClient {
  stub: CustomDictionaryServiceStub,
}

impl CustomDictionaryServiceClient {
  /// Creates a client for the server described by `config`.
  ///
  /// # Errors
  /// Returns `BaikalError::Config` if `config` is invalid.
  pub fn new(config: &ClientConfig) -> BaikalResult<Self> {
    let channel = connect_channel(config)?;
    let stub = CustomDictionaryServiceStub::new(channel)
      .max_decoding_message_size(config.max_message_length)
      .max_encoding_message_size(config.max_message_length);
    Ok(Self { stub })
  }

  /// Lists the stored dictionaries.
  #[instrument(skip(self))]
  pub async fn get_list(&self) -> BaikalResult<Vec<CustomDictionaryMeta>> {
    let mut stub = self.stub.clone();
    let response = stub.get_custom_dictionary_list(()).await?.into_inner();

    debug!(count = response.domain_dicts.len(), "辞書一覧を取得");
    Ok(response.domain_dicts)
  }

  /// Fetches the dictionary of `domain`.
  ///
  /// A reply without a dictionary yields an empty one for that domain.
  #[instrument(skip(self))]
  pub async fn get(&self, domain: &str) -> BaikalResult<CustomDictionary> {
    let request = GetCustomDictionaryRequest {
      domain_name: domain.to_string(),
    };

    let mut stub = self.stub.clone();
    let response = stub.get_custom_dictionary(request).await?.into_inner();

    Ok(response.dict.unwrap_or_else(|| CustomDictionary {
      domain_name: domain.to_string(),
      ..Default::default()
    }))
  }

  /// Replaces the dictionary of `domain`.
  ///
  /// Returns `true` if the server reports `domain` as updated.
  #[instrument(skip(self, np, cp, cp_caret), fields(np_len = np.len(), cp_len = cp.len(), cp_caret_len = cp_caret.len()))]
  pub async fn update(
    &self,
    domain: &str,
    np: &BTreeSet<String>,
    cp: &BTreeSet<String>,
    cp_caret: &BTreeSet<String>,
  ) -> BaikalResult<bool> {
    let request = UpdateCustomDictionaryRequest {
      domain_name: domain.to_string(),
      dict: Some(CustomDictionary {
        domain_name: domain.to_string(),
        np_set: Some(build_dict_set(domain, NP_SET, np)),
        cp_set: Some(build_dict_set(domain, CP_SET, cp)),
        cp_caret_set: Some(build_dict_set(domain, CP_CARET_SET, cp_caret)),
      }),
    };

    let mut stub = self.stub.clone();
    let response = stub.update_custom_dictionary(request).await?.into_inner();

    debug!(updated = %response.updated_domain_name, "辞書を更新");
    Ok(response.updated_domain_name == domain)
  }

  /// Removes the dictionaries of `domains` and returns the reported names, sorted.
  #[instrument(skip(self))]
  pub async fn remove(&self, domains: &[String]) -> BaikalResult<Vec<String>> {
    self
      .remove_request(RemoveCustomDictionariesRequest {
        domain_names: domains.to_vec(),
        all: false,
      })
      .await
  }

  /// Removes every dictionary on the server and returns the reported names, sorted.
  #[instrument(skip(self))]
  pub async fn remove_all(&self) -> BaikalResult<Vec<String>> {
    self
      .remove_request(RemoveCustomDictionariesRequest {
        domain_names: Vec::new(),
        all: true,
      })
      .await
  }

  async fn remove_request(&self, request: RemoveCustomDictionariesRequest) -> BaikalResult<Vec<String>> {
    let mut stub = self.stub.clone();
    let response = stub.remove_custom_dictionaries(request).await?.into_inner();

    let names = deleted_names(response);
    debug!(count = names.len(), "辞書を削除");
    Ok(names)
  }
}

/// Domain names of a remove reply, sorted.
fn deleted_names(response: RemoveCustomDictionariesResponse) -> Vec<String> {
  let mut names: Vec<String> = response.deleted_domain_names.into_keys().collect();
  names.sort();
  names
}

#[async_trait]
impl CustomDictionaryStore for CustomDictionaryServiceClient {
  async fn get_list(&self) -> BaikalResult<Vec<CustomDictionaryMeta>> {
    CustomDictionaryServiceClient::get_list(self).await
  }

  async fn get(&self, domain: &str) -> BaikalResult<CustomDictionary> {
    CustomDictionaryServiceClient::get(self, domain).await
  }

  async fn update(
    &self,
    domain: &str,
    np: &BTreeSet<String>,
    cp: &BTreeSet<String>,
    cp_caret: &BTreeSet<String>,
  ) -> BaikalResult<bool> {
    CustomDictionaryServiceClient::update(self, domain, np, cp, cp_caret).await
  }

  async fn remove(&self, domains: &[String]) -> BaikalResult<Vec<String>> {
    CustomDictionaryServiceClient::remove(self, domains).await
  }

  async fn remove_all(&self) -> BaikalResult<Vec<String>> {
    CustomDictionaryServiceClient::remove_all(self).await
  }
}
