//! crates/baikalnlp/tests/custom_dict_test.rs
//!
//! CustomDict の統合テスト。
//! サーバーの代わりにメモリ上のストアを使う。

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::NamedTempFile;

use baikalnlp::client::{CustomDictionaryStore, build_dict_set};
use baikalnlp::errors::{BaikalError, ClientError, DictionaryError};
use baikalnlp::proto::custom_dict::{CustomDictionary, CustomDictionaryMeta};
use baikalnlp::{BaikalResult, CustomDict};

/// In-memory `CustomDictionaryStore`.
#[derive(Default)]
struct MemoryStore {
  dicts: Mutex<BTreeMap<String, CustomDictionary>>,
  fail: bool,
}

impl MemoryStore {
  fn failing() -> Self {
    Self {
      fail: true,
      ..Self::default()
    }
  }

  fn check(&self) -> BaikalResult<()> {
    if self.fail {
      return Err(tonic::Status::unavailable("store is down").into());
    }
    Ok(())
  }
}

#[async_trait]
impl CustomDictionaryStore for MemoryStore {
  async fn get_list(&self) -> BaikalResult<Vec<CustomDictionaryMeta>> {
    self.check()?;
    let dicts = self.dicts.lock().unwrap();
    Ok(
      dicts
        .values()
        .map(|d| CustomDictionaryMeta {
          domain_name: d.domain_name.clone(),
          np_set_size: d.np_set.as_ref().map_or(0, |s| s.items.len() as i32),
          cp_set_size: d.cp_set.as_ref().map_or(0, |s| s.items.len() as i32),
          cp_caret_set_size: d.cp_caret_set.as_ref().map_or(0, |s| s.items.len() as i32),
        })
        .collect(),
    )
  }

  async fn get(&self, domain: &str) -> BaikalResult<CustomDictionary> {
    self.check()?;
    let dicts = self.dicts.lock().unwrap();
    Ok(dicts.get(domain).cloned().unwrap_or_else(|| CustomDictionary {
      domain_name: domain.to_string(),
      ..Default::default()
    }))
  }

  async fn update(
    &self,
    domain: &str,
    np: &BTreeSet<String>,
    cp: &BTreeSet<String>,
    cp_caret: &BTreeSet<String>,
  ) -> BaikalResult<bool> {
    self.check()?;
    let dict = CustomDictionary {
      domain_name: domain.to_string(),
      np_set: Some(build_dict_set(domain, "np-set", np)),
      cp_set: Some(build_dict_set(domain, "cp-set", cp)),
      cp_caret_set: Some(build_dict_set(domain, "cp-caret-set", cp_caret)),
    };
    self.dicts.lock().unwrap().insert(domain.to_string(), dict);
    Ok(true)
  }

  async fn remove(&self, domains: &[String]) -> BaikalResult<Vec<String>> {
    self.check()?;
    let mut dicts = self.dicts.lock().unwrap();
    let mut removed: Vec<String> = domains
      .iter()
      .filter(|d| dicts.remove(d.as_str()).is_some())
      .cloned()
      .collect();
    removed.sort();
    Ok(removed)
  }

  async fn remove_all(&self) -> BaikalResult<Vec<String>> {
    self.check()?;
    let mut dicts = self.dicts.lock().unwrap();
    let removed = dicts.keys().cloned().collect();
    dicts.clear();
    Ok(removed)
  }
}

fn words(items: &[&str]) -> BTreeSet<String> {
  items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn update_then_get_returns_server_copy() {
  let store = Arc::new(MemoryStore::default());
  let mut dict = CustomDict::with_store("covid", store.clone()).unwrap();

  dict.copy_np_set(["코로나19", "오미크론"]);
  dict.copy_cp_set(["K방역"]);
  assert!(dict.update().await.unwrap());

  let server = dict.get().await.unwrap();
  assert_eq!(server.domain_name, "covid");
  let np = server.np_set.unwrap();
  assert_eq!(np.name, "covid-np-set");
  assert_eq!(np.items.len(), 2);

  let list = store.get_list().await.unwrap();
  assert_eq!(list.len(), 1);
  assert_eq!(list[0].np_set_size, 2);
  assert_eq!(list[0].cp_caret_set_size, 0);
}

#[tokio::test]
async fn load_replaces_local_sets() {
  let store = Arc::new(MemoryStore::default());
  let mut writer = CustomDict::with_store("law", store.clone()).unwrap();
  writer.copy_cp_caret_set(["대^법원"]);
  writer.update().await.unwrap();

  let mut reader = CustomDict::with_store("law", store).unwrap();
  reader.copy_np_set(["지워질단어"]);
  reader.load().await.unwrap();

  assert!(reader.np_set().is_empty());
  assert_eq!(reader.cp_caret_set(), &words(&["대^법원"]));
}

#[tokio::test]
async fn get_leaves_local_sets_alone() {
  let store = Arc::new(MemoryStore::default());
  let mut dict = CustomDict::with_store("law", store).unwrap();
  dict.copy_np_set(["로컬"]);

  let server = dict.get().await.unwrap();

  assert!(server.np_set.is_none());
  assert_eq!(dict.np_set(), &words(&["로컬"]));
}

#[tokio::test]
async fn load_failure_is_returned_and_keeps_sets() {
  let mut dict = CustomDict::with_store("law", Arc::new(MemoryStore::failing())).unwrap();
  dict.copy_np_set(["유지"]);

  let err = dict.load().await.unwrap_err();

  match err {
    BaikalError::Client(ClientError::Status(status)) => {
      assert_eq!(status.code(), tonic::Code::Unavailable);
    }
    other => panic!("expected Status error, got {other:?}"),
  }
  assert_eq!(dict.np_set(), &words(&["유지"]));
}

#[tokio::test]
async fn clear_empties_local_and_remote() {
  let store = Arc::new(MemoryStore::default());
  let mut dict = CustomDict::with_store("law", store.clone()).unwrap();
  dict.copy_np_set(["대법원"]);
  dict.update().await.unwrap();

  let removed = dict.clear().await.unwrap();

  assert_eq!(removed, vec!["law"]);
  assert!(dict.np_set().is_empty());
  assert!(store.get_list().await.unwrap().is_empty());
}

#[tokio::test]
async fn read_sets_from_files() {
  let mut np = NamedTempFile::new().unwrap();
  writeln!(np, "# 고유명사").unwrap();
  writeln!(np, "바이칼").unwrap();
  writeln!(np).unwrap();
  writeln!(np, "  깃허브  ").unwrap();

  let mut dict = CustomDict::with_store("tech", Arc::new(MemoryStore::default())).unwrap();
  dict.read_np_set_from_file(np.path()).unwrap();

  assert_eq!(dict.np_set(), &words(&["깃허브", "바이칼"]));
}

#[tokio::test]
async fn missing_file_keeps_previous_set() {
  let mut dict = CustomDict::with_store("tech", Arc::new(MemoryStore::default())).unwrap();
  dict.copy_cp_set(["기존"]);

  let err = dict.read_cp_set_from_file("/nonexistent/baikalnlp/cp.txt").unwrap_err();

  assert!(matches!(
    err,
    BaikalError::Dictionary(DictionaryError::ReadFailed { .. })
  ));
  assert_eq!(dict.cp_set(), &words(&["기존"]));
}

#[test]
fn blank_domain_is_rejected() {
  let err = CustomDict::with_store("  ", Arc::new(MemoryStore::default())).unwrap_err();
  assert!(matches!(err, BaikalError::Dictionary(DictionaryError::EmptyDomain)));
}
