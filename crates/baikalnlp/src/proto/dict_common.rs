//! Dictionary payload shared by the dictionary services.

use std::collections::HashMap;

/// Kind of a [`DictSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DictType {
  /// Token index dictionary
  TokenIndex = 0,
  /// Plain word list
  WordList = 1,
  /// Compound word list
  WordListCompound = 2,
}

/// A named set of dictionary entries.
///
/// Only the keys of `items` carry meaning for word lists; values are
/// conventionally `1`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DictSet {
  /// Entries
  #[prost(map = "string, int32", tag = "1")]
  pub items: HashMap<String, i32>,
  /// Dictionary kind
  #[prost(enumeration = "DictType", tag = "2")]
  pub r#type: i32,
  /// Dictionary name
  #[prost(string, tag = "3")]
  pub name: String,
}
