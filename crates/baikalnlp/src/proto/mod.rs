//! Wire types of the `baikal.language` gRPC package.
//!
//! Checked in rather than generated at build time, so building the crate
//! does not need `protoc`. The matching `.proto` files live under
//! `proto/baikal/language/`.

pub mod custom_dict;
pub mod dict_common;
mod json;
pub mod language_service;

pub use custom_dict::custom_dictionary_service_client::CustomDictionaryServiceStub;
pub use dict_common::{DictSet, DictType};
pub use language_service::language_service_client::LanguageServiceStub;
pub use language_service::morpheme::{OutOfVocab, Tag};
pub use language_service::{
  AnalyzeSyntaxRequest, AnalyzeSyntaxResponse, Document, EncodingType, Morpheme, Sentence,
  TextSpan, Token,
};
