//! `baikal.language` custom dictionary messages and the
//! `CustomDictionaryService` stub.
//!
//! Field numbers follow `proto/baikal/language/custom_dict.proto`.

use std::collections::HashMap;

use super::dict_common::DictSet;

/// Summary of one stored custom dictionary.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CustomDictionaryMeta {
  /// Domain name
  #[prost(string, tag = "1")]
  pub domain_name: String,
  /// Number of proper-noun entries
  #[prost(int32, tag = "2")]
  pub np_set_size: i32,
  /// Number of compound-noun entries
  #[prost(int32, tag = "3")]
  pub cp_set_size: i32,
  /// Number of caret-split compound entries
  #[prost(int32, tag = "4")]
  pub cp_caret_set_size: i32,
}

/// The three word sets of one domain.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CustomDictionary {
  /// Domain name
  #[prost(string, tag = "1")]
  pub domain_name: String,
  /// Proper nouns
  #[prost(message, optional, tag = "2")]
  pub np_set: Option<DictSet>,
  /// Compound nouns
  #[prost(message, optional, tag = "3")]
  pub cp_set: Option<DictSet>,
  /// Caret-split compound nouns
  #[prost(message, optional, tag = "4")]
  pub cp_caret_set: Option<DictSet>,
}

/// `GetCustomDictionaryList` response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCustomDictionaryListResponse {
  /// One entry per stored domain
  #[prost(message, repeated, tag = "1")]
  pub domain_dicts: Vec<CustomDictionaryMeta>,
}

/// `GetCustomDictionary` request.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCustomDictionaryRequest {
  /// Domain to fetch
  #[prost(string, tag = "1")]
  pub domain_name: String,
}

/// `GetCustomDictionary` response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCustomDictionaryResponse {
  /// Domain name
  #[prost(string, tag = "1")]
  pub domain_name: String,
  /// Stored dictionary, absent when the domain has none
  #[prost(message, optional, tag = "2")]
  pub dict: Option<CustomDictionary>,
}

/// `UpdateCustomDictionary` request.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateCustomDictionaryRequest {
  /// Domain to replace
  #[prost(string, tag = "1")]
  pub domain_name: String,
  /// New contents
  #[prost(message, optional, tag = "2")]
  pub dict: Option<CustomDictionary>,
}

/// `UpdateCustomDictionary` response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateCustomDictionaryResponse {
  /// Domain the server stored
  #[prost(string, tag = "1")]
  pub updated_domain_name: String,
}

/// `RemoveCustomDictionaries` request.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveCustomDictionariesRequest {
  /// Domains to delete
  #[prost(string, repeated, tag = "1")]
  pub domain_names: Vec<String>,
  /// Delete every domain, ignoring `domain_names`
  #[prost(bool, tag = "2")]
  pub all: bool,
}

/// `RemoveCustomDictionaries` response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveCustomDictionariesResponse {
  /// Domain name → whether it was deleted
  #[prost(map = "string, bool", tag = "1")]
  pub deleted_domain_names: HashMap<String, bool>,
}

/// Client stub for `baikal.language.CustomDictionaryService`.
pub mod custom_dictionary_service_client {
  use http::uri::PathAndQuery;
  use tonic::client::Grpc;
  use tonic::transport::Channel;
  use tonic::{GrpcMethod, IntoRequest, Response, Status};

  use super::{
    GetCustomDictionaryListResponse, GetCustomDictionaryRequest, GetCustomDictionaryResponse,
    RemoveCustomDictionariesRequest, RemoveCustomDictionariesResponse,
    UpdateCustomDictionaryRequest, UpdateCustomDictionaryResponse,
  };

  const SERVICE: &str = "baikal.language.CustomDictionaryService";

  /// Raw gRPC stub. Cheap to clone; clones share the channel.
  #[derive(Debug, Clone)]
  pub struct CustomDictionaryServiceStub {
    inner: Grpc<Channel>,
  }

  impl CustomDictionaryServiceStub {
    /// Wraps a channel.
    pub fn new(channel: Channel) -> Self {
      Self {
        inner: Grpc::new(channel),
      }
    }

    /// Limits the maximum size of a decoded message.
    #[must_use]
    pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
      self.inner = self.inner.max_decoding_message_size(limit);
      self
    }

    /// Limits the maximum size of an encoded message.
    #[must_use]
    pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
      self.inner = self.inner.max_encoding_message_size(limit);
      self
    }

    async fn ready(&mut self) -> Result<(), Status> {
      self
        .inner
        .ready()
        .await
        .map_err(|e| Status::unknown(format!("Service was not ready: {e}")))
    }

    /// `rpc GetCustomDictionaryList (google.protobuf.Empty) returns (GetCustomDictionaryListResponse)`
    pub async fn get_custom_dictionary_list(
      &mut self,
      request: impl IntoRequest<()>,
    ) -> Result<Response<GetCustomDictionaryListResponse>, Status> {
      self.ready().await?;
      let codec = tonic_prost::ProstCodec::default();
      let path = PathAndQuery::from_static(
        "/baikal.language.CustomDictionaryService/GetCustomDictionaryList",
      );
      let mut req = request.into_request();
      req
        .extensions_mut()
        .insert(GrpcMethod::new(SERVICE, "GetCustomDictionaryList"));
      self.inner.unary(req, path, codec).await
    }

    /// `rpc GetCustomDictionary (GetCustomDictionaryRequest) returns (GetCustomDictionaryResponse)`
    pub async fn get_custom_dictionary(
      &mut self,
      request: impl IntoRequest<GetCustomDictionaryRequest>,
    ) -> Result<Response<GetCustomDictionaryResponse>, Status> {
      self.ready().await?;
      let codec = tonic_prost::ProstCodec::default();
      let path =
        PathAndQuery::from_static("/baikal.language.CustomDictionaryService/GetCustomDictionary");
      let mut req = request.into_request();
      req
        .extensions_mut()
        .insert(GrpcMethod::new(SERVICE, "GetCustomDictionary"));
      self.inner.unary(req, path, codec).await
    }

    /// `rpc UpdateCustomDictionary (UpdateCustomDictionaryRequest) returns (UpdateCustomDictionaryResponse)`
    pub async fn update_custom_dictionary(
      &mut self,
      request: impl IntoRequest<UpdateCustomDictionaryRequest>,
    ) -> Result<Response<UpdateCustomDictionaryResponse>, Status> {
      self.ready().await?;
      let codec = tonic_prost::ProstCodec::default();
      let path = PathAndQuery::from_static(
        "/baikal.language.CustomDictionaryService/UpdateCustomDictionary",
      );
      let mut req = request.into_request();
      req
        .extensions_mut()
        .insert(GrpcMethod::new(SERVICE, "UpdateCustomDictionary"));
      self.inner.unary(req, path, codec).await
    }

    /// `rpc RemoveCustomDictionaries (RemoveCustomDictionariesRequest) returns (RemoveCustomDictionariesResponse)`
    pub async fn remove_custom_dictionaries(
      &mut self,
      request: impl IntoRequest<RemoveCustomDictionariesRequest>,
    ) -> Result<Response<RemoveCustomDictionariesResponse>, Status> {
      self.ready().await?;
      let codec = tonic_prost::ProstCodec::default();
      let path = PathAndQuery::from_static(
        "/baikal.language.CustomDictionaryService/RemoveCustomDictionaries",
      );
      let mut req = request.into_request();
      req
        .extensions_mut()
        .insert(GrpcMethod::new(SERVICE, "RemoveCustomDictionaries"));
      self.inner.unary(req, path, codec).await
    }
  }
}
