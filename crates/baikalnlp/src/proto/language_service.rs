//! `baikal.language` analysis messages and the `LanguageService` stub.
//!
//! Field numbers follow `proto/baikal/language/language_service.proto`.
//! The serde attributes reproduce the protobuf JSON mapping
//! (lowerCamelCase names, enum names, default values omitted).

use serde::Serialize;

use super::json::{is_default_f32, is_default_i32, serialize_oov, serialize_tag};

/// A piece of the original text.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpan {
  /// Surface text
  #[prost(string, tag = "1")]
  #[serde(skip_serializing_if = "String::is_empty")]
  pub content: String,
  /// Offset in the request text (unit given by `EncodingType`)
  #[prost(int32, tag = "2")]
  #[serde(skip_serializing_if = "is_default_i32")]
  pub begin_offset: i32,
  /// Length (unit given by `EncodingType`)
  #[prost(int32, tag = "3")]
  #[serde(skip_serializing_if = "is_default_i32")]
  pub length: i32,
}

/// The atomic analysis unit.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Morpheme {
  /// Surface text of the morpheme
  #[prost(message, optional, tag = "1")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<TextSpan>,
  /// Part-of-speech tag, see [`morpheme::Tag`]
  #[prost(enumeration = "morpheme::Tag", tag = "2")]
  #[serde(serialize_with = "serialize_tag", skip_serializing_if = "is_default_i32")]
  pub tag: i32,
  /// Confidence. 0.0 when not meaningful.
  #[prost(float, tag = "3")]
  #[serde(skip_serializing_if = "is_default_f32")]
  pub probability: f32,
  /// Vocabulary classification, see [`morpheme::OutOfVocab`]
  #[prost(enumeration = "morpheme::OutOfVocab", tag = "5")]
  #[serde(serialize_with = "serialize_oov", skip_serializing_if = "is_default_i32")]
  pub out_of_vocab: i32,
}

/// Nested enums of [`Morpheme`].
pub mod morpheme {
  use std::fmt;

  /// Part-of-speech tags (Sejong tag set).
  ///
  /// Variant names follow Rust casing; [`Tag::as_name`] gives the exact
  /// string the server and downstream tooling use (`"NNG"`, `"VV"`, ...).
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
  #[repr(i32)]
  pub enum Tag {
    /// Unknown
    Unk = 0,
    /// Proper noun
    Nnp = 1,
    /// General noun
    Nng = 2,
    /// Dependent noun
    Nnb = 3,
    /// Pronoun
    Np = 4,
    /// Numeral
    Nr = 5,
    /// Presumed noun
    Nf = 6,
    /// Unanalyzable
    Na = 7,
    /// Presumed predicate
    Nv = 8,
    /// Verb
    Vv = 9,
    /// Adjective
    Va = 10,
    /// Auxiliary predicate
    Vx = 11,
    /// Positive copula
    Vcp = 12,
    /// Negative copula
    Vcn = 13,
    /// Adnominal (quality)
    Mma = 14,
    /// Adnominal (demonstrative)
    Mmd = 15,
    /// Adnominal (numeral)
    Mmn = 16,
    /// General adverb
    Mag = 17,
    /// Conjunctive adverb
    Maj = 18,
    /// Interjection
    Ic = 19,
    /// Subject case particle
    Jks = 20,
    /// Complement case particle
    Jkc = 21,
    /// Adnominal case particle
    Jkg = 22,
    /// Object case particle
    Jko = 23,
    /// Adverbial case particle
    Jkb = 24,
    /// Vocative case particle
    Jkv = 25,
    /// Quotative case particle
    Jkq = 26,
    /// Auxiliary particle
    Jx = 27,
    /// Conjunctive particle
    Jc = 28,
    /// Pre-final ending
    Ep = 29,
    /// Final ending
    Ef = 30,
    /// Connective ending
    Ec = 31,
    /// Nominalizing ending
    Etn = 32,
    /// Adnominalizing ending
    Etm = 33,
    /// Noun prefix
    Xpn = 34,
    /// Noun-derivational suffix
    Xsn = 35,
    /// Verb-derivational suffix
    Xsv = 36,
    /// Adjective-derivational suffix
    Xsa = 37,
    /// Root
    Xr = 38,
    /// Period, question mark, exclamation mark
    Sf = 39,
    /// Comma, middle dot, colon, slash
    Sp = 40,
    /// Quotation marks, brackets, dashes
    Ss = 41,
    /// Ellipsis
    Se = 42,
    /// Tilde, hidden/missing marks
    So = 43,
    /// Other symbols
    Sw = 44,
    /// Foreign word
    Sl = 45,
    /// Chinese character
    Sh = 46,
    /// Number
    Sn = 47,
  }

  /// Name table, indexed by the enum value.
  const TAG_NAMES: [&str; 48] = [
    "UNK", "NNP", "NNG", "NNB", "NP", "NR", "NF", "NA", "NV", "VV", "VA", "VX", "VCP", "VCN",
    "MMA", "MMD", "MMN", "MAG", "MAJ", "IC", "JKS", "JKC", "JKG", "JKO", "JKB", "JKV", "JKQ",
    "JX", "JC", "EP", "EF", "EC", "ETN", "ETM", "XPN", "XSN", "XSV", "XSA", "XR", "SF", "SP",
    "SS", "SE", "SO", "SW", "SL", "SH", "SN",
  ];

  impl Tag {
    /// Returns the tag name as used on the wire and in joined output.
    pub fn as_name(self) -> &'static str {
      TAG_NAMES[self as usize]
    }

    /// Looks up a tag by its name (`"NNG"` → `Tag::Nng`).
    pub fn from_name(name: &str) -> Option<Self> {
      TAG_NAMES
        .iter()
        .position(|n| *n == name)
        .and_then(|idx| Self::try_from(idx as i32).ok())
    }
  }

  impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_name())
    }
  }

  /// Where the analyzer found a morpheme.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
  #[repr(i32)]
  pub enum OutOfVocab {
    /// Known to the model (the "none" value)
    InWordEmbedding = 0,
    /// Unknown word
    OutOfVocab = 1,
    /// Found in a custom dictionary
    InCustomDict = 2,
    /// Found in the built-in dictionary
    InBuiltinDict = 3,
  }

  impl OutOfVocab {
    /// Returns the classification name.
    pub fn as_name(self) -> &'static str {
      match self {
        OutOfVocab::InWordEmbedding => "IN_WORD_EMBEDDING",
        OutOfVocab::OutOfVocab => "OUT_OF_VOCAB",
        OutOfVocab::InCustomDict => "IN_CUSTOM_DICT",
        OutOfVocab::InBuiltinDict => "IN_BUILTIN_DICT",
      }
    }
  }

  impl fmt::Display for OutOfVocab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_name())
    }
  }
}

/// One analyzed unit of the input, roughly a whitespace-delimited word.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
  /// Surface text of the token
  #[prost(message, optional, tag = "1")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<TextSpan>,
  /// Morphemes, in order
  #[prost(message, repeated, tag = "2")]
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub morphemes: Vec<Morpheme>,
  /// Lemma of the token
  #[prost(string, tag = "4")]
  #[serde(skip_serializing_if = "String::is_empty")]
  pub lemma: String,
  /// `text/TAG` pairs joined by `+`
  #[prost(string, tag = "5")]
  #[serde(skip_serializing_if = "String::is_empty")]
  pub tagged: String,
}

/// One sentence of the analysis result.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
  /// Sentence text
  #[prost(message, optional, tag = "1")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<TextSpan>,
  /// Tokens, in order
  #[prost(message, repeated, tag = "2")]
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub tokens: Vec<Token>,
  /// Refined sentence text
  #[prost(string, tag = "3")]
  #[serde(skip_serializing_if = "String::is_empty")]
  pub refined: String,
}

/// Input document.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Document {
  /// Text to analyze; several sentences may be separated by newlines
  #[prost(string, tag = "2")]
  pub content: String,
  /// Language code, always `ko_KR`
  #[prost(string, tag = "4")]
  pub language: String,
}

/// Unit of `TextSpan` offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum EncodingType {
  /// No offsets
  None = 0,
  /// UTF-8 bytes
  Utf8 = 1,
  /// UTF-16 code units
  Utf16 = 2,
  /// Unicode scalar values
  Utf32 = 3,
}

/// `LanguageService.AnalyzeSyntax` request.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnalyzeSyntaxRequest {
  /// The document to analyze
  #[prost(message, optional, tag = "1")]
  pub document: Option<Document>,
  /// Offset unit of the response
  #[prost(enumeration = "EncodingType", tag = "2")]
  pub encoding_type: i32,
  /// Let the server split sentences on its own
  #[prost(bool, tag = "3")]
  pub auto_split_sentence: bool,
  /// Custom dictionary domain, empty for none
  #[prost(string, tag = "4")]
  pub custom_domain: String,
}

/// `LanguageService.AnalyzeSyntax` response.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSyntaxResponse {
  /// Sentences, in order
  #[prost(message, repeated, tag = "1")]
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub sentences: Vec<Sentence>,
  /// Language of the analysis
  #[prost(string, tag = "2")]
  #[serde(skip_serializing_if = "String::is_empty")]
  pub language: String,
}

/// Client stub for `baikal.language.LanguageService`.
pub mod language_service_client {
  use http::uri::PathAndQuery;
  use tonic::client::Grpc;
  use tonic::transport::Channel;
  use tonic::{GrpcMethod, IntoRequest, Response, Status};

  use super::{AnalyzeSyntaxRequest, AnalyzeSyntaxResponse};

  const SERVICE: &str = "baikal.language.LanguageService";

  /// Raw gRPC stub. Cheap to clone; clones share the channel.
  #[derive(Debug, Clone)]
  pub struct LanguageServiceStub {
    inner: Grpc<Channel>,
  }

  impl LanguageServiceStub {
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

    /// `rpc AnalyzeSyntax (AnalyzeSyntaxRequest) returns (AnalyzeSyntaxResponse)`
    pub async fn analyze_syntax(
      &mut self,
      request: impl IntoRequest<AnalyzeSyntaxRequest>,
    ) -> Result<Response<AnalyzeSyntaxResponse>, Status> {
      self
        .inner
        .ready()
        .await
        .map_err(|e| Status::unknown(format!("Service was not ready: {e}")))?;
      let codec = tonic_prost::ProstCodec::default();
      let path = PathAndQuery::from_static("/baikal.language.LanguageService/AnalyzeSyntax");
      let mut req = request.into_request();
      req.extensions_mut().insert(GrpcMethod::new(SERVICE, "AnalyzeSyntax"));
      self.inner.unary(req, path, codec).await
    }
  }
}
