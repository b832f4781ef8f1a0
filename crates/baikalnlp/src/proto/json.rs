//! Helpers for the protobuf JSON mapping of the analysis messages.

use serde::Serializer;

use super::language_service::morpheme::{OutOfVocab, Tag};

pub(crate) fn is_default_i32(value: &i32) -> bool {
  *value == 0
}

pub(crate) fn is_default_f32(value: &f32) -> bool {
  *value == 0.0
}

/// Writes a `Tag` value as its name. Values unknown to this build stay numeric.
pub(crate) fn serialize_tag<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
  match Tag::try_from(*value) {
    Ok(tag) => serializer.serialize_str(tag.as_name()),
    Err(_) => serializer.serialize_i32(*value),
  }
}

/// Writes an `OutOfVocab` value as its name. Values unknown to this build stay numeric.
pub(crate) fn serialize_oov<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
  match OutOfVocab::try_from(*value) {
    Ok(oov) => serializer.serialize_str(oov.as_name()),
    Err(_) => serializer.serialize_i32(*value),
  }
}
