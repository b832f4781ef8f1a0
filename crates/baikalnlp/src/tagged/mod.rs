// crates/baikalnlp/src/tagged/mod.rs

//! Tagged: 形態素解析結果のビュー
//!
//! サーバーの応答（`AnalyzeSyntaxResponse`）をそのまま保持し、
//! 品詞ペア・形態素・名詞・動詞の一覧や JSON 表現を取り出す。
//! 保持した応答は変更しないため、各ビューは何度呼んでも同じ結果を返す。

pub mod pos;

use std::io::{self, Write};

use crate::errors::BaikalResult;
use crate::proto::{AnalyzeSyntaxResponse, Morpheme, Sentence};

pub use pos::{NOUN_TAGS, PosEntry, PosList, VERB_TAGS, format_morpheme};

/// Analysis result of one phrase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tagged {
  phrase: String,
  response: AnalyzeSyntaxResponse,
}

impl Tagged {
  /// Wraps a server response together with the phrase that produced it.
  pub fn new(phrase: impl Into<String>, response: AnalyzeSyntaxResponse) -> Self {
    Self {
      phrase: phrase.into(),
      response,
    }
  }

  /// A result with no sentences, used for empty input.
  pub fn empty() -> Self {
    Self::default()
  }

  /// The analyzed phrase.
  pub fn phrase(&self) -> &str {
    &self.phrase
  }

  /// The full server response.
  pub fn msg(&self) -> &AnalyzeSyntaxResponse {
    &self.response
  }

  /// The analyzed sentences.
  pub fn sentences(&self) -> &[Sentence] {
    &self.response.sentences
  }

  // ===== JSON =====

  /// Returns the response in its protobuf JSON form.
  ///
  /// Field names are lowerCamelCase, enums are written by name and
  /// default-valued fields are omitted.
  ///
  /// Built from the rendered text so that `f32` probabilities carry the
  /// same shortest decimal form as in [`Tagged::as_json_str`].
  ///
  /// # Errors
  /// Returns `BaikalError::Json` if serialization fails.
  pub fn as_json(&self) -> BaikalResult<serde_json::Value> {
    let text = serde_json::to_string(&self.response)?;
    Ok(serde_json::from_str(&text)?)
  }

  /// Returns the JSON form as a pretty-printed string (2-space indent,
  /// non-ASCII written as-is, fields in schema order).
  ///
  /// # Errors
  /// Returns `BaikalError::Json` if serialization fails.
  pub fn as_json_str(&self) -> BaikalResult<String> {
    Ok(serde_json::to_string_pretty(&self.response)?)
  }

  /// Writes the pretty JSON form to `writer`; the bytes equal
  /// [`Tagged::as_json_str`].
  ///
  /// The writer is borrowed and left open.
  ///
  /// # Errors
  /// Returns `BaikalError::Json` if serialization or writing fails.
  pub fn write_json<W: Write>(&self, writer: &mut W) -> BaikalResult<()> {
    serde_json::to_writer_pretty(writer, &self.response)?;
    Ok(())
  }

  /// Prints the pretty JSON form to stdout.
  ///
  /// # Errors
  /// Returns `BaikalError::Json` if serialization or writing fails.
  pub fn print_as_json(&self) -> BaikalResult<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    self.write_json(&mut lock)
  }

  // ===== Views =====

  /// Morphemes in document order.
  fn morphemes(&self) -> impl Iterator<Item = &Morpheme> {
    self
      .response
      .sentences
      .iter()
      .flat_map(|s| s.tokens.iter())
      .flat_map(|t| t.morphemes.iter())
  }

  /// Returns (morpheme, tag) pairs.
  ///
  /// - `flatten`: one list in document order; otherwise one list per token
  /// - `join`: `"text/TAG"` strings instead of tuples
  /// - `detail`: include out-of-vocab classification and probability
  pub fn pos(&self, flatten: bool, join: bool, detail: bool) -> PosList {
    if flatten {
      PosList::Flat(self.morphemes().map(|m| format_morpheme(m, join, detail)).collect())
    } else {
      PosList::Grouped(
        self
          .response
          .sentences
          .iter()
          .flat_map(|s| s.tokens.iter())
          .map(|t| t.morphemes.iter().map(|m| format_morpheme(m, join, detail)).collect())
          .collect(),
      )
    }
  }

  /// Returns every morpheme text.
  pub fn morphs(&self) -> Vec<String> {
    self.morphemes().map(morpheme_text).collect()
  }

  /// Returns nouns (NNP, NNG, NP, NNB).
  pub fn nouns(&self) -> Vec<String> {
    self.texts_with_tags(&NOUN_TAGS)
  }

  /// Returns verbs (VV).
  pub fn verbs(&self) -> Vec<String> {
    self.texts_with_tags(&VERB_TAGS)
  }

  fn texts_with_tags(&self, tags: &[crate::proto::Tag]) -> Vec<String> {
    self
      .morphemes()
      .filter(|m| tags.contains(&m.tag()))
      .map(morpheme_text)
      .collect()
  }
}

fn morpheme_text(m: &Morpheme) -> String {
  m.text.as_ref().map(|t| t.content.clone()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::proto::{Tag, TextSpan, Token};

  fn token(morphemes: &[(&str, Tag)]) -> Token {
    Token {
      morphemes: morphemes
        .iter()
        .map(|(text, tag)| Morpheme {
          text: Some(TextSpan {
            content: text.to_string(),
            ..Default::default()
          }),
          tag: *tag as i32,
          ..Default::default()
        })
        .collect(),
      ..Default::default()
    }
  }

  fn sample() -> Tagged {
    let response = AnalyzeSyntaxResponse {
      sentences: vec![Sentence {
        tokens: vec![
          token(&[("나", Tag::Np), ("는", Tag::Jx)]),
          token(&[("가", Tag::Vv), ("ㄴ다", Tag::Ef)]),
        ],
        ..Default::default()
      }],
      language: "ko_KR".to_string(),
    };
    Tagged::new("나는 간다", response)
  }

  #[test]
  fn empty_has_no_views() {
    let tagged = Tagged::empty();

    assert_eq!(tagged.phrase(), "");
    assert!(tagged.sentences().is_empty());
    assert!(tagged.morphs().is_empty());
    assert!(tagged.pos(true, false, false).is_empty());
    assert_eq!(tagged.pos(false, false, false), PosList::Grouped(vec![]));
    assert_eq!(tagged.as_json_str().unwrap(), "{}");
  }

  #[test]
  fn views_follow_document_order() {
    let tagged = sample();

    assert_eq!(tagged.morphs(), vec!["나", "는", "가", "ㄴ다"]);
    assert_eq!(tagged.nouns(), vec!["나"]);
    assert_eq!(tagged.verbs(), vec!["가"]);
  }

  #[test]
  fn grouped_pos_has_one_group_per_token() {
    let tagged = sample();

    match tagged.pos(false, true, false) {
      PosList::Grouped(groups) => {
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1], vec![PosEntry::Joined("가/VV".into()), PosEntry::Joined("ㄴ다/EF".into())]);
      }
      other => panic!("expected grouped list, got {other:?}"),
    }
  }

  #[test]
  fn write_json_leaves_writer_usable() {
    let tagged = sample();
    let mut buf: Vec<u8> = Vec::new();

    tagged.write_json(&mut buf).unwrap();
    buf.extend_from_slice(b"end");

    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("{\n  \"sentences\""));
    assert!(text.contains("\"나\""));
    assert!(text.ends_with("}end"));
  }

  #[test]
  fn write_json_matches_as_json_str() {
    for tagged in [sample(), Tagged::empty()] {
      let mut buf: Vec<u8> = Vec::new();
      tagged.write_json(&mut buf).unwrap();

      assert_eq!(String::from_utf8(buf).unwrap(), tagged.as_json_str().unwrap());
    }

    let mut buf: Vec<u8> = Vec::new();
    Tagged::empty().write_json(&mut buf).unwrap();
    assert_eq!(buf, b"{}");
  }

  #[test]
  fn as_json_matches_rendered_text() {
    let mut tagged = sample();
    tagged.response.sentences[0].tokens[0].morphemes[0].probability = 0.9;

    let json = tagged.as_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&tagged.as_json_str().unwrap()).unwrap();

    assert_eq!(json, parsed);
    assert_eq!(json["sentences"][0]["tokens"][0]["morphemes"][0]["probability"], 0.9);
  }

  #[test]
  fn as_json_keeps_language() {
    let json = sample().as_json().unwrap();
    assert_eq!(json["language"], "ko_KR");
    assert_eq!(json["sentences"][0]["tokens"][1]["morphemes"][0]["tag"], "VV");
  }
}
