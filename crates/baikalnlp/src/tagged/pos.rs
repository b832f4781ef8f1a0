// crates/baikalnlp/src/tagged/pos.rs

//! 品詞（POS）ビューの表現と整形

use std::fmt;

use serde::Serialize;

use crate::proto::{Morpheme, OutOfVocab, Tag};

/// `nouns()` が拾う品詞
pub const NOUN_TAGS: [Tag; 4] = [Tag::Nnp, Tag::Nng, Tag::Np, Tag::Nnb];

/// `verbs()` が拾う品詞
pub const VERB_TAGS: [Tag; 1] = [Tag::Vv];

/// One morpheme in a `pos` view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PosEntry {
  /// `"text/TAG"`, optionally followed by `:prob` and `#OOV`
  Joined(String),
  /// `(text, tag)`
  Pair(String, String),
  /// `(text, tag, out-of-vocab name, probability)`
  Detail(String, String, String, f32),
}

impl PosEntry {
  /// Returns the morpheme text and tag name.
  ///
  /// Joined entries are split on the last `/`, ignoring any detail suffix.
  pub fn text_and_tag(&self) -> (&str, &str) {
    match self {
      PosEntry::Pair(text, tag) | PosEntry::Detail(text, tag, _, _) => (text.as_str(), tag.as_str()),
      PosEntry::Joined(joined) => {
        let (text, rest) = joined.rsplit_once('/').unwrap_or((joined.as_str(), ""));
        let tag = rest.split([':', '#']).next().unwrap_or(rest);
        (text, tag)
      }
    }
  }
}

impl fmt::Display for PosEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PosEntry::Joined(joined) => f.write_str(joined),
      PosEntry::Pair(text, tag) => write!(f, "{text}/{tag}"),
      PosEntry::Detail(text, tag, oov, p) => f.write_str(&join_detail(text, tag, *p, oov)),
    }
  }
}

/// Result of `pos`: flat in document order, or one group per token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PosList {
  /// `flatten = true`
  Flat(Vec<PosEntry>),
  /// `flatten = false`
  Grouped(Vec<Vec<PosEntry>>),
}

impl PosList {
  /// Number of morphemes across all groups.
  pub fn len(&self) -> usize {
    match self {
      PosList::Flat(entries) => entries.len(),
      PosList::Grouped(groups) => groups.iter().map(Vec::len).sum(),
    }
  }

  /// `true` if there is no morpheme.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Drops the token grouping.
  pub fn into_flat(self) -> Vec<PosEntry> {
    match self {
      PosList::Flat(entries) => entries,
      PosList::Grouped(groups) => groups.into_iter().flatten().collect(),
    }
  }
}

/// 形態素 1 件を `join` / `detail` の指定どおりに整形する。
///
/// | join  | detail | 結果                                   |
/// |-------|--------|----------------------------------------|
/// | false | false  | `Pair(text, tag)`                      |
/// | false | true   | `Detail(text, tag, oov, probability)`  |
/// | true  | false  | `Joined("text/TAG")`                   |
/// | true  | true   | `Joined("text/TAG:0.953#OUT_OF_VOCAB")` |
///
/// 確率は 0 より大きい場合のみ、OOV は `IN_WORD_EMBEDDING` 以外の場合のみ付与する。
pub fn format_morpheme(m: &Morpheme, join: bool, detail: bool) -> PosEntry {
  let text = m.text.as_ref().map(|t| t.content.as_str()).unwrap_or_default();
  let tag = m.tag().as_name();
  let oov = m.out_of_vocab();

  match (join, detail) {
    (false, false) => PosEntry::Pair(text.to_string(), tag.to_string()),
    (false, true) => PosEntry::Detail(
      text.to_string(),
      tag.to_string(),
      oov.as_name().to_string(),
      m.probability,
    ),
    (true, false) => PosEntry::Joined(format!("{text}/{tag}")),
    (true, true) => PosEntry::Joined(join_detail(text, tag, m.probability, oov.as_name())),
  }
}

/// `"text/TAG"` に、確率が 0 より大きければ `:prob`、
/// OOV が `IN_WORD_EMBEDDING` 以外なら `#OOV` を付ける。
fn join_detail(text: &str, tag: &str, probability: f32, oov: &str) -> String {
  let mut joined = format!("{text}/{tag}");
  if probability > 0.0 {
    joined.push_str(&format!(":{probability:.3}"));
  }
  if oov != OutOfVocab::InWordEmbedding.as_name() {
    joined.push('#');
    joined.push_str(oov);
  }
  joined
}
