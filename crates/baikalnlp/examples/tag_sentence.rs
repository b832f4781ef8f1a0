//! baikalnlp crate example
//!
//! Tags a sentence, prints the POS views and the JSON form, then lists the
//! custom dictionaries stored on the server.
//!
//! ```text
//! BAIKAL_NLP_HOST=localhost cargo run --example tag_sentence -- "오늘은 정말 추운 날이네요."
//! ```

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use baikalnlp::client::CustomDictionaryServiceClient;
use baikalnlp::{ClientConfig, Tagger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let config = ClientConfig::from_env().context("failed to read BAIKAL_NLP_* variables")?;

  // RUST_LOG wins over the configured level
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(config.log_level().as_directive()));
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let phrase = std::env::args()
    .nth(1)
    .unwrap_or_else(|| "오늘은 정말 추운 날이네요.".to_string());

  let tagger = Tagger::new(config.clone())?;
  let tagged = tagger.tag(&phrase, false).await?;

  println!("=== pos ===");
  for entry in tagged.pos(true, true, true).into_flat() {
    println!("{entry}");
  }
  println!("nouns: {:?}", tagged.nouns());
  println!("verbs: {:?}", tagged.verbs());

  println!("=== json ===");
  tagged.print_as_json()?;

  println!("=== custom dictionaries ===");
  let dict_client = CustomDictionaryServiceClient::new(&config)?;
  for meta in dict_client.get_list().await? {
    println!(
      "{}: np={} cp={} cp_caret={}",
      meta.domain_name, meta.np_set_size, meta.cp_set_size, meta.cp_caret_set_size
    );
  }

  Ok(())
}
