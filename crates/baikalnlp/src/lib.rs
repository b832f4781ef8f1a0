//! baikalnlp 韓国語形態素解析クライアントライブラリー
//!
//! Baikal NLP サーバーに gRPC で形態素解析・カスタム辞書管理を依頼する

/// ブロッキング API - 非同期版 Tagger / CustomDict の同期ラッパー
pub mod blocking;

/// gRPC クライアントモジュール - LanguageService / CustomDictionaryService のクライアント
pub mod client;

/// 設定モジュール - ClientConfig 等の接続設定を定義
pub mod config;

/// カスタム辞書モジュール - CustomDict ラッパーと辞書ファイルの読み込み
pub mod custom_dict;

/// エラーモジュール - BaikalError, BaikalResult等のエラー型を定義
pub mod errors;

/// プロトコルモジュール - baikal.language パッケージのメッセージとスタブ
pub mod proto;

/// 解析結果モジュール - Tagged と品詞ビュー
pub mod tagged;

/// タガーモジュール - Tagger 等の上位レベルAPIを提供
pub mod tagger;

/// 再エクスポート
pub use config::ClientConfig;
pub use custom_dict::CustomDict;
pub use errors::{BaikalError, BaikalResult};
pub use tagged::{PosEntry, PosList, Tagged};
pub use tagger::Tagger;
