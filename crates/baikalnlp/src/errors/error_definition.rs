//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// クライアント設定（ClientConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// host が空
  #[error("host に接続先のホスト名を指定してください")]
  EmptyHost,

  /// port が 0
  #[error("port は 1 以上である必要があります: actual={actual}")]
  InvalidPort {
    /// 実際に指定された値
    actual: u16,
  },

  /// max_message_length が 0
  #[error("max_message_length は 1 以上である必要があります: actual={actual}")]
  InvalidMaxMessageLength {
    /// 実際に指定された値
    actual: usize,
  },

  /// タイムアウトに 0 が指定された
  #[error("{field} は 1 ミリ秒以上である必要があります")]
  InvalidTimeout {
    /// 対象フィールド名
    field: &'static str,
  },

  /// 接続先 URI が不正
  #[error("接続先 URI が不正です: uri={uri}, reason={reason}")]
  InvalidEndpoint {
    /// 組み立てた URI
    uri: String,
    /// 不正の理由
    reason: String,
  },

  /// 環境変数の値が不正
  #[error("環境変数 {name} の値が不正です: value={value}, reason={reason}")]
  InvalidEnvVar {
    /// 環境変数名
    name: &'static str,
    /// 読み込んだ値
    value: String,
    /// 不正の理由
    reason: String,
  },
}

/// カスタム辞書（ユーザー辞書）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// ドメイン名が空
  #[error("カスタム辞書のドメイン名を指定してください")]
  EmptyDomain,

  /// 辞書ファイルの読み込み失敗
  #[error("辞書ファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  ReadFailed {
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },
}

/// gRPC クライアント関連のエラー
///
/// サーバー・トランスポート起因のエラーは変換せずにそのまま保持する。
/// リトライ方針は呼び出し側が決める。
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ClientError {
  /// チャネル（HTTP/2 接続）レベルのエラー
  #[error("gRPC トランスポートエラー: {0}")]
  Transport(Arc<tonic::transport::Error>),

  /// サーバーから返された gRPC ステータス
  #[error("gRPC ステータスエラー: {0}")]
  Status(Box<tonic::Status>),

  /// ブロッキング API 用ランタイムの構築失敗
  #[error("tokio ランタイムの構築に失敗しました: {0}")]
  Runtime(Arc<io::Error>),
}

impl ClientError {
  /// サーバーから返された gRPC ステータスを返す（Status の場合のみ）
  pub fn status(&self) -> Option<&tonic::Status> {
    match self {
      Self::Status(status) => Some(status),
      _ => None,
    }
  }
}

impl From<tonic::Status> for ClientError {
  fn from(status: tonic::Status) -> Self {
    Self::Status(Box::new(status))
  }
}

impl From<tonic::transport::Error> for ClientError {
  fn from(err: tonic::transport::Error) -> Self {
    Self::Transport(Arc::new(err))
  }
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `BaikalResult<T>` = `Result<T, BaikalError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum BaikalError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// カスタム辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// gRPC クライアント関連エラー
  #[error(transparent)]
  Client(#[from] ClientError),

  /// 解析結果の JSON シリアライズ・書き出し失敗
  #[error("JSON の出力に失敗しました: {0}")]
  Json(Arc<serde_json::Error>),
}

impl From<tonic::Status> for BaikalError {
  fn from(status: tonic::Status) -> Self {
    Self::Client(status.into())
  }
}

impl From<tonic::transport::Error> for BaikalError {
  fn from(err: tonic::transport::Error) -> Self {
    Self::Client(err.into())
  }
}

impl From<serde_json::Error> for BaikalError {
  fn from(err: serde_json::Error) -> Self {
    Self::Json(Arc::new(err))
  }
}

/// baikalnlp クレートの標準 Result 型エイリアス
pub type BaikalResult<T> = Result<T, BaikalError>;
