use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("商品データの取得に失敗: {0}")]
    Network(String),

    #[error("リクエスト失敗 (ステータス {status})")]
    Request { status: u16 },

    #[error("不明なコマンド: {0}（`help` で一覧を表示）")]
    InvalidCommand(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("フィクスチャが不正: {0}")]
    InvalidFixture(String),

    #[error("{0}")]
    Catalog(#[from] catalog_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
