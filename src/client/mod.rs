//! カタログAPIクライアント
//!
//! 固定のコレクションエンドポイントに対して 取得/作成/更新 を行う。
//! 失敗は呼び出し元に一度だけ返し、自動リトライはしない。

pub mod http;
pub mod memory;

pub use http::HttpCatalog;
pub use memory::MemoryCatalog;

use crate::error::Result;
use async_trait::async_trait;
use catalog_common::{CreatePayload, Record, UpdatePayload};

#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// 全件取得
    ///
    /// # Errors
    ///
    /// 通信失敗・JSON以外のボディは `DashboardError::Network`。
    async fn fetch_all(&self) -> Result<Vec<Record>>;

    /// 新規作成
    ///
    /// # Errors
    ///
    /// 成功以外のステータスは `DashboardError::Request`。
    async fn create(&self, payload: &CreatePayload) -> Result<()>;

    /// 更新
    ///
    /// # Errors
    ///
    /// 成功以外のステータスは `DashboardError::Request`。
    async fn update(&self, id: i64, payload: &UpdatePayload) -> Result<()>;
}
