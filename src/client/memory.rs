//! メモリ上のカタログ
//!
//! テストと `--fixture` モード用。フィクスチャは読み込むだけで書き戻さない。

use super::CatalogApi;
use crate::error::{DashboardError, Result};
use async_trait::async_trait;
use catalog_common::{Category, CreatePayload, Record, UpdatePayload};
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

const STATUS_BAD_REQUEST: u16 = 400;
const STATUS_NOT_FOUND: u16 = 404;

#[derive(Debug, Default)]
pub struct MemoryCatalog {
    records: Mutex<Vec<Record>>,
}

impl MemoryCatalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records: Mutex::new(records) }
    }

    /// JSON配列のフィクスチャから読み込む
    pub fn from_fixture(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let records: Vec<Record> = serde_json::from_str(&content)
            .map_err(|e| DashboardError::InvalidFixture(format!("{}: {}", path.display(), e)))?;
        debug!(count = records.len(), path = %path.display(), "fixture loaded");
        Ok(Self::new(records))
    }

    /// 現在の内容のコピー
    pub fn snapshot(&self) -> Vec<Record> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Record>> {
        // 保持中にパニックしても中身はそのまま使える
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn category_for(records: &[Record], id: i64) -> Category {
    records
        .iter()
        .filter_map(|r| r.category.as_ref())
        .find(|c| c.id == Some(id))
        .cloned()
        .unwrap_or_else(|| Category { id: Some(id), name: format!("Category {}", id) })
}

#[async_trait]
impl CatalogApi for MemoryCatalog {
    async fn fetch_all(&self) -> Result<Vec<Record>> {
        Ok(self.snapshot())
    }

    async fn create(&self, payload: &CreatePayload) -> Result<()> {
        let (Some(price), Some(category_id)) = (payload.price, payload.category_id) else {
            return Err(DashboardError::Request { status: STATUS_BAD_REQUEST });
        };

        let mut records = self.lock();
        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let category = category_for(&records, category_id);
        records.push(Record {
            id,
            title: payload.title.clone(),
            price: price as f64,
            description: payload.description.clone(),
            category: Some(category),
            images: catalog_common::images::normalize_images(&payload.images),
        });
        debug!(id, "product created");
        Ok(())
    }

    async fn update(&self, id: i64, payload: &UpdatePayload) -> Result<()> {
        let Some(price) = payload.price else {
            return Err(DashboardError::Request { status: STATUS_BAD_REQUEST });
        };

        let mut records = self.lock();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DashboardError::Request { status: STATUS_NOT_FOUND })?;
        record.title = payload.title.clone();
        record.price = price as f64;
        record.description = payload.description.clone();
        debug!(id, "product updated");
        Ok(())
    }
}
