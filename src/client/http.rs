//! HTTP版クライアント（reqwest）

use super::CatalogApi;
use crate::error::{DashboardError, Result};
use async_trait::async_trait;
use catalog_common::{CreatePayload, Record, UpdatePayload};
use reqwest::{Client, Response};
use tracing::debug;

pub struct HttpCatalog {
    client: Client,
    endpoint: String,
}

impl HttpCatalog {
    /// # Errors
    ///
    /// HTTPクライアントを構築できない場合。
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| DashboardError::Config(format!("HTTPクライアントの作成に失敗: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.endpoint, id)
    }
}

fn network_err(e: reqwest::Error) -> DashboardError {
    DashboardError::Network(e.to_string())
}

/// 書き込み系のステータス判定（ステータスごとの特別扱いはしない）
fn check_write(response: Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(DashboardError::Request { status: status.as_u16() })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn fetch_all(&self) -> Result<Vec<Record>> {
        debug!(method = "GET", url = %self.endpoint, "fetching catalog");

        let response = self.client.get(&self.endpoint).send().await.map_err(network_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Network(format!("APIエラー ({})", status)));
        }

        let records: Vec<Record> = response.json().await.map_err(network_err)?;
        debug!(count = records.len(), "catalog fetched");
        Ok(records)
    }

    async fn create(&self, payload: &CreatePayload) -> Result<()> {
        debug!(method = "POST", url = %self.endpoint, title = %payload.title, "creating product");

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(network_err)?;
        check_write(response)
    }

    async fn update(&self, id: i64, payload: &UpdatePayload) -> Result<()> {
        let url = self.item_url(id);
        debug!(method = "PUT", url = %url, "updating product");

        let response = self
            .client
            .put(&url)
            .json(payload)
            .send()
            .await
            .map_err(network_err)?;
        check_write(response)
    }
}
