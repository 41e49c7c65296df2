//! 商品データの型定義
//!
//! - Record: カタログAPIが返す商品
//! - CreatePayload: POST /products のボディ
//! - UpdatePayload: PUT /products/{id} のボディ

use crate::images;
use serde::{Deserialize, Serialize};

/// 商品カテゴリ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// 商品レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,

    pub title: String,

    pub price: f64,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: Option<Category>,

    /// 取り込み時に正規化済みの画像URL
    #[serde(default, deserialize_with = "images::deserialize_images")]
    pub images: Vec<String>,
}

impl Record {
    /// カテゴリ名（なければ "N/A"）
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("N/A")
    }

    /// 先頭の画像URL
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// 新規作成リクエスト
///
/// `price` と `category_id` は数値変換に失敗すると `null` のまま送られる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayload {
    pub title: String,
    pub price: Option<i64>,
    pub description: String,
    pub category_id: Option<i64>,
    pub images: Vec<String>,
}

/// 更新リクエスト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePayload {
    pub title: String,
    pub price: Option<i64>,
    pub description: String,
}
