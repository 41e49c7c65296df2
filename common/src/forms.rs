//! 入力フォームとリクエストへの変換
//!
//! フォームの値は入力欄と同じく生の文字列で持ち、送信時に数値へ変換する。
//! 変換に失敗した数値は検証せず `None`（JSONでは `null`）のまま送る。

use crate::error::{Error, Result};
use crate::types::{CreatePayload, Record, UpdatePayload};
use std::str::FromStr;

/// 先頭の整数部分だけを読む
///
/// 先頭の空白を飛ばし、符号と連続する数字を読み、残りは無視する。
/// 数字が1つもなければ `None`。`i64` に収まらない桁数は上限/下限に丸める。
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    // 数字だけなので失敗するのは桁あふれのみ
    let value = match digits.parse::<i64>() {
        Ok(value) => value,
        Err(_) => return Some(if negative { i64::MIN } else { i64::MAX }),
    };
    Some(if negative { -value } else { value })
}

/// 詳細/編集フォームの項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Price,
    Description,
}

impl FromStr for FormField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(FormField::Title),
            "price" => Ok(FormField::Price),
            "desc" | "description" => Ok(FormField::Description),
            _ => Err(Error::UnknownFormField(s.to_string())),
        }
    }
}

/// 詳細/編集フォーム
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditForm {
    pub id: i64,
    pub title: String,
    pub price: String,
    pub description: String,
    pub image: Option<String>,
}

impl EditForm {
    /// レコードのスナップショットからフォームを作る
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            price: record.price.to_string(),
            description: record.description.clone(),
            image: record.first_image().map(str::to_string),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Price => self.price = value,
            FormField::Description => self.description = value,
        }
    }

    pub fn to_payload(&self) -> UpdatePayload {
        UpdatePayload {
            title: self.title.clone(),
            price: parse_int(&self.price),
            description: self.description.clone(),
        }
    }
}

/// 新規作成フォーム
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category_id: String,
    pub image: String,
}

impl CreateForm {
    pub fn to_payload(&self) -> CreatePayload {
        CreatePayload {
            title: self.title.clone(),
            price: parse_int(&self.price),
            description: self.description.clone(),
            category_id: parse_int(&self.category_id),
            images: vec![self.image.clone()],
        }
    }

    /// 作成成功後にフォームを空に戻す
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
