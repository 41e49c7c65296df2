//! 画像URLフィールドの正規化
//!
//! カタログAPIの `images` は信頼できない外部形式として扱う:
//! - 正常: `["https://a.png", "https://b.png"]`
//! - 文字列化された配列: `["[\"https://a.png\",\"https://b.png\"]"]`
//! - 余計な括弧・引用符付き: `["[\"https://a.png\""]`
//!
//! 取り込み時に一度だけ正規化し、以降は素のURL列として扱う。

use serde::{Deserialize, Deserializer};

/// 一覧表示で画像がない場合のプレースホルダ
pub const PLACEHOLDER_THUMB: &str = "https://via.placeholder.com/50";
/// 詳細表示で画像がない場合のプレースホルダ
pub const PLACEHOLDER_DETAIL: &str = "https://via.placeholder.com/150";

const STRAY_CHARS: &[char] = &['[', ']', '"'];

/// 生の画像エントリ列をURL列に正規化
pub fn normalize_images<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .flat_map(|entry| normalize_entry(entry.as_ref()))
        .collect()
}

fn normalize_entry(entry: &str) -> Vec<String> {
    let trimmed = entry.trim();

    // 文字列化されたJSON配列ならそのまま展開
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        if let Ok(urls) = serde_json::from_str::<Vec<String>>(trimmed) {
            return urls.iter().filter_map(|u| clean_url(u)).collect();
        }
    }

    clean_url(trimmed).into_iter().collect()
}

fn clean_url(value: &str) -> Option<String> {
    let cleaned = value.trim().trim_matches(STRAY_CHARS).trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// serdeの `deserialize_with` 用
///
/// `null` や欠損は空のリストとして扱う。
pub fn deserialize_images<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|r| normalize_images(&r)).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_urls_unchanged() {
        let urls = normalize_images(&["https://i.imgur.com/a.jpeg", "https://i.imgur.com/b.jpeg"]);
        assert_eq!(urls, vec!["https://i.imgur.com/a.jpeg", "https://i.imgur.com/b.jpeg"]);
    }

    #[test]
    fn test_stringified_array_expanded() {
        let urls = normalize_images(&[r#"["https://a.png","https://b.png"]"#]);
        assert_eq!(urls, vec!["https://a.png", "https://b.png"]);
    }

    #[test]
    fn test_stray_brackets_stripped() {
        let urls = normalize_images(&[r#"["https://a.png""#, r#""https://b.png"]"#]);
        assert_eq!(urls, vec!["https://a.png", "https://b.png"]);
    }

    #[test]
    fn test_empty_entries_dropped() {
        let urls = normalize_images(&["", "[]", "\"\"", "  "]);
        assert!(urls.is_empty());
    }

    #[test]
    fn test_deserialize_null_is_empty() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(deserialize_with = "deserialize_images", default)]
            images: Vec<String>,
        }

        let holder: Holder = serde_json::from_str(r#"{"images": null}"#).unwrap();
        assert!(holder.images.is_empty());

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.images.is_empty());
    }
}
