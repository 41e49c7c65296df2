//! 一覧ビューの状態管理
//!
//! 取得済みの全件 (`full`) と、検索・ソート後の派生集合 (`filtered`)、
//! ページ位置、ページサイズ、ソート指定を保持する。
//!
//! 不変条件:
//! - `filtered` は `full` の部分集合で、現在のキーワードに一致する
//! - `filtered` の順序はソート指定に従う（指定なしなら `full` の順序）
//! - 範囲外のページはエラーではなく空のスライスになる

use crate::error::{Error, Result};
use crate::types::Record;
use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// デフォルトのページサイズ
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// ページリンクの表示幅（現在ページの前後）
const PAGE_WINDOW: usize = 2;

/// ソート可能な列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Price,
    Description,
    Category,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::Title,
        SortField::Price,
        SortField::Description,
        SortField::Category,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Price => "price",
            SortField::Description => "description",
            SortField::Category => "category",
        }
    }

    /// 2レコードをこの列で比較（文字列は大文字小文字を無視）
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            SortField::Title => compare_text(&a.title, &b.title),
            SortField::Description => compare_text(&a.description, &b.description),
            SortField::Category => compare_text(category_key(a), category_key(b)),
        }
    }
}

fn category_key(record: &Record) -> &str {
    record.category.as_ref().map(|c| c.name.as_str()).unwrap_or("")
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "price" => Ok(SortField::Price),
            "description" | "desc" => Ok(SortField::Description),
            "category" | "cat" => Ok(SortField::Category),
            _ => Err(Error::UnknownSortField(s.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ソート方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// 現在のソート指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub field: SortField,
    pub direction: SortDirection,
}

/// テーブル描画用の投影
#[derive(Debug, PartialEq)]
pub enum TableView<'a> {
    Rows(&'a [Record]),
    /// 表示する行がない（「データなし」を表示する）
    NoResults,
}

/// ページリンク1つ分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub target: usize,
    pub enabled: bool,
    pub active: bool,
}

/// ページング操作部の投影
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub previous: PageLink,
    pub pages: Vec<PageLink>,
    pub next: PageLink,
}

/// 一覧ビューの状態
#[derive(Debug, Clone)]
pub struct ViewState {
    full: Vec<Record>,
    filtered: Vec<Record>,
    keyword: String,
    page: usize,
    page_size: NonZeroUsize,
    sort: Option<SortDirective>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl ViewState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            full: Vec::new(),
            filtered: Vec::new(),
            keyword: String::new(),
            page: 1,
            page_size,
            sort: None,
        }
    }

    /// 取得結果で全件を置き換え、現在の検索・ソートで再計算する
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.full = records;
        self.refilter();
        self.resort();
    }

    /// タイトルの部分一致検索（大文字小文字を無視）
    ///
    /// ページは1に戻り、ソート指定があれば方向を変えずに再ソートする。
    pub fn apply_search(&mut self, keyword: &str) {
        self.keyword = keyword.to_lowercase();
        self.refilter();
        self.page = 1;
        self.resort();
    }

    /// ソート指定を更新して `filtered` を並べ替える
    ///
    /// `toggle` が真かつ同じ列なら方向を反転、それ以外は昇順で設定。
    pub fn apply_sort(&mut self, field: SortField, toggle: bool) {
        let direction = match self.sort {
            Some(current) if toggle && current.field == field => current.direction.flipped(),
            _ => SortDirection::Asc,
        };
        self.sort = Some(SortDirective { field, direction });
        self.resort();
    }

    pub fn set_page_size(&mut self, size: NonZeroUsize) {
        self.page_size = size;
        self.page = 1;
    }

    /// ページを移動（範囲チェックなし）
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    /// 現在ページのレコード
    pub fn page_slice(&self) -> &[Record] {
        let size = self.page_size.get();
        let Some(start) = self.page.checked_sub(1).and_then(|p| p.checked_mul(size)) else {
            return &[];
        };
        if start >= self.filtered.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(self.filtered.len());
        &self.filtered[start..end]
    }

    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size.get())
    }

    pub fn table_view(&self) -> TableView<'_> {
        let slice = self.page_slice();
        if slice.is_empty() {
            TableView::NoResults
        } else {
            TableView::Rows(slice)
        }
    }

    /// 前へ / 番号（現在ページの前後2つまで） / 次へ
    pub fn pagination(&self) -> Pagination {
        let total = self.page_count();
        let current = self.page;

        let start = current.saturating_sub(PAGE_WINDOW).max(1);
        let end = current.saturating_add(PAGE_WINDOW).min(total);
        let pages = (start..=end)
            .map(|n| PageLink { target: n, enabled: true, active: n == current })
            .collect();

        Pagination {
            previous: PageLink {
                target: current.saturating_sub(1),
                enabled: current > 1,
                active: false,
            },
            pages,
            next: PageLink {
                target: current.saturating_add(1),
                enabled: current < total,
                active: false,
            },
        }
    }

    pub fn find(&self, id: i64) -> Option<&Record> {
        self.full.iter().find(|r| r.id == id)
    }

    pub fn full_set(&self) -> &[Record] {
        &self.full
    }

    pub fn filtered_set(&self) -> &[Record] {
        &self.filtered
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn sort(&self) -> Option<SortDirective> {
        self.sort
    }

    fn refilter(&mut self) {
        let keyword = &self.keyword;
        self.filtered = self
            .full
            .iter()
            .filter(|r| r.title.to_lowercase().contains(keyword.as_str()))
            .cloned()
            .collect();
    }

    fn resort(&mut self) {
        let Some(SortDirective { field, direction }) = self.sort else {
            return;
        };
        // sort_by は安定ソート
        self.filtered.sort_by(|a, b| {
            let ordering = field.compare(a, b);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn record(id: i64, title: &str, price: f64) -> Record {
        Record {
            id,
            title: title.to_string(),
            price,
            ..Default::default()
        }
    }

    fn page_size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    fn loaded(records: Vec<Record>) -> ViewState {
        let mut view = ViewState::default();
        view.replace_all(records);
        view
    }

    #[test]
    fn test_default_state() {
        let view = ViewState::default();
        assert_eq!(view.page(), 1);
        assert_eq!(view.page_size(), DEFAULT_PAGE_SIZE);
        assert!(view.sort().is_none());
        assert_eq!(view.page_count(), 0);
        assert_eq!(view.table_view(), TableView::NoResults);
    }

    #[test]
    fn test_twelve_records_two_pages() {
        let mut view = loaded((1..=12).map(|i| record(i, "item", i as f64)).collect());

        assert_eq!(view.page_count(), 2);
        assert_eq!(view.page_slice().len(), 10);

        view.go_to_page(2);
        assert_eq!(ids(view.page_slice()), vec![11, 12]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let mut view = loaded((1..=3).map(|i| record(i, "item", 1.0)).collect());

        view.go_to_page(5);
        assert_eq!(view.page(), 5);
        assert!(view.page_slice().is_empty());
        assert_eq!(view.table_view(), TableView::NoResults);

        view.go_to_page(0);
        assert!(view.page_slice().is_empty());
    }

    #[test]
    fn test_search_case_insensitive() {
        let mut view = loaded(vec![
            record(1, "Classic Red Hoodie", 10.0),
            record(2, "Blue Jeans", 20.0),
            record(3, "RED Sneakers", 30.0),
        ]);
        view.go_to_page(2);

        view.apply_search("red");
        assert_eq!(ids(view.filtered_set()), vec![1, 3]);
        assert_eq!(view.page(), 1);
        assert_eq!(view.full_set().len(), 3);
    }

    #[test]
    fn test_search_no_match() {
        let mut view = loaded(vec![record(1, "Hoodie", 10.0), record(2, "Jeans", 20.0)]);

        view.apply_search("abc");
        assert_eq!(view.page_count(), 0);
        assert!(view.page_slice().is_empty());
        assert_eq!(view.table_view(), TableView::NoResults);
    }

    #[test]
    fn test_sort_price_toggle() {
        let mut view = loaded(vec![
            record(1, "a", 30.0),
            record(2, "b", 10.0),
            record(3, "c", 20.0),
        ]);

        view.apply_sort(SortField::Price, true);
        let prices: Vec<f64> = view.filtered_set().iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![10.0, 20.0, 30.0]);

        view.apply_sort(SortField::Price, true);
        let prices: Vec<f64> = view.filtered_set().iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![30.0, 20.0, 10.0]);
        assert_eq!(view.sort().map(|s| s.direction), Some(SortDirection::Desc));
    }

    #[test]
    fn test_sort_new_field_resets_to_asc() {
        let mut view = loaded(vec![record(1, "b", 2.0), record(2, "a", 1.0)]);

        view.apply_sort(SortField::Price, true);
        view.apply_sort(SortField::Price, true);
        view.apply_sort(SortField::Title, true);
        assert_eq!(
            view.sort(),
            Some(SortDirective { field: SortField::Title, direction: SortDirection::Asc })
        );
        assert_eq!(ids(view.filtered_set()), vec![2, 1]);
    }

    #[test]
    fn test_sort_without_toggle_keeps_asc() {
        let mut view = loaded(vec![record(1, "b", 2.0), record(2, "a", 1.0)]);

        view.apply_sort(SortField::Price, false);
        view.apply_sort(SortField::Price, false);
        assert_eq!(view.sort().map(|s| s.direction), Some(SortDirection::Asc));
    }

    #[test]
    fn test_sort_title_case_insensitive_and_stable() {
        let mut view = loaded(vec![
            record(1, "banana", 1.0),
            record(2, "Apple", 1.0),
            record(3, "apple", 1.0),
            record(4, "Cherry", 1.0),
        ]);

        view.apply_sort(SortField::Title, true);
        assert_eq!(ids(view.filtered_set()), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_sort_category_missing_first() {
        let mut with_cat = record(1, "a", 1.0);
        with_cat.category = Some(Category { id: Some(1), name: "Shoes".to_string() });
        let mut view = loaded(vec![with_cat, record(2, "b", 1.0)]);

        view.apply_sort(SortField::Category, true);
        assert_eq!(ids(view.filtered_set()), vec![2, 1]);
    }

    #[test]
    fn test_search_reapplies_active_sort() {
        let mut view = loaded(vec![
            record(1, "red a", 30.0),
            record(2, "blue", 5.0),
            record(3, "red b", 10.0),
        ]);
        view.apply_sort(SortField::Price, true);
        view.apply_sort(SortField::Price, true);

        view.apply_search("red");
        assert_eq!(ids(view.filtered_set()), vec![1, 3]);
        assert_eq!(view.sort().map(|s| s.direction), Some(SortDirection::Desc));
    }

    #[test]
    fn test_replace_all_keeps_keyword_and_sort() {
        let mut view = loaded(vec![record(1, "red", 2.0)]);
        view.apply_search("red");
        view.apply_sort(SortField::Price, true);

        view.replace_all(vec![
            record(1, "red", 2.0),
            record(2, "green", 1.0),
            record(3, "dark red", 1.0),
        ]);
        assert_eq!(ids(view.filtered_set()), vec![3, 1]);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut view = loaded((1..=30).map(|i| record(i, "x", 1.0)).collect());
        view.go_to_page(3);

        view.set_page_size(page_size(5));
        assert_eq!(view.page(), 1);
        assert_eq!(view.page_count(), 6);
        assert_eq!(view.page_slice().len(), 5);
    }

    #[test]
    fn test_pagination_window() {
        let mut view = loaded((1..=100).map(|i| record(i, "x", 1.0)).collect());
        view.go_to_page(5);

        let pagination = view.pagination();
        let targets: Vec<usize> = pagination.pages.iter().map(|p| p.target).collect();
        assert_eq!(targets, vec![3, 4, 5, 6, 7]);
        assert!(pagination.pages[2].active);
        assert_eq!(pagination.previous.target, 4);
        assert!(pagination.previous.enabled);
        assert_eq!(pagination.next.target, 6);
        assert!(pagination.next.enabled);
    }

    #[test]
    fn test_pagination_edges() {
        let view = loaded((1..=12).map(|i| record(i, "x", 1.0)).collect());
        let pagination = view.pagination();
        assert!(!pagination.previous.enabled);
        assert_eq!(pagination.pages.len(), 2);

        let mut last = view.clone();
        last.go_to_page(2);
        assert!(!last.pagination().next.enabled);

        let empty = ViewState::default();
        let pagination = empty.pagination();
        assert!(pagination.pages.is_empty());
        assert!(!pagination.next.enabled);
    }

    #[test]
    fn test_pagination_page_zero() {
        let mut view = loaded((1..=12).map(|i| record(i, "x", 1.0)).collect());
        view.go_to_page(0);

        let pagination = view.pagination();
        assert!(!pagination.previous.enabled);
        assert!(pagination.next.enabled);
        assert_eq!(pagination.next.target, 1);
        assert!(pagination.pages.iter().all(|link| !link.active));
    }

    #[test]
    fn test_find_uses_full_set() {
        let mut view = loaded(vec![record(1, "red", 1.0), record(2, "blue", 1.0)]);
        view.apply_search("red");

        assert!(view.find(2).is_some());
        assert!(view.find(99).is_none());
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("Price".parse::<SortField>().unwrap(), SortField::Price);
        assert_eq!("desc".parse::<SortField>().unwrap(), SortField::Description);
        assert!(matches!("rating".parse::<SortField>(), Err(Error::UnknownSortField(_))));
    }
}
