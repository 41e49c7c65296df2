use crate::export::ExportFormat;
use catalog_common::SortField;
use clap::{Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog-dashboard")]
#[command(about = "商品カタログ管理ダッシュボード", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// リモートAPIの代わりにローカルのJSONフィクスチャを使う（書き戻しなし）
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    /// 商品エンドポイント（設定・環境変数より優先）
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

/// 一覧の絞り込み・並べ替え
#[derive(Args, Clone, Debug, Default)]
pub struct ViewArgs {
    /// タイトル検索キーワード
    #[arg(short, long)]
    pub search: Option<String>,

    /// ソート列 (id/title/price/description/category)
    #[arg(long)]
    pub sort: Option<SortField>,

    /// 降順でソート
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// 1ページの件数
    #[arg(long)]
    pub page_size: Option<NonZeroUsize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話式ダッシュボードを起動
    Dashboard {
        /// 1ページの件数
        #[arg(long)]
        page_size: Option<NonZeroUsize>,
    },

    /// 一覧を表示
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// 表示するページ
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// 検索結果をエクスポート
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// 出力形式 (csv/excel)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// 出力ディレクトリ/ファイル（省略時は設定の export_dir）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 商品を新規作成
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        price: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long)]
        category_id: String,

        #[arg(long, default_value = "")]
        image: String,
    },

    /// 商品を更新
    Update {
        /// 商品ID
        #[arg(required = true)]
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// APIエンドポイントを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// デフォルトのページサイズを設定
        #[arg(long)]
        set_page_size: Option<usize>,

        /// エクスポート先を設定
        #[arg(long)]
        set_export_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_args() {
        let cli = Cli::try_parse_from([
            "catalog-dashboard", "export", "--search", "shirt", "--sort", "price", "--desc",
            "--format", "excel",
        ])
        .unwrap();

        match cli.command {
            Commands::Export { view, format, output } => {
                assert_eq!(view.search.as_deref(), Some("shirt"));
                assert_eq!(view.sort, Some(SortField::Price));
                assert!(view.desc);
                assert_eq!(format, ExportFormat::Excel);
                assert!(output.is_none());
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_desc_requires_sort() {
        let result = Cli::try_parse_from(["catalog-dashboard", "list", "--desc"]);
        assert!(result.is_err());
    }
}
