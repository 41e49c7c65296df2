//! ワンショットのサブコマンド実行
//!
//! どのコマンドもダッシュボード本体を通して実行し、
//! 溜まった通知を最後に表示する。

use crate::cli::{Commands, ViewArgs};
use crate::client::CatalogApi;
use crate::config::Config;
use crate::dashboard::{render, repl, Command, Dashboard};
use crate::error::Result;
use catalog_common::{CreateForm, FormField};
use indicatif::{ProgressBar, ProgressStyle};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

fn page_size_or(config: &Config, explicit: Option<NonZeroUsize>) -> NonZeroUsize {
    explicit
        .or_else(|| NonZeroUsize::new(config.page_size))
        .unwrap_or(NonZeroUsize::MIN)
}

async fn reload_with_spinner<C: CatalogApi>(dashboard: &mut Dashboard<C>) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Loading products...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    dashboard.reload().await;

    spinner.finish_and_clear();
}

/// 検索 → ソート（降順なら同じ列をもう一度）
async fn apply_view_args<C: CatalogApi>(dashboard: &mut Dashboard<C>, view: &ViewArgs) {
    if let Some(keyword) = &view.search {
        dashboard.dispatch(Command::Search(keyword.clone())).await;
    }
    if let Some(field) = view.sort {
        dashboard.dispatch(Command::Sort(field)).await;
        if view.desc {
            dashboard.dispatch(Command::Sort(field)).await;
        }
    }
}

fn print_notices<C: CatalogApi>(dashboard: &mut Dashboard<C>) {
    for notice in dashboard.take_notices() {
        println!("{}", notice);
    }
}

pub async fn execute<C: CatalogApi>(client: C, command: Commands, config: &Config) -> Result<()> {
    let export_dir = config.export_dir.clone();

    match command {
        Commands::Dashboard { page_size } => {
            let mut dashboard = Dashboard::new(client, page_size_or(config, page_size), export_dir);
            repl::run(&mut dashboard).await?;
        }

        Commands::List { view, page } => {
            let mut dashboard =
                Dashboard::new(client, page_size_or(config, view.page_size), export_dir);
            reload_with_spinner(&mut dashboard).await;
            apply_view_args(&mut dashboard, &view).await;
            dashboard.dispatch(Command::GoToPage(page)).await;

            print!("{}", render::render_screen(dashboard.view(), dashboard.session()));
            print_notices(&mut dashboard);
        }

        Commands::Export { view, format, output } => {
            let output: PathBuf = output.unwrap_or(export_dir);
            let mut dashboard = Dashboard::new(client, page_size_or(config, view.page_size), output);
            reload_with_spinner(&mut dashboard).await;
            apply_view_args(&mut dashboard, &view).await;
            dashboard.dispatch(Command::Export(format)).await;
            print_notices(&mut dashboard);
        }

        Commands::Create { title, price, description, category_id, image } => {
            let mut dashboard = Dashboard::new(client, page_size_or(config, None), export_dir);
            let form = CreateForm { title, price, description, category_id, image };
            dashboard.dispatch(Command::Create(form)).await;
            print_notices(&mut dashboard);
        }

        Commands::Update { id, title, price, description } => {
            let mut dashboard = Dashboard::new(client, page_size_or(config, None), export_dir);
            reload_with_spinner(&mut dashboard).await;
            dashboard.dispatch(Command::Open(id)).await;
            if !dashboard.session().is_open() {
                print_notices(&mut dashboard);
                println!("✖ Product {} not found", id);
                return Ok(());
            }

            dashboard.dispatch(Command::Edit).await;
            let changes = [
                (FormField::Title, title),
                (FormField::Price, price),
                (FormField::Description, description),
            ];
            for (field, value) in changes {
                if let Some(value) = value {
                    dashboard.dispatch(Command::Set(field, value)).await;
                }
            }
            dashboard.dispatch(Command::Save).await;
            print_notices(&mut dashboard);
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}
