use anyhow::Context;
use catalog_dashboard::client::{HttpCatalog, MemoryCatalog};
use catalog_dashboard::{cli, commands, config, logging};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut config = Config::load().context("failed to load config")?;

    if let Commands::Config { set_api_url, set_page_size, set_export_dir, show } = cli.command {
        if let Some(url) = set_api_url {
            config.set_api_url(url)?;
            println!("✔ API URL saved");
        }
        if let Some(size) = set_page_size {
            config.set_page_size(size)?;
            println!("✔ Page size saved");
        }
        if let Some(dir) = set_export_dir {
            config.set_export_dir(dir)?;
            println!("✔ Export directory saved");
        }

        if show {
            println!("Settings:");
            println!("  API URL:     {}", config.api_url());
            println!("  Page size:   {}", config.page_size);
            println!("  Export dir:  {}", config.export_dir.display());
            println!("  Config file: {}", Config::config_path()?.display());
        }
        return Ok(());
    }

    if let Some(fixture) = &cli.fixture {
        let client = MemoryCatalog::from_fixture(fixture)
            .with_context(|| format!("failed to load fixture {}", fixture.display()))?;
        commands::execute(client, cli.command, &config).await?;
    } else {
        let api_url = cli.api_url.clone().unwrap_or_else(|| config.api_url());
        tracing::debug!(%api_url, "using remote catalog");
        let client = HttpCatalog::new(api_url)?;
        commands::execute(client, cli.command, &config).await?;
    }

    Ok(())
}
