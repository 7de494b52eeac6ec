// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::config::EnvironmentConfig;
use crate::core::export::export_paged;
use crate::core::measure::TextMetrics;
use crate::persist::{LocalStore, ProjectStore};
use crate::web::start_web_server;

#[derive(Parser)]
#[command(name = "resumake")]
#[command(about = "Resume project store and export tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the project store API server
    Serve {
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// List saved projects
    List,
    /// Export a project to a paged render tree (JSON)
    Export {
        project_id: String,
        /// Output file; defaults to <export_path>/<project_id>.json
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub async fn run(cli: Cli, config: EnvironmentConfig) -> Result<()> {
    match cli.command {
        Command::Serve { port } => start_web_server(&config.database_path, port).await,

        Command::List => {
            let store = LocalStore::open(&config.database_path).await?;
            let listing = store.list_metadata().await?;
            if listing.is_empty() {
                println!("No saved projects.");
                return Ok(());
            }
            for meta in listing {
                println!(
                    "{}  {:<24}  template={}  updated={}",
                    meta.id, meta.name, meta.template, meta.updated_at
                );
            }
            Ok(())
        }

        Command::Export { project_id, out } => {
            let store = LocalStore::open(&config.database_path).await?;
            let project = store
                .load_project(&project_id)
                .await
                .with_context(|| format!("Failed to load project {project_id}"))?;

            // No render surface here, so heights come from font metrics.
            let paged = export_paged(&project, &TextMetrics::default());
            let out_path = out.unwrap_or_else(|| {
                config.export_path.join(format!("{project_id}.json"))
            });
            let json =
                serde_json::to_string_pretty(&paged).context("Failed to serialize export")?;
            tokio::fs::write(&out_path, json)
                .await
                .with_context(|| format!("Failed to write {}", out_path.display()))?;

            info!(
                "Exported {} page(s) for {} to {}",
                paged.pages.len(),
                project_id,
                out_path.display()
            );
            println!("✓ Exported {} to {}", project_id, out_path.display());
            Ok(())
        }
    }
}
