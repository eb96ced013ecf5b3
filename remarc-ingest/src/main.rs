//! remarc-ingest - Content upload ingestion
//!
//! Command-line front end for the ingestion pipeline:
//! - `ingest`: process the upload tree into the content store
//! - `delete`: remove stored resources for an identifier

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use remarc_common::config::{locate_config_file, RootFolderResolver, TomlConfig};
use remarc_common::SystemEnv;
use remarc_ingest::db::SqliteDocumentStore;
use remarc_ingest::models::DestinationFolders;
use remarc_ingest::{delete_resource_for_id, IngestSettings, ResourceKind, UploadProcessor};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

/// Command-line arguments for remarc-ingest
#[derive(Parser, Debug)]
#[command(name = "remarc-ingest")]
#[command(about = "Ingest uploaded media into the Remarc content store")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Root folder holding the image/audio/video folders
    #[arg(short, long, global = true)]
    resources_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process an upload directory tree and clean it afterwards
    Ingest {
        /// Upload directory to process
        #[arg(short, long)]
        upload_root: Option<PathBuf>,
    },
    /// Delete stored resources for an identifier
    Delete {
        /// Content kind of the resource
        #[arg(short, long, value_enum)]
        kind: KindArg,

        /// Resource identifier (file name without extension)
        #[arg(short, long)]
        id: String,
    },
}

/// Content kinds accepted for deletion
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Image,
    Audio,
    Video,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Image => ResourceKind::Image,
            KindArg::Audio => ResourceKind::Audio,
            KindArg::Video => ResourceKind::Video,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config_path = locate_config_file(args.config.as_deref(), &SystemEnv);
    let config = TomlConfig::load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;

    remarc_common::logging::init_logging(&config.logging)
        .context("Failed to initialize logging")?;

    info!("Starting remarc-ingest");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &config_path {
        info!("Config file: {}", path.display());
    }

    let env = SystemEnv;
    let resolver = RootFolderResolver::new(&env, &config);
    let resources_root = resolver.resources_root(args.resources_root.as_deref());
    let settings = IngestSettings::from(&config);

    match args.command {
        Command::Ingest { upload_root } => {
            let upload_root = resolver.upload_root(upload_root.as_deref());
            let db_path = resolver.database_path(args.database.as_deref());

            let pool = remarc_common::db::init_database(&db_path)
                .await
                .with_context(|| format!("Failed to open database {}", db_path.display()))?;
            info!("Database connection established");

            let processor = UploadProcessor::new(
                settings,
                Arc::new(SqliteDocumentStore::new(pool)),
                Arc::new(SystemEnv),
            );

            let report = processor
                .process_upload_dir(&upload_root, &resources_root)
                .await;

            println!("{}", report);
            Ok(ExitCode::SUCCESS)
        }
        Command::Delete { kind, id } => {
            // Deletion touches only the filesystem; no store is opened
            let destinations = DestinationFolders::new(&resources_root, settings.folders);
            let deleted = delete_resource_for_id(&destinations, kind.into(), &id)
                .context("Delete failed")?;

            if deleted {
                println!("Deleted resources for {}", id);
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("Could not delete all resources for {}", id);
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
