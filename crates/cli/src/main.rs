use std::path::PathBuf;

use anyhow::Context;
use bookshelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "Library catalog service")]
struct Cli {
    /// Directory holding base.toml and per-environment overlays
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Environment overlay to apply (local, staging, production)
    #[arg(long, global = true)]
    env: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the resolved settings as JSON
    Settings,
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let loaded = match (&cli.config_dir, &cli.env) {
        (None, None) => Settings::load(),
        (dir, env) => {
            let dir = dir.clone().unwrap_or_else(|| PathBuf::from("config"));
            let env = env.as_deref().unwrap_or("local");
            Settings::load_from(&dir, env)
        }
    };
    loaded.with_context(|| "failed to load bookshelf settings")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(&cli)?;

    match cli.command {
        Command::Settings => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
        Command::Serve { port } => {
            if let Some(port) = port {
                settings.server.port = port;
            }
            bookshelf_telemetry::init(&settings.telemetry)?;
            serve(&settings).await
        }
    }
}

async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let mut registry = ModuleRegistry::new();
    bookshelf_app::register_all(&mut registry, settings);

    let ctx = InitCtx { settings };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    bookshelf_http::start_server(&registry, settings, bookshelf_http::shutdown_signal()).await?;

    registry.stop_all().await
}
