//! navshell - collapsible dashboard sidebar shell

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use navshell_core::config::CONFIG_FILE_NAME;
use navshell_core::{ExpansionStore, FileStore, NavTree, NoopStyleFlag, ShellConfig, SidebarShell};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "navshell",
    version,
    about = "Collapsible dashboard sidebar shell",
    long_about = "Serves the navshell web frontend and inspects persisted sidebar state.\n\
                  \n\
                  Examples:\n\
                    navshell serve                        # Serve crates/navshell-web/dist on :3333\n\
                    navshell serve --port 8080            # Custom port\n\
                    navshell inspect --path /tasks/kanban # Sidebar as it would render there\n\
                    navshell inspect --json               # Same, as the JSON view model\n\
                    navshell reset                        # Forget the pinned/expanded flag\n\
                  \n\
                  Web Frontend Workflow:\n\
                    cd crates/navshell-web && trunk build --release\n\
                    navshell serve\n\
                  \n\
                  Environment Variables:\n\
                    NAVSHELL_CONFIG                       # Path to navshell.toml\n\
                    NAVSHELL_STATE_DIR                    # Directory holding persisted state\n\
                    NAVSHELL_PORT                         # Port for `serve`\n\
                    NAVSHELL_DIST                         # Built frontend directory for `serve`\n\
                    NAVSHELL_NO_COLOR                     # Disable ANSI colors (log-friendly)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Path to config file (default: ./navshell.toml)
    #[arg(long, env = "NAVSHELL_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding persisted sidebar state (default: <cache dir>/navshell)
    #[arg(long, env = "NAVSHELL_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "NAVSHELL_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the built web frontend
    Serve {
        /// Port for web server
        #[arg(long, env = "NAVSHELL_PORT", default_value = "3333")]
        port: u16,
        /// Directory produced by `trunk build`
        #[arg(long, env = "NAVSHELL_DIST", default_value = "crates/navshell-web/dist")]
        dist: PathBuf,
    },
    /// Print the sidebar as it renders for a route
    Inspect {
        /// Route path to mount the shell at
        #[arg(long, default_value = "/")]
        path: String,
        /// Viewport width in pixels (default: desktop rail)
        #[arg(long)]
        width: Option<u32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear persisted sidebar state
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "navshell=info,navshell_core=info,navshell_web=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!cli.no_color),
        )
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let config = ShellConfig::load(&config_path);

    match cli.mode {
        Mode::Serve { port, dist } => {
            run_serve(dist, port).await?;
        }
        Mode::Inspect { path, width, json } => {
            let state_dir = resolve_state_dir(cli.state_dir)?;
            run_inspect(state_dir, config, path, width, json, cli.no_color)?;
        }
        Mode::Reset => {
            let state_dir = resolve_state_dir(cli.state_dir)?;
            run_reset(state_dir, config)?;
        }
    }

    Ok(())
}

fn resolve_state_dir(state_dir: Option<PathBuf>) -> Result<PathBuf> {
    state_dir
        .or_else(FileStore::default_dir)
        .context("Could not determine state directory (set --state-dir or NAVSHELL_STATE_DIR)")
}

async fn run_serve(dist: PathBuf, port: u16) -> Result<()> {
    if !dist.join("index.html").is_file() {
        info!(
            dist = %dist.display(),
            "Frontend bundle not found, serving build instructions instead"
        );
    }

    navshell_web::run(&dist, port)
        .await
        .with_context(|| format!("Web server on port {} failed", port))
}

fn run_inspect(
    state_dir: PathBuf,
    config: ShellConfig,
    path: String,
    width: Option<u32>,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let storage = FileStore::new(&state_dir);
    debug!(state = %storage.path().display(), "Inspecting persisted state");

    let mut shell = SidebarShell::new(NavTree::dashboard(), storage, NoopStyleFlag, config, path);
    if let Some(width) = width {
        shell.resize(width);
    }

    println!("{}", cli::format_sidebar_view(&shell.view(), json, no_color));
    Ok(())
}

fn run_reset(state_dir: PathBuf, config: ShellConfig) -> Result<()> {
    let storage = FileStore::new(&state_dir);
    let state_path = storage.path().to_path_buf();

    let mut store = ExpansionStore::open(storage, NoopStyleFlag, &config);
    store.reset();

    if store.last_write_failed() {
        anyhow::bail!("Failed to clear sidebar state at {}", state_path.display());
    }

    println!("Sidebar state cleared ({})", state_path.display());
    Ok(())
}
