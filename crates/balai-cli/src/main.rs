//! `balai` — command-line surface for the balai site model.
//!
//! # Usage
//!
//! ```
//! balai show
//! balai submit --name Ana --email ana@x.com --subject "Leave policy" --message "question"
//! balai admin reports --status new
//! balai admin edit --set hero.title="New title"
//! ```

mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use balai_core::state::AppState;
use balai_store_file::FileStore;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use uuid::Uuid;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "balai", about = "Organizational site content and citizen reports")]
struct Args {
  /// Path to a TOML config file (data_dir).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Directory holding the persisted site blobs
  /// (default: ~/.local/share/balai).
  #[arg(long, env = "BALAI_DATA_DIR")]
  data_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Render the public site content.
  Show,

  /// Submit a report through the public helpdesk form.
  Submit {
    #[arg(long)]
    name:     String,
    #[arg(long)]
    email:    String,
    /// Report category; defaults to "General".
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    subject:  String,
    #[arg(long)]
    message:  String,
  },

  /// Administrator commands. This is a UI gate only — no credential is
  /// required or verified.
  #[command(subcommand)]
  Admin(AdminCommand),
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
  /// List submitted reports, most recent first.
  Reports {
    /// Only show reports with this status (new, reviewed, resolved).
    #[arg(long)]
    status: Option<String>,
  },

  /// Set the status of a report.
  Status {
    id:     Uuid,
    /// One of: new, reviewed, resolved.
    status: String,
  },

  /// Permanently delete a report. There is no undo.
  Remove { id: Uuid },

  /// Edit site content fields and commit the result in one step.
  Edit {
    /// Scalar assignment, e.g. --set hero.title="New title". Repeatable.
    #[arg(long = "set", value_name = "PATH=VALUE")]
    set:     Vec<String>,
    /// Service-item assignment, e.g. --service 2:title="Workshops".
    /// Repeatable.
    #[arg(long = "service", value_name = "ID:FIELD=VALUE")]
    service: Vec<String>,
  },

  /// Show per-status report counts.
  Stats,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  data_dir: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag (or env var) overrides config file, which overrides the default.
  let data_dir = args
    .data_dir
    .or(file_cfg.data_dir)
    .or_else(default_data_dir)
    .context("could not determine a data directory; pass --data-dir")?;

  let store = FileStore::open(&data_dir)
    .with_context(|| format!("opening store at {}", data_dir.display()))?;
  let mut state = AppState::load(store);

  commands::run(&mut state, args.command)
}

fn default_data_dir() -> Option<PathBuf> {
  std::env::var_os("HOME")
    .map(|home| PathBuf::from(home).join(".local/share/balai"))
}
