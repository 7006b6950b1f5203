//! Timebill library root.
//! Exposes the application context, core components, and the high-level
//! run() function used by main.rs.

pub mod activity;
pub mod app;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use crate::activity::ActivityLog;
use crate::app::App;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::sqlite::SqliteRepository;
use crate::errors::AppResult;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Interactive freelance time tracker and invoicing tool.
#[derive(Parser)]
#[command(
    name = "timebill",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track billable hours per client and project, and export CSV invoices",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a custom DB)
    #[arg(long = "db")]
    pub db: Option<String>,

    /// Keep database, invoices and activity log under one directory
    #[arg(long = "data-dir")]
    pub data_dir: Option<PathBuf>,
}

/// Entry point used by main.rs: build the application context and hand
/// control to the interactive menu.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = match &cli.data_dir {
        Some(dir) => Config::with_data_dir(dir),
        None => Config::load()?,
    };
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    cfg.ensure_dirs()?;

    let pool = DbPool::new(&cfg.database)?;
    db::initialize::init_db(&pool.conn)?;
    let repo = SqliteRepository::new(pool);

    let activity = ActivityLog::open(Path::new(&cfg.activity_log))?;

    let mut app = App::new(repo, activity, PathBuf::from(&cfg.invoices_dir));
    ui::menu::main_menu(&mut app)
}
