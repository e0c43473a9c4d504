pub mod completions;
pub mod config;
pub mod entries;
pub mod estimate;
pub mod food;
pub mod init;
pub mod log;
pub mod status;
pub mod target;

use anyhow::Result;

use calorie_tracker::db::Database;
use calorie_tracker::models::config::Config;

/// Open the database at the configured data directory.
pub fn open_db() -> Result<Database> {
    Database::open(&Config::db_path())
}
