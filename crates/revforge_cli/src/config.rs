use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    /// Default metadata store location; individual commands may override
    /// it with --db.
    pub db_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok(); // Load .env if present

        let db_path = env::var("REVFORGE_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/revforge.db"));

        Config { db_path }
    }

    pub fn resolve_db(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.unwrap_or_else(|| self.db_path.clone())
    }
}
