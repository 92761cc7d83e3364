use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub puzzle_path: String,
    pub grid_columns: usize,
    pub reveal_delay_ms: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let puzzle_path =
            env::var("PUZZLE_PATH").unwrap_or_else(|_| "./puzzle.json".to_string());

        let grid_columns: usize = env::var("GRID_COLUMNS")
            .unwrap_or_else(|_| "4".to_string())
            .parse()
            .context("GRID_COLUMNS must be a number")?;
        if grid_columns == 0 {
            anyhow::bail!("GRID_COLUMNS must be at least 1");
        }

        let reveal_delay_ms = env::var("REVEAL_DELAY_MS")
            .unwrap_or_else(|_| "350".to_string())
            .parse()
            .context("REVEAL_DELAY_MS must be a number")?;

        Ok(Config {
            puzzle_path,
            grid_columns,
            reveal_delay_ms,
        })
    }
}
