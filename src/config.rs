use std::env;
use std::path::PathBuf;

use dotenv::dotenv;

use crate::types::Markers;

#[derive(Debug, Clone)]
pub struct Config{
    pub bind_addr: String,
    pub pages_dir: PathBuf,
    pub markers: Markers,
}

impl Config{
    // Environment first, then .env, then defaults
    pub fn from_env() -> Config{
        dotenv().ok();
        let defaults = Markers::default();

        Config{
            bind_addr: var_or("READTIME_BIND_ADDR", "127.0.0.1:8080"),
            pages_dir: PathBuf::from(var_or("READTIME_PAGES_DIR", "pages")),
            markers: Markers{
                card: var_or("READTIME_CARD_SELECTOR", &defaults.card),
                content: var_or("READTIME_CONTENT_SELECTOR", &defaults.content),
                display: var_or("READTIME_DISPLAY_SELECTOR", &defaults.display),
            },
        }
    }
}

fn var_or(key: &str, default: &str) -> String{
    match env::var(key){
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
