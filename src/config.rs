use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_INPUT_ID: &str = "search";
pub const DEFAULT_RESULTS_ID: &str = "search-results";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        base_url: get_env_or_default("SEARCH_BASE_URL", DEFAULT_BASE_URL),
        input_id: get_env_or_default("SEARCH_INPUT_ID", DEFAULT_INPUT_ID),
        results_id: get_env_or_default("SEARCH_RESULTS_ID", DEFAULT_RESULTS_ID),
    }
});

#[derive(Debug, Clone)]
pub struct Config {
    /// Origin the search endpoint path is resolved against.
    pub base_url: String,
    pub input_id: String,
    pub results_id: String,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
