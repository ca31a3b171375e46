use std::net::SocketAddr;
use std::path::PathBuf;

use crate::tiers::PriceTiers;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub dataset_path: PathBuf,
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub groq_base_url: String,
    pub groq_timeout_secs: u64,
    pub candidate_limit: usize,
    pub top_n: usize,
    pub tiers: PriceTiers,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("dataset_path", &self.dataset_path)
            .field(
                "groq_api_key",
                &self.groq_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("groq_model", &self.groq_model)
            .field("groq_base_url", &self.groq_base_url)
            .field("groq_timeout_secs", &self.groq_timeout_secs)
            .field("candidate_limit", &self.candidate_limit)
            .field("top_n", &self.top_n)
            .field("tiers", &self.tiers)
            .finish()
    }
}
