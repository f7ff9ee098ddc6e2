//! Server configuration
//!
//! Every flag can also be supplied through the environment (a `.env` file in
//! the working directory is loaded first by the binary).

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WORKER_COUNT: usize = 4;

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(about = "Fake REST API for per-user todo lists")]
#[command(version)]
pub struct ServerConfig {
    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,

    /// Interface to bind
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Number of HTTP worker threads
    #[arg(long, env = "TODO_WORKERS", default_value_t = DEFAULT_WORKER_COUNT)]
    pub workers: usize,

    /// JSON snapshot file; lists are kept in memory only when unset
    #[arg(long, env = "TODO_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            workers: DEFAULT_WORKER_COUNT,
            data_file: None,
            log_format: LogFormat::Text,
        }
    }
}
