//! Daemon configuration from environment variables

use std::path::PathBuf;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9531;

/// Output format for the console log layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Production: JSON structured logging
    Json,
    /// Development: pretty formatting with colors
    Pretty,
}

/// Settings read once at startup
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub rpc_host: String,
    pub rpc_port: u16,
    pub log_format: LogFormat,
    /// Daily rolling log files are written here when set
    pub log_dir: Option<PathBuf>,
    /// Keywords/phrases override (JSON)
    pub locale_path: Option<PathBuf>,
    /// Read chat lines from stdin (`user: text`) and answer on stdout
    pub console: bool,
}

impl DaemonConfig {
    /// Read `BATON_*` variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let rpc_port = lookup("BATON_RPC_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RPC_PORT);

        let log_format = match lookup("BATON_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let console = lookup("BATON_CONSOLE")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            rpc_host: lookup("BATON_RPC_HOST").unwrap_or_else(|| DEFAULT_RPC_HOST.to_string()),
            rpc_port,
            log_format,
            log_dir: lookup("BATON_LOG_DIR").map(expand_path),
            locale_path: lookup("BATON_LOCALE_PATH").map(expand_path),
            console,
        }
    }
}

fn expand_path(raw: String) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}
