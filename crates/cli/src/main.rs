//! Baton CLI - Command-line interface for the Baton reservation daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9531";

#[derive(Parser)]
#[command(name = "baton")]
#[command(about = "Reserve and release shared resources", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "BATON_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    /// Identity used for acquire/release/say
    #[arg(short, long, env = "BATON_USER", global = true)]
    user: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Acquire a resource, or join its waiting list
    Acquire {
        /// Resource name (case-sensitive)
        resource: String,
    },

    /// Release a resource you hold
    Release {
        /// Resource name (case-sensitive)
        resource: String,
    },

    /// Show owner and waiters of a resource
    Status {
        /// Resource name (case-sensitive)
        resource: String,
    },

    /// List all held resources
    List,

    /// Send a chat line as if typed in the conversation (e.g. "pido printer")
    Say {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show daemon statistics
    Stats,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
struct QueueSnapshot {
    resource: String,
    owner: String,
    waiters: Vec<String>,
    owner_since_ms: i64,
}

#[derive(Tabled)]
struct QueueRow {
    resource: String,
    owner: String,
    since: String,
    waiters: String,
}

impl From<QueueSnapshot> for QueueRow {
    fn from(snapshot: QueueSnapshot) -> Self {
        let since = chrono::DateTime::<chrono::Utc>::from_timestamp_millis(snapshot.owner_since_ms)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "-".to_string());
        let waiters = if snapshot.waiters.is_empty() {
            "-".to_string()
        } else {
            snapshot.waiters.join(", ")
        };
        Self {
            resource: snapshot.resource,
            owner: snapshot.owner,
            since,
            waiters,
        }
    }
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

fn require_user(user: &Option<String>) -> Result<&str> {
    user.as_deref()
        .context("No user given: pass --user or set BATON_USER")
}

fn names(value: &serde_json::Value) -> String {
    value
        .as_array()
        .map(|list| {
            list.iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Acquire { resource } => {
            let user = require_user(&cli.user)?;
            let params = json!({ "resource": resource, "user": user });
            let result = call_rpc(&cli.rpc_url, "reservation.acquire.v1", params).await?;

            if result["status"] == "ACQUIRED" {
                println!("{}", format!("✓ {} is yours", resource).green().bold());
            } else {
                println!(
                    "{}",
                    format!("⧗ {} is held by {}", resource, result["owner"].as_str().unwrap_or("?"))
                        .yellow()
                        .bold()
                );
                let ahead = names(&result["ahead"]);
                if ahead.is_empty() {
                    println!("  You are next in line");
                } else {
                    println!("  {} {}", "Ahead of you:".bold(), ahead);
                }
            }
        }

        Commands::Release { resource } => {
            let user = require_user(&cli.user)?;
            let params = json!({ "resource": resource, "user": user });
            let result = call_rpc(&cli.rpc_url, "reservation.release.v1", params).await?;

            println!("{}", format!("✓ {} released", resource).green().bold());
            match result["new_owner"].as_str() {
                Some(new_owner) => println!("  {} {}", "Handed to:".bold(), new_owner),
                None => println!("  Nobody was waiting"),
            }
        }

        Commands::Status { resource } => {
            let result =
                call_rpc(&cli.rpc_url, "reservation.query.v1", json!({ "resource": resource }))
                    .await?;
            let snapshot: QueueSnapshot = serde_json::from_value(result)?;

            println!("{}", Table::new(vec![QueueRow::from(snapshot)]));
        }

        Commands::List => {
            let result = call_rpc(&cli.rpc_url, "reservation.list.v1", json!({})).await?;
            let queues: Vec<QueueSnapshot> = serde_json::from_value(result["queues"].clone())?;

            if queues.is_empty() {
                println!("{}", "No resources are held".yellow());
            } else {
                let rows: Vec<QueueRow> = queues.into_iter().map(QueueRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Say { text } => {
            let user = require_user(&cli.user)?;
            let params = json!({ "user": user, "text": text.join(" ") });
            let result = call_rpc(&cli.rpc_url, "chat.message.v1", params).await?;

            if let Some(messages) = result["messages"].as_array() {
                for message in messages.iter().filter_map(|m| m.as_str()) {
                    println!("{} {}", "baton>".cyan().bold(), message);
                }
            }
        }

        Commands::Stats => {
            println!("{}", "Daemon Status".cyan().bold());
            println!();

            match call_rpc(&cli.rpc_url, "admin.stats.v1", json!({})).await {
                Ok(stats) => {
                    println!("  {} {}", "RPC URL:".bold(), cli.rpc_url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!();
                    println!("  {} {}", "Held resources:".bold(), stats["active_resources"]);
                    println!("  {} {}", "Waiting users:".bold(), stats["waiting_users"]);
                    println!("  {} {} seconds", "Uptime:".bold(), stats["uptime_seconds"]);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
