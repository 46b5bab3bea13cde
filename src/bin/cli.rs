//! Countydash CLI
//!
//! Command-line client for a running countydash server:
//! - List selectable states, counties, and dates
//! - Build a chart for a selection
//! - Check server status
//! - Generate a default config file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "countydash-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Client for the countydash dashboard server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://127.0.0.1:8050", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List selectable states
    States,

    /// List selectable counties for the given states
    Counties {
        /// State names (comma-separated or multiple args)
        states: Vec<String>,
    },

    /// List selectable dates
    Dates,

    /// Build a chart for a selection
    Chart {
        /// Selected states
        #[arg(long, required = true, value_delimiter = ',')]
        states: Vec<String>,
        /// Selected counties
        #[arg(long, required = true, value_delimiter = ',')]
        counties: Vec<String>,
        /// Selected dates
        #[arg(long, required = true, value_delimiter = ',')]
        dates: Vec<String>,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::States => {
            let options = fetch_options(&client, &cli.api_url, "states", &[]).await?;
            print_options(&options, &cli.format)?;
        }

        Commands::Counties { states } => {
            // Flatten states (support comma-separated)
            let states: Vec<String> = states
                .iter()
                .flat_map(|s| s.split(',').map(|s| s.trim().to_string()))
                .filter(|s| !s.is_empty())
                .collect();

            let options = fetch_options(&client, &cli.api_url, "counties", &states).await?;
            print_options(&options, &cli.format)?;
        }

        Commands::Dates => {
            let options = fetch_options(&client, &cli.api_url, "dates", &[]).await?;
            print_options(&options, &cli.format)?;
        }

        Commands::Chart {
            states,
            counties,
            dates,
        } => {
            let body = serde_json::json!({
                "states": states,
                "counties": counties,
                "dates": dates,
            });

            let response = client
                .post(format!("{}/api/v1/chart", cli.api_url))
                .json(&body)
                .send()
                .await
                .with_context(|| format!("Cannot connect to countydash at {}", cli.api_url))?;

            if response.status() == reqwest::StatusCode::NO_CONTENT {
                println!("No update: selection is incomplete.");
                return Ok(());
            }

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                eprintln!("Chart request failed ({}): {}", status, text);
                std::process::exit(1);
            }

            let figure: serde_json::Value = response.json().await?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&figure)?),
                _ => print_figure_table(&figure),
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Countydash v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );

                    if let Some(dataset) = health.get("dataset") {
                        println!();
                        println!("Dataset:");
                        if let Some(rows) = dataset["rows"].as_u64() {
                            println!("  Rows: {}", rows);
                        }
                        if let Some(states) = dataset["states"].as_u64() {
                            println!("  States: {}", states);
                        }
                        if let Some(path) = dataset["path"].as_str() {
                            println!("  Path: {}", path);
                        }
                    }

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}s", uptime);
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to countydash API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin countydash");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = countydash::config::generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write config to {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Fetch one of the option lists from the server
async fn fetch_options(
    client: &reqwest::Client,
    api_url: &str,
    kind: &str,
    states: &[String],
) -> Result<Vec<String>> {
    let mut request = client.get(format!("{}/api/v1/options/{}", api_url, kind));
    if !states.is_empty() {
        request = request.query(&[("states", states.join(","))]);
    }

    let response = request
        .send()
        .await
        .with_context(|| format!("Cannot connect to countydash at {}", api_url))?;

    if !response.status().is_success() {
        anyhow::bail!("Failed to fetch {} options: {}", kind, response.status());
    }

    let body: serde_json::Value = response.json().await?;
    let options = body["options"]
        .as_array()
        .context("Malformed options response")?
        .iter()
        .filter_map(|v| v.as_str().map(String::from))
        .collect();

    Ok(options)
}

/// Print an option list in the requested format
fn print_options(options: &[String], format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(options)?),
        _ => {
            for option in options {
                println!("{}", option);
            }
        }
    }
    Ok(())
}

/// Print a figure as a small table: one line per bar
fn print_figure_table(figure: &serde_json::Value) {
    let empty = Vec::new();
    let traces = figure["data"].as_array().unwrap_or(&empty);

    println!("{:<25} {:<10} {}", "County", "Metric", "Value");
    println!("{}", "-".repeat(45));

    for trace in traces {
        let name = trace["name"].as_str().unwrap_or("-");
        let xs = trace["x"].as_array().cloned().unwrap_or_default();
        let ys = trace["y"].as_array().cloned().unwrap_or_default();

        for (x, y) in xs.iter().zip(ys.iter()) {
            println!(
                "{:<25} {:<10} {}",
                x.as_str().unwrap_or("-"),
                name,
                y.as_u64().unwrap_or(0)
            );
        }
    }
}
