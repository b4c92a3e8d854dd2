//! Randfile CLI: upload local files to the configured bucket.
//!
//! Reads the same environment as the server (`S3_BUCKET_NAME`,
//! `AWS_DEFAULT_REGION`, credentials, `STORAGE_BACKEND`).

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use randfile_cli::{format_result_line, init_tracing, read_upload_files, upload_name};
use randfile_core::naming::object_path;
use randfile_core::{Config, NamingMode, NamingPolicy, UploadRequest, UploadSummary};
use randfile_services::{create_storage, UploadOrchestrator};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "randfile", about = "Upload files to S3 and print their URLs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload one or more files under randfile/
    Upload {
        /// Naming mode: original, random, custom
        #[arg(long, default_value = "original")]
        naming: NamingMode,
        /// Prefix for custom names (required with --naming custom)
        #[arg(long)]
        prefix: Option<String>,
        /// Print the upload summary as JSON
        #[arg(long)]
        json: bool,
        /// Files to upload, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Show the object key and URL each file would get, without uploading
    Preview {
        /// Naming mode: original, random, custom
        #[arg(long, default_value = "original")]
        naming: NamingMode,
        /// Prefix for custom names (required with --naming custom)
        #[arg(long)]
        prefix: Option<String>,
        /// File names or paths
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let storage = create_storage(&config);

    match cli.command {
        Commands::Upload {
            naming,
            prefix,
            json,
            files,
        } => {
            let policy = NamingPolicy::from_mode(naming, prefix.as_deref())?;
            let files = read_upload_files(&files).await?;
            let request = UploadRequest::new(files, policy)?;

            let orchestrator = UploadOrchestrator::new(storage);
            let summary = UploadSummary::from(orchestrator.process(request).await);

            if json {
                print_json(&summary)?;
            } else {
                for result in &summary.results {
                    let line = format_result_line(result);
                    if result.is_success() {
                        println!("{}", line);
                    } else {
                        eprintln!("{}", line);
                    }
                }
                println!(
                    "Uploaded {} of {} file(s)",
                    summary.uploaded,
                    summary.results.len()
                );
            }

            if summary.failed > 0 {
                anyhow::bail!(
                    "{} of {} file(s) failed to upload",
                    summary.failed,
                    summary.results.len()
                );
            }
        }
        Commands::Preview {
            naming,
            prefix,
            files,
        } => {
            let policy = NamingPolicy::from_mode(naming, prefix.as_deref())?;
            let now = Local::now().naive_local();
            for path in &files {
                let name = upload_name(path);
                let key = object_path(&policy.object_name(&name, now));
                println!("{} -> {} ({})", name, key, storage.public_url(&key));
            }
        }
    }

    Ok(())
}
