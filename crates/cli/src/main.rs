use anyhow::{Context, Result};
use clap::Parser;
use fireadmin_client::{assign_admin_role, FirebaseAdminClient};
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Parser)]
#[command(name = "fireadmin")]
#[command(about = "Promote a registered user to administrator", long_about = None)]
#[command(version)]
struct Cli {
    /// Email address of the account to promote
    email: Option<String>,

    /// Path to the service-account key file
    #[arg(
        long,
        env = "FIREADMIN_KEY_FILE",
        default_value = "service-account-key.json"
    )]
    key_file: PathBuf,

    /// Realtime-database URL (defaults to the project's conventional URL)
    #[arg(long, env = "FIREADMIN_DATABASE_URL")]
    database_url: Option<Url>,
}

async fn run_promote(email: &str, key_file: &Path, database_url: Option<Url>) -> Result<String> {
    let client = FirebaseAdminClient::from_key_file(key_file, database_url)
        .await
        .context("failed to initialise the admin client")?;

    let uid = assign_admin_role(&client, email).await?;

    Ok(uid)
}

#[tokio::main]
async fn main() {
    // Logs go to stderr, keeping stdout clean for the confirmation line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Guard before any credential load or network call
    let Some(email) = cli.email else {
        println!("Usage: fireadmin <email>");
        std::process::exit(1);
    };

    match run_promote(&email, &cli.key_file, cli.database_url).await {
        Ok(uid) => {
            println!("✓ {} ({}) is now an administrator", email, uid);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
