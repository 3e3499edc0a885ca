//! Survey platform command line client

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use survey_client::session::{FileStorage, SessionStorage};
use survey_client::{ApiClient, HttpClient, SessionManager};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::config::Settings;
use crate::utils::CliNavigator;

mod config;
mod env_vars;
mod sub_commands;
mod utils;

const DEFAULT_WORK_DIR: &str = ".survey-cli";
const SESSION_FILE: &str = "session.json";

/// Command line client for the survey platform
#[derive(Parser)]
#[command(name = "survey-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to working dir
    #[arg(short, long)]
    work_dir: Option<PathBuf>,
    /// Logging level
    #[arg(short, long, default_value = "error")]
    log_level: Level,
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Backend base URL
    #[arg(short, long)]
    api_url: Option<String>,
    /// Proxy
    #[arg(short, long)]
    proxy: Option<Url>,
    /// Accept invalid TLS certificates
    #[arg(long)]
    accept_invalid_certs: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login(sub_commands::login::LoginSubCommand),
    /// Create an account
    Register(sub_commands::register::RegisterSubCommand),
    /// Clear the stored session
    Logout,
    /// Show the logged in user
    Whoami,
    /// Student endpoints
    Student(sub_commands::student::StudentSubCommand),
    /// Professor endpoints
    Professor(sub_commands::professor::ProfessorSubCommand),
    /// Admin endpoints
    Admin(sub_commands::admin::AdminSubCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();
    let default_filter = args.log_level;

    let http_filter = "hyper=warn,reqwest=warn";

    let env_filter = EnvFilter::new(format!("{},{}", default_filter, http_filter));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let work_dir = match &args.work_dir {
        Some(work_dir) => work_dir.clone(),
        None => home::home_dir()
            .ok_or_else(|| anyhow!("Could not find home directory"))?
            .join(DEFAULT_WORK_DIR),
    };

    fs::create_dir_all(&work_dir)?;

    let mut settings = Settings::load(&work_dir, args.config.as_deref())?.from_env()?;

    if let Some(api_url) = &args.api_url {
        settings.api_url = api_url.clone();
    }
    if let Some(proxy) = &args.proxy {
        settings.proxy = Some(proxy.to_string());
    }
    if args.accept_invalid_certs {
        settings.accept_invalid_certs = true;
    }

    tracing::debug!("Using API at {}", settings.api_url);

    let mut http_client =
        HttpClient::builder().danger_accept_invalid_certs(settings.accept_invalid_certs);
    if let Some(proxy) = &settings.proxy {
        http_client = http_client.proxy(Url::parse(proxy)?);
    }

    let storage: Arc<dyn SessionStorage> = Arc::new(FileStorage::new(work_dir.join(SESSION_FILE)));

    let client = ApiClient::builder()
        .base_url(&settings.api_url)
        .http_client(http_client.build()?)
        .storage(storage.clone())
        .build();

    let session = SessionManager::new(storage, Arc::new(CliNavigator))
        .with_login_route(&settings.login_route);

    match &args.command {
        Commands::Login(sub_command_args) => {
            sub_commands::login::login(&client, &session, sub_command_args).await
        }
        Commands::Register(sub_command_args) => {
            sub_commands::register::register(&client, sub_command_args).await
        }
        Commands::Logout => sub_commands::logout::logout(&session),
        Commands::Whoami => sub_commands::whoami::whoami(&session),
        Commands::Student(sub_command_args) => {
            sub_commands::student::student(&client, sub_command_args).await
        }
        Commands::Professor(sub_command_args) => {
            sub_commands::professor::professor(&client, sub_command_args).await
        }
        Commands::Admin(sub_command_args) => {
            sub_commands::admin::admin(&client, sub_command_args).await
        }
    }
}
