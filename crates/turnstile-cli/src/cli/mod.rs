//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use turnstile_core::api::ApiClient;
use turnstile_core::config::Config;
use turnstile_core::models::Role;
use turnstile_core::logging;
use turnstile_core::session::SessionStore;

mod commands;

#[derive(Parser)]
#[command(name = "turnstile")]
#[command(version)]
#[command(about = "Terminal client for an event-ticketing API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the API base URL (also: TURNSTILE_API_URL, config.toml)
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Register a new account and persist the session
    Signup {
        /// Display name
        #[arg(long)]
        name: String,
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password (at least 6 characters)
        #[arg(long)]
        password: String,
        /// Account role (admin or customer)
        #[arg(long, default_value = "customer")]
        role: Role,
    },

    /// Clear the persisted session
    Logout,

    /// Show the persisted identity
    Whoami,

    /// List events (same filter as the interactive view)
    Events {
        /// Case-insensitive search over title/location/description
        #[arg(long)]
        search: Option<String>,
        /// Exact category match
        #[arg(long)]
        category: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init().context("initialize logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // Flag wins over env, env over config.
    let base_url = match cli.api_url.as_deref() {
        Some(raw) => {
            let parsed = url::Url::parse(raw).context("invalid --api-url")?;
            parsed.as_str().trim_end_matches('/').to_string()
        }
        None => config.resolve_base_url(),
    };
    tracing::debug!(%base_url, "resolved API base URL");

    let sessions = SessionStore::new();

    // default to the interactive client
    let Some(command) = cli.command else {
        return turnstile_tui::run(&base_url).await;
    };

    match command {
        Commands::Login { email, password } => {
            commands::auth::login(&ApiClient::new(&base_url), &sessions, email, password).await
        }
        Commands::Signup {
            name,
            email,
            password,
            role,
        } => {
            commands::auth::signup(
                &ApiClient::new(&base_url),
                &sessions,
                name,
                email,
                password,
                role,
            )
            .await
        }
        Commands::Logout => commands::auth::logout(&sessions),
        Commands::Whoami => commands::auth::whoami(&sessions),

        Commands::Events { search, category } => {
            commands::events::list(&ApiClient::new(&base_url), search, category).await
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
