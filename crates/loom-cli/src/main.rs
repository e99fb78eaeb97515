use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod context;
mod prompt;

/// Environment variable holding the log filter (tracing `EnvFilter` syntax).
const LOG_ENV: &str = "LOOM_LOG";

#[derive(Parser)]
#[command(name = "loom")]
#[command(about = "Loom CLI - client for the collaborative coding assistant", long_about = None)]
#[command(version)]
struct Cli {
    /// Backend base URL (overrides LOOM_API_URL and config.toml)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long, env = "LOOM_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Create an account and log in
    Register {
        #[arg(long)]
        email: Option<String>,
        #[arg(long, env = "LOOM_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Defaults to --password when that is given
        #[arg(long)]
        confirm_password: Option<String>,
        /// Echo the password while typing it
        #[arg(long)]
        show_password: bool,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Manage projects
    Projects {
        #[command(subcommand)]
        action: ProjectsAction,
    },
    /// Inspect or change client configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ProjectsAction {
    /// List your projects
    List,
    /// Create a project
    Create { name: String },
    /// Delete a project
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show one project
    Open { id: String },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Store the backend base URL in config.toml
    SetUrl { url: String },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let api_url = cli.api_url.as_deref();

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(api_url, email, password).await?
        }
        Commands::Register {
            email,
            password,
            confirm_password,
            show_password,
        } => {
            commands::auth::register(
                api_url,
                commands::auth::RegisterArgs {
                    email,
                    password,
                    confirm_password,
                    show_password,
                },
            )
            .await?
        }
        Commands::Logout => commands::auth::logout(api_url).await?,
        Commands::Whoami => commands::auth::whoami(api_url).await?,
        Commands::Projects { action } => match action {
            ProjectsAction::List => commands::projects::list(api_url).await?,
            ProjectsAction::Create { name } => commands::projects::create(api_url, &name).await?,
            ProjectsAction::Delete { id, yes } => {
                commands::projects::delete(api_url, &id, yes).await?
            }
            ProjectsAction::Open { id } => commands::projects::open(api_url, &id).await?,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(api_url)?,
            ConfigAction::Path => commands::config::path()?,
            ConfigAction::SetUrl { url } => commands::config::set_url(&url)?,
        },
    }

    Ok(())
}
