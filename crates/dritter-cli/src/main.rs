//! Dritter CLI - command-line client for the Dritter platform.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use dritter_core::{init_logging, Config, Paths};

/// Dritter CLI - authentication, posts, and user management.
#[derive(Parser)]
#[command(name = "dritter")]
#[command(about = "Dritter CLI for authentication, posts, and user management")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    format: output::OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Login with email and password
    Login,

    /// Logout and clear session
    Logout,

    /// Check authentication status
    Status,

    /// Register a new account
    Register,

    /// Manage your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Manage posts
    Posts {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Manage users (admin)
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Check password strength against the policy
    Password {
        /// Password to check (prompted when omitted)
        password: Option<String>,
        /// Account name, to flag passwords containing it
        #[arg(long)]
        name: Option<String>,
        /// Account email, to flag passwords containing its username part
        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the current profile
    Show,
    /// Update the current profile
    Update {
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New email address
        #[arg(long)]
        email: Option<String>,
        /// Change the password (prompts for current and new)
        #[arg(long)]
        password: bool,
    },
}

#[derive(Subcommand)]
enum PostCommands {
    /// List posts
    List,
    /// Show a post
    Show {
        /// Post ID
        id: i64,
    },
    /// Create a post
    Create {
        /// Post title
        #[arg(short, long)]
        title: String,
        /// Post content
        #[arg(short, long)]
        content: String,
    },
    /// Update a post
    Update {
        /// Post ID
        id: i64,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a post
    Delete {
        /// Post ID
        id: i64,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// List users
    List,
    /// Show a user
    Show {
        /// User ID
        id: i64,
    },
    /// Create a user
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Role (admin, user, moderator)
        #[arg(long)]
        role: Option<String>,
    },
    /// Update a user
    Update {
        /// User ID
        id: i64,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New email address
        #[arg(long)]
        email: Option<String>,
        /// New role (admin, user, moderator)
        #[arg(long)]
        role: Option<String>,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: i64,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let config = Config::load(&paths)?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logging(level);

    // The password check is purely local; skip service wiring for it
    if let Commands::Password { password, name, email } = cli.command {
        return commands::password_check(password, name, email, &cli.format).await;
    }

    let ctx = commands::Context::init(&paths, config).await?;

    match cli.command {
        Commands::Login => commands::login(&ctx, &cli.format).await,
        Commands::Logout => commands::logout(&ctx, &cli.format).await,
        Commands::Status => commands::status(&ctx, &cli.format).await,
        Commands::Register => commands::register(&ctx, &cli.format).await,
        Commands::Profile { command } => match command {
            ProfileCommands::Show => commands::profile_show(&ctx, &cli.format).await,
            ProfileCommands::Update {
                name,
                email,
                password,
            } => commands::profile_update(&ctx, name, email, password, &cli.format).await,
        },
        Commands::Posts { command } => match command {
            PostCommands::List => commands::posts_list(&ctx, &cli.format).await,
            PostCommands::Show { id } => commands::posts_show(&ctx, id, &cli.format).await,
            PostCommands::Create { title, content } => {
                commands::posts_create(&ctx, title, content, &cli.format).await
            }
            PostCommands::Update { id, title, content } => {
                commands::posts_update(&ctx, id, title, content, &cli.format).await
            }
            PostCommands::Delete { id } => commands::posts_delete(&ctx, id, &cli.format).await,
        },
        Commands::Users { command } => match command {
            UserCommands::List => commands::users_list(&ctx, &cli.format).await,
            UserCommands::Show { id } => commands::users_show(&ctx, id, &cli.format).await,
            UserCommands::Create { name, email, role } => {
                commands::users_create(&ctx, name, email, role, &cli.format).await
            }
            UserCommands::Update {
                id,
                name,
                email,
                role,
            } => commands::users_update(&ctx, id, name, email, role, &cli.format).await,
            UserCommands::Delete { id } => commands::users_delete(&ctx, id, &cli.format).await,
        },
        Commands::Password { .. } => unreachable!("handled before service wiring"),
    }
}
