//! CLI administration tool for the OpenCDMS gateway.
//!
//! Manages gateway accounts and runs database diagnostics against the auth
//! store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (prompts for anything not given)
//! cargo run --bin admin -- user create --username observer
//!
//! # Create with a generated password
//! cargo run --bin admin -- user create -u observer --generate-password -y
//!
//! # List accounts
//! cargo run --bin admin -- user list
//!
//! # Replace a password
//! cargo run --bin admin -- user set-password observer
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `SECRET_KEY` (required): key mixed into password hashes, must match the server
//! - `AUTH_DATABASE_URL` / `DATABASE_URL` / `DB_*`: auth store connection

use opencdms_gateway::config::Config;
use opencdms_gateway::domain::entities::{AuthUser, NewUser};
use opencdms_gateway::domain::repositories::UserRepository;
use opencdms_gateway::infrastructure::persistence::PgUserRepository;
use opencdms_gateway::infrastructure::security::PasswordHasher;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the OpenCDMS gateway.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage gateway accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new account
    Create {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// Generate a random password instead of prompting
        #[arg(short, long)]
        generate_password: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,

    /// Replace an account's password
    SetPassword { username: String },

    /// Allow an account to sign in again
    Activate { username: String },

    /// Block an account from signing in
    Deactivate { username: String },

    /// Permanently delete an account
    Delete { username: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url("AUTH_DATABASE_URL")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to auth database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            username,
            email,
            first_name,
            last_name,
            generate_password,
            yes,
        } => {
            let hasher = hasher_from_env()?;
            let form = NewAccountForm {
                username,
                email,
                first_name,
                last_name,
                generate_password,
            };
            create_user(repo, &hasher, form, yes).await?;
        }
        UserAction::List => list_users(repo).await?,
        UserAction::SetPassword { username } => {
            let hasher = hasher_from_env()?;
            set_password(repo, &hasher, &username).await?;
        }
        UserAction::Activate { username } => set_active(repo, &username, true).await?,
        UserAction::Deactivate { username } => set_active(repo, &username, false).await?,
        UserAction::Delete { username } => delete_user(repo, &username).await?,
    }

    Ok(())
}

fn hasher_from_env() -> Result<PasswordHasher> {
    let secret = std::env::var("SECRET_KEY").context("SECRET_KEY must be set")?;
    Ok(PasswordHasher::new(secret.into_bytes()))
}

async fn find_user(repo: &PgUserRepository, username: &str) -> Result<AuthUser> {
    repo.find_by_username(username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("User '{username}' not found"))
}

struct NewAccountForm {
    username: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    generate_password: bool,
}

fn prompt_or(value: Option<String>, prompt: &str, allow_empty: bool) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()?),
    }
}

fn prompt_new_password() -> Result<String> {
    Ok(Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?)
}

/// Creates an account with interactive prompts.
///
/// With `--generate-password` the password is printed once and never stored
/// in plain text.
async fn create_user(
    repo: Arc<PgUserRepository>,
    hasher: &PasswordHasher,
    form: NewAccountForm,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Account".bright_blue().bold());
    println!();

    let username = prompt_or(form.username, "Username", false)?;
    let email = prompt_or(form.email, "Email", true)?;
    let first_name = prompt_or(form.first_name, "First name", true)?;
    let last_name = prompt_or(form.last_name, "Last name", true)?;

    let (password, generated) = if form.generate_password {
        println!("{}", "✨ Generated new password".green());
        (generate_password(), true)
    } else {
        (prompt_new_password()?, false)
    };

    println!();
    println!("{}", "Account details:".bright_white().bold());
    println!("  Username: {}", username.cyan());
    println!("  Email:    {}", email.cyan());
    println!("  Name:     {} {}", first_name.cyan(), last_name.cyan());
    if generated {
        println!("  Password: {}", password.bright_yellow().bold());
        println!();
        println!(
            "{}",
            "⚠️  IMPORTANT: Save this password now! You won't be able to see it again."
                .red()
                .bold()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let password_hash = hasher
        .hash(&password)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    let user = repo
        .create(NewUser {
            username,
            password_hash,
            first_name,
            last_name,
            email,
            is_active: true,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Account created:".green().bold(),
        user.username.cyan()
    );
    println!();
    println!("{}", "Sign in with:".bright_white());
    println!(
        "  curl -d \"username={}&password=...\" http://localhost:8000/api/auth/v1/sign-in",
        user.username.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all accounts with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 Accounts
///
///   ID  Username             Email                          Last login         Status
///   ──────────────────────────────────────────────────────────────────────────────────
///   1   default              admin@opencdms_api.com         2024-01-15 10:30   ACTIVE
///   2   observer             observer@example.org           never              INACTIVE
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Accounts".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<30} {:<18} {:<10}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Email".bright_white().bold(),
        "Last login".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(85).bright_black());

    for user in &users {
        let status = if user.is_active {
            "ACTIVE".green()
        } else {
            "INACTIVE".red()
        };
        let last_login = user
            .last_login
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<3} {:<20} {:<30} {:<18} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.email,
            last_login.bright_black(),
            status
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn set_password(
    repo: Arc<PgUserRepository>,
    hasher: &PasswordHasher,
    username: &str,
) -> Result<()> {
    println!("{}", "🔑 Set Password".bright_blue().bold());
    println!();

    let user = find_user(&repo, username).await?;
    println!("  Account: {}", user.username.cyan());
    println!();

    let password = prompt_new_password()?;
    let password_hash = hasher
        .hash(&password)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    repo.set_password(user.id, &password_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update password: {}", e))?;

    println!();
    println!("{}", "✅ Password updated".green().bold());
    println!();

    Ok(())
}

async fn set_active(repo: Arc<PgUserRepository>, username: &str, active: bool) -> Result<()> {
    let user = find_user(&repo, username).await?;

    if user.is_active == active {
        let state = if active { "active" } else { "inactive" };
        println!("{}", format!("⚠️  Account is already {state}").yellow());
        return Ok(());
    }

    repo.set_active(user.id, active)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update account: {}", e))?;

    let message = if active {
        "✅ Account activated"
    } else {
        "✅ Account deactivated"
    };
    println!("{} {}", message.green().bold(), user.username.cyan());

    Ok(())
}

/// Deletes an account after confirmation (default: No).
async fn delete_user(repo: Arc<PgUserRepository>, username: &str) -> Result<()> {
    println!("{}", "🗑️  Delete Account".bright_blue().bold());
    println!();

    let user = find_user(&repo, username).await?;

    println!("  Account: {}", user.username.cyan());
    println!("  ID:      {}", user.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this account?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.delete(user.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete account: {}", e))?;

    println!();
    println!("{}", "✅ Account deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let accounts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM auth_user")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Accounts:   {}", accounts.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

/// Generates a random password.
///
/// 20 characters from A-Z, a-z, 0-9.
fn generate_password() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const PASSWORD_LEN: usize = 20;

    let mut rng = rand::rng();

    (0..PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
