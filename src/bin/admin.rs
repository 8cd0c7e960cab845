//! CLI administration tool for button0-api.
//!
//! Inspects and adjusts the durable store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the global counter
//! cargo run --bin admin -- state
//!
//! # Show one profile
//! cargo run --bin admin -- profile show test-device-12345
//!
//! # Grant a cosmetic (asks for confirmation unless -y)
//! cargo run --bin admin -- profile unlock test-device-12345 neon
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use button0_api::application::services::{CosmeticService, ProfileService};
use button0_api::config::{Config, mask_connection_string};
use button0_api::domain::entities::Profile;
use button0_api::domain::repositories::GlobalStateRepository;
use button0_api::infrastructure::persistence::{PgGlobalStateRepository, PgProfileRepository};
use button0_api::infrastructure::storage::run_migrations;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

/// CLI tool for managing button0-api.
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
    /// Show the global click counter
    State,

    /// Inspect or modify profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Profile subcommands.
#[derive(Subcommand)]
enum ProfileAction {
    /// Show a profile
    Show {
        /// Device id of the profile
        device_id: String,
    },

    /// Unlock a cosmetic for a profile
    Unlock {
        /// Device id of the profile
        device_id: String,

        /// Cosmetic to unlock (lowercase letters, digits, '_' and '-')
        cosmetic_id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::State => show_state(pool).await?,
        Commands::Profile { action } => handle_profile_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints the global counter.
async fn show_state(pool: Arc<PgPool>) -> Result<()> {
    println!("{}", "📊 Global State".bright_blue().bold());
    println!();

    let state = PgGlobalStateRepository::new(pool)
        .get_state()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read global state: {}", e))?;

    println!(
        "  Global clicks: {}",
        state.global_clicks.to_string().bright_green().bold()
    );
    println!(
        "  Updated at:    {}",
        state
            .updated_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Dispatches profile commands.
async fn handle_profile_action(action: ProfileAction, pool: Arc<PgPool>) -> Result<()> {
    let repo = Arc::new(PgProfileRepository::new(pool));

    match action {
        ProfileAction::Show { device_id } => {
            let profile = ProfileService::new(repo)
                .get_profile(&device_id)
                .await
                .map_err(|e| anyhow::anyhow!("{}: {}", device_id, e))?;

            print_profile(&profile);
        }
        ProfileAction::Unlock {
            device_id,
            cosmetic_id,
            yes,
        } => {
            unlock_cosmetic(repo, device_id, cosmetic_id, yes).await?;
        }
    }

    Ok(())
}

/// Grants a cosmetic with a confirmation prompt.
///
/// Goes through [`CosmeticService`], so the id is validated and a repeated
/// unlock is a no-op.
async fn unlock_cosmetic(
    repo: Arc<PgProfileRepository>,
    device_id: String,
    cosmetic_id: String,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🎨 Unlock Cosmetic".bright_blue().bold());
    println!();
    println!("  Device:   {}", device_id.cyan());
    println!("  Cosmetic: {}", cosmetic_id.bright_yellow());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Unlock this cosmetic?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let profile = CosmeticService::new(repo)
        .unlock_cosmetic(&device_id, &cosmetic_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to unlock cosmetic: {}", e))?;

    println!("{}", "✅ Cosmetic unlocked".green().bold());
    println!();
    print_profile(&profile);

    Ok(())
}

fn print_profile(profile: &Profile) {
    println!("{}", "👤 Profile".bright_blue().bold());
    println!();
    println!("  Device:    {}", profile.device_id.cyan());
    println!(
        "  Clicks:    {}",
        profile.my_clicks.to_string().bright_green().bold()
    );
    println!("  Selected:  {}", profile.selected_cosmetic.bright_yellow());
    println!("  Unlocked:  {}", profile.unlocked_cosmetics.join(", "));
    println!(
        "  Created:   {}",
        profile
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!(
        "  Updated:   {}",
        profile
            .updated_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            run_migrations(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
