//! CLI administration tool for the delivery pricing service.
//!
//! Provides commands for managing API tokens and merchants, computing
//! offline fee quotes, and checking database connectivity without
//! requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new API token
//! cargo run --bin admin -- token create --name "dashboard"
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke dashboard
//!
//! # Register a merchant
//! cargo run --bin admin -- merchant add --name "Warung Bu Sri" \
//!     --latitude -7.9666 --longitude 112.6326
//!
//! # Compute a fee quote offline
//! cargo run --bin admin -- quote --merchant-id 1 --latitude -7.95 --longitude 112.63
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for token commands): HMAC key

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

use delivery_pricing::application::services::AuthService;
use delivery_pricing::domain::entities::NewMerchant;
use delivery_pricing::domain::geo::GeoPoint;
use delivery_pricing::domain::pricing::{self, OrderType};
use delivery_pricing::domain::repositories::{MerchantRepository, TokenRepository};
use delivery_pricing::infrastructure::persistence::{PgMerchantRepository, PgTokenRepository};

/// CLI tool for managing the delivery pricing service.
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
    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage the merchant registry
    Merchant {
        #[command(subcommand)]
        action: MerchantAction,
    },

    /// Compute a delivery fee quote without going through the API
    Quote {
        /// Merchant to quote against
        #[arg(long)]
        merchant_id: i64,

        /// Customer latitude (required unless --pickup)
        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<f64>,

        /// Customer longitude (required unless --pickup)
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<f64>,

        /// Quote a pickup order instead of delivery
        #[arg(long)]
        pickup: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token
    Create {
        /// Token name (e.g., "dashboard", "partner-integration")
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token by name
    Revoke {
        /// Token name to revoke
        name: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Merchant registry subcommands.
#[derive(Subcommand)]
enum MerchantAction {
    /// Register a new merchant
    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<f64>,

        #[arg(long)]
        address: Option<String>,
    },

    /// List registered merchants
    List {
        /// Include deactivated merchants
        #[arg(long)]
        include_inactive: bool,
    },
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Verify database connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = Arc::new(
        PgPool::connect(&database_url)
            .await
            .context("Failed to connect to database")?,
    );

    match cli.command {
        Commands::Token { action } => handle_token(action, pool).await,
        Commands::Merchant { action } => handle_merchant(action, pool).await,
        Commands::Quote {
            merchant_id,
            latitude,
            longitude,
            pickup,
        } => handle_quote(merchant_id, latitude, longitude, pickup, pool).await,
        Commands::Db { action } => handle_db(action, pool).await,
    }
}

async fn handle_token(action: TokenAction, pool: Arc<PgPool>) -> Result<()> {
    let repository = Arc::new(PgTokenRepository::new(pool));

    match action {
        TokenAction::Create { name, yes } => {
            let name = match name {
                Some(name) => name,
                None => Input::new().with_prompt("Token name").interact_text()?,
            };

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Create token '{name}'?"))
                    .default(true)
                    .interact()?;
                if !confirmed {
                    println!("{}", "Aborted".yellow());
                    return Ok(());
                }
            }

            let signing_secret = std::env::var("TOKEN_SIGNING_SECRET")
                .context("TOKEN_SIGNING_SECRET must be set")?;
            let service = AuthService::new(repository, signing_secret);

            let value = service.issue_token(&name).await?;

            println!("{} Token '{}' created", "✓".green(), name.bold());
            println!();
            println!("  {}", value.yellow().bold());
            println!();
            println!(
                "{}",
                "Store this value now; only its hash is kept and it cannot be shown again.".red()
            );
        }

        TokenAction::List => {
            let tokens = repository.list().await?;

            if tokens.is_empty() {
                println!("No tokens.");
                return Ok(());
            }

            for token in tokens {
                let status = if token.is_revoked() {
                    "revoked".red()
                } else {
                    "active".green()
                };
                let last_used = token
                    .last_used_at
                    .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
                    .unwrap_or_else(|| "never".to_string());

                println!(
                    "{:<30} {}  created {}  last used {}",
                    token.name.bold(),
                    status,
                    token.created_at.format("%Y-%m-%d"),
                    last_used
                );
            }
        }

        TokenAction::Revoke { name, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Revoke token '{name}'?"))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("{}", "Aborted".yellow());
                    return Ok(());
                }
            }

            if repository.revoke(&name).await? {
                println!("{} Token '{}' revoked", "✓".green(), name.bold());
            } else {
                println!("{} No active token named '{}'", "✗".red(), name.bold());
            }
        }
    }

    Ok(())
}

async fn handle_merchant(action: MerchantAction, pool: Arc<PgPool>) -> Result<()> {
    let repository = Arc::new(PgMerchantRepository::new(pool));

    match action {
        MerchantAction::Add {
            name,
            latitude,
            longitude,
            address,
        } => {
            let name: String = match name {
                Some(name) => name,
                None => Input::new().with_prompt("Merchant name").interact_text()?,
            };
            let latitude: f64 = match latitude {
                Some(latitude) => latitude,
                None => Input::new().with_prompt("Latitude").interact_text()?,
            };
            let longitude: f64 = match longitude {
                Some(longitude) => longitude,
                None => Input::new().with_prompt("Longitude").interact_text()?,
            };

            if !(-90.0..=90.0).contains(&latitude) {
                bail!("Latitude must be within [-90, 90], got {latitude}");
            }
            if !(-180.0..=180.0).contains(&longitude) {
                bail!("Longitude must be within [-180, 180], got {longitude}");
            }

            let merchant = repository
                .create(NewMerchant {
                    name,
                    address,
                    latitude,
                    longitude,
                })
                .await?;

            println!(
                "{} Merchant '{}' registered with id {}",
                "✓".green(),
                merchant.name.bold(),
                merchant.id
            );
        }

        MerchantAction::List { include_inactive } => {
            let merchants = repository.list(0, 100, include_inactive).await?;

            if merchants.is_empty() {
                println!("No merchants.");
                return Ok(());
            }

            for merchant in merchants {
                let status = if merchant.is_active {
                    "active".green()
                } else {
                    "inactive".red()
                };
                println!(
                    "{:>5}  {:<30} {}  ({:.6}, {:.6})",
                    merchant.id,
                    merchant.name.bold(),
                    status,
                    merchant.latitude,
                    merchant.longitude
                );
            }
        }
    }

    Ok(())
}

async fn handle_quote(
    merchant_id: i64,
    latitude: Option<f64>,
    longitude: Option<f64>,
    pickup: bool,
    pool: Arc<PgPool>,
) -> Result<()> {
    let repository = PgMerchantRepository::new(pool);

    let merchant = repository
        .find_by_id(merchant_id)
        .await?
        .with_context(|| format!("No merchant with id {merchant_id}"))?;

    let result = if pickup {
        pricing::quote(merchant.location(), merchant.location(), OrderType::Pickup)
    } else {
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            bail!("Delivery quotes require --latitude and --longitude (or pass --pickup)");
        };
        pricing::quote(
            GeoPoint::new(latitude, longitude),
            merchant.location(),
            OrderType::Delivery,
        )
    };

    println!("Merchant:  {}", merchant.name.bold());
    println!("Distance:  {:.0} m", result.distance_meters);
    if result.is_free_zone {
        println!("Fee:       {} ({})", "Rp 0".bold(), "free zone".green());
    } else {
        println!("Fee:       {}", format!("Rp {}", result.fee_amount).bold());
    }

    Ok(())
}

async fn handle_db(action: DbAction, pool: Arc<PgPool>) -> Result<()> {
    match action {
        DbAction::Check => {
            let one: i32 = sqlx::query_scalar("SELECT 1")
                .fetch_one(pool.as_ref())
                .await
                .context("Database probe query failed")?;

            if one == 1 {
                println!("{} Database connection OK", "✓".green());
            }
        }
    }

    Ok(())
}
