//! # Users Demo
//!
//! Walks through the table accessor against a local PostgreSQL:
//! - query logging through connection hooks
//! - creating the `users` and `offices` tables
//! - inserting, selecting and updating users
//! - a record rejecting its own fields before any SQL is sent
//!
//! Run with `RUST_LOG=debug cargo run --example users_demo` to see every
//! statement the hooks report.

use anyhow::Context;
use tablehaus::models::{Office, User};
use tablehaus::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "no usable config file, falling back to local defaults");
            AppConfig {
                database: DatabaseConfig::new(
                    "localhost".to_string(),
                    5432,
                    "tablehaus".to_string(),
                    "postgres".to_string(),
                    "password".to_string(),
                ),
                logging: LoggingConfig { log_queries: true },
            }
        }
    };

    let tablehaus = Tablehaus::new(&config.database)
        .await
        .context("connection was not established")?;

    if config.logging.log_queries {
        tablehaus.add_pre_hook(tracing_hook(HookStage::Pre));
        tablehaus.add_post_hook(tracing_hook(HookStage::Post));
    }
    tablehaus.add_pre_hook(|sql, args| {
        println!("Executing: {}", sql);
        println!("Args: {:?}", args);
    });

    tablehaus
        .auto_migrate::<User>(true)
        .await
        .context("user table was not created")?;
    tablehaus
        .auto_migrate::<Office>(true)
        .await
        .context("offices table was not created")?;

    let users = tablehaus.table_for::<User>()?;
    let offices = tablehaus.table_for::<Office>()?;

    offices.insert(&Office::new("Aarhus", 40)).await?;

    create_users(&users).await;
    select_a_user(&users).await;
    update_a_user(&users).await;
    insert_bad_user(&users).await;

    match users.select_all(None).await {
        Ok(all) => println!("\n{} users stored", all.len()),
        Err(partial) => eprintln!(
            "users.select_all error after {} users: {}",
            partial.decoded.len(),
            partial.error
        ),
    }

    Ok(())
}

async fn create_users(users: &PostgresTable<User>) {
    let now = chrono::Utc::now().timestamp();

    for office_id in 0..100 {
        let user = User::new("mads hvid", "byriel", now, office_id);
        if let Err(e) = users.insert(&user).await {
            eprintln!("users.insert error: {}", e);
        }
    }
}

async fn select_a_user(users: &PostgresTable<User>) {
    let filter = fields! { "first_name" => "mads hvid" };

    match users.select_first(Some(&filter)).await {
        Ok(user) => match serde_json::to_string_pretty(&user) {
            Ok(json) => println!("Selected user: {}", json),
            Err(_) => println!("Selected user: {:?}", user),
        },
        Err(e) => eprintln!("users.select_first error: {}", e),
    }
}

async fn update_a_user(users: &PostgresTable<User>) {
    let filter = fields! { "first_name" => "mads hvid" };
    let user = match users.select_first(Some(&filter)).await {
        Ok(user) => user,
        Err(e) => {
            eprintln!("users.select_first error: {}", e);
            return;
        }
    };

    let set = fields! {
        "first_name" => "find",
        "last_name" => "holger",
    };
    let by_id = fields! { "id" => user.id() };

    match users.update(&set, Some(&by_id)).await {
        Ok(outcome) => println!("Updated {} user(s)", outcome.rows_affected),
        Err(e) => eprintln!("users.update error: {}", e),
    }
}

async fn insert_bad_user(users: &PostgresTable<User>) {
    // Mid 17th century
    let user = User::new("mads hvid", "byriel", -10_000_000_000, 0);

    if let Err(e) = users.insert(&user).await {
        eprintln!("users.insert error: {}", e);
    }
}
