use crate::errors::custom::{CustomError, DbError};
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use dotenv::dotenv;
use tracing::instrument;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/******************************************/
// Establishing Db Connection
/******************************************/
#[instrument(name = "Open database connection")]
pub fn establish_connection(database_url: &str) -> Result<SqliteConnection, CustomError> {
    dotenv().ok();
    let mut conn = SqliteConnection::establish(database_url)?;

    // SQLite leaves foreign keys unchecked unless asked, per connection
    sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(|err| DbError::ConnectionError(err.to_string()))?;
    Ok(conn)
}

/******************************************/
// Creating tables (no-op once applied)
/******************************************/
#[instrument(name = "Initialize storage", skip(conn))]
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), CustomError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| DbError::MigrationError(err.to_string()))?;
    tracing::info!(applied = applied.len(), "storage initialized");
    Ok(())
}
