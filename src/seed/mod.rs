//! Synthetic data for an empty storefront database.
//!
//! Every step reads what earlier steps committed rather than carrying rows in
//! memory, so steps must run in order: customers, orders, products, links.

pub mod customer;
pub mod order;
pub mod order_product;
pub mod product;

use crate::config::configuration::SeedSettings;
use crate::db::run_migrations;
use crate::errors::custom::CustomError;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, SubsecRound, Utc};
use diesel::sqlite::SqliteConnection;
use rand::Rng;
use serde::Serialize;
use tracing::instrument;

pub use customer::generate_customers;
pub use order::generate_orders;
pub use order_product::link_orders_to_products;
pub use product::generate_products;

/// Rows per multi-row INSERT; keeps bound parameters under SQLite's 999 floor.
pub(crate) const INSERT_CHUNK: usize = 150;

/// Rows written by each step of a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub customers: usize,
    pub orders: usize,
    pub products: usize,
    pub order_products: usize,
}

/******************************************/
// Seeding the whole dataset with defaults
/******************************************/
/// 100 customers, 1000 orders, 10 products, 1-3 products per order.
pub fn seed_all(conn: &mut SqliteConnection) -> Result<SeedSummary, CustomError> {
    seed_with(conn, &SeedSettings::default(), &mut rand::thread_rng())
}

#[instrument(name = "Seed storefront", skip(conn, rng))]
pub fn seed_with<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    settings: &SeedSettings,
    rng: &mut R,
) -> Result<SeedSummary, CustomError> {
    run_migrations(conn)?;
    let customers = generate_customers(conn, rng, settings.customers)?;
    let orders = generate_orders(conn, rng, settings.orders)?;
    let products = generate_products(conn, rng, settings.products)?;
    let order_products = link_orders_to_products(conn, rng)?;

    let summary = SeedSummary {
        customers,
        orders,
        products,
        order_products,
    };
    tracing::info!(?summary, "seeding finished");
    Ok(summary)
}

/******************************************/
// Time helpers shared by the generators
/******************************************/
pub(crate) fn now_utc() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}

pub(crate) fn start_of_year(now: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_yo_opt(now.year(), 1)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .unwrap_or(now)
}

/// Uniform whole-second instant in `[start, end]`; `start` when the range is empty.
pub(crate) fn datetime_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> NaiveDateTime {
    let span = (end - start).num_seconds();
    if span <= 0 {
        return start;
    }
    start + Duration::seconds(rng.gen_range(0..=span))
}
