use crate::errors::custom::CustomError;
use crate::schema::{order_products, orders, products};
use chrono::{Duration, NaiveDateTime, Utc};
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::instrument;

/******************************************/
// Revenue over the trailing window
/******************************************/
/// Revenue from orders placed strictly after `now - days` (UTC).
///
/// `None` when no order falls in the window: an empty SUM is NULL, not zero.
/// A window reaching past the earliest representable instant covers all
/// orders; a negative one that overflows covers none.
pub fn revenue_in_last_n_days(
    conn: &mut SqliteConnection,
    days: i64,
) -> Result<Option<i64>, CustomError> {
    let cutoff = Duration::try_days(days)
        .and_then(|window| Utc::now().naive_utc().checked_sub_signed(window));

    match cutoff {
        Some(cutoff) => revenue_since(conn, cutoff),
        None if days < 0 => Ok(None),
        None => revenue_since(conn, NaiveDateTime::MIN),
    }
}

/// Sum of the current prices of products attached to orders dated after `cutoff`.
#[instrument(name = "Get revenue since", skip(conn))]
pub fn revenue_since(
    conn: &mut SqliteConnection,
    cutoff: NaiveDateTime,
) -> Result<Option<i64>, CustomError> {
    let revenue = order_products::table
        .inner_join(orders::table)
        .inner_join(products::table)
        .filter(orders::order_date.gt(cutoff))
        .select(sum(products::price))
        .get_result(conn)?;
    Ok(revenue)
}
