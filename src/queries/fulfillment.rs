use crate::errors::custom::CustomError;
use crate::schema::orders;
use chrono::Duration;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Double, Nullable};
use diesel::sqlite::SqliteConnection;
use std::fmt;
use tracing::instrument;

/// Average time from order to shipment, in whole seconds.
///
/// Displays as `H:MM:SS` with the hour count unbounded, so a 26 hour average
/// reads `26:00:00` rather than wrapping past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FulfillmentTime(i64);

impl FulfillmentTime {
    pub fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    pub fn as_seconds(&self) -> i64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::seconds(self.0)
    }
}

impl fmt::Display for FulfillmentTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let total = self.0.unsigned_abs();
        write!(
            f,
            "{}{}:{:02}:{:02}",
            sign,
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }
}

/******************************************/
// Average fulfillment time of shipped orders
/******************************************/
/// `None` when no order has shipped.
#[instrument(name = "Get average fulfillment time", skip(conn))]
pub fn average_fulfillment_time(
    conn: &mut SqliteConnection,
) -> Result<Option<FulfillmentTime>, CustomError> {
    let average: Option<f64> = orders::table
        .filter(orders::shipped_date.is_not_null())
        .select(sql::<Nullable<Double>>(
            "AVG(strftime('%s', orders.shipped_date) - strftime('%s', orders.order_date))",
        ))
        .get_result(conn)?;

    Ok(average.map(|seconds| FulfillmentTime::from_seconds(seconds.round() as i64)))
}
