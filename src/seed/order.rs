use super::{datetime_between, now_utc, start_of_year, INSERT_CHUNK};
use crate::errors::custom::{CustomError, SeedError};
use crate::models::{CouponCode, NewOrder};
use crate::schema::{customers, orders};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::instrument;

// Relative weights, not percentages: the coupon weights add up to 95.
const SHIPPED_WEIGHTS: [(bool, u32); 2] = [(false, 10), (true, 90)];
const DELIVERED_WEIGHTS: [(bool, u32); 2] = [(false, 50), (true, 50)];
const COUPON_WEIGHTS: [(Option<CouponCode>, u32); 4] = [
    (None, 80),
    (Some(CouponCode::FiftyOff), 5),
    (Some(CouponCode::FreeShipping), 5),
    (Some(CouponCode::BuyOneGetOne), 5),
];

/******************************************/
// Adding fake orders for stored customers
/******************************************/
/// Each order goes to a uniformly drawn customer already in the database.
#[instrument(name = "Generate orders", skip(conn, rng))]
pub fn generate_orders<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    count: usize,
) -> Result<usize, CustomError> {
    let customer_ids: Vec<i32> = customers::table.select(customers::id).load(conn)?;
    if customer_ids.is_empty() {
        return Err(SeedError::EmptyChoice("customers").into());
    }

    let now = now_utc();
    let year_start = start_of_year(now);
    let mut batch = Vec::with_capacity(count);
    for _ in 0..count {
        let customer_id = *customer_ids
            .choose(rng)
            .ok_or(SeedError::EmptyChoice("customers"))?;
        batch.push(draw_order(rng, customer_id, year_start, now)?);
    }

    let inserted = conn.transaction::<_, CustomError, _>(|conn| {
        let mut inserted = 0;
        for chunk in batch.chunks(INSERT_CHUNK) {
            inserted += diesel::insert_into(orders::table)
                .values(chunk)
                .execute(conn)?;
        }
        Ok(inserted)
    })?;

    tracing::info!(inserted, "orders generated");
    Ok(inserted)
}

/// Builds one order with `order_date <= shipped_date <= delivered_date <= now`.
pub fn draw_order<R: Rng + ?Sized>(
    rng: &mut R,
    customer_id: i32,
    year_start: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<NewOrder, SeedError> {
    let order_date = datetime_between(rng, year_start, now);

    let shipped_date = if weighted(rng, &SHIPPED_WEIGHTS)? {
        Some(datetime_between(rng, order_date, now))
    } else {
        None
    };

    // only shipped orders can have been delivered
    let delivered_date = match shipped_date {
        Some(shipped) => {
            if weighted(rng, &DELIVERED_WEIGHTS)? {
                Some(datetime_between(rng, shipped, now))
            } else {
                None
            }
        }
        None => None,
    };

    let coupon_code = weighted(rng, &COUPON_WEIGHTS)?.map(|code| code.as_str().to_string());

    Ok(NewOrder {
        order_date,
        shipped_date,
        delivered_date,
        coupon_code,
        customer_id,
    })
}

fn weighted<R: Rng + ?Sized, T: Copy>(rng: &mut R, choices: &[(T, u32)]) -> Result<T, SeedError> {
    choices
        .choose_weighted(rng, |choice| choice.1)
        .map(|choice| choice.0)
        .map_err(|err| SeedError::InvalidWeights(err.to_string()))
}
