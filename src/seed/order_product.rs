use super::INSERT_CHUNK;
use crate::errors::custom::{CustomError, SeedError};
use crate::models::OrderProduct;
use crate::schema::{order_products, orders, products};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::instrument;

pub const PRODUCTS_PER_ORDER: RangeInclusive<usize> = 1..=3;

/******************************************/
// Attaching products to every order
/******************************************/
/// Attaches k distinct products (k drawn from `PRODUCTS_PER_ORDER`) to every
/// stored order. With fewer than k products stored, the order gets all of them.
#[instrument(name = "Link orders to products", skip(conn, rng))]
pub fn link_orders_to_products<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
) -> Result<usize, CustomError> {
    let order_ids: Vec<i32> = orders::table
        .select(orders::id)
        .order(orders::id)
        .load(conn)?;
    let product_ids: Vec<i32> = products::table.select(products::id).load(conn)?;
    if product_ids.is_empty() {
        return Err(SeedError::EmptyChoice("products").into());
    }

    let mut links = Vec::with_capacity(order_ids.len() * PRODUCTS_PER_ORDER.end());
    for order_id in order_ids {
        let k = rng.gen_range(PRODUCTS_PER_ORDER);
        links.extend(
            product_ids
                .choose_multiple(rng, k)
                .map(|&product_id| OrderProduct {
                    order_id,
                    product_id,
                }),
        );
    }

    let inserted = conn.transaction::<_, CustomError, _>(|conn| {
        let mut inserted = 0;
        for chunk in links.chunks(INSERT_CHUNK) {
            inserted += diesel::insert_into(order_products::table)
                .values(chunk)
                .execute(conn)?;
        }
        Ok(inserted)
    })?;

    tracing::info!(inserted, "orders linked to products");
    Ok(inserted)
}
