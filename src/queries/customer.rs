use crate::errors::custom::CustomError;
use crate::models::{Customer, Order};
use crate::schema::{customers, order_products, orders, products};
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::instrument;

#[instrument(name = "Count customers", skip(conn))]
pub fn customer_count(conn: &mut SqliteConnection) -> Result<i64, CustomError> {
    let count = customers::table.count().get_result(conn)?;
    Ok(count)
}

/// The customer who placed `order`.
#[instrument(name = "Get customer of order", skip(conn, order), fields(order_id = order.id))]
pub fn customer_for_order(
    conn: &mut SqliteConnection,
    order: &Order,
) -> Result<Customer, CustomError> {
    let customer = customers::table
        .find(order.customer_id)
        .select(Customer::as_select())
        .first(conn)?;
    Ok(customer)
}

/******************************************/
// Customers whose purchases exceed an amount
/******************************************/
/// Sums the current product price once per order/product row, so a product
/// bought in two orders counts twice. The comparison is strict.
#[instrument(name = "Get customers above spend", skip(conn))]
pub fn customers_with_spend_above(
    conn: &mut SqliteConnection,
    amount: i64,
) -> Result<Vec<Customer>, CustomError> {
    let customers = customers::table
        .inner_join(orders::table.inner_join(order_products::table.inner_join(products::table)))
        .group_by(customers::id)
        .having(sum(products::price).gt(amount))
        .order(customers::id)
        .select(Customer::as_select())
        .load(conn)?;
    Ok(customers)
}
