use crate::errors::custom::CustomError;
use crate::models::{CouponCode, Order, OrderProduct, Product};
use crate::schema::{orders, products};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::instrument;

/******************************************/
// Orders placed by one customer
/******************************************/
/// No ordering beyond what the storage returns.
#[instrument(name = "Get orders by customer", skip(conn))]
pub fn orders_for_customer(
    conn: &mut SqliteConnection,
    customer_id: i32,
) -> Result<Vec<Order>, CustomError> {
    let orders = orders::table
        .filter(orders::customer_id.eq(customer_id))
        .select(Order::as_select())
        .load(conn)?;
    Ok(orders)
}

/******************************************/
// Orders not shipped yet, newest first
/******************************************/
#[instrument(name = "Get pending orders", skip(conn))]
pub fn pending_orders(conn: &mut SqliteConnection) -> Result<Vec<Order>, CustomError> {
    let orders = orders::table
        .filter(orders::shipped_date.is_null())
        .order(orders::order_date.desc())
        .select(Order::as_select())
        .load(conn)?;
    Ok(orders)
}

/******************************************/
// Orders with any coupon except free shipping
/******************************************/
#[instrument(name = "Get orders with coupon code", skip(conn))]
pub fn orders_with_coupon_excluding_free_shipping(
    conn: &mut SqliteConnection,
) -> Result<Vec<Order>, CustomError> {
    let orders = orders::table
        .filter(orders::coupon_code.is_not_null())
        .filter(orders::coupon_code.ne(CouponCode::FreeShipping.as_str()))
        .select(Order::as_select())
        .load(conn)?;
    Ok(orders)
}

/******************************************/
// Products included in an order
/******************************************/
#[instrument(name = "Get products of order", skip(conn, order), fields(order_id = order.id))]
pub fn products_for_order(
    conn: &mut SqliteConnection,
    order: &Order,
) -> Result<Vec<Product>, CustomError> {
    let products = OrderProduct::belonging_to(order)
        .inner_join(products::table)
        .order(products::id)
        .select(Product::as_select())
        .load(conn)?;
    Ok(products)
}
