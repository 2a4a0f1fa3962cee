//! Read-only business questions over a populated storefront database.

pub mod customer;
pub mod fulfillment;
pub mod order;
pub mod revenue;

pub use customer::{customer_count, customer_for_order, customers_with_spend_above};
pub use fulfillment::{average_fulfillment_time, FulfillmentTime};
pub use order::{
    orders_for_customer, orders_with_coupon_excluding_free_shipping, pending_orders,
    products_for_order,
};
pub use revenue::{revenue_in_last_n_days, revenue_since};
