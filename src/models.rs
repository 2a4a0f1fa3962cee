use crate::schema::{customers, order_products, orders, products};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::fmt;
use std::str::FromStr;

/******************************************/
// Customers
/******************************************/
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub postcode: String,
    pub email: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub postcode: String,
    pub email: String,
}

/******************************************/
// Orders
/******************************************/
/// An order placed by exactly one customer.
///
/// When present, `delivered_date >= shipped_date >= order_date`. The
/// generator builds orders that way; the table itself does not check it.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(belongs_to(Customer))]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Order {
    pub id: i32,
    pub order_date: NaiveDateTime,
    pub shipped_date: Option<NaiveDateTime>,
    pub delivered_date: Option<NaiveDateTime>,
    pub coupon_code: Option<String>,
    pub customer_id: i32,
}

impl Order {
    pub fn is_pending(&self) -> bool {
        self.shipped_date.is_none()
    }

    /// `None` both for orders without a coupon and for codes outside the known set.
    pub fn coupon(&self) -> Option<CouponCode> {
        self.coupon_code.as_deref().and_then(|code| code.parse().ok())
    }
}

// Batched inserts on SQLite need explicit NULLs instead of DEFAULT.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewOrder {
    pub order_date: NaiveDateTime,
    pub shipped_date: Option<NaiveDateTime>,
    pub delivered_date: Option<NaiveDateTime>,
    pub coupon_code: Option<String>,
    pub customer_id: i32,
}

/******************************************/
// Products
/******************************************/
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub struct NewProduct {
    pub name: String,
    pub price: i32,
}

/******************************************/
// Order <-> Product association
/******************************************/
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Queryable,
    Selectable,
    Identifiable,
    Associations,
    Insertable,
)]
#[diesel(belongs_to(Order))]
#[diesel(belongs_to(Product))]
#[diesel(table_name = order_products)]
#[diesel(primary_key(order_id, product_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderProduct {
    pub order_id: i32,
    pub product_id: i32,
}

/******************************************/
// Coupon codes
/******************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CouponCode {
    FiftyOff,
    FreeShipping,
    BuyOneGetOne,
}

impl CouponCode {
    pub const ALL: [CouponCode; 3] = [
        CouponCode::FiftyOff,
        CouponCode::FreeShipping,
        CouponCode::BuyOneGetOne,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CouponCode::FiftyOff => "50OFF",
            CouponCode::FreeShipping => "FREESHIPPING",
            CouponCode::BuyOneGetOne => "BUYONEGETONE",
        }
    }
}

impl fmt::Display for CouponCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CouponCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CouponCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| format!("{} is not a known coupon code.", s))
    }
}
