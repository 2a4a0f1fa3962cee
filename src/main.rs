use diesel::sqlite::SqliteConnection;
use storefront::config::configuration::{ReportSettings, Settings};
use storefront::db::establish_connection;
use storefront::errors::custom::CustomError;
use storefront::queries;
use storefront::seed::seed_with;
use storefront::telemetry::{get_subscriber, init_subscriber};

fn main() -> Result<(), CustomError> {
    let subscriber = get_subscriber("storefront".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let config = Settings::new()?;
    let mut conn = establish_connection(&config.database.url)?;

    let summary = seed_with(&mut conn, &config.seed, &mut rand::thread_rng())?;
    println!(
        "Seeded: {}",
        serde_json::to_string(&summary).unwrap_or_default()
    );

    print_reports(&mut conn, &config.report)
}

/******************************************/
// Canned reports over the seeded data
/******************************************/
fn print_reports(conn: &mut SqliteConnection, report: &ReportSettings) -> Result<(), CustomError> {
    println!("Get Orders by Customer");
    for order in queries::orders_for_customer(conn, report.customer_id)? {
        println!("{}", order.order_date);
    }

    println!("Pending Orders");
    for order in queries::pending_orders(conn)? {
        println!("{}", order.order_date);
    }

    println!("How many customers?");
    println!("{}", queries::customer_count(conn)?);

    println!("Orders with coupon code");
    for order in queries::orders_with_coupon_excluding_free_shipping(conn)? {
        println!("{}", order.coupon_code.unwrap_or_default());
    }

    println!("Revenue past {} days", report.revenue_days);
    match queries::revenue_in_last_n_days(conn, report.revenue_days)? {
        Some(revenue) => println!("{}", revenue),
        None => println!("no orders in window"),
    }

    println!("Average fulfillment time");
    match queries::average_fulfillment_time(conn)? {
        Some(average) => println!("{}", average),
        None => println!("no shipped orders"),
    }

    println!("All customers who have purchased over {}", report.spend_threshold);
    for customer in queries::customers_with_spend_above(conn, report.spend_threshold)? {
        println!("{}", customer.first_name);
    }

    Ok(())
}
