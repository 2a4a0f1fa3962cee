use crate::helper::{now, seeded_rng, spawn_db};
use chrono::Duration;
use claim::{assert_none, assert_ok, assert_some_eq};
use std::collections::{HashMap, HashSet};
use storefront::config::configuration::SeedSettings;
use storefront::queries::{
    average_fulfillment_time, customer_for_order, customers_with_spend_above,
    orders_for_customer, orders_with_coupon_excluding_free_shipping, pending_orders,
    products_for_order, revenue_in_last_n_days, revenue_since, FulfillmentTime,
};
use storefront::seed::seed_with;

#[test]
fn orders_for_customer_only_returns_their_orders() {
    let mut db = spawn_db();
    let ada = db.add_customer("Ada");
    let bob = db.add_customer("Bob");
    let first = db.add_order(&ada, now(), None, None);
    let second = db.add_order(&ada, now() - Duration::days(2), None, None);
    db.add_order(&bob, now(), None, None);

    let orders = assert_ok!(orders_for_customer(&mut db.conn, ada.id));

    let ids: HashSet<i32> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, HashSet::from([first.id, second.id]));
    assert!(assert_ok!(orders_for_customer(&mut db.conn, 9_999)).is_empty());
}

#[test]
fn pending_orders_are_unshipped_and_newest_first() {
    let mut db = spawn_db();
    let ada = db.add_customer("Ada");
    let today = now();
    let three_days = db.add_order(&ada, today - Duration::days(3), None, None);
    let one_day = db.add_order(&ada, today - Duration::days(1), None, None);
    db.add_order(&ada, today - Duration::days(2), Some(today), None);
    let five_days = db.add_order(&ada, today - Duration::days(5), None, None);

    let pending = assert_ok!(pending_orders(&mut db.conn));

    let ids: Vec<i32> = pending.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![one_day.id, three_days.id, five_days.id]);
}

#[test]
fn pending_orders_match_unshipped_seeded_orders() {
    let mut db = spawn_db();
    let mut rng = seeded_rng();
    assert_ok!(seed_with(&mut db.conn, &SeedSettings::default(), &mut rng));

    let pending = assert_ok!(pending_orders(&mut db.conn));

    let expected: HashSet<i32> = db
        .all_orders()
        .into_iter()
        .filter(|o| o.is_pending())
        .map(|o| o.id)
        .collect();
    let returned: HashSet<i32> = pending.iter().map(|o| o.id).collect();
    assert_eq!(returned, expected);
    assert_eq!(pending.len(), expected.len());
    for pair in pending.windows(2) {
        assert!(pair[0].order_date >= pair[1].order_date);
    }
}

#[test]
fn coupon_query_skips_missing_and_free_shipping_codes() {
    let mut db = spawn_db();
    let ada = db.add_customer("Ada");
    let half_off = db.add_order(&ada, now(), None, Some("50OFF"));
    db.add_order(&ada, now(), None, Some("FREESHIPPING"));
    db.add_order(&ada, now(), None, None);
    let bogo = db.add_order(&ada, now(), None, Some("BUYONEGETONE"));

    let orders = assert_ok!(orders_with_coupon_excluding_free_shipping(&mut db.conn));

    let ids: HashSet<i32> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, HashSet::from([half_off.id, bogo.id]));
    for order in orders {
        let code = order.coupon_code.expect("coupon query returned an order without a code");
        assert_ne!(code, "FREESHIPPING");
    }
}

#[test]
fn revenue_sums_products_of_recent_orders() {
    let mut db = spawn_db();
    let ada = db.add_customer("Ada");
    let recent = db.add_order(&ada, now(), None, None);
    let old = db.add_order(&ada, now() - Duration::days(40), None, None);
    let cheap = db.add_product("Teal", 10);
    let middling = db.add_product("Plum", 20);
    let pricey = db.add_product("Coral", 50);
    db.link(&recent, &[&cheap, &middling]);
    db.link(&old, &[&pricey]);

    assert_some_eq!(assert_ok!(revenue_in_last_n_days(&mut db.conn, 1)), 30);
    assert_some_eq!(assert_ok!(revenue_in_last_n_days(&mut db.conn, 30)), 30);
    assert_some_eq!(assert_ok!(revenue_in_last_n_days(&mut db.conn, 60)), 80);
}

#[test]
fn revenue_over_an_unrepresentable_window_covers_all_orders() {
    let mut db = spawn_db();
    let ada = db.add_customer("Ada");
    let recent = db.add_order(&ada, now(), None, None);
    let old = db.add_order(&ada, now() - Duration::days(400), None, None);
    let teal = db.add_product("Teal", 10);
    let coral = db.add_product("Coral", 50);
    db.link(&recent, &[&teal]);
    db.link(&old, &[&coral]);

    assert_some_eq!(assert_ok!(revenue_in_last_n_days(&mut db.conn, 100_000_000)), 60);
    assert_some_eq!(assert_ok!(revenue_in_last_n_days(&mut db.conn, i64::MAX)), 60);
    assert_none!(assert_ok!(revenue_in_last_n_days(&mut db.conn, i64::MIN)));
}

#[test]
fn revenue_is_none_when_no_order_falls_in_the_window() {
    let mut db = spawn_db();
    let ada = db.add_customer("Ada");
    let old = db.add_order(&ada, now() - Duration::days(40), None, None);
    let teal = db.add_product("Teal", 10);
    db.link(&old, &[&teal]);

    assert_none!(assert_ok!(revenue_in_last_n_days(&mut db.conn, 30)));
}

#[test]
fn revenue_matches_a_manual_sum_over_seeded_data() {
    let mut db = spawn_db();
    let mut rng = seeded_rng();
    assert_ok!(seed_with(&mut db.conn, &SeedSettings::default(), &mut rng));
    let cutoff = now() - Duration::days(30);

    let order_dates: HashMap<i32, _> = db
        .all_orders()
        .into_iter()
        .map(|o| (o.id, o.order_date))
        .collect();
    let prices: HashMap<i32, i32> = db
        .all_products()
        .into_iter()
        .map(|p| (p.id, p.price))
        .collect();
    let expected: i64 = db
        .all_links()
        .into_iter()
        .filter(|link| order_dates[&link.order_id] > cutoff)
        .map(|link| i64::from(prices[&link.product_id]))
        .sum();

    let revenue = assert_ok!(revenue_since(&mut db.conn, cutoff));

    assert_eq!(revenue.unwrap_or(0), expected);
}

#[test]
fn spend_threshold_is_strict() {
    let mut db = spawn_db();
    let ada = db.add_customer("Ada");
    let bob = db.add_customer("Bob");
    let order = db.add_order(&ada, now(), None, None);
    let small = db.add_order(&bob, now(), None, None);
    let desk = db.add_product("Desk", 300);
    let chair = db.add_product("Chair", 250);
    db.link(&order, &[&desk, &chair]);
    db.link(&small, &[&chair]);

    let above_500 = assert_ok!(customers_with_spend_above(&mut db.conn, 500));
    assert_eq!(above_500, vec![ada.clone()]);

    assert!(assert_ok!(customers_with_spend_above(&mut db.conn, 600)).is_empty());
    assert!(assert_ok!(customers_with_spend_above(&mut db.conn, 550)).is_empty());
}

#[test]
fn repeated_products_across_orders_count_every_time() {
    let mut db = spawn_db();
    let ada = db.add_customer("Ada");
    let first = db.add_order(&ada, now(), None, None);
    let second = db.add_order(&ada, now(), None, None);
    let desk = db.add_product("Desk", 300);
    db.link(&first, &[&desk]);
    db.link(&second, &[&desk]);

    let customers = assert_ok!(customers_with_spend_above(&mut db.conn, 500));

    assert_eq!(customers, vec![ada]);
}

#[test]
fn average_fulfillment_time_ignores_unshipped_orders() {
    let mut db = spawn_db();
    let ada = db.add_customer("Ada");
    let placed = now() - Duration::days(10);
    db.add_order(&ada, placed, Some(placed + Duration::hours(1)), None);
    db.add_order(&ada, placed, Some(placed + Duration::hours(3)), None);
    db.add_order(&ada, placed, None, None);

    let average = assert_ok!(average_fulfillment_time(&mut db.conn));

    assert_some_eq!(average, FulfillmentTime::from_seconds(2 * 3600));
    assert_eq!(average.map(|a| a.as_seconds()), Some(7_200));
    assert_eq!(average.map(|a| a.to_string()).as_deref(), Some("2:00:00"));
}

#[test]
fn average_fulfillment_time_past_a_day_is_not_truncated() {
    let mut db = spawn_db();
    let ada = db.add_customer("Ada");
    let placed = now() - Duration::days(10);
    db.add_order(&ada, placed, Some(placed + Duration::hours(26)), None);

    let average = assert_ok!(average_fulfillment_time(&mut db.conn));

    assert_eq!(average.map(|a| a.to_string()).as_deref(), Some("26:00:00"));
}

#[test]
fn average_fulfillment_time_is_none_without_shipments() {
    let mut db = spawn_db();
    let ada = db.add_customer("Ada");
    db.add_order(&ada, now(), None, None);

    assert_none!(assert_ok!(average_fulfillment_time(&mut db.conn)));
}

#[test]
fn order_relationships_resolve_through_joins() {
    let mut db = spawn_db();
    let ada = db.add_customer("Ada");
    let order = db.add_order(&ada, now(), None, None);
    let desk = db.add_product("Desk", 300);
    let lamp = db.add_product("Lamp", 40);
    db.add_product("Rug", 90);
    db.link(&order, &[&desk, &lamp]);

    let products = assert_ok!(products_for_order(&mut db.conn, &order));
    let owner = assert_ok!(customer_for_order(&mut db.conn, &order));

    assert_eq!(products, vec![desk, lamp]);
    assert_eq!(owner, ada);
}
