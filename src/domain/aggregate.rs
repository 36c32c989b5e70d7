//! In-memory cross-store join.
//!
//! Orders come from the relational store; customers and companies from the
//! document store. Everything is joined here with first-match linear scans
//! over the full result sets. Misses are not errors: name lookups fall back
//! to an empty string and numeric lookups to -1, and the affected record is
//! still emitted.

use chrono::{DateTime, Utc};

use super::records::{AggregatedOrder, Customer, CustomerCompany, Order, OrderItem};

/// Resolve a customer's company id, or -1 when the customer is unknown.
pub fn company_id_for_customer(customer_id: &str, customers: &[Customer]) -> i32 {
    for customer in customers {
        if customer.user_id == customer_id {
            return customer.company_id;
        }
    }

    -1
}

/// Resolve a company name, or "" when the id matches no company.
pub fn company_name_for_id(company_id: i32, companies: &[CustomerCompany]) -> String {
    for company in companies {
        if company.company_id == company_id {
            return company.company_name.clone();
        }
    }

    String::new()
}

/// Resolve a customer's display name, or "" when the customer is unknown.
pub fn customer_name_for_id(customer_id: &str, customers: &[Customer]) -> String {
    for customer in customers {
        if customer.user_id == customer_id {
            return customer.name.clone();
        }
    }

    String::new()
}

/// Resolve the unit price and quantity of the first item belonging to the
/// order, or (-1.0, -1) when no item matches. Orders with several items are
/// not summed across items.
pub fn price_and_quantity_for_order(order_id: i32, items: &[OrderItem]) -> (f64, i32) {
    for item in items {
        if item.order_id == order_id {
            return (item.price_per_unit, item.quantity);
        }
    }

    (-1.0, -1)
}

/// Join the four result sets into one denormalized record per order.
///
/// Output length equals the input order count and the input order is
/// preserved; unresolved lookups degrade to sentinel values instead of
/// dropping the record.
pub fn aggregate_orders(
    orders: &[Order],
    items: &[OrderItem],
    customers: &[Customer],
    companies: &[CustomerCompany],
) -> Vec<AggregatedOrder> {
    orders
        .iter()
        .map(|order| {
            let company_name =
                company_name_for_id(company_id_for_customer(&order.customer_id, customers), companies);
            let customer_name = customer_name_for_id(&order.customer_id, customers);
            let (price_per_unit, quantity) = price_and_quantity_for_order(order.id, items);
            let amount = price_per_unit * f64::from(quantity);

            // TODO: source delivered_amount from deliveries.delivered_quantity;
            // it currently mirrors total_amount.
            AggregatedOrder {
                order_name: order.order_name.clone(),
                customer_company: company_name,
                customer_name,
                created_at: format_created_at(order.created_at),
                delivered_amount: format_amount(amount),
                total_amount: format_amount(amount),
            }
        })
        .collect()
}

/// Render a creation time as e.g. "Jan 2th, 3:04 PM". The "th" suffix is a
/// fixed literal, whatever the day.
pub fn format_created_at(created_at: DateTime<Utc>) -> String {
    created_at.format("%b %-dth, %-I:%M %p").to_string()
}

fn format_amount(amount: f64) -> String {
    format!("{amount:.6}")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn order(id: i32, name: &str, customer_id: &str) -> Order {
        Order {
            id,
            order_name: name.to_string(),
            customer_id: customer_id.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 0).unwrap(),
        }
    }

    fn item(order_id: i32, price_per_unit: f64, quantity: i32) -> OrderItem {
        OrderItem {
            id: order_id * 100,
            order_id,
            price_per_unit,
            quantity,
            product: "widget".to_string(),
        }
    }

    fn customer(user_id: &str, name: &str, company_id: i32) -> Customer {
        Customer {
            user_id: user_id.to_string(),
            login: format!("{name}@example.com"),
            name: name.to_string(),
            company_id,
            credit_cards: String::new(),
        }
    }

    fn company(company_id: i32, name: &str) -> CustomerCompany {
        CustomerCompany {
            company_id,
            company_name: name.to_string(),
        }
    }

    // ── lookup helpers ────────────────────────────────────────────────────────

    #[test]
    fn company_id_lookup_returns_first_match() {
        let customers = vec![customer("c1", "Alice", 5), customer("c1", "Shadow", 9)];
        assert_eq!(company_id_for_customer("c1", &customers), 5);
    }

    #[test]
    fn company_id_lookup_misses_with_sentinel() {
        let customers = vec![customer("c1", "Alice", 5)];
        assert_eq!(company_id_for_customer("nope", &customers), -1);
    }

    #[test]
    fn company_name_lookup_misses_with_empty_string() {
        let companies = vec![company(5, "Acme")];
        assert_eq!(company_name_for_id(5, &companies), "Acme");
        assert_eq!(company_name_for_id(-1, &companies), "");
    }

    #[test]
    fn customer_name_lookup_misses_with_empty_string() {
        let customers = vec![customer("c1", "Alice", 5)];
        assert_eq!(customer_name_for_id("c1", &customers), "Alice");
        assert_eq!(customer_name_for_id("c2", &customers), "");
    }

    #[test]
    fn price_lookup_uses_first_matching_item_only() {
        let items = vec![item(1, 10.0, 3), item(1, 99.0, 99)];
        assert_eq!(price_and_quantity_for_order(1, &items), (10.0, 3));
    }

    #[test]
    fn price_lookup_misses_with_negative_sentinels() {
        assert_eq!(price_and_quantity_for_order(1, &[]), (-1.0, -1));
    }

    // ── aggregation ──────────────────────────────────────────────────────────

    #[test]
    fn aggregates_fully_resolvable_order() {
        let records = aggregate_orders(
            &[order(1, "first order", "c1")],
            &[item(1, 10.0, 3)],
            &[customer("c1", "Alice", 5)],
            &[company(5, "Acme")],
        );

        assert_eq!(
            records,
            vec![AggregatedOrder {
                order_name: "first order".to_string(),
                customer_company: "Acme".to_string(),
                customer_name: "Alice".to_string(),
                created_at: "Jan 2th, 3:04 PM".to_string(),
                delivered_amount: "30.000000".to_string(),
                total_amount: "30.000000".to_string(),
            }]
        );
    }

    #[test]
    fn unknown_customer_degrades_to_empty_names() {
        let records = aggregate_orders(
            &[order(1, "orphan", "ghost")],
            &[item(1, 2.5, 4)],
            &[customer("c1", "Alice", 5)],
            &[company(5, "Acme")],
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].customer_name, "");
        assert_eq!(records[0].customer_company, "");
        assert_eq!(records[0].total_amount, "10.000000");
    }

    #[test]
    fn unmatched_order_item_multiplies_sentinels() {
        // (-1) * (-1): the sentinel pair goes straight through the formula.
        let records = aggregate_orders(
            &[order(7, "no items", "c1")],
            &[],
            &[customer("c1", "Alice", 5)],
            &[company(5, "Acme")],
        );

        assert_eq!(records[0].delivered_amount, "1.000000");
        assert_eq!(records[0].total_amount, "1.000000");
    }

    #[test]
    fn output_preserves_input_length_and_order() {
        let orders = vec![
            order(3, "c", "x"),
            order(1, "a", "x"),
            order(2, "b", "x"),
        ];
        let records = aggregate_orders(&orders, &[], &[], &[]);

        assert_eq!(records.len(), 3);
        let names: Vec<&str> = records.iter().map(|r| r.order_name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_order_list_yields_empty_output() {
        let records = aggregate_orders(&[], &[item(1, 1.0, 1)], &[], &[]);
        assert!(records.is_empty());
    }

    // ── time formatting ──────────────────────────────────────────────────────

    #[test]
    fn formats_afternoon_time() {
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 0).unwrap();
        assert_eq!(format_created_at(t), "Jan 2th, 3:04 PM");
    }

    #[test]
    fn formats_morning_time() {
        let t = Utc.with_ymd_and_hms(2024, 6, 9, 9, 5, 0).unwrap();
        assert_eq!(format_created_at(t), "Jun 9th, 9:05 AM");
    }

    #[test]
    fn formats_midnight_as_twelve_am() {
        let t = Utc.with_ymd_and_hms(2024, 12, 31, 0, 30, 0).unwrap();
        assert_eq!(format_created_at(t), "Dec 31th, 12:30 AM");
    }

    #[test]
    fn day_suffix_is_always_th() {
        let t = Utc.with_ymd_and_hms(2024, 3, 21, 13, 0, 0).unwrap();
        assert_eq!(format_created_at(t), "Mar 21th, 1:00 PM");

        let t = Utc.with_ymd_and_hms(2024, 3, 1, 13, 0, 0).unwrap();
        assert_eq!(format_created_at(t), "Mar 1th, 1:00 PM");
    }

    #[test]
    fn amounts_render_with_six_decimals() {
        assert_eq!(format_amount(30.0), "30.000000");
        assert_eq!(format_amount(0.5), "0.500000");
        assert_eq!(format_amount(-1.0), "-1.000000");
    }
}
