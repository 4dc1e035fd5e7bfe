//! Writer example: an order pipeline that records an audit trail and its cost.
//!
//! Each step writes to a tuple log `(Vec<String>, Sum<u32>)`: the trail and the
//! number of storage operations it performed.
//!
//! Run with: cargo run --example audit_trail
//! With span instrumentation: cargo run --example audit_trail --features tracing

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

use scrivener::prelude::*;

type Trail = (Vec<String>, Sum<u32>);

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u64,
    lines: Vec<(String, u32)>,
    coupon: Option<String>,
}

fn note(entry: impl Into<String>) -> Tell<Trail> {
    tell((vec![entry.into()], Sum(0)))
}

fn storage_op(entry: impl Into<String>) -> Tell<Trail> {
    tell((vec![entry.into()], Sum(1)))
}

// ----------------------------------------------------------------------------
// Pipeline steps
// ----------------------------------------------------------------------------

fn load(id: u64) -> impl Writer<Output = Order, Log = Trail> {
    storage_op(format!("load order {}", id)).then(pure(Order {
        id,
        lines: vec![("keyboard".to_string(), 4500), ("cable".to_string(), 900)],
        coupon: (id % 2 == 0).then(|| "SPRING10".to_string()),
    }))
}

fn reject_empty(order: Order) -> impl Writer<Output = Order, Log = Trail> {
    note(format!("order {} has {} lines", order.id, order.lines.len()))
        .then(pure(order))
        .filter(|order| !order.lines.is_empty())
}

fn price(order: Order) -> impl Writer<Output = (Order, u32), Log = Trail> {
    let subtotal = fold_writer(order.lines.clone(), 0u32, |acc, (name, cents)| {
        note(format!("  {} {}", name, cents)).map(move |_| acc + cents)
    });

    let priced_order = order.clone();
    // Coupon lookups are noisy; keep their trail only when a discount applied.
    let discounted = subtotal
        .and_then(move |subtotal| {
            let coupon = order.coupon.clone();
            storage_op(format!("lookup coupon {:?}", coupon)).map(move |_| {
                let total = if coupon.is_some() {
                    subtotal - subtotal / 10
                } else {
                    subtotal
                };
                let keep_lookup = total != subtotal;
                let rewrite = move |(entries, cost): Trail| -> Trail {
                    if keep_lookup {
                        (entries, cost)
                    } else {
                        let entries = entries
                            .into_iter()
                            .filter(|e| !e.starts_with("lookup coupon"))
                            .collect();
                        (entries, cost)
                    }
                };
                (total, rewrite)
            })
        })
        .pass();

    discounted.map(move |total| (priced_order.clone(), total))
}

fn save(priced: (Order, u32)) -> impl Writer<Output = u32, Log = Trail> {
    let (order, total) = priced;
    storage_op(format!("save order {} total {}", order.id, total)).map(move |_| total)
}

fn checkout(id: u64) -> impl Writer<Output = u32, Log = Trail> {
    load(id)
        .and_then(reject_empty)
        .and_then(price)
        .and_then(save)
        .censor(|(entries, cost): Trail| {
            let redacted = entries
                .into_iter()
                .map(|e| e.replace("SPRING10", "****"))
                .collect();
            (redacted, cost)
        })
}

// ----------------------------------------------------------------------------
// A flaky step, contained two ways
// ----------------------------------------------------------------------------

fn notify_warehouse(id: u64) -> impl Writer<Output = (), Log = Trail> {
    note(format!("notify warehouse for {}", id)).map(move |_| {
        if id > 100 {
            panic!("warehouse {} unreachable", id);
        }
    })
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== Order pipeline ===\n");

    for id in [7u64, 8] {
        let pipeline = checkout(id).listens(|(entries, _)| entries.len());
        #[cfg(feature = "tracing")]
        let pipeline = pipeline.instrument(tracing::info_span!("checkout", order_id = id));

        let WriterOutcome {
            value,
            log: (entries, Sum(ops)),
        } = pipeline.run();
        println!("order {}: {:?}", id, value);
        for entry in &entries {
            println!("   {}", entry);
        }
        println!("   storage ops: {}\n", ops);
    }

    println!("=== Containing panics ===\n");
    let discarded = note("begin").then(try_write(notify_warehouse(404))).run();
    let kept = note("begin")
        .then(try_write_preserving(notify_warehouse(404)))
        .run();
    println!("   discard: {:?}", discarded.log.0);
    println!("   keep:    {:?}\n", kept.log.0);

    println!("=== Retrying with try_fun_with ===\n");
    let attempts = Cell::new(0u32);
    let job = try_fun_with(|| {
        attempts.set(attempts.get() + 1);
        let id = if attempts.get() < 3 { 404 } else { 42 };
        notify_warehouse(id)
    });
    for _ in 0..3 {
        match job.attempt() {
            Ok((_, (entries, _))) => println!("   ok: {:?}", entries),
            Err(err) => println!("   failed: {}", err),
        }
    }

    println!("\n=== Batch totals into a metrics sink ===\n");
    let revenue = AtomicU64::new(0);
    let batch = traverse_writer(vec![7u64, 9, 11], checkout)
        .map(|totals| totals.into_iter().map(u64::from).sum::<u64>())
        .for_each(|cents| revenue.store(cents, Ordering::SeqCst));
    let (_, (_, Sum(ops))) = batch.run().into_parts();
    println!(
        "   revenue {} cents over {} storage ops",
        revenue.load(Ordering::SeqCst),
        ops
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_without_coupon_drops_lookup() {
        let outcome = checkout(7).run();
        assert_eq!(outcome.value, Some(5400));
        assert!(!outcome.log.0.iter().any(|e| e.starts_with("lookup coupon")));
        assert_eq!(outcome.log.1, Sum(3));
    }

    #[test]
    fn test_checkout_with_coupon_keeps_redacted_lookup() {
        let outcome = checkout(8).run();
        assert_eq!(outcome.value, Some(4860));
        assert!(outcome.log.0.iter().any(|e| e.contains("****")));
        assert!(!outcome.log.0.iter().any(|e| e.contains("SPRING10")));
    }

    #[test]
    fn test_panic_policies() {
        let discarded = note("begin").then(try_write(notify_warehouse(404))).run();
        let kept = note("begin")
            .then(try_write_preserving(notify_warehouse(404)))
            .run();
        assert_eq!(discarded.log.0, vec!["begin".to_string()]);
        assert_eq!(kept.log.0.len(), 2);
    }
}
