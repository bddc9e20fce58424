//! Pre-built record sets for tests and examples.

use crate::{from_vec, Collection};
use serde_json::{json, Value};

/// Five orders with nested customer data, an items array and one order that
/// is missing its `total`.
///
/// # Example
///
/// ```
/// use ironcollect::testing::sample_orders;
///
/// assert_eq!(sample_orders().len(), 5);
/// ```
#[must_use]
pub fn sample_orders() -> Collection<Value> {
    from_vec(vec![
        json!({
            "id": 1, "status": "open", "total": 120.5,
            "customer": {"name": "Ada", "city": "London"},
            "items": [{"sku": "A1", "qty": 2}, {"sku": "B2", "qty": 1}]
        }),
        json!({
            "id": 2, "status": "closed", "total": 80,
            "customer": {"name": "Grace", "city": "New York"},
            "items": [{"sku": "A1", "qty": 1}]
        }),
        json!({
            "id": 3, "status": "open", "total": 42,
            "customer": {"name": "Linus", "city": "Helsinki"},
            "items": []
        }),
        json!({
            "id": 4, "status": "closed",
            "customer": {"name": "Ada", "city": "London"},
            "items": [{"sku": "C3", "qty": 5}]
        }),
        json!({
            "id": 5, "status": "open", "total": 7.5,
            "customer": {"name": "Barbara", "city": "Boston"},
            "items": [{"sku": "B2", "qty": 3}]
        }),
    ])
}

/// People with ages and (sometimes) nicknames; two share an age.
#[must_use]
pub fn sample_people() -> Collection<Value> {
    from_vec(vec![
        json!({"name": "Ada", "age": 36, "nick": "countess"}),
        json!({"name": "Grace", "age": 85}),
        json!({"name": "Alan", "age": 41, "nick": "prof"}),
        json!({"name": "Edsger", "age": 72}),
        json!({"name": "Barbara", "age": 36}),
    ])
}

/// Posts tagged with a list of tags; one tags "rust" twice and one has no
/// tag list at all.
#[must_use]
pub fn tagged_posts() -> Collection<Value> {
    from_vec(vec![
        json!({"title": "ownership", "tags": ["rust", "memory"]}),
        json!({"title": "lifetimes", "tags": ["rust", "rust", "types"]}),
        json!({"title": "gc", "tags": ["memory"]}),
        json!({"title": "untagged"}),
    ])
}
