use ironcollect::testing::*;
use ironcollect::*;
use serde_json::{json, Value};
use std::collections::HashMap;

#[test]
fn reduce_starts_from_absent() {
    let c = from_vec(vec![3, 1, 4]);
    let joined = c.reduce(|acc: Option<String>, x| match acc {
        None => Some(x.to_string()),
        Some(s) => Some(format!("{s}-{x}")),
    });
    assert_eq!(joined.as_deref(), Some("3-1-4"));

    let empty: Collection<i32> = Collection::new();
    assert_eq!(empty.reduce(|acc: Option<i32>, x| Some(acc.unwrap_or(0) + x)), None);
}

#[test]
fn reduce_with_carry_folds_left_to_right() {
    let c = from_vec(vec!["a", "b", "c"]);
    assert_eq!(c.reduce_with_carry(String::from(">"), |acc, s| acc + *s), ">abc");

    let empty: Collection<&str> = Collection::new();
    assert_eq!(empty.reduce_with_carry(7, |acc, _| acc + 1), 7);
}

#[test]
fn group_by_path_example() {
    let c = from_vec(vec![json!({"a": 1}), json!({"a": 2}), json!({"a": 1})]);
    let expected: HashMap<Key, Vec<Value>> = HashMap::from([
        (Key::Int(1), vec![json!({"a": 1}), json!({"a": 1})]),
        (Key::Int(2), vec![json!({"a": 2})]),
    ]);
    assert_groups_equal(&c.group_by_path("a"), &expected);
}

#[test]
fn group_by_path_accounts_for_every_element() {
    let orders = sample_orders();
    let groups = orders.group_by_path("total");
    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, orders.len());
    // order 4 has no total and lands in the null bucket
    assert_eq!(groups[&Key::Null].len(), 1);
}

#[test]
fn group_by_path_keeps_input_order_within_buckets() {
    let orders = sample_orders();
    let groups = orders.group_by_path("status");
    let open: Vec<_> = groups[&Key::from("open")].iter().map(|o| o["id"].clone()).collect();
    assert_eq!(open, vec![json!(1), json!(3), json!(5)]);
}

#[test]
fn group_by_path_with_rewrites_keys() {
    let people = sample_people();
    let decades = people.group_by_path_with("age", |_, raw| match raw {
        Key::Int(age) => format!("{}0s", age / 10),
        _ => "unknown".to_string(),
    });
    assert_eq!(decades["30s"].len(), 2);
    assert_eq!(decades["80s"].len(), 1);
    assert_eq!(decades.len(), 4);
}

#[test]
fn group_by_generic_key() {
    let words = from_vec(vec!["apple", "avocado", "banana", "blueberry", "cherry"]);
    let groups = words.group_by(|w| w.chars().next());
    assert_eq!(groups[&Some('a')], vec!["apple", "avocado"]);
    assert_eq!(groups[&Some('b')], vec!["banana", "blueberry"]);
    assert_eq!(groups[&Some('c')], vec!["cherry"]);
}

#[test]
fn expand_puts_element_in_every_named_bucket() {
    let posts = tagged_posts();
    let buckets = posts.expand("tags", false);
    let titles = |k: &str| -> Vec<Value> {
        buckets[&Key::from(k)].iter().map(|p| p["title"].clone()).collect()
    };
    assert_eq!(titles("rust"), vec![json!("ownership"), json!("lifetimes"), json!("lifetimes")]);
    assert_eq!(titles("memory"), vec![json!("ownership"), json!("gc")]);
    assert_eq!(titles("types"), vec![json!("lifetimes")]);
    assert_eq!(buckets.len(), 3);
}

#[test]
fn expand_unique_suppresses_duplicates_per_bucket() {
    let a = json!({"groups": [1, 2]});
    let b = json!({"groups": [2, 3, 3]});
    // source itself holds a duplicate of `a`
    let c = from_vec(vec![a.clone(), b.clone(), a.clone()]);
    let buckets = c.expand("groups", true);
    for bucket in buckets.values() {
        for (i, x) in bucket.iter().enumerate() {
            assert!(!bucket[i + 1..].contains(x), "duplicate in bucket {bucket:?}");
        }
    }
    let expected: HashMap<Key, Vec<Value>> = HashMap::from([
        (Key::Int(1), vec![a.clone()]),
        (Key::Int(2), vec![a, b.clone()]),
        (Key::Int(3), vec![b]),
    ]);
    assert_groups_equal(&buckets, &expected);
}

#[test]
fn expand_ignores_absent_and_non_array_values() {
    let c = from_vec(vec![json!({"k": "scalar"}), json!({}), json!({"k": null})]);
    assert!(c.expand("k", false).is_empty());
}

#[test]
fn combine_runs_any_combiner() {
    let c = from_vec(vec![4u64, 8, 15, 16, 23, 42]);
    assert_eq!(c.combine(Sum::<u64>::new()), 108);
    assert_eq!(c.combine(Count), 6);
    assert_eq!(c.combine(Min::<u64>::new()), Some(4));
    assert_eq!(c.combine(Max::<u64>::new()), Some(42));
    assert_eq!(c.combine(AverageF64), Some(18.0));

    let empty: Collection<u64> = Collection::new();
    assert_eq!(empty.combine(Max::<u64>::new()), None);
    assert_eq!(empty.combine(AverageF64), None);
}

#[test]
fn group_by_path_merges_equal_numbers_written_differently() {
    let c = from_vec(vec![json!({"a": 1}), json!({"a": 1.0}), json!({"a": 2})]);
    let groups = c.group_by_path("a");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&Key::Int(1)], vec![json!({"a": 1}), json!({"a": 1.0})]);
}

#[test]
fn group_by_path_keeps_large_unsigned_ids_apart() {
    let c = from_vec(vec![json!({"id": u64::MAX}), json!({"id": u64::MAX - 1})]);
    let groups = c.group_by_path("id");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&Key::from(u64::MAX)], vec![json!({"id": u64::MAX})]);
}
