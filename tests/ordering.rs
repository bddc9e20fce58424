use ironcollect::testing::*;
use ironcollect::*;
use serde_json::json;
use std::cmp::Ordering;

#[test]
fn sort_natural_order() {
    let c = from_vec(vec![3, 1, 2, 5, 4]);
    assert_eq!(c.sort(), vec![1, 2, 3, 4, 5]);
    assert_eq!(c, vec![3, 1, 2, 5, 4]);
}

#[test]
fn sort_with_is_stable() {
    let c = from_vec(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')]);
    let sorted = c.sort_with(|a, b| a.0.cmp(&b.0));
    assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]);
}

#[test]
fn sort_by_path_is_stable_in_both_directions() {
    let people = sample_people();
    let asc = people.sort_by_path("age", true).pluck("name");
    assert_eq!(
        asc,
        vec![
            Some(json!("Ada")),
            Some(json!("Barbara")),
            Some(json!("Alan")),
            Some(json!("Edsger")),
            Some(json!("Grace"))
        ]
    );
    let desc = people.sort_by_path("age", false).pluck("name");
    assert_eq!(
        desc,
        vec![
            Some(json!("Grace")),
            Some(json!("Edsger")),
            Some(json!("Alan")),
            Some(json!("Ada")),
            Some(json!("Barbara"))
        ]
    );
}

#[test]
fn sort_by_path_descending_reverses_ascending_without_ties() {
    let orders = sample_orders().where_is("status", &json!("open"));
    let asc = orders.sort_by_path("total", true);
    let desc = orders.sort_by_path("total", false);
    assert_eq!(desc, asc.reverse().into_vec());
}

#[test]
fn sort_by_path_puts_absent_first_when_ascending() {
    let orders = sample_orders();
    let ids = orders.sort_by_path("total", true).pluck("id");
    assert_eq!(ids[0], Some(json!(4)));
    let ids = orders.sort_by_path("total", false).pluck("id");
    assert_eq!(ids[4], Some(json!(4)));
}

#[test]
fn sort_with_compare_values_on_mixed_json() {
    let c = from_vec(vec![json!("b"), json!(10), json!(null), json!(true), json!(2), json!("a")]);
    let sorted = c.sort_with(|a, b| compare_values(Some(a), Some(b)));
    assert_eq!(
        sorted,
        vec![json!(null), json!(true), json!(2), json!(10), json!("a"), json!("b")]
    );
}

#[test]
fn reverse_twice_is_identity() {
    let c = from_vec(vec![1, 2, 3, 4]);
    assert_eq!(c.reverse(), vec![4, 3, 2, 1]);
    assert_eq!(c.reverse().reverse(), c);
    assert!(Collection::<i32>::new().reverse().is_empty());
}

#[test]
fn slice_from_offset() {
    let c = from_vec(vec![1, 2, 3, 4, 5]);
    assert_eq!(c.slice(2), vec![3, 4, 5]);
    assert_eq!(c.slice(0), vec![1, 2, 3, 4, 5]);
    assert_eq!(c.slice(5), Vec::<i32>::new());
    assert_eq!(c.slice(42), Vec::<i32>::new());
}

#[test]
fn slice_negative_counts_from_end() {
    let c = from_vec(vec![1, 2, 3, 4, 5]);
    assert_eq!(c.slice(-2), vec![4, 5]);
    assert_eq!(c.slice(-5), vec![1, 2, 3, 4, 5]);
    assert_eq!(c.slice(-9), vec![1, 2, 3, 4, 5]);
}

#[test]
fn take_boundaries() {
    let c = from_vec(vec![1, 2, 3, 4, 5]);
    assert_eq!(c.take(0), Vec::<i32>::new());
    assert_eq!(c.take(5), vec![1, 2, 3, 4, 5]);
    assert_eq!(c.take(7), vec![1, 2, 3, 4, 5]);
    assert_eq!(c.take(-5), vec![1, 2, 3, 4, 5]);
    assert_eq!(c.take(-7), vec![1, 2, 3, 4, 5]);
    assert_eq!(c.take(-1), vec![5]);
}

#[test]
fn take_head_and_tail_rebuild_when_they_do_not_overlap() {
    let c = from_vec(vec![1, 2, 3, 4, 5, 6]);
    let n = 3;
    assert_eq!(c.take(n).join(&c.take(-n)), c);

    let c = from_vec(vec![1, 2, 3, 4, 5]);
    assert_ne!(c.take(3).join(&c.take(-3)), c);
}

#[test]
fn splice_removes_selected_elements() {
    let mut c = from_vec(vec![1, 2, 3, 4, 5]);
    assert_eq!(c.splice(2), vec![1, 2]);
    assert_eq!(c, vec![3, 4, 5]);
    assert_eq!(c.splice(-2), vec![4, 5]);
    assert_eq!(c, vec![3]);
    assert_eq!(c.splice(10), vec![3]);
    assert!(c.is_empty());
    assert!(c.splice(-3).is_empty());
}

#[test]
fn max_and_min_object() {
    let c = from_vec(vec!["pear", "apple", "zucchini", "fig"]);
    assert_eq!(c.max_object(), Some(&"zucchini"));
    assert_eq!(c.min_object(), Some(&"apple"));
    assert_eq!(Collection::<u8>::new().max_object(), None);
}

#[test]
fn max_and_min_object_path() {
    let people = sample_people();
    assert_eq!(people.max_object_path("name"), Some(json!("Grace")));
    assert_eq!(people.min_object_path("age"), Some(json!(36)));
    assert_eq!(people.max_object_path("nick"), Some(json!("prof")));
    assert_eq!(people.max_object_path("missing"), None);
}

#[test]
fn compare_values_orders_absent_first() {
    assert_eq!(compare_values(None, Some(&json!(0))), Ordering::Less);
    assert_eq!(compare_values(None, None), Ordering::Equal);
}

#[test]
fn json_values_sort_in_natural_order() {
    let c = from_vec(vec![json!("b"), json!(10), json!(null), json!(2.5), json!([1]), json!("a"), json!(false)]);
    assert_eq!(
        c.sort_values(),
        vec![json!(null), json!(false), json!(2.5), json!(10), json!("a"), json!("b"), json!([1])]
    );
    // numerically equal values keep input order
    let tied = from_vec(vec![json!(1.0), json!(0), json!(1)]);
    assert_eq!(tied.sort_values(), vec![json!(0), json!(1.0), json!(1)]);
}

#[test]
fn json_value_max_and_min() {
    let c = from_vec(vec![json!(3), json!("z"), json!(3.0), json!(null), json!(true)]);
    assert_eq!(c.max_value(), Some(&json!("z")));
    assert_eq!(c.min_value(), Some(&json!(null)));

    let nums = from_vec(vec![json!(7), json!(7.0), json!(-1)]);
    assert_eq!(nums.max_value(), Some(&json!(7)));
    assert_eq!(nums.min_value(), Some(&json!(-1)));
    assert_eq!(Collection::<serde_json::Value>::new().max_value(), None);
}
