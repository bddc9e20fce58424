//! Key-path addressing over JSON-shaped records.
//!
//! A [`KeyPath`] is a dotted string such as `"customer.address.city"`. Each
//! segment names a field of a JSON object, or (when it is a decimal number)
//! an index into a JSON array, so `"items.0.sku"` is also valid.
//!
//! Resolution goes through the [`Record`] trait. A path that does not exist
//! on an element resolves to `None` ("absent"); it is never an error. An
//! explicit JSON `null` is treated the same way.
//!
//! Resolved values are not hashable or ordered on their own, so this module
//! also provides:
//! - [`Key`] -- a hashable, totally ordered projection used as a bucket key
//! - [`compare_values`] -- the natural ordering used by path-based sorting
//! - [`display_value`] -- the string form used by `like` matching and implode

use ordered_float::OrderedFloat;
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;
use std::fmt;

/// A parsed dotted key path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted path. Never fails; empty segments simply never resolve.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walk the path from `root`, returning the value it addresses.
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut cur = root;
        for seg in &self.segments {
            cur = step(cur, seg)?;
        }
        present(cur)
    }
}

fn step<'a>(v: &'a Value, seg: &str) -> Option<&'a Value> {
    if seg.is_empty() {
        return None;
    }
    match v {
        Value::Object(map) => map.get(seg),
        Value::Array(items) => seg.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn present(v: &Value) -> Option<&Value> {
    if v.is_null() { None } else { Some(v) }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for KeyPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&String> for KeyPath {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Element types whose fields can be addressed by a [`KeyPath`].
pub trait Record {
    /// The value at `path`, or `None` when absent.
    fn resolve(&self, path: &KeyPath) -> Option<&Value>;
}

impl Record for Value {
    fn resolve(&self, path: &KeyPath) -> Option<&Value> {
        path.resolve(self)
    }
}

impl Record for Map<String, Value> {
    fn resolve(&self, path: &KeyPath) -> Option<&Value> {
        let (head, rest) = path.segments.split_first()?;
        let mut cur = self.get(head)?;
        for seg in rest {
            cur = step(cur, seg)?;
        }
        present(cur)
    }
}

impl<R: Record> Record for &R {
    fn resolve(&self, path: &KeyPath) -> Option<&Value> {
        (**self).resolve(path)
    }
}

/// Hashable projection of a resolved value, used to key buckets.
///
/// Numbers are keyed on their value, not their spelling: `1` and `1.0` share
/// a key. Whole numbers that fit in `i64` become [`Key::Int`], larger ones up
/// to `u64::MAX` become [`Key::UInt`], and everything else becomes
/// [`Key::Float`]. Arrays and objects are keyed by their compact JSON text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(OrderedFloat<f64>),
    Str(String),
    Json(String),
}

impl Key {
    /// Key for a possibly-absent value; absence maps to [`Key::Null`].
    #[must_use]
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Key::Null,
            Some(Value::Bool(b)) => Key::Bool(*b),
            Some(Value::Number(n)) => number_key(n),
            Some(Value::String(s)) => Key::Str(s.clone()),
            Some(other) => Key::Json(other.to_string()),
        }
    }
}

fn number_key(n: &Number) -> Key {
    match exact_integer(n) {
        Some(i) => i64::try_from(i)
            .map(Key::Int)
            .or_else(|_| u64::try_from(i).map(Key::UInt))
            .unwrap_or(Key::Float(OrderedFloat(i as f64))),
        None => Key::Float(OrderedFloat(n.as_f64().unwrap_or(f64::NAN))),
    }
}

/// The exact integer a number denotes, whether it was written as `3` or
/// `3.0`. `None` for numbers with a fractional part.
fn exact_integer(n: &Number) -> Option<i128> {
    if let Some(i) = n.as_i64() {
        return Some(i128::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(i128::from(u));
    }
    let f = n.as_f64()?;
    // Every finite f64 below 2^127 in magnitude converts to i128 exactly.
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 2f64.powi(127) {
        Some(f as i128)
    } else {
        None
    }
}

impl From<&Value> for Key {
    fn from(value: &Value) -> Self {
        Key::of(Some(value))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<u64> for Key {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(Key::UInt(u), Key::Int)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => f.write_str("null"),
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(i) => write!(f, "{i}"),
            Key::UInt(u) => write!(f, "{u}"),
            Key::Float(x) => write!(f, "{}", x.0),
            Key::Str(s) | Key::Json(s) => f.write_str(s),
        }
    }
}

fn rank(v: Option<&Value>) -> u8 {
    match v {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Object(_)) => 5,
    }
}

/// Natural ordering of resolved values.
///
/// Absent < bool < number < string < array < object. Numbers compare
/// numerically (whole numbers exactly, across the full `i64` and `u64`
/// ranges), strings lexicographically, arrays element by element and
/// objects by their serialized text.
///
/// Two values compare `Equal` exactly when [`Key::of`] gives them the same
/// key, except for objects, which are keyed and ordered by their text.
#[must_use]
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            match (exact_integer(x), exact_integer(y)) {
                (Some(i), Some(j)) => i.cmp(&j),
                _ => {
                    let fx = x.as_f64().unwrap_or(f64::NAN);
                    let fy = y.as_f64().unwrap_or(f64::NAN);
                    fx.total_cmp(&fy)
                }
            }
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Array(xs)), Some(Value::Array(ys))) => {
            for (x, y) in xs.iter().zip(ys) {
                let ord = compare_values(Some(x), Some(y));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            xs.len().cmp(&ys.len())
        }
        (Some(x @ Value::Object(_)), Some(y @ Value::Object(_))) => {
            x.to_string().cmp(&y.to_string())
        }
        _ => rank(a).cmp(&rank(b)),
    }
}

/// String form of a value: strings without quotes, everything else as
/// compact JSON.
#[must_use]
pub fn display_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_fields_and_indices() {
        let v = json!({"a": {"b": [{"c": 7}]}});
        assert_eq!(v.resolve(&"a.b.0.c".into()), Some(&json!(7)));
        assert_eq!(v.resolve(&"a.b.1.c".into()), None);
        assert_eq!(v.resolve(&"a.x".into()), None);
    }

    #[test]
    fn null_and_empty_segments_are_absent() {
        let v = json!({"a": null, "b": {"c": 1}});
        assert_eq!(v.resolve(&"a".into()), None);
        assert_eq!(v.resolve(&"b..c".into()), None);
        assert_eq!(v.resolve(&"".into()), None);
    }

    #[test]
    fn map_records_resolve_like_objects() {
        let v = json!({"a": {"b": 2}});
        let map = v.as_object().cloned().unwrap();
        assert_eq!(map.resolve(&"a.b".into()), Some(&json!(2)));
        assert_eq!(map.resolve(&"z".into()), None);
    }

    #[test]
    fn keys_normalize_numbers() {
        assert_eq!(Key::of(Some(&json!(3))), Key::Int(3));
        assert_eq!(Key::of(Some(&json!(2.5))), Key::Float(OrderedFloat(2.5)));
        assert_eq!(Key::of(None), Key::Null);
        assert_eq!(Key::of(Some(&json!([1, 2]))), Key::Json("[1,2]".into()));
    }

    #[test]
    fn whole_floats_share_the_integer_key() {
        assert_eq!(Key::of(Some(&json!(1.0))), Key::Int(1));
        assert_eq!(Key::of(Some(&json!(-4.0))), Key::Int(-4));
        assert_eq!(Key::of(Some(&json!(-0.0))), Key::Int(0));
        assert_eq!(Key::of(Some(&json!(1e300))), Key::Float(OrderedFloat(1e300)));
    }

    #[test]
    fn large_unsigned_numbers_keep_their_exact_key() {
        let max = Key::of(Some(&json!(u64::MAX)));
        let below = Key::of(Some(&json!(u64::MAX - 1)));
        assert_eq!(max, Key::UInt(u64::MAX));
        assert_ne!(max, below);
        assert_eq!(Key::from(u64::MAX), max);
        assert_eq!(Key::from(7u64), Key::Int(7));
        assert_eq!(max.to_string(), u64::MAX.to_string());
    }

    #[test]
    fn equal_numbers_compare_equal_and_share_a_key() {
        let pairs = [
            (json!(1), json!(1.0)),
            (json!(0), json!(-0.0)),
            (json!(9_223_372_036_854_775_808u64), json!(9_223_372_036_854_775_808.0)),
        ];
        for (a, b) in &pairs {
            assert_eq!(compare_values(Some(a), Some(b)), Ordering::Equal, "{a} vs {b}");
            assert_eq!(Key::from(a), Key::from(b), "{a} vs {b}");
        }
    }

    #[test]
    fn unsigned_numbers_order_exactly() {
        let max = json!(u64::MAX);
        let below = json!(u64::MAX - 1);
        assert_eq!(compare_values(Some(&below), Some(&max)), Ordering::Less);
        assert_eq!(compare_values(Some(&json!(-1)), Some(&max)), Ordering::Less);
        assert_eq!(compare_values(Some(&max), Some(&json!(i64::MAX))), Ordering::Greater);
    }

    #[test]
    fn value_ordering_ranks_types() {
        assert_eq!(compare_values(None, Some(&json!(false))), Ordering::Less);
        assert_eq!(compare_values(Some(&json!(2)), Some(&json!(10))), Ordering::Less);
        assert_eq!(compare_values(Some(&json!(1.5)), Some(&json!(1))), Ordering::Greater);
        assert_eq!(compare_values(Some(&json!("b")), Some(&json!("a"))), Ordering::Greater);
        assert_eq!(compare_values(Some(&json!(99)), Some(&json!("a"))), Ordering::Less);
        assert_eq!(
            compare_values(Some(&json!([1, 2])), Some(&json!([1, 2, 0]))),
            Ordering::Less
        );
    }

    #[test]
    fn display_strips_string_quotes() {
        assert_eq!(display_value(&json!("abc")), "abc");
        assert_eq!(display_value(&json!(12)), "12");
        assert_eq!(display_value(&json!({"a": 1})), "{\"a\":1}");
    }
}
