use anyhow::Result;
use ironcollect::*;
use serde_json::{json, Value};

#[test]
fn json_array_document() -> Result<()> {
    let c: Collection<i32> = from_json_array("[3, 1, 2]")?;
    assert_eq!(c.sort(), vec![1, 2, 3]);
    assert!(from_json_array::<i32>("{\"not\": \"array\"}").is_err());
    Ok(())
}

#[test]
fn json_array_records_feed_key_path_ops() -> Result<()> {
    let orders: Collection<Value> =
        from_json_array(r#"[{"status": "open", "total": 3}, {"status": "closed", "total": 4.5}]"#)?;
    assert_eq!(orders.sum_path("total"), 7.5);
    assert_eq!(orders.where_is("status", &json!("open")).len(), 1);
    Ok(())
}

#[test]
fn json_array_error_mentions_parse() {
    let err = from_json_array::<Value>("[1, 2").unwrap_err();
    assert!(format!("{err:#}").contains("parse JSON array"));
}

#[test]
fn collection_serializes_as_plain_array() -> Result<()> {
    let c = from_vec(vec![1, 2, 3]);
    assert_eq!(serde_json::to_string(&c)?, "[1,2,3]");
    let back: Collection<i32> = serde_json::from_str("[1,2,3]")?;
    assert_eq!(back, c);
    Ok(())
}
