#[cfg(test)]
mod tests {
    use super::super::{ExecutionContext, Value};
    use serde_json::json;

    #[test]
    fn test_typed_accessors() {
        let ctx = ExecutionContext::new()
            .with("id", 12)
            .with("sharedData", "shared")
            .with("enabled", true);

        assert_eq!(ctx.get_int("id"), Some(12));
        assert_eq!(ctx.get_text("sharedData"), Some("shared"));
        assert_eq!(ctx.get_bool("enabled"), Some(true));
        // Wrong type is a miss, not a coercion
        assert_eq!(ctx.get_int("sharedData"), None);
        assert_eq!(ctx.get_text("missing"), None);
        assert_eq!(ctx.len(), 3);
    }

    #[test]
    fn test_increment() {
        let mut ctx = ExecutionContext::new().with("id", 12);
        assert_eq!(ctx.increment("id", 1), 13);
        assert_eq!(ctx.get_int("id"), Some(13));

        assert_eq!(ctx.increment("fresh", 2), 2);

        ctx.insert("text_id", "41");
        assert_eq!(ctx.increment("text_id", 1), 42);
        assert_eq!(ctx.get("text_id"), Some(&Value::Int(42)));

        ctx.insert("garbage", "abc");
        assert_eq!(ctx.increment("garbage", 1), 1);
    }

    #[test]
    fn test_increment_saturates_at_bounds() {
        let mut ctx = ExecutionContext::new()
            .with("id", i64::MAX)
            .with("low", i64::MIN);

        assert_eq!(ctx.increment("id", 1), i64::MAX);
        assert_eq!(ctx.get_int("id"), Some(i64::MAX));
        assert_eq!(ctx.increment("low", -1), i64::MIN);
    }

    #[test]
    fn test_increment_truncates_floats() {
        let mut ctx = ExecutionContext::new().with("id", 12.0).with("neg", -2.9);

        assert_eq!(ctx.increment("id", 1), 13);
        assert_eq!(ctx.get("id"), Some(&Value::Int(13)));
        assert_eq!(ctx.increment("neg", 1), -1);
    }

    #[test]
    fn test_increment_uses_leading_integer_of_text() {
        let mut ctx = ExecutionContext::new()
            .with("decimal", "12.7")
            .with("suffixed", "  42px")
            .with("signed", "-5")
            .with("no_digits", "px42");

        assert_eq!(ctx.increment("decimal", 1), 13);
        assert_eq!(ctx.increment("suffixed", 1), 43);
        assert_eq!(ctx.increment("signed", 1), -4);
        assert_eq!(ctx.increment("no_digits", 1), 1);
    }

    #[test]
    fn test_increment_after_json_seed() {
        let mut ctx = ExecutionContext::from_json(json!({ "id": 12.0 })).unwrap();
        assert_eq!(ctx.increment("id", 1), 13);
    }

    #[test]
    fn test_from_json_object() {
        let ctx = ExecutionContext::from_json(json!({
            "id": 12,
            "ratio": 0.5,
            "name": "test01",
            "tags": ["a", "b"],
            "nested": { "flag": false },
            "nothing": null
        }))
        .expect("object should convert");

        assert_eq!(ctx.get_int("id"), Some(12));
        assert_eq!(ctx.get("ratio").and_then(Value::as_float), Some(0.5));
        assert_eq!(ctx.get_text("name"), Some("test01"));
        assert_eq!(
            ctx.get("tags").and_then(Value::as_list).map(|l| l.len()),
            Some(2)
        );
        let nested = ctx.get("nested").and_then(Value::as_map).unwrap();
        assert_eq!(nested.get("flag"), Some(&Value::Bool(false)));
        assert!(ctx.get("nothing").unwrap().is_null());
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(ExecutionContext::from_json(json!([1, 2, 3])).is_none());
        assert!(ExecutionContext::from_json(json!("text")).is_none());
    }

    #[test]
    fn test_to_json() {
        let ctx = ExecutionContext::new().with("id", 3).with("name", "x");
        assert_eq!(ctx.to_json(), json!({ "id": 3, "name": "x" }));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(7).to_string(), "7");
        assert_eq!(Value::from("hi").to_string(), "hi");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1,2]");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
