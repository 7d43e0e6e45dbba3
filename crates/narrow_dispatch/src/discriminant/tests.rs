use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_primitive_kind_of() {
    assert_eq!(PrimitiveKind::of(&Value::string("a")), Some(PrimitiveKind::String));
    assert_eq!(PrimitiveKind::of(&Value::Number(1.0)), Some(PrimitiveKind::Number));
    assert_eq!(PrimitiveKind::of(&Value::Bool(false)), Some(PrimitiveKind::Boolean));
    assert_eq!(PrimitiveKind::of(&Value::Null), None);
    assert_eq!(PrimitiveKind::of(&Value::Undefined), None);
    assert_eq!(PrimitiveKind::of(&Value::list(vec![])), None);
}

#[test]
fn test_discriminant_display() {
    assert_eq!(Discriminant::Undefined.to_string(), "undefined");
    assert_eq!(Discriminant::Null.to_string(), "null");
    assert_eq!(Discriminant::Nullish.to_string(), "null | undefined");
    assert_eq!(Discriminant::NUMBER.to_string(), "number");
    assert_eq!(Discriminant::tagged("circle").to_string(), "\"circle\"");
    assert_eq!(Discriminant::List.to_string(), "list");
    assert_eq!(Discriminant::Object.to_string(), "object");
}

#[test]
fn test_sentinels() {
    assert!(Discriminant::Null.is_sentinel());
    assert!(Discriminant::Undefined.is_sentinel());
    assert!(Discriminant::Nullish.is_sentinel());
    assert!(!Discriminant::Object.is_sentinel());
    assert!(!Discriminant::STRING.is_sentinel());
}

#[test]
fn test_null_and_object_are_distinct_keys() {
    assert_ne!(Discriminant::Null, Discriminant::Object);
    assert_ne!(Discriminant::Null, Discriminant::Undefined);
    assert_ne!(Discriminant::tagged("a"), Discriminant::tagged("b"));
}
