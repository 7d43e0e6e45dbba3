use super::*;
use crate::ParamKind;
use pretty_assertions::assert_eq;

#[test]
fn unhandled_shape_message() {
    let err = DispatchError::UnhandledShape {
        discriminant: Discriminant::BOOLEAN,
    };
    assert_eq!(err.to_string(), "unhandled shape: boolean");
    assert_eq!(err.code(), "N0001");
}

#[test]
fn no_matching_overload_message() {
    let err = DispatchError::NoMatchingOverload {
        name: "makeDate".to_string(),
        args: ArgShape::new([Discriminant::NUMBER, Discriminant::NUMBER]),
    };
    assert_eq!(
        err.to_string(),
        "no overload of `makeDate` matches arguments (number, number)"
    );
    assert_eq!(err.code(), "N0002");
}

#[test]
fn missing_field_message() {
    let err = DispatchError::MissingField {
        shape: Discriminant::tagged("circle"),
        field: "radius".to_string(),
    };
    assert_eq!(err.to_string(), "shape \"circle\" has no field `radius`");
    assert_eq!(err.code(), "N0003");
}

#[test]
fn table_error_messages() {
    assert_eq!(
        TableError::DuplicateHandler {
            discriminant: Discriminant::Null
        }
        .to_string(),
        "duplicate handler for shape null"
    );
    assert_eq!(
        TableError::UnreachableHandler {
            discriminant: Discriminant::Undefined,
            policy: NullPolicy::Loose,
        }
        .to_string(),
        "handler for shape undefined is unreachable under the loose null policy"
    );
    assert_eq!(
        TableError::DuplicateSignature {
            name: "f".to_string(),
            signature: Signature::new([ParamKind::number()]),
        }
        .to_string(),
        "overload `f(number)` is declared twice"
    );
}

#[test]
fn error_codes_are_distinct() {
    let codes = [
        TableError::DuplicateHandler {
            discriminant: Discriminant::List,
        }
        .code(),
        TableError::MissingHandler {
            discriminant: Discriminant::List,
        }
        .code(),
        TableError::UnreachableHandler {
            discriminant: Discriminant::Null,
            policy: NullPolicy::Loose,
        }
        .code(),
        TableError::EmptyOverloadSet {
            name: String::new(),
        }
        .code(),
        TableError::DuplicateSignature {
            name: String::new(),
            signature: Signature::new([]),
        }
        .code(),
        TableError::MisplacedDefaults {
            discriminant: Discriminant::NUMBER,
        }
        .code(),
    ];
    let mut unique = codes.to_vec();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), codes.len());
}
