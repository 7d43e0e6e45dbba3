use super::*;
use pretty_assertions::assert_eq;

fn num(n: f64) -> Value {
    Value::Number(n)
}

/// `makeDate(timestamp)` / `makeDate(m, d, y)`, reporting the chosen index.
fn make_date() -> OverloadSet<usize> {
    OverloadSet::builder("makeDate")
        .signature(Signature::new([ParamKind::number()]))
        .signature(Signature::new([
            ParamKind::number(),
            ParamKind::number(),
            ParamKind::number(),
        ]))
        .build(|call| Ok(call.signature_index()))
        .unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn test_arity_selects_signature() {
    let set = make_date();
    assert_eq!(set.call(&[num(1212.0)]), Ok(0));
    assert_eq!(set.call(&[num(5.0), num(4.0), num(4.0)]), Ok(1));
}

#[test]
fn test_two_arguments_match_nothing() {
    let set = make_date();
    assert_eq!(
        set.call(&[num(5.0), num(4.0)]),
        Err(DispatchError::NoMatchingOverload {
            name: "makeDate".to_string(),
            args: ArgShape::new([Discriminant::NUMBER, Discriminant::NUMBER]),
        })
    );
    assert!(set.call(&[]).is_err());
}

#[test]
fn test_kind_mismatch_matches_nothing() {
    let set = make_date();
    let err = set.call(&[Value::string("1212")]);
    assert_eq!(
        err.map_err(|e| e.to_string()),
        Err("no overload of `makeDate` matches arguments (string)".to_string())
    );
}

#[test]
fn test_exact_signature_preferred_over_union() {
    let set: OverloadSet<&'static str> = OverloadSet::builder("show")
        .signature(Signature::new([ParamKind::one_of([
            Discriminant::STRING,
            Discriminant::NUMBER,
        ])]))
        .signature(Signature::new([ParamKind::number()]))
        .signature(Signature::new([ParamKind::Any]))
        .build(|call| {
            Ok(match call.signature_index() {
                0 => "union",
                1 => "exact",
                _ => "any",
            })
        })
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(set.call(&[num(1.0)]), Ok("exact"));
    assert_eq!(set.call(&[Value::string("a")]), Ok("union"));
    assert_eq!(set.call(&[Value::Bool(true)]), Ok("any"));
}

#[test]
fn test_ties_go_to_first_declared() {
    let set: OverloadSet<usize> = OverloadSet::builder("pick")
        .signature(Signature::new([ParamKind::one_of([
            Discriminant::STRING,
            Discriminant::NUMBER,
        ])]))
        .signature(Signature::new([ParamKind::one_of([
            Discriminant::NUMBER,
            Discriminant::BOOLEAN,
        ])]))
        .build(|call| Ok(call.signature_index()))
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(set.call(&[num(0.0)]), Ok(0));
    assert_eq!(set.call(&[Value::Bool(false)]), Ok(1));
}

#[test]
fn test_body_sees_arguments() {
    let set: OverloadSet<String> = OverloadSet::builder("describe")
        .signature(Signature::new([ParamKind::string()]))
        .signature(Signature::new([ParamKind::string(), ParamKind::number()]))
        .build(|call| {
            let name = call.str(0).unwrap_or_default();
            Ok(match call.number(1) {
                Some(n) => format!("{name} x{n}"),
                None => name.to_string(),
            })
        })
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(set.call(&[Value::string("a")]), Ok("a".to_string()));
    assert_eq!(
        set.call(&[Value::string("a"), num(3.0)]),
        Ok("a x3".to_string())
    );
}

#[test]
fn test_require_reports_missing_argument() {
    let set: OverloadSet<f64> = OverloadSet::builder("pair")
        .signature(Signature::new([ParamKind::number()]))
        .signature(Signature::new([ParamKind::number(), ParamKind::number()]))
        .build(|call| {
            assert_eq!(call.name(), "pair");
            Ok(call.require(0)?.to_number() + call.require(1)?.to_number())
        })
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(set.call(&[num(1.0), num(2.0)]), Ok(3.0));
    assert_eq!(
        set.call(&[num(1.0)]),
        Err(DispatchError::NoMatchingOverload {
            name: "pair".to_string(),
            args: ArgShape::new([Discriminant::NUMBER]),
        })
    );
}

#[test]
fn test_null_argument_is_not_an_object() {
    let set: OverloadSet<usize> = OverloadSet::builder("take")
        .signature(Signature::new([ParamKind::Exact(Discriminant::Object)]))
        .signature(Signature::new([ParamKind::Exact(Discriminant::Null)]))
        .build(|call| Ok(call.signature_index()))
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(set.call(&[Value::Null]), Ok(1));
    assert_eq!(
        set.call(&[Value::object([("a", Value::Null)])]),
        Ok(0)
    );
}

#[test]
fn test_empty_set_rejected() {
    let result: Result<OverloadSet<()>, _> = OverloadSet::builder("nothing").build(|_| Ok(()));
    assert_eq!(
        result.err(),
        Some(TableError::EmptyOverloadSet {
            name: "nothing".to_string()
        })
    );
}

#[test]
fn test_duplicate_signature_rejected() {
    let result: Result<OverloadSet<()>, _> = OverloadSet::builder("twice")
        .signature(Signature::new([ParamKind::number()]))
        .signature(Signature::new([ParamKind::number()]))
        .build(|_| Ok(()));
    assert_eq!(
        result.err(),
        Some(TableError::DuplicateSignature {
            name: "twice".to_string(),
            signature: Signature::new([ParamKind::number()]),
        })
    );
}

#[test]
fn test_permuted_union_is_a_duplicate() {
    let result: Result<OverloadSet<()>, _> = OverloadSet::builder("f")
        .signature(Signature::new([ParamKind::one_of([
            Discriminant::STRING,
            Discriminant::NUMBER,
        ])]))
        .signature(Signature::new([ParamKind::one_of([
            Discriminant::NUMBER,
            Discriminant::STRING,
        ])]))
        .build(|_| Ok(()));
    assert_eq!(
        result.err().map(|e| e.to_string()),
        Some("overload `f(number | string)` is declared twice".to_string())
    );
}

#[test]
fn test_single_member_union_is_exact() {
    assert_eq!(
        ParamKind::one_of([Discriminant::NUMBER, Discriminant::NUMBER]),
        ParamKind::number()
    );

    // Built directly, bypassing `one_of`.
    let raw = ParamKind::OneOf([Discriminant::NUMBER].into_iter().collect());
    let result: Result<OverloadSet<()>, _> = OverloadSet::builder("g")
        .signature(Signature::new([ParamKind::number()]))
        .signature(Signature::new([raw]))
        .build(|_| Ok(()));
    assert_eq!(
        result.err(),
        Some(TableError::DuplicateSignature {
            name: "g".to_string(),
            signature: Signature::new([ParamKind::number()]),
        })
    );
}

#[test]
fn test_union_members_are_deduplicated() {
    let param = ParamKind::one_of([
        Discriminant::BOOLEAN,
        Discriminant::Null,
        Discriminant::BOOLEAN,
    ]);
    assert_eq!(param.to_string(), "null | boolean");
    assert_eq!(param.specificity(), 1);
}

#[test]
fn test_signature_display_and_score() {
    let sig = Signature::new([
        ParamKind::number(),
        ParamKind::one_of([Discriminant::STRING, Discriminant::Null]),
        ParamKind::Any,
    ]);
    assert_eq!(sig.to_string(), "(number, null | string, any)");
    assert_eq!(sig.arity(), 3);
    assert_eq!(
        sig.score(&[Discriminant::NUMBER, Discriminant::Null, Discriminant::List]),
        Some(3)
    );
    assert_eq!(
        sig.score(&[Discriminant::NUMBER, Discriminant::Undefined, Discriminant::List]),
        None
    );
    assert_eq!(sig.score(&[Discriminant::NUMBER]), None);
}

#[test]
fn test_resolve_is_stable() {
    let set = make_date();
    let args = [num(1.0), num(2.0), num(3.0)];
    let first = set.resolve(&args).map(|(i, s)| (i, s.clone()));
    let second = set.resolve(&args).map(|(i, s)| (i, s.clone()));
    assert_eq!(first, second);
    assert_eq!(set.name(), "makeDate");
    assert_eq!(set.signatures().len(), 2);
}
