use super::*;
use pretty_assertions::assert_eq;

fn run(scenario: Scenario, config: &DispatchConfig) -> Vec<String> {
    scenario
        .run(config)
        .unwrap_or_else(|e| panic!("{} should run: {e}", scenario.name()))
}

fn strict() -> DispatchConfig {
    DispatchConfig::default()
}

#[test]
fn test_names_round_trip() {
    for scenario in Scenario::ALL {
        assert_eq!(Scenario::from_name(scenario.name()), Some(scenario));
        assert!(!scenario.description().is_empty());
    }
    assert_eq!(Scenario::from_name("print-everything"), None);
}

#[test]
fn test_every_scenario_runs_under_both_policies() {
    for config in [strict(), DispatchConfig::loose()] {
        for scenario in Scenario::ALL {
            assert!(!run(scenario, &config).is_empty(), "{}", scenario.name());
        }
    }
}

#[test]
fn test_print_id() {
    assert_eq!(
        run(Scenario::PrintId, &strict()),
        vec![
            r#"printID("hello") -> HELLO"#,
            "printID(42) -> 142",
            "printID(true) -> error[N0001]: unhandled shape: boolean",
        ]
    );
}

#[test]
fn test_print_all_keeps_null_apart() {
    assert_eq!(
        run(Scenario::PrintAll, &strict()),
        vec![
            r#"printAll("hello"):"#,
            "  hello",
            r#"printAll(["a", "b"]):"#,
            "  a",
            "  b",
            "printAll(null):",
            "  (nothing to print)",
            "printAll(undefined):",
            "  error[N0001]: unhandled shape: undefined",
        ]
    );
}

#[test]
fn test_print_all_loose_covers_undefined() {
    let lines = run(Scenario::PrintAll, &DispatchConfig::loose());
    assert_eq!(
        lines[lines.len() - 2..],
        ["printAll(undefined):", "  (nothing to print)"]
    );
    assert!(lines.iter().all(|line| !line.contains("error")));
}

#[test]
fn test_multiply_value() {
    assert_eq!(
        run(Scenario::MultiplyValue, &strict()),
        vec![
            "multiplyValue({ value: 3 }, 2) -> value: 6",
            "multiplyValue({ value: null }, 2) -> value: null",
            "multiplyValue({ value: undefined }, 2) -> value: undefined",
            "multiplyValue({}, 2) -> value: undefined",
            r#"multiplyValue({ value: "3" }, 2) -> error[N0001]: unhandled shape: string"#,
            "null == undefined: true, null === undefined: false",
            "null == null: true, null === null: true",
            "undefined == undefined: true, undefined === undefined: true",
        ]
    );
}

#[test]
fn test_equality_narrows_to_strings() {
    assert_eq!(
        run(Scenario::Equality, &strict()),
        vec![
            r#"example("Hi", "Hi") -> HI hi"#,
            "example(1, true) -> 1 true",
            r#"example("1", true) -> 1 true"#,
            r#"example(true, "a") -> error[N0002]: no overload of `example` matches arguments (boolean, string)"#,
        ]
    );
}

#[test]
fn test_make_date() {
    assert_eq!(
        run(Scenario::MakeDate, &strict()),
        vec![
            "makeDate(12345678) -> Date(timestamp 12345678)",
            "makeDate(5, 5, 5) -> Date(5-5-5)",
            "makeDate(1, 3) -> error[N0002]: no overload of `makeDate` matches arguments (number, number)",
        ]
    );
}

#[test]
fn test_made_date_display() {
    assert_eq!(MadeDate::Timestamp(0.0).to_string(), "Date(timestamp 0)");
    let date = MadeDate::Calendar {
        year: 2024.0,
        month: 2.0,
        day: 29.0,
    };
    assert_eq!(date.to_string(), "Date(2024-2-29)");
}

#[test]
fn test_paint_shape() {
    assert_eq!(
        run(Scenario::PaintShape, &strict()),
        vec![
            r#"paintShape({ kind: "circle", radius: 2 }) -> circle r=2 at (0, 0)"#,
            r#"paintShape({ kind: "square", side: 3, xPos: 5 }) -> square side=3 at (5, 0)"#,
            r#"paintShape({ kind: "circle", radius: 1, xPos: undefined, yPos: null }) -> circle r=1 at (0, null)"#,
            r#"paintShape({ kind: "circle" }) -> error[N0003]: shape "circle" has no field `radius`"#,
            r#"paintShape({ base: 4, kind: "triangle" }) -> error[N0001]: unhandled shape: "triangle""#,
            "paintShape({ radius: 2 }) -> error[N0001]: unhandled shape: object",
        ]
    );
}

#[test]
fn test_paint_shape_custom_tag_field() {
    let lines = run(Scenario::PaintShape, &strict().with_tag_field("type"));
    assert_eq!(
        lines[0],
        r#"paintShape({ radius: 2, type: "circle" }) -> circle r=2 at (0, 0)"#
    );
}

#[test]
fn test_truthiness() {
    let lines = run(Scenario::Truthiness, &strict());
    assert_eq!(lines.len(), 9);
    assert_eq!(
        lines[0],
        r#"Boolean(0) = false, typeof 0 = "number", shape = number (primitive rule)"#
    );
    assert_eq!(
        lines[4],
        r#"Boolean(null) = false, typeof null = "object", shape = null (sentinel rule)"#
    );
    assert_eq!(
        lines[7],
        r#"Boolean([]) = true, typeof [] = "object", shape = list (structure rule)"#
    );
}

#[test]
fn test_truthiness_lists_every_falsy_value_first() {
    let lines = run(Scenario::Truthiness, &strict());
    let falsy: Vec<bool> = lines.iter().map(|l| l.contains(") = false,")).collect();
    assert_eq!(
        falsy,
        vec![true, true, true, true, true, true, false, false, false]
    );
}

#[test]
fn test_truthiness_loose_merges_sentinels() {
    let lines = run(Scenario::Truthiness, &DispatchConfig::loose());
    assert!(lines[3].ends_with("shape = null | undefined (sentinel rule)"));
    assert!(lines[4].ends_with("shape = null | undefined (sentinel rule)"));
}
