//! Integration tests for the validation chain.
//!
//! Each check is exercised through the public entry points with the
//! default schema: missing value policy, per-check rules and the
//! contract violation channel.

use chainval_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn messages() -> ErrorMessages {
    ErrorMessages::new("required", "invalid")
}

/// Runs one check over `value` and returns the verdict with the emitted messages.
fn run(value: impl Into<Value>, check: impl FnOnce(&mut ValidationChain<'_>)) -> (bool, Vec<String>) {
    let messages = messages();
    let mut errors = Vec::new();
    let mut chain = validate(value, &messages, &mut errors);
    check(&mut chain);
    let valid = chain.into_valid();
    (valid, errors)
}

fn invalid() -> Vec<String> {
    vec!["invalid".to_string()]
}

// ============================================================================
// MISSING VALUE POLICY
// ============================================================================

type Check = fn(&mut ValidationChain<'_>);

fn every_check() -> [(&'static str, Check); 17] {
    [
        ("is_string", |c| {
            c.is_string(None, None);
        }),
        ("is_string_excluding", |c| {
            c.is_string_excluding(None, None, &Value::from(vec!["x"])).unwrap();
        }),
        ("is_string_enum", |c| {
            c.is_string_enum(&["a"]);
        }),
        ("is_number", |c| {
            c.is_number();
        }),
        ("is_float", |c| {
            c.is_float();
        }),
        ("is_date_iso", |c| {
            c.is_date_iso();
        }),
        ("is_date_iso8601_duration", |c| {
            c.is_date_iso8601_duration();
        }),
        ("is_boolean", |c| {
            c.is_boolean();
        }),
        ("is_object", |c| {
            c.is_object();
        }),
        ("is_object_not_empty", |c| {
            c.is_object_not_empty();
        }),
        ("is_object_id", |c| {
            c.is_object_id();
        }),
        ("is_email", |c| {
            c.is_email();
        }),
        ("is_uuid", |c| {
            c.is_uuid();
        }),
        ("is_array", |c| {
            c.is_array();
        }),
        ("is_array_match", |c| {
            c.is_array_match(&["a"]).unwrap();
        }),
        ("is_array_not_empty", |c| {
            c.is_array_not_empty();
        }),
        ("custom", |c| {
            c.custom(|_| false);
        }),
    ]
}

#[test]
fn missing_optional_value_passes_every_check() {
    for (name, check) in every_check() {
        let (valid, errors) = run(Value::Null, |c| {
            c.is_optional();
            check(c);
        });
        assert!(valid, "{name} flipped valid");
        assert!(errors.is_empty(), "{name} emitted {errors:?}");
    }
}

#[test]
fn missing_required_value_emits_one_required() {
    for (name, check) in every_check() {
        let (valid, errors) = run(Value::Null, check);
        assert!(!valid, "{name} left valid set");
        assert_eq!(errors, vec!["required".to_string()], "{name}");
    }
}

#[test]
fn absent_option_is_missing() {
    let (valid, errors) = run(None::<&str>, |c| {
        c.is_string(None, None);
    });
    assert!(!valid);
    assert_eq!(errors, vec!["required".to_string()]);
}

#[rstest]
#[case::empty_string(Value::from(""))]
#[case::zero(Value::from(0))]
#[case::false_(Value::from(false))]
#[case::empty_array(Value::Array(Vec::new()))]
fn falsy_values_are_present(#[case] value: Value) {
    let (_, errors) = run(value, |c| {
        c.custom(|_| true);
    });
    assert!(errors.is_empty());
}

// ============================================================================
// STRINGS
// ============================================================================

#[rstest]
#[case::empty_with_zero_min("", Some(0), Some(5), true)]
#[case::too_long("toolong!!", Some(0), Some(5), false)]
#[case::empty_unbounded("", None, None, true)]
#[case::empty_with_min("", Some(1), None, false)]
#[case::empty_with_only_max("", None, Some(3), false)]
#[case::within("abc", Some(2), Some(4), true)]
#[case::too_short("a", Some(2), Some(4), false)]
#[case::max_counts_chars("h\u{e9}llo", None, Some(5), true)]
fn is_string_bounds(
    #[case] input: &str,
    #[case] min: Option<usize>,
    #[case] max: Option<usize>,
    #[case] expected: bool,
) {
    let (valid, errors) = run(input, |c| {
        c.is_string(min, max);
    });
    assert_eq!(valid, expected);
    assert_eq!(errors.len(), usize::from(!expected));
}

#[rstest]
#[case::number(json!(5))]
#[case::boolean(json!(true))]
#[case::array(json!(["a"]))]
#[case::object(json!({ "a": "b" }))]
fn is_string_rejects_non_strings(#[case] input: serde_json::Value) {
    let (valid, errors) = run(input, |c| {
        c.is_string(None, None);
    });
    assert!(!valid);
    assert_eq!(errors, invalid());
}

#[test]
fn not_allowed_and_length_both_emit() {
    let blocked = Value::from(vec!["admin", "root"]);
    let (valid, errors) = run("root", |c| {
        c.is_string_excluding(Some(5), None, &blocked).unwrap();
    });
    assert!(!valid);
    assert_eq!(errors, vec!["invalid".to_string(), "invalid".to_string()]);
}

#[test]
fn not_allowed_alone() {
    let blocked = Value::from(vec!["admin"]);
    let (valid, errors) = run("admin", |c| {
        c.is_string_excluding(None, None, &blocked).unwrap();
    });
    assert!(!valid);
    assert_eq!(errors, invalid());

    let (valid, _) = run("alice", |c| {
        c.is_string_excluding(None, None, &blocked).unwrap();
    });
    assert!(valid);
}

#[test]
fn not_allowed_must_be_an_array() {
    let messages = messages();
    let mut errors = Vec::new();
    let mut chain = validate("admin", &messages, &mut errors);
    let err = chain
        .is_string_excluding(None, None, &Value::from("admin"))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"not-allowed values must be an array, got string");
    assert!(chain.valid());
    drop(chain);
    assert!(errors.is_empty());
}

#[rstest]
#[case::member("read", true)]
#[case::not_member("delete", false)]
#[case::prefix_only("rea", false)]
fn is_string_enum_membership(#[case] input: &str, #[case] expected: bool) {
    let (valid, errors) = run(input, |c| {
        c.is_string_enum(&["read", "write"]);
    });
    assert_eq!(valid, expected);
    assert_eq!(errors.len(), usize::from(!expected));
}

#[test]
fn is_string_enum_non_string_emits_once() {
    let (valid, errors) = run(1, |c| {
        c.is_string_enum(&["1"]);
    });
    assert!(!valid);
    assert_eq!(errors, invalid());
}

// ============================================================================
// NUMBERS
// ============================================================================

#[rstest]
#[case::string_five(Value::from("5"), false)]
#[case::five(Value::from(5), true)]
#[case::negative(Value::from(-12), true)]
#[case::nan(Value::from(f64::NAN), false)]
#[case::infinity(Value::from(f64::INFINITY), false)]
#[case::fraction(Value::from(2.5), false)]
#[case::unsafe_integer(Value::from(9_007_199_254_740_993_u64), false)]
#[case::boolean(Value::from(true), false)]
fn is_number_cases(#[case] input: Value, #[case] expected: bool) {
    let (valid, errors) = run(input, |c| {
        c.is_number();
    });
    assert_eq!(valid, expected);
    assert_eq!(errors.len(), usize::from(!expected));
}

#[rstest]
#[case::fraction(Value::from(2.5), true)]
#[case::integer(Value::from(3), true)]
#[case::nan(Value::from(f64::NAN), false)]
#[case::string(Value::from("2.5"), false)]
fn is_float_cases(#[case] input: Value, #[case] expected: bool) {
    let (valid, _) = run(input, |c| {
        c.is_float();
    });
    assert_eq!(valid, expected);
}

// ============================================================================
// TEMPORAL
// ============================================================================

#[rstest]
#[case::date("2024-02-29", true)]
#[case::datetime_utc("2024-02-29T10:15:00Z", true)]
#[case::datetime_offset("2024-02-29T10:15:00.250+02:00", true)]
#[case::not_leap("2023-02-29", false)]
#[case::slashes("2024/02/29", false)]
fn is_date_iso_cases(#[case] input: &str, #[case] expected: bool) {
    let (valid, _) = run(input, |c| {
        c.is_date_iso();
    });
    assert_eq!(valid, expected);
}

#[rstest]
#[case::days("P3D", true)]
#[case::mixed("P1Y2M10DT2H30M", true)]
#[case::weeks("P2W", true)]
#[case::fractional_seconds("PT0.5S", true)]
#[case::bare_p("P", false)]
#[case::dangling_t("PT", false)]
#[case::no_prefix("3D", false)]
#[case::out_of_order("PT5S3M", false)]
fn is_duration_cases(#[case] input: &str, #[case] expected: bool) {
    let (valid, errors) = run(input, |c| {
        c.is_date_iso8601_duration();
    });
    assert_eq!(valid, expected);
    assert_eq!(errors.len(), usize::from(!expected));
}

#[test]
fn duration_must_be_a_string() {
    let (valid, errors) = run(3, |c| {
        c.is_date_iso8601_duration();
    });
    assert!(!valid);
    assert_eq!(errors, invalid());
}

// ============================================================================
// SHAPES
// ============================================================================

#[rstest]
#[case::true_(json!(true), true)]
#[case::false_(json!(false), true)]
#[case::string(json!("true"), false)]
#[case::one(json!(1), false)]
fn is_boolean_cases(#[case] input: serde_json::Value, #[case] expected: bool) {
    let (valid, _) = run(input, |c| {
        c.is_boolean();
    });
    assert_eq!(valid, expected);
}

#[rstest]
#[case::empty_object(json!({}), false)]
#[case::populated(json!({ "a": 1 }), true)]
#[case::array(json!([1]), false)]
#[case::string(json!("{}"), false)]
fn is_object_not_empty_cases(#[case] input: serde_json::Value, #[case] expected: bool) {
    let (valid, errors) = run(input, |c| {
        c.is_object_not_empty();
    });
    assert_eq!(valid, expected);
    assert_eq!(errors.len(), usize::from(!expected));
}

#[test]
fn is_object_accepts_empty() {
    let (valid, _) = run(json!({}), |c| {
        c.is_object();
    });
    assert!(valid);
}

#[rstest]
#[case::empty(json!([]), false)]
#[case::populated(json!([null]), true)]
#[case::object(json!({ "0": 1 }), false)]
fn is_array_not_empty_cases(#[case] input: serde_json::Value, #[case] expected: bool) {
    let (valid, errors) = run(input, |c| {
        c.is_array_not_empty();
    });
    assert_eq!(valid, expected);
    assert_eq!(errors.len(), usize::from(!expected));
}

#[rstest]
#[case::single_match(json!("a"), true)]
#[case::single_miss(json!("c"), false)]
#[case::stops_at_c(json!(["a", "b", "c"]), false)]
#[case::all_match(json!(["a", "b"]), true)]
#[case::empty(json!([]), true)]
#[case::number(json!(1), false)]
#[case::object(json!({ "a": "a" }), false)]
fn is_array_match_cases(#[case] input: serde_json::Value, #[case] expected: bool) {
    let (valid, errors) = run(input, |c| {
        c.is_array_match(&["a", "b"]).unwrap();
    });
    assert_eq!(valid, expected);
    assert_eq!(errors.len(), usize::from(!expected));
}

#[test]
fn is_array_match_is_anchored() {
    let (valid, _) = run(json!(["ab"]), |c| {
        c.is_array_match(&["a", "b"]).unwrap();
    });
    assert!(!valid);
}

#[test]
fn is_array_match_bad_pattern_is_contract_violation() {
    let messages = messages();
    let mut errors = Vec::new();
    let mut chain = validate(json!(["a"]), &messages, &mut errors);
    let err = chain.is_array_match(&["[a"]).unwrap_err();
    assert!(matches!(err, ContractViolation::InvalidPattern(_)));
    assert!(chain.valid());
}

// ============================================================================
// IDENTIFIERS
// ============================================================================

#[rstest]
#[case::object_id("507f1f77bcf86cd799439011", true)]
#[case::short("507f1f77", false)]
#[case::non_hex("zzzf1f77bcf86cd799439011", false)]
fn is_object_id_cases(#[case] input: &str, #[case] expected: bool) {
    let (valid, _) = run(input, |c| {
        c.is_object_id();
    });
    assert_eq!(valid, expected);
}

#[rstest]
#[case::plain("user@example.com", true)]
#[case::subdomain("a.b+tag@mail.example.co", true)]
#[case::no_tld("x@x", false)]
#[case::no_at("user.example.com", false)]
fn is_email_cases(#[case] input: &str, #[case] expected: bool) {
    let (valid, _) = run(input, |c| {
        c.is_email();
    });
    assert_eq!(valid, expected);
}

#[rstest]
#[case::v1("c232ab00-9414-11ec-b3c8-9f6bdeced846", true)]
#[case::v4("f47ac10b-58cc-4372-a567-0e02b2c3d479", true)]
#[case::v5("886313e1-3b8a-5372-9b90-0c9aee199e5d", false)]
#[case::garbage("f47ac10b-58cc", false)]
fn is_uuid_cases(#[case] input: &str, #[case] expected: bool) {
    let (valid, _) = run(input, |c| {
        c.is_uuid();
    });
    assert_eq!(valid, expected);
}

// ============================================================================
// LIFECYCLE
// ============================================================================

#[test]
fn end_to_end_invalid_email() {
    let messages = ErrorMessages::new("email is required", "email is invalid");
    let mut errors = Vec::new();
    let valid = validate("x@x", &messages, &mut errors).is_email().valid();
    assert!(!valid);
    assert_eq!(errors, vec!["email is invalid".to_string()]);
}

#[test]
fn end_to_end_optional_missing_string() {
    let messages = messages();
    let mut errors = Vec::new();
    let valid = validate(Value::Null, &messages, &mut errors)
        .is_optional()
        .is_string(None, None)
        .valid();
    assert!(valid);
    assert!(errors.is_empty());
}

#[test]
fn is_valid_skips_action_after_failure() {
    let messages = messages();
    let mut errors = Vec::new();
    let mut sanitized = None;
    validate("  Alice ", &messages, &mut errors)
        .is_string(Some(1), Some(20))
        .is_valid(|| sanitized = Some("Alice"));
    validate(42, &messages, &mut errors)
        .is_string(Some(1), Some(20))
        .is_valid(|| sanitized = Some("unreachable"));
    assert_eq!(sanitized, Some("Alice"));
    assert_eq!(errors, invalid());
}

#[test]
fn errors_accumulate_across_chains_with_prefixes() {
    let body = json!({ "email": "nope", "age": "ten", "tags": ["a", "z"] });
    let messages = ErrorMessages::new("is required", "is invalid");
    let mut errors = Vec::new();

    validate_prefixed(body.get("email").cloned(), &messages, &mut errors, "email ").is_email();
    validate_prefixed(body.get("age").cloned(), &messages, &mut errors, "age ").is_number();
    validate_prefixed(body.get("name").cloned(), &messages, &mut errors, "name ")
        .is_string(Some(1), None);
    validate_prefixed(body.get("tags").cloned(), &messages, &mut errors, "tags ")
        .is_array_match(&["a", "b"])
        .unwrap();
    validate_prefixed(body.get("bio").cloned(), &messages, &mut errors, "bio ")
        .is_optional()
        .is_string(None, Some(200));

    insta::assert_snapshot!(errors.join("\n"), @r"
    email is invalid
    age is invalid
    name is required
    tags is invalid
    ");
}

#[test]
fn custom_schema_replaces_primitives() {
    struct Lenient;

    impl PrimitiveSchema for Lenient {
        fn string(&self, _: &Value, _: Option<usize>, _: Option<usize>) -> Result<(), ValidationError> {
            Ok(())
        }
        fn integer(&self, _: &Value) -> Result<(), ValidationError> {
            Ok(())
        }
        fn number(&self, _: &Value) -> Result<(), ValidationError> {
            Ok(())
        }
        fn iso_date(&self, _: &Value) -> Result<(), ValidationError> {
            Ok(())
        }
        fn duration(&self, text: &str) -> Result<Duration, DurationError> {
            parse_duration(text)
        }
        fn boolean(&self, _: &Value) -> Result<(), ValidationError> {
            Ok(())
        }
        fn object(&self, _: &Value) -> Result<(), ValidationError> {
            Ok(())
        }
        fn array(&self, _: &Value) -> Result<(), ValidationError> {
            Ok(())
        }
        fn object_id(&self, _: &Value) -> Result<(), ValidationError> {
            Ok(())
        }
        fn email(&self, _: &Value) -> Result<(), ValidationError> {
            Ok(())
        }
        fn uuid(&self, _: &Value) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    let messages = messages();
    let mut errors = Vec::new();
    let mut more = Vec::new();
    let mut chain = validate("x@x", &messages, &mut errors).with_schema(Lenient);
    chain.is_email().is_uuid();
    assert!(chain.valid());

    // the missing value policy stays with the chain
    chain.rebind(Value::Null, &messages, &mut more, "");
    assert!(!chain.is_email().valid());
    drop(chain);
    assert!(errors.is_empty());
    assert_eq!(more, vec!["required".to_string()]);
}

#[test]
fn configured_schema_counts_bytes() {
    let schema = StandardSchema::with_config(SchemaConfig {
        length_mode: LengthMode::Bytes,
        ..SchemaConfig::default()
    });
    let messages = messages();
    let mut errors = Vec::new();
    let valid = validate("h\u{e9}llo", &messages, &mut errors)
        .with_schema(schema)
        .is_string(None, Some(5))
        .valid();
    assert!(!valid);
}
