//! Unit tests for value synthesis.

use chrono::{NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sql_datagen::synth::{TextKind, NULL_PROBABILITY};
use sql_datagen::{synthesize_literal, ColumnType, SqlValue, Synthesizer};

#[test]
fn test_nullable_null_fraction() {
    let synth = Synthesizer::new();
    let mut rng = StdRng::seed_from_u64(2024);
    let samples = 100_000;

    let nulls = (0..samples)
        .filter(|_| synth.value(&mut rng, "score", ColumnType::Int, true).is_null())
        .count();

    let fraction = nulls as f64 / samples as f64;
    assert!(
        (fraction - NULL_PROBABILITY).abs() < 0.01,
        "null fraction {} outside tolerance",
        fraction
    );
}

#[test]
fn test_bigint_literals_parse_as_i64() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1000 {
        let literal = synthesize_literal(&mut rng, "amount", "BIGINT", false);
        assert!(literal.parse::<i64>().is_ok(), "{}", literal);
    }
}

#[test]
fn test_int_range() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..1000 {
        let literal = synthesize_literal(&mut rng, "qty", "INT", false);
        assert!(literal.parse::<i32>().is_ok(), "{}", literal);
    }
}

#[test]
fn test_boolean_only_true_or_false() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1000 {
        let literal = synthesize_literal(&mut rng, "active", "BOOLEAN", false);
        assert!(literal == "true" || literal == "false", "{}", literal);
    }
}

// SMALLINT and TINYINT are signed SQL types, but values are drawn from
// non-negative ranges only.
#[test]
fn test_small_integer_ranges_are_non_negative() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..2000 {
        let small: i64 = synthesize_literal(&mut rng, "s", "SMALLINT", false)
            .parse()
            .unwrap();
        assert!((0..=32_767).contains(&small));

        let tiny: i64 = synthesize_literal(&mut rng, "t", "TINYINT", false)
            .parse()
            .unwrap();
        assert!((0..=255).contains(&tiny));
    }
}

#[test]
fn test_decimal_and_double_precision() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1000 {
        let decimal = synthesize_literal(&mut rng, "total", "DECIMAL(10,2)", false);
        let (_, frac) = decimal.split_once('.').unwrap();
        assert_eq!(frac.len(), 2);
        let value: f64 = decimal.parse().unwrap();
        assert!((0.01..=9999.99).contains(&value));

        let double = synthesize_literal(&mut rng, "ratio", "DOUBLE", false);
        let (_, frac) = double.split_once('.').unwrap();
        assert_eq!(frac.len(), 4);
        let value: f64 = double.parse().unwrap();
        assert!((0.0001..=99999.9999).contains(&value));
    }
}

#[test]
fn test_string_email_column() {
    let mut rng = StdRng::seed_from_u64(6);
    let literal = synthesize_literal(&mut rng, "contact_email", "STRING", false);
    assert!(literal.starts_with('\'') && literal.ends_with('\''));
    assert!(literal.contains('@'));
}

#[test]
fn test_unknown_type_is_quoted_word() {
    let mut rng = StdRng::seed_from_u64(7);
    let literal = synthesize_literal(&mut rng, "blob", "BINARY", false);
    assert!(literal.starts_with('\'') && literal.ends_with('\''));
    assert!(!literal[1..literal.len() - 1].contains(' '));
}

#[test]
fn test_timestamp_and_date_are_quoted() {
    let mut rng = StdRng::seed_from_u64(8);
    let ts = synthesize_literal(&mut rng, "created_at", "TIMESTAMP", false);
    let inner = ts.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')).unwrap();
    assert!(NaiveDateTime::parse_from_str(inner, "%Y-%m-%d %H:%M:%S").is_ok(), "{}", ts);

    let date = synthesize_literal(&mut rng, "birthday", "DATE", false);
    let inner = date.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')).unwrap();
    assert!(NaiveDate::parse_from_str(inner, "%Y-%m-%d").is_ok(), "{}", date);
}

#[test]
fn test_text_literals_never_break_quoting() {
    let synth = Synthesizer::new();
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..2000 {
        let literal = synth
            .value(&mut rng, "last_name", ColumnType::String, false)
            .to_sql();
        let inner = &literal[1..literal.len() - 1];
        assert!(!inner.replace("''", "").contains('\''), "{}", literal);
    }
}

#[test]
fn test_heuristic_order() {
    assert_eq!(TextKind::from_column_name("EMAIL"), TextKind::Email);
    assert_eq!(TextKind::from_column_name("mobile_phone"), TextKind::Phone);
    assert_eq!(TextKind::from_column_name("billing_city"), TextKind::City);
    assert_eq!(TextKind::from_column_name("state"), TextKind::State);
    assert_eq!(TextKind::from_column_name("country_code"), TextKind::Country);
    assert_eq!(TextKind::from_column_name("website"), TextKind::Url);
    assert_eq!(TextKind::from_column_name("device_guid"), TextKind::Uuid);
    assert_eq!(TextKind::from_column_name("unit_cost"), TextKind::Price);
    assert_eq!(TextKind::from_column_name("product"), TextKind::Product);
    assert_eq!(TextKind::from_column_name("category"), TextKind::Category);
    assert_eq!(TextKind::from_column_name("favorite_color"), TextKind::Color);
    assert_eq!(TextKind::from_column_name("description"), TextKind::Description);
    assert_eq!(TextKind::from_column_name("company"), TextKind::Company);
}

#[test]
fn test_description_word_count() {
    let mut rng = StdRng::seed_from_u64(10);
    for _ in 0..200 {
        let text = TextKind::Description.generate(&mut rng);
        let words = text.split_whitespace().count();
        assert!((5..=15).contains(&words), "{}", text);
    }
}

#[test]
fn test_value_enum_rendering() {
    assert_eq!(SqlValue::Null.to_sql(), "NULL");
    assert_eq!(SqlValue::Bool(true).to_sql(), "true");
    assert_eq!(SqlValue::Int(-3).to_sql(), "-3");
    assert_eq!(
        SqlValue::Decimal {
            units: 123_456,
            scale: 2
        }
        .to_sql(),
        "1234.56"
    );
}
