use std::borrow::Cow;

use chrono::{TimeDelta, TimeZone, Utc};
use proptest::prelude::*;
use schema_kind::{
    describe, infer_kind, validate_kind_identity, validate_representation, validate_value, Kind,
    KindError, NativeType, Value,
};

/// One conforming value for every kind.
fn conforming_value(kind: Kind) -> Value<'static> {
    match kind {
        Kind::String => Value::from("hello"),
        Kind::Bytes => Value::from(vec![0xde_u8, 0xad]),
        Kind::Int8 => Value::Int8(i8::MIN),
        Kind::Uint8 => Value::Uint8(u8::MAX),
        Kind::Int16 => Value::Int16(-300),
        Kind::Uint16 => Value::Uint16(300),
        Kind::Int32 => Value::Int32(-70_000),
        Kind::Uint32 => Value::Uint32(70_000),
        Kind::Int64 => Value::Int64(i64::MIN),
        Kind::Uint64 => Value::Uint64(u64::MAX),
        Kind::Integer => Value::from("-123456789012345678901234567890"),
        Kind::Decimal => Value::from("-1.25E-3"),
        Kind::Bool => Value::Bool(false),
        Kind::Time => Value::Time(Utc.timestamp_opt(0, 0).unwrap()),
        Kind::Duration => Value::Duration(TimeDelta::nanoseconds(-1)),
        Kind::Float32 => Value::Float32(f32::INFINITY),
        Kind::Float64 => Value::Float64(0.1),
        Kind::Bech32Address => Value::from(vec![0u8; 20]),
        Kind::Enum => Value::from("ACTIVE"),
        Kind::Json => Value::json(&br#"{"a":[1,2,{"b":null}]}"#[..]),
        Kind::Invalid => unreachable!("sentinel has no values"),
    }
}

#[test]
fn every_kind_accepts_its_conforming_value() {
    for kind in Kind::ALL {
        let value = conforming_value(kind);
        assert_eq!(validate_representation(kind, &value), Ok(()), "{kind}");
        assert_eq!(validate_value(kind, &value), Ok(()), "{kind}");
    }
}

#[test]
fn unambiguous_kinds_round_trip_through_inference() {
    let ambiguous = [Kind::Integer, Kind::Decimal, Kind::Bech32Address, Kind::Enum];
    for kind in Kind::ALL {
        let inferred = infer_kind(&conforming_value(kind));
        if ambiguous.contains(&kind) {
            assert_ne!(inferred, kind);
            assert!(inferred == Kind::String || inferred == Kind::Bytes);
        } else {
            assert_eq!(inferred, kind);
        }
    }
}

#[test]
fn integer_grammar_examples() {
    let check = |s: &str| validate_value(Kind::Integer, &Value::from(s));
    assert!(check("123").is_ok());
    assert!(check("-123").is_ok());
    assert!(check("1".repeat(100).as_str()).is_ok());
    for bad in ["", "12.3", "+123", " 123"] {
        assert!(matches!(check(bad), Err(KindError::InvalidFormat { .. })), "{bad:?}");
    }
    assert!(matches!(
        check("1".repeat(101).as_str()),
        Err(KindError::InvalidFormat { .. })
    ));
}

#[test]
fn decimal_grammar_examples() {
    let check = |s: &str| validate_value(Kind::Decimal, &Value::from(s));
    assert!(check("123.45").is_ok());
    assert!(check("1e10").is_ok());
    assert!(check("1E-5").is_ok());
    assert!(check(format!("0.{}", "1".repeat(50)).as_str()).is_ok());
    for bad in ["1e100", "abc", ""] {
        assert!(matches!(check(bad), Err(KindError::InvalidFormat { .. })), "{bad:?}");
    }
    assert!(matches!(
        check(format!("0.{}", "1".repeat(51)).as_str()),
        Err(KindError::InvalidFormat { .. })
    ));
}

#[test]
fn json_document_examples() {
    assert!(validate_value(Kind::Json, &Value::json(&br#"{"a":1}"#[..])).is_ok());
    let err = validate_value(Kind::Json, &Value::json(&br#"{"a":}"#[..])).unwrap_err();
    assert_eq!(
        err,
        KindError::InvalidFormat {
            kind: Kind::Json,
            value: r#"{"a":}"#.to_string(),
        }
    );
    let owned = Value::json(Cow::Owned(b"[true]".to_vec()));
    assert!(validate_value(Kind::Json, &owned).is_ok());
}

#[test]
fn error_messages_carry_context() {
    let err = validate_value(Kind::Uint8, &Value::Int8(1)).unwrap_err();
    assert_eq!(
        err,
        KindError::TypeMismatch {
            expected: NativeType::Uint8,
            actual: NativeType::Int8,
        }
    );
    assert_eq!(err.to_string(), "expected u8, got i8");

    let err = validate_value(Kind::Decimal, &Value::from("1.2.3")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("decimal"));
    assert!(msg.contains("1.2.3"));
}

proptest! {
    #[test]
    fn identity_validation_covers_every_ordinal(ordinal in any::<i32>()) {
        let result = validate_kind_identity(ordinal);
        if ordinal <= 0 {
            prop_assert_eq!(result, Err(KindError::UnknownKind(ordinal)));
        } else if ordinal > Kind::MAX.ordinal() {
            prop_assert_eq!(result, Err(KindError::OutOfRangeKind(ordinal)));
        } else {
            let kind = result.unwrap();
            prop_assert_eq!(kind.ordinal(), ordinal);
            prop_assert_eq!(Kind::try_from(ordinal), Ok(kind));
        }
    }

    #[test]
    fn describe_is_total_and_non_empty(ordinal in any::<i32>()) {
        let name = describe(ordinal);
        prop_assert!(!name.is_empty());
        match Kind::from_ordinal(ordinal) {
            Ok(kind) => prop_assert_eq!(name.as_ref(), kind.name()),
            Err(_) => prop_assert_eq!(name.into_owned(), format!("invalid({ordinal})")),
        }
    }

    #[test]
    fn fixed_width_integers_infer_their_own_kind(v in any::<i64>()) {
        prop_assert_eq!(infer_kind(&Value::from(v as i8)), Kind::Int8);
        prop_assert_eq!(infer_kind(&Value::from(v as u16)), Kind::Uint16);
        prop_assert_eq!(infer_kind(&Value::from(v as i32)), Kind::Int32);
        prop_assert_eq!(infer_kind(&Value::from(v as u64)), Kind::Uint64);
        prop_assert_eq!(infer_kind(&Value::from(v)), Kind::Int64);
    }

    #[test]
    fn strings_never_infer_ambiguous_kinds(s in ".{0,64}") {
        let kind = infer_kind(&Value::from(s.as_str()));
        prop_assert_eq!(kind, Kind::String);
    }

    #[test]
    fn integer_strings_are_valid_decimals(v in any::<i64>()) {
        let s = v.to_string();
        prop_assert!(validate_value(Kind::Integer, &Value::from(s.as_str())).is_ok());
        prop_assert!(validate_value(Kind::Decimal, &Value::from(s.as_str())).is_ok());
    }

    #[test]
    fn validate_value_is_deterministic(s in ".{0,64}", ordinal in 1i32..=20) {
        let kind = Kind::from_ordinal(ordinal).unwrap();
        for value in [Value::from(s.as_str()), Value::json_str(&s), Value::from(s.as_bytes())] {
            prop_assert_eq!(validate_value(kind, &value), validate_value(kind, &value));
        }
    }
}
