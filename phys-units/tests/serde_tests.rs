//! Serialization of quantities through the facade.
#![cfg(feature = "serde")]

use phys_units::dimensions::{LengthD, PressureD, TimeIntervalD};
use phys_units::{Quantity, QuantityError, METER, PASCAL, SECOND};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Sample {
    #[serde(with = "phys_units::serde_with_unit")]
    pressure: Quantity<PressureD>,
    #[serde(with = "phys_units::serde_with_unit")]
    depth: Quantity<LengthD>,
    elapsed: Quantity<TimeIntervalD>,
}

#[test]
fn round_trip_with_units() {
    let sample = Sample {
        pressure: 101_325.0 * PASCAL,
        depth: 12.5 * METER,
        elapsed: 3.0 * SECOND,
    };
    let json = serde_json::to_string(&sample).unwrap();
    assert_eq!(
        json,
        r#"{"pressure":{"value":101325.0,"unit":"Pa"},"depth":{"value":12.5,"unit":"m"},"elapsed":3.0}"#
    );
    let back: Sample = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sample);
}

#[test]
fn mismatched_unit_is_rejected() {
    let json = r#"{"pressure":{"value":1.0,"unit":"m"},"depth":{"value":1.0},"elapsed":1.0}"#;
    let err = serde_json::from_str::<Sample>(json).unwrap_err();
    let expected = QuantityError::UnitMismatch {
        expected: "Pa".into(),
        found: "m".into(),
    };
    assert!(err.to_string().contains(&expected.to_string()));
}
