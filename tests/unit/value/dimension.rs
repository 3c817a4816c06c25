use super::*;
use crate::foundation::error::ReturnCode;

#[test]
fn ignored_magnitudes_round_trip_bit_for_bit() {
    let odd_nan = f32::from_bits(0x7fc0_1234);
    for value in [0.0, -0.0, -3.0, f32::INFINITY, f32::NEG_INFINITY, odd_nan] {
        for unit in [
            StyleValueUnit::Unset,
            StyleValueUnit::MinContent,
            StyleValueUnit::MaxContent,
            StyleValueUnit::Auto,
        ] {
            let dimension = Dimension::from_raw(value, unit).unwrap();
            assert_eq!(dimension.unit(), unit);
            assert_eq!(dimension.value().to_bits(), value.to_bits());
        }
    }
}

#[test]
fn payload_units_reject_bad_magnitudes() {
    for unit in StyleValueUnit::ALL.iter().copied().filter(|u| u.has_payload()) {
        assert_eq!(
            Dimension::from_raw(f32::NAN, unit),
            Err(StyleError::UnexpectedNaN)
        );
        assert_eq!(
            Dimension::from_raw(f32::INFINITY, unit),
            Err(StyleError::UnexpectedInfinity(f32::INFINITY))
        );
        assert_eq!(
            Dimension::from_raw(-1.0, unit),
            Err(StyleError::UnexpectedNegative(-1.0))
        );
    }
}

#[test]
fn numeric_errors_win_over_whitelist_errors() {
    let err = Dimension::decode(
        "margin-top",
        UnitSet::LENGTH_PERCENTAGE_AUTO,
        f32::NAN,
        StyleValueUnit::Fraction,
    )
    .unwrap_err();
    assert_eq!(err.return_code(), ReturnCode::UnexpectedNaN);

    let err = Dimension::decode(
        "margin-top",
        UnitSet::LENGTH_PERCENTAGE_AUTO,
        2.0,
        StyleValueUnit::Fraction,
    )
    .unwrap_err();
    assert_eq!(err.return_code(), ReturnCode::InvalidFr);
}

#[test]
fn whitelist_rejects_payloadless_units_even_with_garbage_magnitudes() {
    let err = Dimension::decode(
        "padding-left",
        UnitSet::LENGTH_PERCENTAGE,
        f32::NAN,
        StyleValueUnit::Auto,
    )
    .unwrap_err();
    assert_eq!(err, StyleError::invalid_unit("padding-left", StyleValueUnit::Auto));
}

#[test]
fn percent_is_stored_as_given() {
    let dimension =
        Dimension::decode("width", UnitSet::SIZE, 0.25, StyleValueUnit::Percent).unwrap();
    assert_eq!(dimension, Dimension::Percent(Magnitude::new(0.25).unwrap()));
    assert_eq!(StyleValue::from(dimension), StyleValue::percent(0.25));
}

#[test]
fn style_value_conversions() {
    assert_eq!(StyleValue::from(Dimension::AUTO), StyleValue::auto());
    assert_eq!(StyleValue::from(Dimension::ZERO), StyleValue::length(0.0));
    assert_eq!(
        Dimension::try_from(StyleValue::length(4.0)).unwrap(),
        Dimension::Length(Magnitude::new(4.0).unwrap())
    );
    assert!(Dimension::try_from(StyleValue::length(-4.0)).is_err());
    assert_eq!(Dimension::default(), Dimension::AUTO);
}
