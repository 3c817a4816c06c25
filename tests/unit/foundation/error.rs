use super::*;

#[test]
fn return_code_discriminants_are_stable() {
    assert_eq!(ReturnCode::Ok as i32, 0);
    assert_eq!(ReturnCode::NullStylePointer as i32, 1);
    assert_eq!(ReturnCode::InvalidEnumValue as i32, 2);
    assert_eq!(ReturnCode::InvalidNone as i32, 3);
    assert_eq!(ReturnCode::InvalidFr as i32, 11);
    assert_eq!(ReturnCode::UnexpectedNaN as i32, 12);
    assert_eq!(ReturnCode::UnexpectedInfinity as i32, 13);
    assert_eq!(ReturnCode::UnexpectedNegative as i32, 14);
}

#[test]
fn every_unit_has_its_own_invalid_code() {
    let codes: Vec<ReturnCode> = StyleValueUnit::ALL
        .iter()
        .map(|unit| ReturnCode::invalid_unit(*unit))
        .collect();
    assert_eq!(
        codes,
        vec![
            ReturnCode::InvalidNone,
            ReturnCode::InvalidLength,
            ReturnCode::InvalidPercent,
            ReturnCode::InvalidMinContent,
            ReturnCode::InvalidMaxContent,
            ReturnCode::InvalidFitContentPx,
            ReturnCode::InvalidFitContentPercent,
            ReturnCode::InvalidAuto,
            ReturnCode::InvalidFr,
        ]
    );
}

#[test]
fn errors_map_onto_return_codes() {
    assert_eq!(
        StyleError::NullStylePointer.return_code(),
        ReturnCode::NullStylePointer
    );
    assert_eq!(
        StyleError::invalid_enum("Display", 9, 4).return_code(),
        ReturnCode::InvalidEnumValue
    );
    assert_eq!(
        StyleError::invalid_unit("padding-top", StyleValueUnit::Auto).return_code(),
        ReturnCode::InvalidAuto
    );
    assert_eq!(
        ReturnCode::from(StyleError::UnexpectedNegative(-1.0)),
        ReturnCode::UnexpectedNegative
    );
    let ok: StyleResult<()> = Ok(());
    assert_eq!(ReturnCode::from(ok), ReturnCode::Ok);
}

#[test]
fn error_messages_name_the_offender() {
    let msg = StyleError::invalid_enum("FlexWrap", 7, 3).to_string();
    assert!(msg.contains("7"), "{msg}");
    assert!(msg.contains("FlexWrap"), "{msg}");

    let msg = StyleError::invalid_unit("row-gap", StyleValueUnit::Fraction).to_string();
    assert!(msg.contains("row-gap"), "{msg}");
    assert!(msg.contains("Fraction"), "{msg}");
}

#[test]
fn numeric_checks_run_nan_then_infinity_then_sign() {
    assert_eq!(check_non_negative(f32::NAN), Err(StyleError::UnexpectedNaN));
    assert_eq!(
        check_non_negative(f32::NEG_INFINITY),
        Err(StyleError::UnexpectedInfinity(f32::NEG_INFINITY))
    );
    assert_eq!(
        check_non_negative(f32::INFINITY),
        Err(StyleError::UnexpectedInfinity(f32::INFINITY))
    );
    assert_eq!(
        check_non_negative(-0.5),
        Err(StyleError::UnexpectedNegative(-0.5))
    );
    assert_eq!(check_non_negative(0.0), Ok(0.0));
    assert_eq!(check_non_negative(-0.0), Ok(-0.0));
    assert_eq!(check_non_negative(12.5), Ok(12.5));
}
