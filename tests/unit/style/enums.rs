use super::*;
use crate::foundation::error::StyleError;

#[test]
fn variant_counts() {
    assert_eq!(Display::COUNT, 4);
    assert_eq!(Position::COUNT, 2);
    assert_eq!(Overflow::COUNT, 3);
    assert_eq!(AlignContent::COUNT, 10);
    assert_eq!(AlignItems::COUNT, 8);
    assert_eq!(FlexDirection::COUNT, 4);
    assert_eq!(FlexWrap::COUNT, 3);
    assert_eq!(GridAutoFlow::COUNT, 4);
}

#[test]
fn integers_round_trip_through_every_variant() {
    for (i, value) in AlignContent::ALL.iter().enumerate() {
        assert_eq!(AlignContent::try_from(i as i32).unwrap(), *value);
        assert_eq!(i32::from(*value), i as i32);
    }
    for (i, value) in AlignItems::ALL.iter().enumerate() {
        assert_eq!(AlignItems::try_from(i as i32).unwrap(), *value);
    }
}

#[test]
fn out_of_range_integers_are_rejected() {
    assert_eq!(
        Display::try_from(4),
        Err(StyleError::invalid_enum("Display", 4, 4))
    );
    assert_eq!(
        Position::try_from(-1),
        Err(StyleError::invalid_enum("Position", -1, 2))
    );
    assert!(AlignItems::try_from(i32::MAX).is_err());
    assert!(AlignItems::try_from(i32::MIN).is_err());
}

#[test]
fn same_names_have_different_discriminants() {
    assert_eq!(AlignContent::Center.as_i32(), 5);
    assert_eq!(AlignItems::Center.as_i32(), 5);
    assert_eq!(AlignContent::Stretch.as_i32(), 6);
    assert_eq!(AlignItems::Stretch.as_i32(), 7);
    assert_eq!(AlignItems::Baseline.as_i32(), 6);
}

#[test]
fn defaults() {
    assert_eq!(Display::default(), Display::Flex);
    assert_eq!(Position::default(), Position::Relative);
    assert_eq!(Overflow::default(), Overflow::Visible);
    assert_eq!(AlignContent::default(), AlignContent::Normal);
    assert_eq!(AlignItems::default(), AlignItems::Normal);
    assert_eq!(FlexDirection::default(), FlexDirection::Row);
    assert_eq!(FlexWrap::default(), FlexWrap::NoWrap);
    assert_eq!(GridAutoFlow::default(), GridAutoFlow::Row);
}
