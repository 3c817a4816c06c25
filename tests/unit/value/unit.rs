use super::*;

#[test]
fn unit_tags_decode_in_declaration_order() {
    assert_eq!(StyleValueUnit::COUNT, 9);
    for (i, unit) in StyleValueUnit::ALL.iter().enumerate() {
        assert_eq!(StyleValueUnit::try_from(i as i32).unwrap(), *unit);
        assert_eq!(unit.as_i32(), i as i32);
    }
    assert!(StyleValueUnit::try_from(9).is_err());
    assert!(StyleValueUnit::try_from(-1).is_err());
}

#[test]
fn only_measuring_units_carry_a_payload() {
    let payload: Vec<_> = StyleValueUnit::ALL
        .iter()
        .copied()
        .filter(|unit| unit.has_payload())
        .collect();
    assert_eq!(
        payload,
        vec![
            StyleValueUnit::Length,
            StyleValueUnit::Percent,
            StyleValueUnit::FitContentLength,
            StyleValueUnit::FitContentPercent,
            StyleValueUnit::Fraction,
        ]
    );
}

#[test]
fn unit_sets_nest() {
    for unit in UnitSet::LENGTH_PERCENTAGE.iter() {
        assert!(UnitSet::LENGTH_PERCENTAGE_AUTO.contains(unit));
    }
    for unit in UnitSet::LENGTH_PERCENTAGE_AUTO.iter() {
        assert!(UnitSet::SIZE.contains(unit));
    }
    for unit in UnitSet::SIZE.iter() {
        assert!(UnitSet::OPTIONAL_SIZE.contains(unit));
    }
    assert_eq!(UnitSet::EMPTY.iter().count(), 0);
}

#[test]
fn fraction_is_never_accepted() {
    for set in [
        UnitSet::LENGTH_PERCENTAGE,
        UnitSet::LENGTH_PERCENTAGE_AUTO,
        UnitSet::SIZE,
        UnitSet::OPTIONAL_SIZE,
    ] {
        assert!(!set.contains(StyleValueUnit::Fraction));
    }
}

#[test]
fn unset_is_only_in_the_optional_size_set() {
    assert!(UnitSet::OPTIONAL_SIZE.contains(StyleValueUnit::Unset));
    assert!(!UnitSet::SIZE.contains(StyleValueUnit::Unset));
    assert_eq!(
        UnitSet::SIZE.iter().collect::<Vec<_>>(),
        vec![
            StyleValueUnit::Length,
            StyleValueUnit::Percent,
            StyleValueUnit::MinContent,
            StyleValueUnit::MaxContent,
            StyleValueUnit::FitContentLength,
            StyleValueUnit::FitContentPercent,
            StyleValueUnit::Auto,
        ]
    );
}

#[test]
fn of_and_with_agree() {
    let built = UnitSet::of(&[StyleValueUnit::Auto, StyleValueUnit::Length]);
    let chained = UnitSet::EMPTY
        .with(StyleValueUnit::Length)
        .with(StyleValueUnit::Auto);
    assert_eq!(built, chained);
}
