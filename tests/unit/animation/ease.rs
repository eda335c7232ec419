use super::*;

fn named() -> [Ease; 7] {
    [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ]
}

#[test]
fn endpoints_are_stable() {
    for ease in named() {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in named() {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn default_is_quadratic_ease_out() {
    let ease = Ease::default();
    assert!(matches!(ease, Ease::OutQuad));
    assert_eq!(ease.apply(0.5), 0.75);
    assert_eq!(ease.apply(0.25), 0.25 * 1.75);
}

#[test]
fn input_outside_unit_range_is_clamped() {
    let ease = Ease::Linear;
    assert_eq!(ease.apply(-3.0), 0.0);
    assert_eq!(ease.apply(7.0), 1.0);
}

#[test]
fn custom_curve_is_evaluated_and_sanitized() {
    let ease = Ease::custom(|t| t * t * t * t);
    assert_eq!(ease.apply(0.5), 0.0625);

    let broken = Ease::custom(|_| f64::NAN);
    assert_eq!(broken.apply(0.5), 0.75);
    assert_eq!(format!("{broken:?}"), "Custom(<fn>)");
}

#[test]
fn names_parse_as_kebab_case() {
    assert!(matches!(Ease::from_name("out-cubic").unwrap(), Ease::OutCubic));
    assert!(matches!(Ease::from_name(" linear ").unwrap(), Ease::Linear));
    assert!(Ease::from_name("bounce").is_err());
    assert!(Ease::from_name("custom").is_err());
}
