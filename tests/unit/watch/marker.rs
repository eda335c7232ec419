use super::*;

struct Classes(&'static [&'static str]);

impl Surface for Classes {
    fn has_class(&self, class: &str) -> bool {
        self.0.contains(&class)
    }

    fn attribute(&self, _name: &str) -> Option<String> {
        None
    }

    fn set_opacity(&mut self, _opacity: f64) {}

    fn set_transform(&mut self, _transform: &str) {}
}

#[test]
fn single_markers_map_to_signed_axis_offsets() {
    let cases: [(&'static [&'static str], Vec2); 4] = [
        (&["animated-left"], Vec2::new(-100.0, 0.0)),
        (&["animated-right"], Vec2::new(100.0, 0.0)),
        (&["animated-top"], Vec2::new(0.0, -100.0)),
        (&["animated-bottom"], Vec2::new(0.0, 100.0)),
    ];
    for (classes, expected) in cases {
        assert_eq!(offset_for(&Classes(classes), 100.0), Some(expected));
    }
}

#[test]
fn axes_combine_independently() {
    let el = Classes(&["card", "animated-left", "animated-bottom"]);
    assert_eq!(offset_for(&el, 100.0), Some(Vec2::new(-100.0, 100.0)));
    assert_eq!(offset_for(&el, 30.0), Some(Vec2::new(-30.0, 30.0)));
}

#[test]
fn conflicting_markers_resolve_in_fixed_order() {
    let el = Classes(&["animated-right", "animated-left"]);
    assert_eq!(offset_for(&el, 100.0), Some(Vec2::new(100.0, 0.0)));

    let el = Classes(&["animated-bottom", "animated-top"]);
    assert_eq!(offset_for(&el, 100.0), Some(Vec2::new(0.0, 100.0)));
}

#[test]
fn unmarked_element_is_not_a_candidate() {
    assert_eq!(offset_for(&Classes(&["hero", "animated"]), 100.0), None);
}

#[test]
fn selector_lists_all_markers() {
    assert_eq!(
        selector(),
        ".animated-left, .animated-right, .animated-top, .animated-bottom"
    );
}
