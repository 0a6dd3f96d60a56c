use chartview::component::ComponentBase;
use chartview::core::DisplayDensity;
use proptest::prelude::*;

fn component(scale: f64) -> (ComponentBase, DisplayDensity) {
    let density = DisplayDensity::new(scale).expect("density");
    (ComponentBase::new(density), density)
}

proptest! {
    #[test]
    fn text_size_below_range_stores_minimum(
        scale in 0.5f64..4.0,
        size in -1_000.0f64..6.0
    ) {
        let (mut base, density) = component(scale);
        base.set_text_size(size);
        prop_assert_eq!(base.text_size(), density.dp_to_px(6.0));
    }

    #[test]
    fn text_size_above_range_stores_maximum(
        scale in 0.5f64..4.0,
        size in 24.000_001f64..1_000_000.0
    ) {
        let (mut base, density) = component(scale);
        base.set_text_size(size);
        prop_assert_eq!(base.text_size(), density.dp_to_px(24.0));
    }

    #[test]
    fn text_size_inside_range_is_converted_exactly(
        scale in 0.5f64..4.0,
        size in 6.0f64..=24.0
    ) {
        let (mut base, density) = component(scale);
        base.set_text_size(size);
        prop_assert_eq!(base.text_size(), density.dp_to_px(size));
    }

    #[test]
    fn offsets_are_stored_pixel_converted(
        scale in 0.5f64..4.0,
        x in -10_000.0f64..10_000.0,
        y in -10_000.0f64..10_000.0
    ) {
        let (mut base, density) = component(scale);
        base.set_x_offset(x);
        base.set_y_offset(y);
        prop_assert_eq!(base.x_offset(), density.dp_to_px(x));
        prop_assert_eq!(base.y_offset(), density.dp_to_px(y));
    }
}
