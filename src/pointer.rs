use web_sys::Element;

/// Screen-space box of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn of(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Pointer position relative to the centre of `bounds`, each axis in
/// -0.5..=0.5 while the pointer is inside. Zero-sized boxes give (0, 0).
pub fn pointer_offset(bounds: Bounds, client_x: f64, client_y: f64) -> (f64, f64) {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (client_x - bounds.left) / bounds.width - 0.5,
        (client_y - bounds.top) / bounds.height - 0.5,
    )
}

/// Card tilt in degrees for a pointer offset: (rotate-x, rotate-y).
pub fn tilt_degrees((x, y): (f64, f64), strength: f64) -> (f64, f64) {
    (y * -strength, x * strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds { left: 100.0, top: 50.0, width: 200.0, height: 100.0 };

    #[test]
    fn centre_is_zero_and_corners_are_half() {
        assert_eq!(pointer_offset(CARD, 200.0, 100.0), (0.0, 0.0));
        assert_eq!(pointer_offset(CARD, 100.0, 50.0), (-0.5, -0.5));
        assert_eq!(pointer_offset(CARD, 300.0, 150.0), (0.5, 0.5));
    }

    #[test]
    fn empty_bounds_do_not_divide_by_zero() {
        let empty = Bounds { width: 0.0, ..CARD };
        assert_eq!(pointer_offset(empty, 10.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn tilt_leans_towards_the_pointer() {
        assert_eq!(tilt_degrees((0.5, -0.5), 8.0), (4.0, 4.0));
        assert_eq!(tilt_degrees((-0.25, 0.25), 8.0), (-2.0, -2.0));
    }
}
