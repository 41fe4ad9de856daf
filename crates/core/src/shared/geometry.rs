use crate::shared::constants::{SCANNER_ASPECT, SCANNER_VERTICAL_ANCHOR, SCANNER_WIDTH_RATIO};

/// The rectangle, in screen points, where a face must appear.
///
/// Horizontally centered, vertically anchored so the rectangle center sits
/// at `SCANNER_VERTICAL_ANCHOR` of the screen height. Recomputed on every
/// layout change, never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScannerBounds {
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub left: f32,
}

/// Ellipse form of [`ScannerBounds`], used only for validation math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OvalBounds {
    pub center_x: f32,
    pub center_y: f32,
    pub radius_x: f32,
    pub radius_y: f32,
}

/// Compute the scanner rectangle for a viewport.
///
/// Deterministic and idempotent for identical inputs, which callers rely on
/// for re-render stability.
pub fn scanner_bounds(screen_width: f32, screen_height: f32) -> ScannerBounds {
    let width = screen_width * SCANNER_WIDTH_RATIO;
    let height = width / SCANNER_ASPECT;
    ScannerBounds {
        width,
        height,
        top: screen_height * SCANNER_VERTICAL_ANCHOR - height / 2.0,
        left: (screen_width - width) / 2.0,
    }
}

/// Compute the scanner oval for a viewport.
pub fn oval_bounds(screen_width: f32, screen_height: f32) -> OvalBounds {
    let rect = scanner_bounds(screen_width, screen_height);
    OvalBounds {
        center_x: rect.left + rect.width / 2.0,
        center_y: rect.top + rect.height / 2.0,
        radius_x: rect.width / 2.0,
        radius_y: rect.height / 2.0,
    }
}

impl OvalBounds {
    /// True when the point lies inside or on the ellipse.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        if self.radius_x <= 0.0 || self.radius_y <= 0.0 {
            return false;
        }
        let nx = (x - self.center_x) / self.radius_x;
        let ny = (y - self.center_y) / self.radius_y;
        nx * nx + ny * ny <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::phone_portrait(390.0, 844.0)]
    #[case::phone_landscape(844.0, 390.0)]
    #[case::tablet(768.0, 1024.0)]
    #[case::square(500.0, 500.0)]
    fn test_horizontally_centered(#[case] w: f32, #[case] h: f32) {
        let rect = scanner_bounds(w, h);
        assert_relative_eq!(rect.left + rect.width / 2.0, w / 2.0, epsilon = 1e-4);
    }

    #[rstest]
    #[case(390.0, 844.0)]
    #[case(768.0, 1024.0)]
    #[case(320.0, 568.0)]
    fn test_vertical_anchor(#[case] w: f32, #[case] h: f32) {
        let rect = scanner_bounds(w, h);
        assert_relative_eq!(rect.top + rect.height / 2.0, h * 0.35, epsilon = 1e-4);
    }

    #[test]
    fn test_fixed_ratios() {
        let rect = scanner_bounds(400.0, 800.0);
        assert_relative_eq!(rect.width, 280.0); // 400 * 0.7
        assert_relative_eq!(rect.height, 280.0 / 0.75);
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let a = scanner_bounds(390.0, 844.0);
        let b = scanner_bounds(390.0, 844.0);
        assert_eq!(a, b);

        let oa = oval_bounds(390.0, 844.0);
        let ob = oval_bounds(390.0, 844.0);
        assert_eq!(oa, ob);
    }

    #[test]
    fn test_oval_derived_from_rect() {
        let rect = scanner_bounds(400.0, 800.0);
        let oval = oval_bounds(400.0, 800.0);
        assert_relative_eq!(oval.center_x, rect.left + rect.width / 2.0);
        assert_relative_eq!(oval.center_y, rect.top + rect.height / 2.0);
        assert_relative_eq!(oval.radius_x, rect.width / 2.0);
        assert_relative_eq!(oval.radius_y, rect.height / 2.0);
    }

    #[test]
    fn test_oval_contains_center() {
        let oval = oval_bounds(400.0, 800.0);
        assert!(oval.contains(oval.center_x, oval.center_y));
    }

    #[test]
    fn test_oval_excludes_far_corner() {
        let oval = oval_bounds(400.0, 800.0);
        assert!(!oval.contains(0.0, 0.0));
    }

    #[test]
    fn test_oval_boundary_point_inside() {
        let oval = oval_bounds(400.0, 800.0);
        // Rightmost point of the ellipse lies on the boundary.
        assert!(oval.contains(oval.center_x + oval.radius_x, oval.center_y));
    }

    #[test]
    fn test_degenerate_oval_contains_nothing() {
        let oval = OvalBounds {
            center_x: 10.0,
            center_y: 10.0,
            radius_x: 0.0,
            radius_y: 5.0,
        };
        assert!(!oval.contains(10.0, 10.0));
    }
}
