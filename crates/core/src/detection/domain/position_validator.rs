use crate::detection::domain::face_detector::DetectedFace;
use crate::shared::constants::{
    MAX_FACE_RATIO, MAX_HORIZONTAL_DEVIATION, MAX_VERTICAL_DEVIATION, MIN_FACE_RATIO,
};

/// Keep only faces centered within the frame and sized within the accepted
/// face-to-frame ratio.
///
/// Bounds both "too far from center" and "too close/too far from the camera"
/// so the verification step always receives a consistently framed face.
/// Faces failing any threshold are dropped silently; there is no partial
/// pass.
pub fn filter_centered(
    faces: &[DetectedFace],
    frame_width: u32,
    frame_height: u32,
) -> Vec<DetectedFace> {
    if frame_width == 0 || frame_height == 0 {
        return Vec::new();
    }
    faces
        .iter()
        .filter(|face| is_centered(face, frame_width as f32, frame_height as f32))
        .cloned()
        .collect()
}

fn is_centered(face: &DetectedFace, frame_w: f32, frame_h: f32) -> bool {
    let (cx, cy) = face.bounds.center();
    let dx = (cx - frame_w / 2.0).abs() / frame_w;
    let dy = (cy - frame_h / 2.0).abs() / frame_h;

    let width_ratio = face.bounds.width / frame_w;
    let height_ratio = face.bounds.height / frame_h;

    dx < MAX_HORIZONTAL_DEVIATION
        && dy < MAX_VERTICAL_DEVIATION
        && width_ratio > MIN_FACE_RATIO
        && width_ratio < MAX_FACE_RATIO
        && height_ratio > MIN_FACE_RATIO
        && height_ratio < MAX_FACE_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FRAME_W: u32 = 100;
    const FRAME_H: u32 = 100;

    /// A face centered at the given normalized position with the given
    /// width/height ratios of a 100x100 frame.
    fn face_at(cx_ratio: f32, cy_ratio: f32, w_ratio: f32, h_ratio: f32) -> DetectedFace {
        let w = w_ratio * FRAME_W as f32;
        let h = h_ratio * FRAME_H as f32;
        DetectedFace::with_bounds(
            cx_ratio * FRAME_W as f32 - w / 2.0,
            cy_ratio * FRAME_H as f32 - h / 2.0,
            w,
            h,
        )
    }

    #[test]
    fn test_centered_half_frame_face_passes() {
        let face = face_at(0.5, 0.5, 0.5, 0.5);
        let kept = filter_centered(&[face.clone()], FRAME_W, FRAME_H);
        assert_eq!(kept, vec![face]);
    }

    #[rstest]
    #[case::min_boundary(0.30)]
    #[case::max_boundary(0.85)]
    fn test_exact_ratio_boundaries_fail(#[case] ratio: f32) {
        let face = face_at(0.5, 0.5, ratio, ratio);
        assert!(filter_centered(&[face], FRAME_W, FRAME_H).is_empty());
    }

    #[rstest]
    #[case::just_above_min(0.31)]
    #[case::just_below_max(0.84)]
    fn test_ratios_just_inside_pass(#[case] ratio: f32) {
        let face = face_at(0.5, 0.5, ratio, ratio);
        assert_eq!(filter_centered(&[face], FRAME_W, FRAME_H).len(), 1);
    }

    #[test]
    fn test_too_far_right_fails() {
        // Horizontal deviation 0.16 > 0.15.
        let face = face_at(0.66, 0.5, 0.5, 0.5);
        assert!(filter_centered(&[face], FRAME_W, FRAME_H).is_empty());
    }

    #[test]
    fn test_horizontal_deviation_just_inside_passes() {
        let face = face_at(0.64, 0.5, 0.5, 0.5);
        assert_eq!(filter_centered(&[face], FRAME_W, FRAME_H).len(), 1);
    }

    #[test]
    fn test_vertical_deviation_wider_than_horizontal() {
        // dy = 0.19 passes while dx = 0.19 would not.
        let low = face_at(0.5, 0.69, 0.5, 0.5);
        assert_eq!(filter_centered(&[low], FRAME_W, FRAME_H).len(), 1);

        let side = face_at(0.69, 0.5, 0.5, 0.5);
        assert!(filter_centered(&[side], FRAME_W, FRAME_H).is_empty());
    }

    #[test]
    fn test_partial_pass_is_dropped() {
        // Centered but too small on one axis only.
        let face = face_at(0.5, 0.5, 0.5, 0.2);
        assert!(filter_centered(&[face], FRAME_W, FRAME_H).is_empty());
    }

    #[test]
    fn test_keeps_only_qualifying_faces() {
        let good = face_at(0.5, 0.5, 0.5, 0.5);
        let off_center = face_at(0.9, 0.5, 0.5, 0.5);
        let tiny = face_at(0.5, 0.5, 0.1, 0.1);
        let kept = filter_centered(&[off_center, good.clone(), tiny], FRAME_W, FRAME_H);
        assert_eq!(kept, vec![good]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_centered(&[], FRAME_W, FRAME_H).is_empty());
    }

    #[test]
    fn test_zero_dimension_frame_keeps_nothing() {
        let face = face_at(0.5, 0.5, 0.5, 0.5);
        assert!(filter_centered(&[face], 0, FRAME_H).is_empty());
    }
}
