use crate::detection::domain::face_detector::DetectedFace;
use crate::shared::constants::{MAX_POSE_ANGLE_DEGREES, MIN_EYE_OPEN_PROBABILITY};

/// Pose/eyes check applied to the single best candidate before the final
/// high-resolution recapture, not on every cheap detection tick.
///
/// Rejects motion-blurred or askew captures: the head must be straight on
/// all three axes and both eyes classified open. A missing classification
/// defaults to passing so devices without the full classifier set are not
/// permanently rejected.
pub fn is_acceptable_quality(face: &DetectedFace) -> bool {
    has_straight_pose(face) && has_open_eyes(face)
}

fn has_straight_pose(face: &DetectedFace) -> bool {
    [face.yaw, face.roll, face.pitch]
        .iter()
        .all(|angle| angle.map_or(true, |a| a.abs() < MAX_POSE_ANGLE_DEGREES))
}

fn has_open_eyes(face: &DetectedFace) -> bool {
    [face.left_eye_open, face.right_eye_open]
        .iter()
        .all(|prob| prob.map_or(true, |p| p > MIN_EYE_OPEN_PROBABILITY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn face(
        yaw: Option<f32>,
        roll: Option<f32>,
        pitch: Option<f32>,
        left_eye: Option<f32>,
        right_eye: Option<f32>,
    ) -> DetectedFace {
        DetectedFace {
            yaw,
            roll,
            pitch,
            left_eye_open: left_eye,
            right_eye_open: right_eye,
            ..DetectedFace::with_bounds(25.0, 25.0, 50.0, 50.0)
        }
    }

    #[test]
    fn test_straight_open_face_passes() {
        let f = face(Some(2.0), Some(1.0), Some(0.0), Some(0.9), Some(0.9));
        assert!(is_acceptable_quality(&f));
    }

    #[rstest]
    #[case::just_below_threshold(14.9, true)]
    #[case::at_threshold(15.0, false)]
    #[case::above_threshold(20.0, false)]
    #[case::negative_below(-14.9, true)]
    #[case::negative_at(-15.0, false)]
    fn test_yaw_boundary(#[case] yaw: f32, #[case] expected: bool) {
        let f = face(Some(yaw), Some(0.0), Some(0.0), Some(0.9), Some(0.9));
        assert_eq!(is_acceptable_quality(&f), expected);
    }

    #[rstest]
    #[case::roll(None, Some(16.0), None)]
    #[case::pitch(None, None, Some(-16.0))]
    fn test_any_askew_axis_fails(
        #[case] yaw: Option<f32>,
        #[case] roll: Option<f32>,
        #[case] pitch: Option<f32>,
    ) {
        let f = face(yaw, roll, pitch, Some(0.9), Some(0.9));
        assert!(!is_acceptable_quality(&f));
    }

    #[test]
    fn test_closed_left_eye_fails() {
        let f = face(Some(0.0), Some(0.0), Some(0.0), Some(0.1), Some(0.9));
        assert!(!is_acceptable_quality(&f));
    }

    #[rstest]
    #[case::at_threshold(0.3, false)]
    #[case::just_above(0.31, true)]
    fn test_eye_probability_boundary(#[case] prob: f32, #[case] expected: bool) {
        let f = face(None, None, None, Some(prob), Some(prob));
        assert_eq!(is_acceptable_quality(&f), expected);
    }

    #[test]
    fn test_missing_classifications_default_to_passing() {
        let f = face(None, None, None, None, None);
        assert!(is_acceptable_quality(&f));
    }

    #[test]
    fn test_missing_eyes_with_good_pose_passes() {
        let f = face(Some(3.0), Some(-2.0), Some(1.0), None, None);
        assert!(is_acceptable_quality(&f));
    }
}
