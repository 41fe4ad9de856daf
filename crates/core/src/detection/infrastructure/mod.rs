pub mod fail_safe_detector;
pub mod scripted_detector;
