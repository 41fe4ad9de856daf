pub mod camera_device;
pub mod frame_capturer;
