pub mod cycle;
pub mod handoff;
pub mod scan_face_use_case;
pub mod scheduler;
pub mod session;
