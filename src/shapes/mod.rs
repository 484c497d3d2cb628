pub mod arch;
pub mod roof;
pub mod window;

pub use arch::{arch_pointed, ArchSpec};
pub use roof::roof_angle;
pub use window::{window_frame, FrameChamfer};
