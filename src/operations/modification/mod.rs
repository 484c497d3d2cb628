mod chamfer;
mod edge_finish;
mod fillet;

pub use chamfer::Chamfer;
pub use fillet::Fillet;
