mod make_box;
mod make_compound;
mod make_cylinder;
mod make_wedge;

pub use make_box::MakeBox;
pub use make_compound::MakeCompound;
pub use make_cylinder::MakeCylinder;
pub use make_wedge::MakeWedge;
