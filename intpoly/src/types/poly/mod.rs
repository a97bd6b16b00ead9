mod ind;
mod term;
mod poly;
mod mat;

pub use ind::Ind;
pub use term::Term;
pub use poly::Poly;
pub use mat::PolyMat;
