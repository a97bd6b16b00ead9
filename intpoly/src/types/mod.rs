mod poly;
mod value;

pub use poly::*;
pub use value::*;
