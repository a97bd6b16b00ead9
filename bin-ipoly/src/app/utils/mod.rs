mod ctype;
mod dispatch;
mod helper;

pub use ctype::*;
pub use helper::*;
pub(crate) use dispatch::*;
