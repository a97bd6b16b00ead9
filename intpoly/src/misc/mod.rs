mod err;
mod sign;
mod json;

pub mod format;
pub mod tex;

pub use err::*;
pub use sign::*;
pub(crate) use json::*;
