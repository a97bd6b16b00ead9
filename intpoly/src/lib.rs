//! Sparse multivariate polynomials with integer coefficients.
//!
//! A [`Poly`] is a list of [`Term`]s, each a coefficient paired with an
//! exponent vector [`Ind`]. Arithmetic keeps the terms sorted in descending
//! order with equal exponent vectors merged.

mod abst;
mod types;
mod misc;

pub use abst::*;
pub use types::*;
pub use misc::*;

pub mod util;
