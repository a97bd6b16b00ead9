pub mod show;
pub mod calc;
pub mod det;
