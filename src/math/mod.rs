//! Mathematical utilities: closed-form linear regression and an SVD least
//! squares solver.

pub mod ols;
pub mod regression;

pub use ols::*;
pub use regression::*;
