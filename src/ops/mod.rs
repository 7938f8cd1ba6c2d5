//! Transcendental function engines and the machinery they share.

pub mod consts;
mod cos;
mod exp;
mod ln;
pub mod series;

pub use cos::Cosine;
pub use exp::Exponential;
pub use ln::Logarithm;
