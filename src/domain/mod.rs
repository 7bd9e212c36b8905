pub mod body;
pub mod palette;

pub use body::{Body, Shape};
