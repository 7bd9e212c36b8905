pub mod boundary;
pub mod collision;
