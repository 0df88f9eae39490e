//! Concrete games built on the `Board` trait.

pub mod grid3;
pub mod grid6x7;

pub use grid3::Grid3Board;
pub use grid6x7::Grid6x7Board;
