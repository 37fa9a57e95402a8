pub mod generator;
pub mod staff;

pub use generator::*;
pub use staff::*;
