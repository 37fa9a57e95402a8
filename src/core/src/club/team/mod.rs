pub mod builder;
pub mod team;

pub use builder::*;
pub use team::*;
