pub mod player;
pub mod staff;
pub mod team;

// Re-export all simple modules
pub use player::*;
pub use staff::*;
pub use team::*;
