pub mod league;
pub mod schedule;
pub mod table;

// Re-export all simple modules
pub use league::*;
pub use schedule::*;
pub use table::*;
