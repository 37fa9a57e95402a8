pub mod adjustment;
pub mod engine;
pub mod feedback;
pub mod game;
pub mod ratings;
pub mod result;
pub mod rotation;

// Re-export all simple modules
pub use adjustment::*;
pub use engine::*;
pub use feedback::*;
pub use game::*;
pub use ratings::*;
pub use result::*;
pub use rotation::*;
