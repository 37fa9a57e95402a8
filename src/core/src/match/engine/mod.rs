pub mod context;
pub mod engine;
pub mod selection;

pub use context::*;
pub use engine::*;
pub use selection::*;
