pub mod date;
pub mod estimation;
pub mod logging;
pub mod random;

pub use date::*;
pub use estimation::*;
pub use logging::*;
pub use random::*;
