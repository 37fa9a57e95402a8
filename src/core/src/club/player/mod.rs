pub mod builder;
pub mod generator;
pub mod injury;
pub mod player;
pub mod position;
pub mod skills;
pub mod statistics;
pub mod streak;

pub use builder::*;
pub use generator::*;
pub use injury::*;
pub use player::*;
pub use position::*;
pub use skills::*;
pub use statistics::*;
pub use streak::*;
