pub mod input;
pub mod time;

pub use input::*;
pub use time::*;
