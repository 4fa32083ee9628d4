pub mod task;
pub mod week;

pub use task::*;
pub use week::*;
