pub mod coverage;
pub mod event;

pub use coverage::*;
pub use event::*;
