mod calculator;
mod greeting;

// re-export
pub use calculator::*;
pub use greeting::*;
