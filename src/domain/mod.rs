mod money;
mod remaining;

pub use money::*;
pub use remaining::*;
