pub mod inspect;
pub mod merge;

pub use inspect::*;
pub use merge::*;
