pub mod eval;
pub mod export;
pub mod info;
pub mod preview;

pub use eval::*;
pub use export::*;
pub use info::*;
pub use preview::*;
