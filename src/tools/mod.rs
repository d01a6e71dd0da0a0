pub mod compile;
pub mod locate;
pub mod search;

pub use compile::*;
pub use locate::*;
pub use search::*;
