pub mod cli;
pub mod error;
pub mod summary;

pub use cli::*;
pub use error::*;
pub use summary::*;
