pub mod device;
pub mod error;
pub mod frequency;
pub mod record;
pub mod series;
pub mod warning;

pub use device::*;
pub use error::*;
pub use frequency::*;
pub use record::*;
pub use series::*;
pub use warning::*;
