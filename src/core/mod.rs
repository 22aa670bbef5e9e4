pub mod calc;
pub mod engine;
pub mod format;
pub mod text;

pub use crate::domain::model::{Number, Value};
pub use crate::domain::ports::Helper;
pub use crate::utils::error::Result;
