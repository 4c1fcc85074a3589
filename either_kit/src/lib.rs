// This mimics the log crate to avoid checking for the feature available
#[macro_use]
mod log;

pub mod checked;
pub mod either;
pub mod error;

pub use checked::Checked;
pub use either::{left, right, Either};
pub use error::InvalidArgument;
