mod error;
mod identity;

pub use error::*;
pub use identity::*;
