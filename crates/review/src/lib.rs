pub mod access;
mod input;
mod reply;
pub mod store;
mod types;
mod view;

pub use input::*;
pub use reply::*;
pub use types::*;
pub use view::*;
