pub mod place;
pub mod session;

pub use place::{Coordinates, Place};
pub use session::Session;
