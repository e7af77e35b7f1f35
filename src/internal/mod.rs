mod colour;
pub mod consts;
mod error;

pub use self::colour::{Colour, Colours};
pub use self::error::ParseColourError;
