//! Tag strings for each member of the closed set of colours.

// ========================================================================= //

/// Tag of [`Colour::Red`](crate::Colour::Red).
pub const TAG_RED: &str = "red";
/// Tag of [`Colour::Blue`](crate::Colour::Blue).
pub const TAG_BLUE: &str = "blue";

/// Number of members in the closed set.
pub const NUM_COLOURS: usize = 2;

// ========================================================================= //
