//! A closed set of named colours, each identified by a short string tag.
//!
//! Every [`Colour`] has a fixed tag (`"red"`, `"blue"`) that doubles as its
//! display form.  The full set can be enumerated in declaration order, and a
//! tag can be resolved back into its colour.  Resolving a string that is not
//! a tag fails with a [`ParseColourError`] naming that string; there is no
//! default colour.
//!
//! # Example usage
//!
//! ```
//! use colour::Colour;
//!
//! // Enumerate every colour, in declaration order.
//! let lines: Vec<String> = Colour::iter().map(|c| c.to_string()).collect();
//! assert_eq!(lines.join("\n"), "red\nblue");
//!
//! // Resolve tags back into colours.
//! assert_eq!(Colour::from_tag("blue").unwrap(), Colour::Blue);
//! let colour: Colour = "red".parse().unwrap();
//! assert_eq!(colour, Colour::Red);
//!
//! // Anything else is rejected.
//! let error = Colour::from_tag("redd").unwrap_err();
//! assert_eq!(error.to_string(), "'redd' could not be converted to enum value");
//! ```
//!
//! # Features
//!
//! With the `serde` feature enabled, `Colour` serializes as its tag string
//! and deserializes through [`Colour::from_tag`].

#![warn(missing_docs)]

pub use crate::internal::consts;
pub use crate::internal::{Colour, Colours, ParseColourError};

mod internal;
