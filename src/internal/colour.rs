use crate::internal::consts;
use crate::internal::ParseColourError;
use std::convert::TryFrom;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;
use std::str::FromStr;

//===========================================================================//

/// One of the named colours.
///
/// The set of colours is closed: every member is listed here, each with a
/// unique, non-empty tag string that is used both for lookup and for
/// display.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Colour {
    /// The colour tagged `"red"`.
    Red,
    /// The colour tagged `"blue"`.
    Blue,
}

impl Colour {
    /// Every colour, in declaration order.
    pub const ALL: [Colour; consts::NUM_COLOURS] = [Colour::Red, Colour::Blue];

    /// Returns an iterator over every colour, in declaration order.
    ///
    /// Each call starts a fresh iteration over the same sequence.
    ///
    /// ```
    /// use colour::Colour;
    /// let tags: Vec<&str> = Colour::iter().map(Colour::tag).collect();
    /// assert_eq!(tags, ["red", "blue"]);
    /// ```
    pub fn iter() -> Colours {
        Colours::new()
    }

    /// Returns the colour whose tag is exactly `text`.
    ///
    /// Matching is exact: case-sensitive, with no trimming.  Any other string
    /// is rejected with an error carrying that string.
    ///
    /// ```
    /// use colour::Colour;
    /// assert_eq!(Colour::from_tag("red").unwrap(), Colour::Red);
    /// assert_eq!(Colour::from_tag("redd").unwrap_err().text(), "redd");
    /// ```
    pub fn from_tag(text: &str) -> Result<Colour, ParseColourError> {
        match text {
            consts::TAG_RED => Ok(Colour::Red),
            consts::TAG_BLUE => Ok(Colour::Blue),
            _ => {
                tracing::debug!(tag = text, "no colour has this tag");
                Err(ParseColourError::new(text))
            }
        }
    }

    /// Returns the tag string for this colour.
    pub fn tag(self) -> &'static str {
        match self {
            Colour::Red => consts::TAG_RED,
            Colour::Blue => consts::TAG_BLUE,
        }
    }

    /// Returns this colour's position within [`Colour::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            Colour::Red => 0,
            Colour::Blue => 1,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

impl FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(text: &str) -> Result<Colour, ParseColourError> {
        Colour::from_tag(text)
    }
}

impl<'a> TryFrom<&'a str> for Colour {
    type Error = ParseColourError;

    fn try_from(text: &'a str) -> Result<Colour, ParseColourError> {
        Colour::from_tag(text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Colour {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> Result<Colour, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text: String = serde::Deserialize::deserialize(deserializer)?;
        Colour::from_tag(&text).map_err(serde::de::Error::custom)
    }
}

//===========================================================================//

/// An iterator over every [`Colour`], in declaration order.
#[derive(Clone, Debug)]
pub struct Colours {
    ordinals: Range<usize>,
}

impl Colours {
    fn new() -> Colours {
        Colours { ordinals: 0..Colour::ALL.len() }
    }
}

impl Iterator for Colours {
    type Item = Colour;

    fn next(&mut self) -> Option<Colour> {
        self.ordinals.next().map(|ordinal| Colour::ALL[ordinal])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ordinals.size_hint()
    }
}

impl DoubleEndedIterator for Colours {
    fn next_back(&mut self) -> Option<Colour> {
        self.ordinals.next_back().map(|ordinal| Colour::ALL[ordinal])
    }
}

impl ExactSizeIterator for Colours {}

impl FusedIterator for Colours {}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::Colour;
    use crate::internal::consts;
    use std::convert::TryFrom;

    #[test]
    fn tag_round_trip() {
        for colour in Colour::iter() {
            assert_eq!(Colour::from_tag(colour.tag()), Ok(colour));
        }
    }

    #[test]
    fn ordinal_matches_position() {
        for (index, &colour) in Colour::ALL.iter().enumerate() {
            assert_eq!(colour.ordinal(), index);
        }
    }

    #[test]
    fn iteration_is_in_declaration_order() {
        let colours: Vec<Colour> = Colour::iter().collect();
        assert_eq!(colours, vec![Colour::Red, Colour::Blue]);
        let again: Vec<Colour> = Colour::iter().collect();
        assert_eq!(again, colours);
    }

    #[test]
    fn iterator_reports_exact_len() {
        let mut colours = Colour::iter();
        assert_eq!(colours.len(), consts::NUM_COLOURS);
        colours.next();
        assert_eq!(colours.len(), 1);
        colours.next();
        assert_eq!(colours.len(), 0);
        assert_eq!(colours.next(), None);
        assert_eq!(colours.next(), None);
    }

    #[test]
    fn iterate_backwards() {
        let colours: Vec<Colour> = Colour::iter().rev().collect();
        assert_eq!(colours, vec![Colour::Blue, Colour::Red]);
    }

    #[test]
    fn display_is_tag() {
        assert_eq!(Colour::Red.to_string(), "red");
        assert_eq!(Colour::Blue.to_string(), "blue");
        assert_eq!(format!("[{:>5}]", Colour::Red), "[  red]");
        assert_eq!(format!("[{:<5}]", Colour::Blue), "[blue ]");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        for text in &["Red", "RED", "Blue", "bLUE"] {
            assert!(Colour::from_tag(text).is_err());
        }
    }

    #[test]
    fn lookup_does_not_trim() {
        for text in &[" red", "red ", "\tblue", "blue\n"] {
            let error = Colour::from_tag(text).unwrap_err();
            assert_eq!(error.text(), *text);
        }
    }

    #[test]
    fn parse_and_try_from_agree_with_from_tag() {
        for text in &["red", "blue", "", "redd", "green"] {
            let expected = Colour::from_tag(text);
            assert_eq!(text.parse::<Colour>(), expected);
            assert_eq!(Colour::try_from(*text), expected);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_tag() {
        let json = serde_json::to_string(&Colour::ALL).unwrap();
        assert_eq!(json, r#"["red","blue"]"#);
        let colours: Vec<Colour> = serde_json::from_str(&json).unwrap();
        assert_eq!(colours, Colour::ALL.to_vec());
    }
}

//===========================================================================//
