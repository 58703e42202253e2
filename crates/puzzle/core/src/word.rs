//! Word placements and answer verifier tokens.
use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};

use crate::error::VerifierParseError;
use crate::grid::{Coord, Direction};

/// Clue identifier: a clue number is unique within its direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordId {
    pub number: u16,
    pub direction: Direction,
}

impl WordId {
    pub const fn new(number: u16, direction: Direction) -> Self {
        Self { number, direction }
    }

    /// Stable key for clue list entries, e.g. `clue-4-down`.
    pub fn clue_key(&self) -> String {
        format!("clue-{}-{}", self.number, self.direction.as_str())
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.direction)
    }
}

/// A single placed word. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub id: WordId,
    pub origin: Coord,
    pub length: u16,
    pub clue: String,
    pub verifier: Verifier,
}

impl Word {
    pub fn new(
        id: WordId,
        origin: Coord,
        length: u16,
        clue: impl Into<String>,
        verifier: Verifier,
    ) -> Self {
        Self {
            id,
            origin,
            length,
            clue: clue.into(),
            verifier,
        }
    }

    pub fn number(&self) -> u16 {
        self.id.number
    }

    pub fn direction(&self) -> Direction {
        self.id.direction
    }

    /// Coordinates covered by the word, origin first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let (origin, direction) = (self.origin, self.id.direction);
        (0..i32::from(self.length)).map(move |i| origin.offset(direction, i))
    }

    /// Returns the position of `coord` within the word, if covered.
    pub fn position_of(&self, coord: Coord) -> Option<u16> {
        self.cells()
            .position(|cell| cell == coord)
            .map(|index| index as u16)
    }

    pub fn covers(&self, coord: Coord) -> bool {
        self.position_of(coord).is_some()
    }
}

/// Opaque one-way token used to check a candidate answer.
///
/// The token is the SHA-256 digest of the normalized answer (see
/// [`normalize_answer`]); the answer itself is never stored.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verifier([u8; 32]);

impl Verifier {
    /// Derives the token for a candidate answer.
    pub fn derive(candidate: &str) -> Self {
        let normalized = normalize_answer(candidate);
        let mut hasher = Sha256::new();
        hasher.update(normalized.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Returns true if `candidate` derives to this token.
    pub fn matches(&self, candidate: &str) -> bool {
        Self::derive(candidate) == *self
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Verifier({}…)", &self.to_hex()[..8])
    }
}

impl fmt::Display for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Verifier {
    type Err = VerifierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim()).map_err(|_| VerifierParseError::InvalidHex)?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|raw: Vec<u8>| VerifierParseError::WrongLength { actual: raw.len() })?;
        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Verifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Verifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Keeps ASCII letters only and uppercases them.
pub fn normalize_answer(candidate: &str) -> String {
    candidate
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIETNAM: &str = "a49e5ae168cfd1afcd15d36b3382e1cf6b7ee19a4f8a65977453b980830d7799";

    #[test]
    fn derive_matches_known_digest() {
        assert_eq!(Verifier::derive("VIETNAM").to_hex(), VIETNAM);
    }

    #[test]
    fn derive_normalizes_case_and_strips_non_letters() {
        let token: Verifier = VIETNAM.parse().unwrap();
        assert!(token.matches("vietnam"));
        assert!(token.matches(" Viet-Nam\n"));
        assert!(!token.matches("VIETNA"));
        assert!(!token.matches("VIETNAN"));
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        assert_eq!(
            "zz".parse::<Verifier>(),
            Err(VerifierParseError::InvalidHex)
        );
        assert_eq!(
            "abcd".parse::<Verifier>(),
            Err(VerifierParseError::WrongLength { actual: 2 })
        );
    }

    #[test]
    fn debug_does_not_print_full_token() {
        let token = Verifier::derive("OAHU");
        let rendered = format!("{token:?}");
        assert!(rendered.len() < token.to_hex().len());
    }

    #[test]
    fn cells_are_contiguous_from_origin() {
        let word = Word::new(
            WordId::new(4, Direction::Down),
            Coord::new(2, 5),
            3,
            "clue",
            Verifier::derive("SUM"),
        );
        let cells: Vec<_> = word.cells().collect();
        assert_eq!(
            cells,
            vec![Coord::new(2, 5), Coord::new(3, 5), Coord::new(4, 5)]
        );
        assert_eq!(word.position_of(Coord::new(4, 5)), Some(2));
        assert!(!word.covers(Coord::new(5, 5)));
    }

    #[test]
    fn clue_key_includes_direction() {
        assert_eq!(WordId::new(4, Direction::Down).clue_key(), "clue-4-down");
        assert_eq!(WordId::new(10, Direction::Across).to_string(), "10 Across");
    }
}
