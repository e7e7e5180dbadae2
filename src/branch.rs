//! Types for representing branches and branch outcomes.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A branch outcome.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    /// Not taken
    N,
    /// Taken
    T,
}

impl Outcome {
    /// Parse a trace outcome token.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "taken" => Some(Self::T),
            "not_taken" => Some(Self::N),
            _ => None,
        }
    }

    /// The trace token for this outcome.
    pub fn token(&self) -> &'static str {
        match self {
            Self::T => "taken",
            Self::N => "not_taken",
        }
    }
}

impl std::fmt::Debug for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Self::T => "t",
            Self::N => "n",
        };
        write!(f, "{}", s)
    }
}

impl std::ops::Not for Outcome {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Self::N => Self::T,
            Self::T => Self::N,
        }
    }
}

impl From<bool> for Outcome {
    fn from(x: bool) -> Self {
        match x {
            true => Self::T,
            false => Self::N,
        }
    }
}

impl From<Outcome> for bool {
    fn from(x: Outcome) -> Self {
        match x {
            Outcome::T => true,
            Outcome::N => false,
        }
    }
}

/// A single record in a branch trace: the address token presented by the
/// trace source and the outcome the branch resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchRecord {
    /// The address token for this branch.
    pub addr: String,
    /// The outcome evaluated for this branch.
    pub outcome: Outcome,
}

impl BranchRecord {
    pub fn new(addr: impl ToString, outcome: Outcome) -> Self {
        Self {
            addr: addr.to_string(),
            outcome,
        }
    }
}

/// Map an address token to a table-index key.
///
/// Hexadecimal tokens ("0x1a2b") and decimal tokens ("4096") parse to
/// their numeric value; anything else falls back to a string hash, so
/// malformed tokens never fail. The same token always maps to the same
/// key, across calls and across predictor instances.
pub fn address_key(token: &str) -> usize {
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        if let Ok(key) = usize::from_str_radix(hex, 16) {
            return key;
        }
    }
    if let Ok(key) = token.parse::<usize>() {
        return key;
    }

    // NOTE: DefaultHasher::new() runs SipHash with fixed keys, unlike a
    // hasher obtained through RandomState.
    let mut hasher = DefaultHasher::new();
    token.hash(&mut hasher);
    hasher.finish() as usize
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn outcome_conversions() {
        assert_eq!(!Outcome::T, Outcome::N);
        assert_eq!(Outcome::from(true), Outcome::T);
        assert_eq!(Outcome::from_token("taken"), Some(Outcome::T));
        assert_eq!(Outcome::from_token("not_taken"), Some(Outcome::N));
        assert_eq!(Outcome::from_token("maybe"), None);
        assert_eq!(Outcome::T.token(), "taken");
        assert!(bool::from(Outcome::T));
    }

    #[test]
    fn hex_and_decimal_tokens_parse() {
        assert_eq!(address_key("0x1a2b"), 0x1a2b);
        assert_eq!(address_key("0X10"), 16);
        assert_eq!(address_key("4096"), 4096);
    }

    #[test]
    fn opaque_tokens_hash_deterministically() {
        let a = address_key("loop_head@main");
        let b = address_key("loop_head@main");
        assert_eq!(a, b);
        // A broken hex token falls through to the hash branch instead of
        // failing.
        let c = address_key("0xnothex");
        assert_eq!(c, address_key("0xnothex"));
        assert_ne!(address_key("a"), address_key("b"));
    }
}
