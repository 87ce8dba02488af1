//! Submission identifiers: `LEAD-XXXXXXXX` and `SUB-XXXXXXXX`.
//!
//! The suffix is 8 characters drawn uniformly from `[A-Z0-9]`. Each kind also
//! has a placeholder: the example identifier written into the generation
//! instructions, which a lazy generator may echo back verbatim.

use rand::Rng;

/// Length of the random part after the prefix.
pub const SUFFIX_LEN: usize = 8;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Which identifier family a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Lead,
    Submission,
}

impl IdKind {
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Lead => "LEAD-",
            Self::Submission => "SUB-",
        }
    }

    /// The example identifier embedded in the instruction template.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Lead => "LEAD-A4T8K2P1",
            Self::Submission => "SUB-Q7M2X9K4",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Submission => "question",
        }
    }

    /// Mint a fresh identifier from the thread-local RNG.
    pub fn mint(self) -> String {
        self.mint_with(&mut rand::rng())
    }

    /// Mint a fresh identifier from the given RNG. Never returns the placeholder.
    pub fn mint_with<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        loop {
            let mut id = String::with_capacity(self.prefix().len() + SUFFIX_LEN);
            id.push_str(self.prefix());
            for _ in 0..SUFFIX_LEN {
                let idx = rng.random_range(0..ALPHABET.len());
                id.push(ALPHABET[idx] as char);
            }
            if id != self.placeholder() {
                return id;
            }
        }
    }

    /// True if `id` is the prefix followed by exactly 8 of `[A-Z0-9]`.
    pub fn is_well_formed(self, id: &str) -> bool {
        match id.strip_prefix(self.prefix()) {
            Some(suffix) => {
                suffix.len() == SUFFIX_LEN
                    && suffix
                        .bytes()
                        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
            }
            None => false,
        }
    }

    /// True if a generated identifier cannot be handed to a caller as-is.
    pub fn needs_repair(self, id: &str) -> bool {
        id == self.placeholder() || !self.is_well_formed(id)
    }
}

/// A result type carrying one identifier of a known kind.
pub trait Identified {
    const KIND: IdKind;

    fn identifier(&self) -> &str;

    fn set_identifier(&mut self, id: String);
}
