//! Name normalization for fuzzy matching of venue and business names.

mod matching;
mod normalizer;

pub use matching::names_match;
pub use normalizer::{normalize, NormalizedText};
