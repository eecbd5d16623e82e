#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Street address parsing and matching for Washington State sales tax
//! lookups.
//!
//! An address line such as `"6500 Linderson Way SW"` goes through three
//! stages:
//!
//! 1. [`lex`] splits it into shaped lexemes (`6500` is a number, `SW` is
//!    two letters).
//! 2. [`tokenizer::tokenize`] assigns postal roles using the ordered rule
//!    table in [`grammar`], repairing the token list and retrying when no
//!    rule fits.
//! 3. [`score::best_match`] compares the result with the published address
//!    ranges for a ZIP code and picks the closest one.
//!
//! The word tables behind all three live in [`lexicon`].

pub mod grammar;
pub mod lex;
pub mod lexicon;
pub mod parsed;
pub mod score;
pub mod token;
pub mod tokenizer;

pub use parsed::ParsedAddress;
pub use score::{ACCEPT_THRESHOLD, best_match, score};
pub use token::{AddressToken, Roles};
pub use tokenizer::tokenize;
