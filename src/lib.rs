//! Source code similarity detection.
//!
//! Documents are normalized into a canonical text (comments and literal
//! values stripped, identifiers replaced by a placeholder), fingerprinted with
//! a rolling hash over k-character windows, and compared by the Jaccard index
//! of their fingerprint sets. Matching window offsets can be located for
//! display.
//!
//! ```
//! let a = codesim::normalize("int total = 10; // running sum");
//! let b = codesim::normalize("int count = 99;");
//! assert_eq!(a, b);
//! assert_eq!(codesim::similarity(&a, &b, codesim::DEFAULT_K), Ok(1.0));
//! ```

pub mod compare;
pub mod config;
pub mod document;
pub mod error;
pub mod fingerprint;
pub mod logging;
pub mod normalize;
pub mod report_helpers;
pub mod walk;

pub use error::SimilarityError;
pub use fingerprint::{DEFAULT_K, MatchPosition, find_matches, hashes, similarity};
pub use normalize::normalize;
