//! Medication lookup, suggestion, and alternative finding.
//!
//! - [`MedicineFinder`]: main entry point, borrowing an immutable catalog
//! - [`LookupOutcome`]: a hit with its alternatives, or a miss with suggestions
//! - [`scoring`]: name similarity used for "did you mean" suggestions
//!
//! ## Lookup
//!
//! 1. **Exact match**: case-insensitive name equality, first record wins
//! 2. **Suggestions** (on a miss): names with normalized Levenshtein similarity
//!    at or above the threshold (default 0.5), best first, at most 3
//! 3. **Alternatives** (on a hit): other records with the same active ingredient,
//!    optionally priced at or under a ceiling, in catalog order
//!
//! ## Example
//!
//! ```rust
//! use medfinder::{LookupOutcome, MedicationCatalog, MedicineFinder};
//!
//! let catalog = MedicationCatalog::sample().unwrap();
//! let finder = MedicineFinder::new(&catalog);
//!
//! match finder.lookup("panadol", Some(5.0)) {
//!     LookupOutcome::Found { record, alternatives, .. } => {
//!         println!("{}: {} alternative(s)", record.name, alternatives.len());
//!     }
//!     LookupOutcome::NotFound { suggestions, .. } => {
//!         println!("Did you mean: {}", suggestions.join(", "));
//!     }
//! }
//! ```
//!
//! [`MedicineFinder`]: engine::MedicineFinder
//! [`LookupOutcome`]: engine::LookupOutcome

pub mod engine;
pub mod scoring;
