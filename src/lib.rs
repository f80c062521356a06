//! # medfinder
//!
//! A library for looking up medications in a small local catalog and finding
//! interchangeable alternatives.
//!
//! Given a name typed by a user, `medfinder` finds the matching record
//! (ignoring case) and shows its category, active ingredient, and price. When
//! nothing matches it suggests similarly spelled names. When something does,
//! it lists other medications with the same active ingredient, optionally
//! under a price ceiling.
//!
//! ## Features
//!
//! - **Exact lookup**: case-insensitive, first record in catalog order wins
//! - **Suggestions**: normalized Levenshtein similarity for typos
//! - **Alternatives**: same active ingredient, optional budget ceiling
//! - **Fallback sample**: a built-in catalog when the data file is missing
//!
//! ## Example
//!
//! ```rust
//! use medfinder::{MedicationCatalog, MedicineFinder};
//!
//! let catalog = MedicationCatalog::sample().unwrap();
//! let finder = MedicineFinder::new(&catalog);
//!
//! let panadol = finder.find("PANADOL").unwrap();
//! for alternative in finder.find_alternatives(panadol, Some(4.0)) {
//!     println!("{}: {}", alternative.name, alternative.price);
//! }
//!
//! assert_eq!(finder.suggest("Paracetmol")[0], "Paracetamol");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog loading, fallback sample, and persistence
//! - [`core`]: Medication record, category, and display formatting
//! - [`matching`]: Lookup, suggestion, and alternative finding
//! - [`utils`]: Query and price-ceiling validation
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogError, LoadOutcome, LoadStatus, MedicationCatalog};
pub use core::medication::MedicationRecord;
pub use core::types::Category;
pub use matching::engine::{LookupOutcome, MatcherConfig, MedicineFinder};
