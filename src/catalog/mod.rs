//! Medication catalog loading and storage.
//!
//! A catalog is a JSON array of medication objects, read once at startup and
//! never modified afterwards. When the data file is missing the built-in
//! sample (compiled into the binary) is used instead.
//!
//! ## Load outcomes
//!
//! - [`LoadStatus::Loaded`]: records came from the file (invalid entries are dropped)
//! - [`LoadStatus::Fallback`]: the file was missing or unreadable, the sample was used
//! - [`LoadStatus::Malformed`]: the file exists but is not a JSON array; the catalog is empty
//!
//! ## Example
//!
//! ```rust,no_run
//! use medfinder::catalog::store::{persist_sample, MedicationCatalog};
//! use std::path::Path;
//!
//! let path = Path::new("medicines.json");
//! let outcome = MedicationCatalog::load(path).unwrap();
//!
//! // Loading never writes; saving the sample is a separate step
//! if outcome.used_fallback() {
//!     let _ = persist_sample(path);
//! }
//!
//! for record in &outcome.catalog {
//!     println!("{} ({})", record.name, record.category);
//! }
//! ```
//!
//! [`LoadStatus::Loaded`]: store::LoadStatus::Loaded
//! [`LoadStatus::Fallback`]: store::LoadStatus::Fallback
//! [`LoadStatus::Malformed`]: store::LoadStatus::Malformed

pub mod store;
