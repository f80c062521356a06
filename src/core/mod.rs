//! Core data types for medication lookup.
//!
//! - [`MedicationRecord`]: one catalog entry (name, category, active ingredient, price,
//!   plus any free-form extra fields)
//! - [`Category`]: therapeutic category tag, used only for labelling
//! - [`display`]: pure rendering of a record into `Key: Value` lines
//!
//! ## Categories
//!
//! | Source label     | Variant                   | Rendered label  |
//! |------------------|---------------------------|-----------------|
//! | `antibiotic`     | `Category::Antibiotic`    | Antibiotic      |
//! | `pain reliever`  | `Category::PainReliever`  | Pain Reliever   |
//! | `antidiabetic`   | `Category::Antidiabetic`  | Antidiabetic    |
//! | anything else    | `Category::Other(label)`  | label as given  |
//!
//! [`MedicationRecord`]: medication::MedicationRecord
//! [`Category`]: types::Category

pub mod display;
pub mod medication;
pub mod types;
