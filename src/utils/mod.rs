//! Input validation helpers shared by the command-line front-ends.

pub mod validation;
