//! Presentation of a revealed reward.

mod presenter;

pub use presenter::{treatment_for, treatment_for_label, DisplayColor, RevealCard, RevealTreatment};
