pub mod patient;
pub mod pattern_glare;
pub mod reading;
pub mod selection;
pub mod symptoms;
