pub mod pgt;
pub mod vss;
