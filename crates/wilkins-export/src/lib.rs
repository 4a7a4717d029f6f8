//! wilkins-export
//!
//! Printing of the prescription: Tera rendering to a Markdown-ish text and
//! DOCX generation from that text.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
