//! ZPL label templating: field mapping, template filling, and the text
//! utilities the comparison tooling is built on.

pub mod clean;
pub mod compare;
pub mod error;
pub mod fields;
pub mod fill;
