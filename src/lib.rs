//! # zplate
//!
//! A placeholder-filling engine for ZPL label templates.
//!
//! A label template is ordinary ZPL text with embedded tokens of the form
//! `<<FieldName>>`. Callers supply the per-job field values, and the engine
//! produces the finished label text with every recognized token replaced and
//! everything else passed through untouched. The template itself is opaque:
//! no ZPL parsing, validation, or rendering happens here.
//!
//! ```text
//! ^FO40,390^A0N,36,36^FDLot: <<LotNo>> Exp: <<ExpiryDate>>^FS
//! ```

pub mod zpl;

// Flat imports for the most common entry points. The full module paths
// remain available for less common types.
pub use zpl::clean::strip_unprintable;
pub use zpl::compare::{first_mismatch, LabelDiff};
pub use zpl::error::GenerateError;
pub use zpl::fields::{detail_map, Record, TokenMap};
pub use zpl::fill::{generate_from_file, generate_from_str};
