//! Template module - Bidirectional filename template engine
//!
//! A template is literal text interleaved with named, optionally typed fields.
//! The same compiled template extracts typed values from a string, renders
//! values back into a string, and checks strings for compatibility.
//!
//! ## Syntax
//!
//! - Literal text outside braces is matched verbatim; `{{` and `}}` stand for `{` and `}`
//! - `{name}`: greedy text field, ends where the next literal starts
//! - `{name:4s}`, `{name:_<6s}`: fixed-width text, padding stripped per alignment
//! - `{name:05d}`, `{name:>4d}`: fixed-width integer
//! - `{name:%Y%m%d_%H%M}`: datetime, width taken from the directive
//!
//! ## Example
//!
//! ```
//! use trollsift_core::template::{Parser, Value};
//!
//! let parser = Parser::new("hrpt_{platform:4s}{platnum:2s}_{orbit:05d}.l1b").unwrap();
//! let fields = parser.parse("hrpt_noaa16_69022.l1b").unwrap();
//! assert_eq!(fields["platform"], Value::from("noaa"));
//! assert_eq!(fields["orbit"], Value::Int(69022));
//! assert_eq!(parser.compose(&fields).unwrap(), "hrpt_noaa16_69022.l1b");
//! ```

pub mod engine;
pub mod error;
pub mod value;

pub use engine::{
    compose, globify, parse, validate, CompiledTemplate, FormatSpec, Parser, ParserOptions,
    Segment,
};
pub use error::TemplateError;
pub use value::{Fields, Value};
