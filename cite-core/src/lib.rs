//! Output resolution and formatter contract for the `cite` command-line tool
//!
//! The actual work of parsing bibliographic input (BibTeX, CSL-JSON, DOIs,
//! Wikidata identifiers) and rendering citation styles belongs to an external
//! formatter. This crate holds the small amount of logic that sits around it:
//!
//! - [`FormatRequest`]: the output type, style and language of one run
//! - [`resolve_extension`] and [`maybe_wrap_html`]: how the formatted text is
//!   named and shaped before it is written
//! - [`Formatter`]: the contract a formatter fulfils, with
//!   [`CommandFormatter`] delegating to an external program
//!
//! # Example
//!
//! ```rust
//! use cite_core::{maybe_wrap_html, resolve_extension, FormatRequest};
//!
//! let request = FormatRequest::new().source_type("html").style("citation-apa");
//!
//! assert_eq!(resolve_extension(&request).unwrap(), "html");
//! assert!(maybe_wrap_html("<p>ref</p>", &request).contains("<body><p>ref</p></body>"));
//! ```

pub mod error;
pub mod formatter;
pub mod request;
pub mod resolver;

pub use error::{CoreError, FormatError};
pub use formatter::{CommandFormatter, Formatted, Formatter};
pub use request::{FormatOptions, FormatRequest, OutputStyle, SourceType, DEFAULT_LANGUAGE};
pub use resolver::{maybe_wrap_html, output_path, resolve_extension, wraps_html, ExtensionSeparator};
