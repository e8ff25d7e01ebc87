//! Utility functions shared across the crate.
//!
//! ## Modules
//!
//! - [`progress`] - Spinner/progress bar that compiles to a no-op without the `progress` feature
//! - [`text`] - Byte-offset windows that respect UTF-8 boundaries, line numbering
//!
//! ```no_run
//! use folio::utils::{clamp_window, line_number};
//!
//! let text = "one\ntwo\nthree";
//! let (start, end) = clamp_window(text, 5, 2);
//! assert_eq!(&text[start..end], "\ntwo");
//! assert_eq!(line_number(text, 5), 2);
//! ```

pub mod progress;
pub mod text;

pub use text::*;
