//! # pack_template
//!
//! Tokenizer for pack directive templates.
//!
//! A template is a sequence of units `<letter>[modifiers][* | count]`,
//! optionally separated by whitespace. `#` starts a comment that runs to
//! the end of the line.
//!
//! ```rust
//! use pack_template::{Count, tokenize};
//!
//! let tokens = tokenize("N* a5 x");
//! let tokens: Vec<_> = tokens.into_iter().map(Result::unwrap).collect();
//!
//! assert_eq!(tokens[0].directive, 'N');
//! assert_eq!(tokens[0].count, Count::Star);
//! assert_eq!(tokens[1].count, Count::Exact(5));
//! assert_eq!(tokens[2].count, Count::Unspecified);
//! ```
//!
//! Malformed units do not stop tokenizing. They yield an `Err` in their
//! position and the caller decides when to surface it.
//!
//! ```rust
//! use pack_template::{SyntaxError, tokenize};
//!
//! let tokens = tokenize("C a_");
//! assert!(tokens[0].is_ok());
//! assert_eq!(
//!     tokens[1],
//!     Err(SyntaxError::ModifierNotAllowed { directive: 'a', modifier: '_' })
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod token;
pub mod tokenizer;

pub use error::SyntaxError;
pub use token::{Count, Endian, Modifiers, Token};
pub use tokenizer::{Tokenizer, tokenize};
