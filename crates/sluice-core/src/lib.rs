//! Core types for the Sluice verification toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fixed-width [`Word`] that proof transcripts are made of and the
//! [`log2_up`] helper used to size protocol rounds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bits;
pub mod word;

// Public re-exports for the primary API surface.
pub use bits::log2_up;
pub use word::{Word, WORD_SIZE};
