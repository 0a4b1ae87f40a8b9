//! Sluice: verifier-side value marshalling for succinct-proof protocols.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Sluice sub-crates. For most users, adding `sluice` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sluice::prelude::*;
//!
//! // Transcript data the caller keeps alive for the whole call.
//! let challenges = vec![Word::from_u64(3), Word::from_u64(5)];
//! let final_mles = vec![Word::from_u64(7)];
//!
//! // One arena per top-level verification call.
//! let mut arena = BuilderArena::new();
//! let handle = VerificationBuilder::allocate(&mut arena);
//!
//! // Populate every queue once, then drain in proof order.
//! let builder = arena.region_mut(handle);
//! builder.set_challenges(&challenges);
//! builder.set_final_round_mles(&final_mles);
//!
//! assert_eq!(builder.try_consume_challenge(), Ok(Word::from_u64(3)));
//! assert_eq!(builder.try_consume_challenge(), Ok(Word::from_u64(5)));
//! assert_eq!(builder.try_consume_final_round_mle(), Ok(Word::from_u64(7)));
//!
//! // Draining past the end fails the whole verification, naming the
//! // queue that ran dry.
//! assert_eq!(
//!     builder.try_consume_challenge(),
//!     Err(VerificationError::TooFewChallenges)
//! );
//!
//! // Call boundary: reclaim all builders at once.
//! arena.reset();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`base`] | `sluice-core` | [`base::Word`], [`base::log2_up`], protocol constants |
//! | [`arena`] | `sluice-arena` | [`arena::BumpArena`], [`arena::RegionHandle`] |
//! | [`builder`] | `sluice-builder` | [`builder::VerificationBuilder`] and its queues |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core word and sizing types (`sluice-core`).
pub use sluice_core as base;

/// Call-scoped bump allocation (`sluice-arena`).
pub use sluice_arena as arena;

/// The verification builder and its value queues (`sluice-builder`).
pub use sluice_builder as builder;

/// The types most verifiers need, importable in one line.
pub mod prelude {
    pub use sluice_arena::{BumpArena, RegionHandle};
    pub use sluice_builder::{
        BuilderArena, QueueKind, ValueQueue, VerificationBuilder, VerificationError,
    };
    pub use sluice_core::{log2_up, Word, WORD_SIZE};
}
