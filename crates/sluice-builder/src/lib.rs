//! Strictly-ordered verification value queues.
//!
//! A multi-round proof verifier consumes values — round challenges,
//! partial polynomial evaluations — in an order fixed by the proof
//! transcript's structure. [`VerificationBuilder`] marshals those values
//! through one exclusively-owned record: five independent FIFO
//! [`ValueQueue`]s, each set once from the transcript and then drained.
//!
//! The discipline is fail-closed: draining a queue past its end returns
//! the queue-specific [`VerificationError`] variant, and the caller must
//! treat any such error as whole-verification failure. A failed consume
//! never mutates queue state, so nothing partially-verified can escape.
//!
//! Builders are allocated from a [`BuilderArena`] scoped to one
//! verification call, mirroring the call-boundary reclamation of
//! [`sluice_arena`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod error;
pub mod queue;

// Public re-exports for the primary API surface.
pub use builder::{BuilderArena, QueueKind, VerificationBuilder};
pub use error::VerificationError;
pub use queue::ValueQueue;
