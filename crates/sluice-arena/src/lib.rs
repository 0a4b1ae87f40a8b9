//! Call-scoped bump allocation for Sluice verification state.
//!
//! Verifier scratch state lives exactly as long as one top-level
//! verification call. [`BumpArena`] models that lifetime: regions are
//! handed out monotonically, never freed individually, and reclaimed in
//! one shot by [`BumpArena::reset`] at the call boundary.
//!
//! Regions are identified by [`RegionHandle`]s — stable indices into a
//! growable contiguous buffer — rather than raw addresses, so resolving
//! a handle is O(1) and cannot alias a neighbouring region.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bump;
pub mod handle;

// Public re-exports for the primary API surface.
pub use bump::BumpArena;
pub use handle::RegionHandle;
