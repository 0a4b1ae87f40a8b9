//! The bump arena.

use crate::handle::RegionHandle;

/// A monotonic bump arena of fixed-size regions.
///
/// Each [`allocate`](BumpArena::allocate) appends one default-initialised
/// region of type `T` and returns its [`RegionHandle`]. Allocation never
/// fails and nothing is freed individually — the whole arena is
/// reclaimed at once by [`reset`](BumpArena::reset) when the enclosing
/// verification call ends.
///
/// The backing storage is a contiguous `Vec<T>`, so consecutive
/// allocations occupy adjacent, non-overlapping regions and handle
/// resolution is O(1).
///
/// # Caller obligations
///
/// Handles do not survive `reset`: a handle taken before a reset must
/// not be resolved afterwards. The arena does not track lifecycles —
/// matching the call-scoped reclamation model, where the boundary that
/// resets the arena is also the boundary that ends every consumer of
/// its regions.
pub struct BumpArena<T> {
    /// Backing storage. Grows on demand, never shrinks during a call.
    regions: Vec<T>,
}

impl<T: Default> BumpArena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Allocate one fresh region and return its handle.
    ///
    /// The region is default-initialised. Two consecutive allocations
    /// return handles with adjacent indices and never alias.
    pub fn allocate(&mut self) -> RegionHandle {
        let handle = RegionHandle::new(self.regions.len());
        self.regions.push(T::default());
        handle
    }

    /// Resolve a handle to a shared reference.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not issued by this arena during the
    /// current lifecycle (its index is past the bump cursor).
    pub fn region(&self, handle: RegionHandle) -> &T {
        &self.regions[handle.index]
    }

    /// Resolve a handle to a mutable reference.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not issued by this arena during the
    /// current lifecycle (its index is past the bump cursor).
    pub fn region_mut(&mut self, handle: RegionHandle) -> &mut T {
        &mut self.regions[handle.index]
    }

    /// Reclaim every region, ending the current call's lifecycle.
    ///
    /// All outstanding handles become invalid. The backing allocation is
    /// kept for reuse by the next call.
    pub fn reset(&mut self) {
        self.regions.clear();
    }

    /// Number of regions allocated in the current lifecycle.
    pub fn allocated(&self) -> usize {
        self.regions.len()
    }

    /// Whether no region has been allocated since the last reset.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Memory usage of the allocated regions in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.regions.len() * std::mem::size_of::<T>()
    }
}

impl<T: Default> Default for BumpArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
