//! Heap accounting used to measure the peak memory of a reducer invocation.
//!
//! [`TrackingAllocator`] wraps the system allocator and keeps a count of live heap bytes. While a
//! [`MemoryTrace`] is active it also maintains a high-water mark, which the trace reports relative
//! to the live bytes at the moment it was started.
//!
//! The counters are process-wide: allocations made by other threads while a trace is active are
//! attributed to that trace.

use core::{
    alloc::{GlobalAlloc, Layout},
    marker::PhantomData,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};
use std::alloc::System;

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Bytes currently allocated through [`TrackingAllocator`].
static ALLOCATED: AtomicUsize = AtomicUsize::new(0);

/// High-water mark of [`ALLOCATED`] since the active trace started.
static PEAK: AtomicUsize = AtomicUsize::new(0);

/// Set while a [`MemoryTrace`] is alive.
static TRACING: AtomicBool = AtomicBool::new(false);

// ERRORS
// ================================================================================================

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TraceError {
    #[error("a memory trace is already active")]
    AlreadyActive,
}

// ALLOCATOR
// ================================================================================================

/// A [`GlobalAlloc`] that forwards to [`System`] and counts live bytes.
#[derive(Debug, Default)]
pub struct TrackingAllocator {
    _private: (),
}

impl TrackingAllocator {
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

#[inline]
fn record_alloc(size: usize) {
    let current = ALLOCATED.fetch_add(size, Ordering::Relaxed) + size;
    if TRACING.load(Ordering::Relaxed) {
        PEAK.fetch_max(current, Ordering::Relaxed);
    }
}

#[inline]
fn record_dealloc(size: usize) {
    ALLOCATED.fetch_sub(size, Ordering::Relaxed);
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded with the caller's layout
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded with the caller's layout
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: `ptr` was returned by `System` for this same layout
        unsafe { System.dealloc(ptr, layout) };
        record_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: `ptr` was returned by `System` for `layout`; the caller upholds the rest
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            let old_size = layout.size();
            if new_size >= old_size {
                record_alloc(new_size - old_size);
            } else {
                record_dealloc(old_size - new_size);
            }
        }
        new_ptr
    }
}

/// Returns true if a [`MemoryTrace`] is currently active.
pub fn is_tracing() -> bool {
    TRACING.load(Ordering::SeqCst)
}

// MEMORY TRACE
// ================================================================================================

/// A scoped memory trace.
///
/// Only one trace may be active at a time. The trace stops when the guard is dropped, including
/// when the stack unwinds through it, so a panicking measurement never leaves tracing enabled.
#[derive(Debug)]
pub struct MemoryTrace {
    baseline: usize,
    // traces are tied to the thread that started them
    _not_send: PhantomData<*const ()>,
}

impl MemoryTrace {
    /// Starts a new trace.
    ///
    /// # Errors
    /// Returns [`TraceError::AlreadyActive`] if another trace has not been dropped yet.
    pub fn start() -> Result<Self, TraceError> {
        if TRACING.swap(true, Ordering::SeqCst) {
            return Err(TraceError::AlreadyActive);
        }
        let baseline = ALLOCATED.load(Ordering::Relaxed);
        PEAK.store(baseline, Ordering::Relaxed);

        Ok(Self { baseline, _not_send: PhantomData })
    }

    /// Runs `f` under a fresh trace and returns its output together with the peak bytes
    /// allocated while it ran.
    pub fn scope<T>(f: impl FnOnce() -> T) -> Result<(T, usize), TraceError> {
        let trace = Self::start()?;
        let output = f();
        Ok((output, trace.stop()))
    }

    /// Heap bytes allocated above the baseline at the highest point since the trace started.
    pub fn peak_bytes(&self) -> usize {
        PEAK.load(Ordering::Relaxed).saturating_sub(self.baseline)
    }

    /// Stops the trace and returns its peak.
    pub fn stop(self) -> usize {
        self.peak_bytes()
    }
}

impl Drop for MemoryTrace {
    fn drop(&mut self) {
        TRACING.store(false, Ordering::SeqCst);
    }
}
