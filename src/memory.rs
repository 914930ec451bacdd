/*
 * File: /src/memory.rs
 * Created Date: Monday, October 19th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Heap peak sampling around the mining phase
 */

//! Peak heap usage of a phase.
//!
//! The counters are only fed when the executable installs
//! [`TrackingAllocator`] as its global allocator:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: fast_itemset::memory::TrackingAllocator = fast_itemset::memory::TrackingAllocator;
//! ```
//!
//! Without it every probe reports 0.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

static CURRENT: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// System allocator that keeps live and peak byte counts
pub struct TrackingAllocator;

impl TrackingAllocator {
    fn record_alloc(size: usize) {
        let now = CURRENT.fetch_add(size, Ordering::Relaxed) + size;
        PEAK.fetch_max(now, Ordering::Relaxed);
    }

    fn record_dealloc(size: usize) {
        CURRENT.fetch_sub(size, Ordering::Relaxed);
    }
}

// SAFETY: every call forwards to `System` unchanged; the counters never touch
// the returned memory.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: caller upholds the `GlobalAlloc::alloc` contract for `layout`
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            Self::record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: same contract as `alloc`
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            Self::record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: `ptr` came from this allocator, hence from `System`, with `layout`
        System.dealloc(ptr, layout);
        Self::record_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: `ptr` and `layout` as for `dealloc`; `new_size` checked by the caller
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            Self::record_dealloc(layout.size());
            Self::record_alloc(new_size);
        }
        new_ptr
    }
}

/// Samples the heap high-water mark between `start` and `peak_megabytes`.
#[derive(Debug)]
pub struct MemoryProbe {
    baseline: usize,
}

impl MemoryProbe {
    /// Resets the high-water mark to the current live size.
    pub fn start() -> Self {
        let baseline = CURRENT.load(Ordering::Relaxed);
        PEAK.store(baseline, Ordering::Relaxed);
        Self { baseline }
    }

    pub fn peak_bytes(&self) -> usize {
        PEAK.load(Ordering::Relaxed).saturating_sub(self.baseline)
    }

    /// Peak growth since `start`, in MB rounded to two decimals
    pub fn peak_megabytes(&self) -> f64 {
        (self.peak_bytes() as f64 / BYTES_PER_MB * 100.0).round() / 100.0
    }
}
