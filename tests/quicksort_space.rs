//! Peak heap usage of quicksort, measured with a counting global allocator.
//! Lives in its own test binary so no other test allocates concurrently.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    mem::size_of,
    sync::atomic::{AtomicUsize, Ordering},
};

use classic_sorts::{quicksort, quicksort_by};

struct PeakAlloc {
    current: AtomicUsize,
    peak: AtomicUsize,
}

unsafe impl GlobalAlloc for PeakAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let now = self.current.fetch_add(layout.size(), Ordering::SeqCst) + layout.size();
            self.peak.fetch_max(now, Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        self.current.fetch_sub(layout.size(), Ordering::SeqCst);
    }
}

#[global_allocator]
static ALLOC: PeakAlloc = PeakAlloc {
    current: AtomicUsize::new(0),
    peak: AtomicUsize::new(0),
};

/// Runs `sort` on `input` and returns the peak heap usage above what was
/// allocated before the call, in multiples of the input size.
fn peak_ratio(input: Vec<u64>, sort: impl FnOnce(Vec<u64>) -> Vec<u64>) -> f64 {
    let input_bytes = input.len() * size_of::<u64>();
    let before = ALLOC.current.load(Ordering::SeqCst);
    ALLOC.peak.store(before, Ordering::SeqCst);

    let sorted = sort(input);

    let peak = ALLOC.peak.load(Ordering::SeqCst);
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    drop(sorted);
    peak.saturating_sub(before) as f64 / input_bytes as f64
}

#[test]
fn auxiliary_space_is_linear() {
    // One test function on purpose: the counters are process wide.
    for n in [500u64, 1000, 2000] {
        let sorted_ratio = peak_ratio((0..n).collect(), quicksort);
        assert!(sorted_ratio < 8.0, "sorted, n={n}: ratio {sorted_ratio}");

        let reversed_ratio = peak_ratio((0..n).rev().collect(), |v| {
            quicksort_by(v, |a: &u64, b: &u64| a < b)
        });
        assert!(reversed_ratio < 8.0, "reversed, n={n}: ratio {reversed_ratio}");
    }
}
