use std::{hint::black_box, panic};

use assert_matches::assert_matches;
use serial_test::serial;

use super::*;

const ONE_MIB: usize = 1 << 20;

#[test]
#[serial]
fn peak_covers_allocation_made_during_trace() {
    let trace = MemoryTrace::start().unwrap();
    let buffer: Vec<u8> = black_box(Vec::with_capacity(ONE_MIB));
    assert!(trace.peak_bytes() >= ONE_MIB);
    drop(buffer);

    let peak = trace.stop();
    assert!(peak >= ONE_MIB, "peak {peak} should include the 1 MiB buffer");
}

#[test]
#[serial]
fn peak_survives_deallocation() {
    let (_, peak) = MemoryTrace::scope(|| {
        let buffer = black_box(vec![0_u8; ONE_MIB]);
        buffer.len()
    })
    .unwrap();

    assert!(peak >= ONE_MIB);
}

#[test]
#[serial]
fn growing_a_vector_is_counted() {
    let (len, peak) = MemoryTrace::scope(|| {
        let mut v: Vec<u64> = Vec::new();
        for i in 0..100_000_u64 {
            v.push(black_box(i));
        }
        v.len()
    })
    .unwrap();

    assert_eq!(len, 100_000);
    assert!(peak >= 100_000 * core::mem::size_of::<u64>());
}

#[test]
#[serial]
fn nested_trace_is_rejected() {
    let outer = MemoryTrace::start().unwrap();
    assert!(is_tracing());
    assert_matches!(MemoryTrace::start(), Err(TraceError::AlreadyActive));
    assert_matches!(MemoryTrace::scope(|| ()), Err(TraceError::AlreadyActive));
    drop(outer);

    assert!(!is_tracing());
    assert!(MemoryTrace::start().is_ok());
}

#[test]
#[serial]
fn trace_is_released_when_measurement_panics() {
    let result = panic::catch_unwind(|| {
        let _trace = MemoryTrace::start().unwrap();
        panic!("reducer failed");
    });
    assert!(result.is_err());

    assert!(!is_tracing());
    assert!(MemoryTrace::start().is_ok());
}
