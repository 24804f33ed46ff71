use sortrace::{Algorithm, DEMO_DATASET};

fn mix64(mut z: u64) -> u64 {
    // SplitMix64 mixing function.
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn digest_u64(bytes: &[u8]) -> u64 {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for chunk in bytes.chunks(8) {
        let mut v = 0u64;
        for (i, &b) in chunk.iter().enumerate() {
            v |= (b as u64) << (i * 8);
        }
        state = mix64(state ^ v);
    }
    state
}

fn trace_digest(algo: Algorithm, input: &[f64]) -> u64 {
    let steps = algo.trace(input);
    let mut digest = 0u64;
    for step in &steps {
        let bytes = serde_json::to_vec(step).unwrap();
        digest ^= digest_u64(&bytes);
    }
    digest
}

#[test]
fn trace_digests_are_stable_across_runs() {
    for algo in Algorithm::ALL {
        let first = trace_digest(algo, &DEMO_DATASET);
        let second = trace_digest(algo, &DEMO_DATASET);
        assert_eq!(first, second, "{algo:?} trace is not a pure function");
    }
}

#[test]
fn digests_distinguish_algorithms_and_inputs() {
    // Sanity for the harness itself: different traces hash differently.
    let merge = trace_digest(Algorithm::MergeSort, &DEMO_DATASET);
    let quick = trace_digest(Algorithm::QuickSort, &DEMO_DATASET);
    assert_ne!(merge, quick);

    let shuffled = trace_digest(Algorithm::MergeSort, &[2.0, 13.0, 3.0, 14.0, 5.0]);
    assert_ne!(merge, shuffled);
}
