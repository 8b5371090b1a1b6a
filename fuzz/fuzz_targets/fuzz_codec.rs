#![no_main]

use std::cmp::Ordering;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8sym::{
    MAX_CODEPOINT, codepoint_len, codepoints, compare, decode_codepoint, encode_codepoint,
    encode_many, string_length, string_valid, symbol_valid,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    bytes: &'a [u8],
    stream: Vec<u32>,
    capacity: u8,
}

/// Cross-checks the decoding operations against each other on arbitrary
/// bytes: none may panic, read out of bounds, or disagree about what the
/// input contains.
fn exercise_decode(data: &[u8]) {
    let valid = string_valid(data);

    // The strict iterator and the validity predicate must agree: a string
    // is valid exactly when every symbol decodes.
    let mut decoded = 0usize;
    let mut clean = true;
    for step in codepoints(data) {
        match step {
            Ok((at, codepoint)) => {
                decoded += 1;
                assert!(symbol_valid(&data[at..]));
                // A decoded symbol re-encodes no wider than the bytes it
                // came from; canonical symbols reproduce them exactly.
                let (_, width) = decode_codepoint(&data[at..]).unwrap();
                let reencoded = encode_codepoint(codepoint).unwrap();
                assert!(reencoded.width() <= width);
                if reencoded.width() == width {
                    assert_eq!(reencoded.as_bytes(), &data[at..at + width]);
                }
            }
            Err(_) => {
                clean = false;
                break;
            }
        }
    }
    assert_eq!(valid, clean);

    // Width-skip counting never reports fewer symbols than a full decode
    // found, and matches it exactly on clean input.
    match string_length(data) {
        Ok(count) => {
            if clean {
                assert_eq!(count, decoded);
            } else {
                assert!(count >= decoded);
            }
        }
        Err(_) => assert!(!clean),
    }

    // Identity comparison short-circuits even on garbage; comparing the
    // two halves must never panic.
    assert_eq!(compare(data, data), Ok(Ordering::Equal));
    let (head, tail) = data.split_at(data.len() / 2);
    let _ = compare(head, tail);
}

/// Bulk encoding writes a decodable prefix and stops exactly where the
/// capacity (or an invalid codepoint) says it must.
fn exercise_encode(stream: &[u32], capacity: usize) {
    let mut dst = vec![0u8; capacity];
    match encode_many(stream, &mut dst) {
        Ok(written) => {
            let used: usize = stream[..written]
                .iter()
                .map(|&c| codepoint_len(c).unwrap())
                .sum();
            let prefix = &dst[..used];
            assert!(string_valid(prefix));
            let decoded: Vec<u32> = codepoints(prefix).map(|step| step.unwrap().1).collect();
            assert_eq!(decoded, stream[..written]);
            if written < stream.len() {
                assert!(codepoint_len(stream[written]).unwrap() > capacity - used);
            }
        }
        Err(_) => assert!(stream.iter().any(|&c| c > MAX_CODEPOINT)),
    }
}

fuzz_target!(|input: Input| {
    exercise_decode(input.bytes);
    exercise_encode(&input.stream, usize::from(input.capacity));
});
