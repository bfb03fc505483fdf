#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stretchy_cryptography::{
    stretch::{stretch, unstretch, Stretch, MAX_STRETCH, MIN_STRETCH},
    Error,
};

#[derive(Debug, Arbitrary)]
pub struct FuzzInput {
    pub data: Vec<u8>,
    pub stretch: u8,
}

// Stretching is lossless and follows the size law
fn fuzz_round_trip(data: &[u8], factor: Stretch) {
    let stretched = match stretch(data, factor) {
        Ok(stretched) => stretched,
        Err(Error::UnalignedInput { bits, width }) => {
            assert_eq!(bits, data.len() * 8);
            assert_ne!(bits % width, 0);
            return;
        }
        Err(err) => panic!("unexpected error: {err}"),
    };
    assert_eq!(stretched.len(), factor.stretched_len(data.len()));

    // Exactly one bit set per chunk
    let ones: u32 = stretched.iter().map(|byte| byte.count_ones()).sum();
    assert_eq!(ones as usize, data.len() * 8 / factor.chunk_bits());

    assert_eq!(unstretch(&stretched, factor).unwrap(), data);
}

// Arbitrary bytes either unstretch cleanly or are rejected
fn fuzz_unstretch(data: &[u8], factor: Stretch) {
    if let Ok(unstretched) = unstretch(data, factor) {
        assert_eq!(stretch(&unstretched, factor).unwrap(), data);
    }
}

fn fuzz(input: FuzzInput) {
    let value = input.stretch % (MAX_STRETCH + 1);
    let factor = match Stretch::new(value) {
        Ok(factor) => factor,
        Err(_) => {
            assert!(value < MIN_STRETCH);
            return;
        }
    };

    // Bound the output size
    let data = &input.data[..input.data.len().min(256)];
    fuzz_round_trip(data, factor);
    fuzz_unstretch(data, factor);
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
