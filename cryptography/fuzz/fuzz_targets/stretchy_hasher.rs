#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sha2::{Digest as RefSha2Digest, Sha256 as RefSha256};
use stretchy_cryptography::{
    stretch::{unstretch, MAX_STRETCH},
    Hasher, Sha256, Stretchy,
};

#[derive(Debug, Arbitrary)]
pub struct FuzzInput {
    pub chunks: Vec<Vec<u8>>,
    pub stretch: u8,
    pub case_selector: u8,
}

// Unstretching the digest recovers the reference digest
fn fuzz_basic_hashing(chunks: &[Vec<u8>], stretch: u8) {
    let mut our_hasher = Stretchy::<Sha256>::new(stretch).unwrap();
    let mut ref_hasher = RefSha256::new();

    for chunk in chunks {
        assert_eq!(our_hasher.update(chunk).unwrap(), chunk.len());
        ref_hasher.update(chunk);
    }

    let our_result = our_hasher.finalize();
    assert_eq!(our_result.len(), our_hasher.size());
    let ref_result = ref_hasher.finalize();
    let recovered = unstretch(&our_result, our_hasher.stretch()).unwrap();
    assert_eq!(recovered.as_slice(), ref_result.as_slice());
}

// Reset functionality
fn fuzz_reset_functionality(chunks: &[Vec<u8>], stretch: u8) {
    let mut our_hasher = Stretchy::<Sha256>::new(stretch).unwrap();
    for chunk in chunks {
        our_hasher.update(chunk).unwrap();
    }
    let our_result = our_hasher.finalize();

    our_hasher.reset();
    for chunk in chunks {
        our_hasher.update(chunk).unwrap();
    }
    assert_eq!(our_result, our_hasher.finalize());
}

// Chunked vs all-at-once hashing
fn fuzz_chunked_vs_whole(chunks: &[Vec<u8>], stretch: u8) {
    let mut chunked = Stretchy::<Sha256>::new(stretch).unwrap();
    let mut whole = Stretchy::<Sha256>::new(stretch).unwrap();
    let mut all_data = Vec::new();

    for chunk in chunks {
        all_data.extend_from_slice(chunk);
        chunked.update(chunk).unwrap();
    }
    whole.update(&all_data).unwrap();

    // Finalizing twice returns the same digest
    let digest = chunked.finalize();
    assert_eq!(digest, chunked.finalize());
    assert_eq!(digest, whole.finalize());
}

fn fuzz(input: FuzzInput) {
    // Stretch 4 produces 128 KiB digests, so only stretch 1 to 3 is exercised
    let stretch = input.stretch % (MAX_STRETCH - 1) + 1;
    match input.case_selector % 3 {
        0 => fuzz_basic_hashing(&input.chunks, stretch),
        1 => fuzz_reset_functionality(&input.chunks, stretch),
        2 => fuzz_chunked_vs_whole(&input.chunks, stretch),
        _ => unreachable!(),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
