#![no_main]

use hashes::{sha256, HashEngine};
use libfuzzer_sys::fuzz_target;

fn do_test(data: &[u8]) {
    let hash = sha256::Hash::hash(data);

    // Use the first byte to pick where the input is split across `input` calls.
    let split = match data.first() {
        Some(&b) => usize::from(b) % (data.len() + 1),
        None => 0,
    };
    let mut engine = sha256::Hash::engine();
    engine.input(&data[..split]);
    engine.input(&data[split..]);
    assert_eq!(engine.n_bytes_hashed(), data.len() as u64);
    assert_eq!(engine.finalize(), hash);

    let mut engine = sha256::HashEngine::new();
    for chunk in data.chunks(7) {
        engine.input(chunk);
    }
    assert_eq!(engine.finalize(), hash);

    assert_eq!(sha256::Hash::hash_unoptimized(data), hash);
}

fuzz_target!(|data| {
    do_test(data)
});
