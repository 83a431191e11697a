use test::{black_box, Bencher};

use crate::{sha256, HashEngine as _};

#[bench]
pub fn sha256_10(bh: &mut Bencher) {
    let mut engine = sha256::Hash::engine();
    let bytes = [1u8; 10];
    bh.iter(|| {
        engine.input(&bytes);
    });
    bh.bytes = bytes.len() as u64;
}

#[bench]
pub fn sha256_1k(bh: &mut Bencher) {
    let mut engine = sha256::Hash::engine();
    let bytes = [1u8; 1024];
    bh.iter(|| {
        engine.input(&bytes);
    });
    bh.bytes = bytes.len() as u64;
}

#[bench]
pub fn sha256_64k(bh: &mut Bencher) {
    let mut engine = sha256::Hash::engine();
    let bytes = [1u8; 65536];
    bh.iter(|| {
        engine.input(&bytes);
    });
    bh.bytes = bytes.len() as u64;
}

// 55 bytes pad into one block, 56 need a second.
#[bench]
pub fn sha256_oneshot_55(bh: &mut Bencher) {
    let bytes = [1u8; 55];
    bh.iter(|| sha256::Hash::hash(black_box(&bytes)));
}

#[bench]
pub fn sha256_oneshot_56(bh: &mut Bencher) {
    let bytes = [1u8; 56];
    bh.iter(|| sha256::Hash::hash(black_box(&bytes)));
}

#[bench]
pub fn sha256_compress(bh: &mut Bencher) {
    let block = [0x5a_u8; sha256::BLOCK_SIZE];
    bh.iter(|| sha256::compress(black_box(sha256::INITIAL_STATE), black_box(&block)));
    bh.bytes = block.len() as u64;
}
