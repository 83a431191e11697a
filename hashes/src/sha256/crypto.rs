// SPDX-License-Identifier: CC0-1.0

//! The SHA-256 compression function.

use super::BLOCK_SIZE;

/// The SHA-256 round constants.
///
/// First 32 bits of the fractional parts of the cube roots of the first 64 primes.
#[rustfmt::skip]
pub const ROUND_CONSTANTS: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[allow(non_snake_case)]
const fn Ch(x: u32, y: u32, z: u32) -> u32 { (x & y) ^ (!x & z) }
#[allow(non_snake_case)]
const fn Maj(x: u32, y: u32, z: u32) -> u32 { (x & y) ^ (x & z) ^ (y & z) }
#[allow(non_snake_case)]
const fn Sigma0(x: u32) -> u32 { x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22) }
#[allow(non_snake_case)]
const fn Sigma1(x: u32) -> u32 { x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25) }
const fn sigma0(x: u32) -> u32 { x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3) }
const fn sigma1(x: u32) -> u32 { x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10) }

/// Reads the big-endian word starting at byte `index`.
#[allow(clippy::identity_op)] // more readble
const fn read_u32(bytes: &[u8], index: usize) -> u32 {
    ((bytes[index + 0] as u32) << 24)
        | ((bytes[index + 1] as u32) << 16)
        | ((bytes[index + 2] as u32) << 8)
        | ((bytes[index + 3] as u32) << 0)
}

/// Expands one block into the 64-word message schedule.
pub(super) const fn schedule(block: &[u8; BLOCK_SIZE]) -> [u32; 64] {
    let mut w = [0u32; 64];
    let mut i = 0;
    while i < 16 {
        w[i] = read_u32(block, i * 4);
        i += 1;
    }
    while i < 64 {
        w[i] = w[i - 16]
            .wrapping_add(sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(sigma1(w[i - 2]));
        i += 1;
    }
    w
}

/// Runs the SHA-256 compression function over a single block.
///
/// Takes the current hash state and one 64-byte block and returns the next state. This is a
/// pure function: the input state is not modified and there is nothing that can fail.
pub const fn compress(state: [u32; 8], block: &[u8; BLOCK_SIZE]) -> [u32; 8] {
    let w = schedule(block);
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state;

    let mut i = 0;
    while i < 64 {
        let t1 = h
            .wrapping_add(Sigma1(e))
            .wrapping_add(Ch(e, f, g))
            .wrapping_add(ROUND_CONSTANTS[i])
            .wrapping_add(w[i]);
        let t2 = Sigma0(a).wrapping_add(Maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
        i += 1;
    }

    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
        state[4].wrapping_add(e),
        state[5].wrapping_add(f),
        state[6].wrapping_add(g),
        state[7].wrapping_add(h),
    ]
}

/// Serializes the hash state as eight big-endian words.
#[allow(clippy::identity_op)] // more readble
pub(super) const fn state_to_bytes(state: [u32; 8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    let mut i = 0;
    while i < 8 {
        output[i * 4 + 0] = (state[i] >> 24) as u8;
        output[i * 4 + 1] = (state[i] >> 16) as u8;
        output[i * 4 + 2] = (state[i] >> 8) as u8;
        output[i * 4 + 3] = (state[i] >> 0) as u8;
        i += 1;
    }
    output
}
