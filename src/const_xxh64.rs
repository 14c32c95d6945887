//!Const 64 bit version of xxhash algorithm

use crate::xxh64_common::*;

///Returns hash for the provided input.
///
///Produces the same value as the streaming hasher fed with `input`.
pub const fn xxh64(input: &[u8], seed: u64) -> u64 {
    let input_len = input.len() as u64;

    if input.len() >= CHUNK_SIZE {
        let mut v = init_v(seed);
        let mut cursor = 0;

        while input.len() - cursor >= CHUNK_SIZE {
            v = round_block(v, input, cursor);
            cursor += CHUNK_SIZE;
        }

        finalize(converge(v).wrapping_add(input_len), input, cursor)
    } else {
        finalize(seed.wrapping_add(PRIME_5).wrapping_add(input_len), input, 0)
    }
}
