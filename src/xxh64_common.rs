use core::mem;

pub const CHUNK_SIZE: usize = mem::size_of::<u64>() * 4;
pub const PRIME_1: u64 = 0x9E3779B185EBCA87;
pub const PRIME_2: u64 = 0xC2B2AE3D27D4EB4F;
pub const PRIME_3: u64 = 0x165667B19E3779F9;
pub const PRIME_4: u64 = 0x85EBCA77C2B2AE63;
pub const PRIME_5: u64 = 0x27D4EB2F165667C5;

///Reads little-endian `u32` starting at `cursor`.
///
///Panics if fewer than 4 bytes are available, which callers rule out by checking length first.
#[inline(always)]
pub const fn read_32le(input: &[u8], cursor: usize) -> u32 {
    input[cursor] as u32
        | (input[cursor + 1] as u32) << 8
        | (input[cursor + 2] as u32) << 16
        | (input[cursor + 3] as u32) << 24
}

///Reads little-endian `u64` starting at `cursor`.
#[inline(always)]
pub const fn read_64le(input: &[u8], cursor: usize) -> u64 {
    input[cursor] as u64
        | (input[cursor + 1] as u64) << 8
        | (input[cursor + 2] as u64) << 16
        | (input[cursor + 3] as u64) << 24
        | (input[cursor + 4] as u64) << 32
        | (input[cursor + 5] as u64) << 40
        | (input[cursor + 6] as u64) << 48
        | (input[cursor + 7] as u64) << 56
}

#[inline(always)]
pub const fn init_v(seed: u64) -> (u64, u64, u64, u64) {
    (
        seed.wrapping_add(PRIME_1).wrapping_add(PRIME_2),
        seed.wrapping_add(PRIME_2),
        seed,
        seed.wrapping_sub(PRIME_1),
    )
}

#[inline]
pub const fn round(acc: u64, input: u64) -> u64 {
    acc.wrapping_add(input.wrapping_mul(PRIME_2))
       .rotate_left(31)
       .wrapping_mul(PRIME_1)
}

///Folds one 32 byte block, starting at `cursor`, into the four lanes.
#[inline(always)]
pub const fn round_block(v: (u64, u64, u64, u64), input: &[u8], cursor: usize) -> (u64, u64, u64, u64) {
    (
        round(v.0, read_64le(input, cursor)),
        round(v.1, read_64le(input, cursor + 8)),
        round(v.2, read_64le(input, cursor + 16)),
        round(v.3, read_64le(input, cursor + 24)),
    )
}

#[inline]
pub const fn merge_round(mut acc: u64, val: u64) -> u64 {
    acc ^= round(0, val);
    acc.wrapping_mul(PRIME_1).wrapping_add(PRIME_4)
}

///Combines the lanes once at least one full block has been consumed.
#[inline]
pub const fn converge(v: (u64, u64, u64, u64)) -> u64 {
    let mut result = v.0.rotate_left(1).wrapping_add(v.1.rotate_left(7))
                                       .wrapping_add(v.2.rotate_left(12))
                                       .wrapping_add(v.3.rotate_left(18));

    result = merge_round(result, v.0);
    result = merge_round(result, v.1);
    result = merge_round(result, v.2);
    merge_round(result, v.3)
}

#[inline]
pub const fn avalanche(mut input: u64) -> u64 {
    input ^= input >> 33;
    input = input.wrapping_mul(PRIME_2);
    input ^= input >> 29;
    input = input.wrapping_mul(PRIME_3);
    input ^= input >> 32;
    input
}

///Mixes `data[cursor..]` into `input` and applies the avalanche.
pub const fn finalize(mut input: u64, data: &[u8], mut cursor: usize) -> u64 {
    let mut len = data.len() - cursor;

    while len >= 8 {
        input ^= round(0, read_64le(data, cursor));
        cursor += mem::size_of::<u64>();
        len -= mem::size_of::<u64>();
        input = input.rotate_left(27).wrapping_mul(PRIME_1).wrapping_add(PRIME_4)
    }

    if len >= 4 {
        input ^= (read_32le(data, cursor) as u64).wrapping_mul(PRIME_1);
        cursor += mem::size_of::<u32>();
        len -= mem::size_of::<u32>();
        input = input.rotate_left(23).wrapping_mul(PRIME_2).wrapping_add(PRIME_3);
    }

    while len > 0 {
        input ^= (data[cursor] as u64).wrapping_mul(PRIME_5);
        cursor += mem::size_of::<u8>();
        len -= mem::size_of::<u8>();
        input = input.rotate_left(11).wrapping_mul(PRIME_1);
    }

    avalanche(input)
}
