//!64 bit version of xxhash algorithm
//!
//!Words are decoded from byte slices as little-endian, so results match the reference implementation on any target.

use crate::xxh64_common::*;

///Returns hash for the provided input.
pub fn xxh64(input: &[u8], seed: u64) -> u64 {
    let input_len = input.len() as u64;
    let mut result;

    let mut blocks = input.chunks_exact(CHUNK_SIZE);
    if input.len() >= CHUNK_SIZE {
        let mut v = init_v(seed);

        for block in &mut blocks {
            v = round_block(v, block, 0);
        }

        result = converge(v);
    } else {
        result = seed.wrapping_add(PRIME_5)
    }

    result = result.wrapping_add(input_len);

    finalize(result, blocks.remainder(), 0)
}

///XXH64 Streaming algorithm
///
///Bytes may be supplied in any chunking; the digest only depends on the concatenated input.
#[derive(Clone)]
pub struct Xxh64 {
    total_len: u64,
    v: (u64, u64, u64, u64),
    tail: [u8; CHUNK_SIZE],
    //Always below CHUNK_SIZE once `update` returns.
    tail_len: usize,
}

impl Xxh64 {
    #[inline]
    ///Creates new state with provided seed.
    pub const fn new(seed: u64) -> Self {
        Self {
            total_len: 0,
            v: init_v(seed),
            tail: [0; CHUNK_SIZE],
            tail_len: 0,
        }
    }

    ///Adds chunk of data to hash.
    pub fn update(&mut self, mut input: &[u8]) {
        self.total_len = self.total_len.wrapping_add(input.len() as u64);

        if self.tail_len + input.len() < CHUNK_SIZE {
            self.tail[self.tail_len..self.tail_len + input.len()].copy_from_slice(input);
            self.tail_len += input.len();
            return
        }

        if self.tail_len > 0 {
            //previous if can fail only when we do not have enough space in buffer for input.
            //hence fill_len <= input.len()
            let fill_len = CHUNK_SIZE - self.tail_len;
            let (head, rest) = input.split_at(fill_len);

            self.tail[self.tail_len..].copy_from_slice(head);
            self.v = round_block(self.v, &self.tail, 0);

            input = rest;
            self.tail_len = 0;
        }

        let mut blocks = input.chunks_exact(CHUNK_SIZE);
        for block in &mut blocks {
            self.v = round_block(self.v, block, 0);
        }

        let remainder = blocks.remainder();
        self.tail[..remainder.len()].copy_from_slice(remainder);
        self.tail_len = remainder.len();
    }

    ///Finalize hashing.
    ///
    ///Does not modify state: calling it again yields the same value, and further `update` calls
    ///extend the same stream.
    pub fn digest(&self) -> u64 {
        let mut result;

        if self.total_len >= CHUNK_SIZE as u64 {
            result = converge(self.v);
        } else {
            result = self.v.2.wrapping_add(PRIME_5)
        }

        result = result.wrapping_add(self.total_len);

        finalize(result, &self.tail[..self.tail_len], 0)
    }

    #[inline]
    ///Resets state with provided seed.
    pub fn reset(&mut self, seed: u64) {
        self.total_len = 0;
        self.v = init_v(seed);
        self.tail_len = 0;
    }
}

impl core::hash::Hasher for Xxh64 {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.digest()
    }

    #[inline(always)]
    fn write(&mut self, input: &[u8]) {
        self.update(input)
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Xxh64 {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Default for Xxh64 {
    #[inline(always)]
    fn default() -> Self {
        Xxh64Builder::new(0).build()
    }
}

#[derive(Clone, Copy, Default)]
///Hash builder for `Xxh64`
pub struct Xxh64Builder {
    seed: u64
}

impl Xxh64Builder {
    #[inline(always)]
    ///Creates builder with provided `seed`
    pub const fn new(seed: u64) -> Self {
        Self {
            seed
        }
    }

    #[inline(always)]
    ///Creates hasher.
    pub const fn build(self) -> Xxh64 {
        Xxh64::new(self.seed)
    }
}

impl core::hash::BuildHasher for Xxh64Builder {
    type Hasher = Xxh64;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        self.build()
    }
}
