extern crate quickcheck;
#[allow(unused_imports)]
#[macro_use]
extern crate quickcheck_macros;

#[cfg(feature = "xxh64")]
mod tests {
    use quickcheck::TestResult;
    use std::hash::Hasher;
    use std::num::{NonZeroU8, NonZeroUsize};
    use xxhash_c_sys as sys;
    use xxhash64::xxh64::{xxh64, Xxh64};

    //Large enough to cover many full blocks for every chunk size quickcheck picks.
    const MAX_STREAM_SIZE: usize = 2048 * 10;

    fn stretch(xs: Vec<u8>, times: NonZeroU8, additional: u8) -> Vec<u8> {
        //additional avoids getting only nice even lengths out of small vecs
        let target_size = (xs.len() * times.get() as usize + additional as usize) % MAX_STREAM_SIZE;
        xs.into_iter().cycle().take(target_size).collect()
    }

    #[quickcheck]
    fn xxh64_chunked_matches_buffered(
        chunk_size: NonZeroUsize,
        xs: Vec<u8>,
        times: NonZeroU8,
        additional: u8,
    ) -> TestResult {
        //additional argument doubles down as the hasher seed
        let seed = additional as u64;
        let xs = stretch(xs, times, additional);

        let mut h0 = Xxh64::new(seed);
        h0.write(&xs);
        let h0 = h0.finish();

        let mut h1 = Xxh64::new(seed);
        for chunk in xs.chunks(chunk_size.get()) {
            h1.write(chunk);
        }
        let h1 = h1.finish();

        let one_shot_result = xxh64(&xs, seed);

        let sys_result = unsafe { sys::XXH64(xs.as_ptr() as _, xs.len(), seed) };

        assert_eq!(h0, sys_result);
        assert_eq!(h1, sys_result);
        assert_eq!(one_shot_result, sys_result);

        TestResult::passed()
    }

    #[quickcheck]
    fn xxh64_uneven_partition_matches_buffered(xs: Vec<u8>, cuts: Vec<usize>, seed: u64) -> TestResult {
        if xs.is_empty() {
            return TestResult::discard();
        }

        let mut cuts = cuts.into_iter().map(|cut| cut % (xs.len() + 1)).collect::<Vec<_>>();
        cuts.sort_unstable();

        let mut hasher = Xxh64::new(seed);
        let mut start = 0;
        for cut in cuts {
            hasher.update(&xs[start..cut]);
            start = cut;
        }
        hasher.update(&xs[start..]);

        TestResult::from_bool(hasher.digest() == xxh64(&xs, seed))
    }

    #[cfg(feature = "const_xxh64")]
    #[quickcheck]
    fn const_xxh64_matches_runtime(xs: Vec<u8>, times: NonZeroU8, additional: u8) -> TestResult {
        let seed = additional as u64;
        let xs = stretch(xs, times, additional);

        TestResult::from_bool(xxhash64::const_xxh64::xxh64(&xs, seed) == xxh64(&xs, seed))
    }
}
