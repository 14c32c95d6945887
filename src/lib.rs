//!Rust implementation of the xxHash64 algorithm.
//!
//!## Features:
//!
//!- `xxh64` - Enables streaming hasher [Xxh64](xxh64/struct.Xxh64.html) and one-shot [xxh64](xxh64/fn.xxh64.html). Enabled by default.
//!- `const_xxh64` - Enables `const fn` variant usable at compile time.
//!- `std` - Implements `std::io::Write` for the streaming hasher.
//!
//!## Streaming
//!
//!```rust
//!# #[cfg(feature = "xxh64")]
//!# {
//!use xxhash64::xxh64::{xxh64, Xxh64};
//!
//!let mut hasher = Xxh64::new(0);
//!hasher.update(b"waifu");
//!hasher.update(b"land");
//!assert_eq!(hasher.digest(), xxh64(b"waifuland", 0));
//!# }
//!```
//!
//!## Compile time
//!
//!```rust
//!# #[cfg(feature = "const_xxh64")]
//!# {
//!use xxhash64::const_xxh64::xxh64;
//!
//!const EMPTY: u64 = xxh64(&[], 0);
//!assert_eq!(EMPTY, 0xef46db3751d8e999);
//!# }
//!```

#![no_std]
#![warn(missing_docs)]
#![cfg_attr(feature = "cargo-clippy", allow(clippy::style))]

#[cfg(feature = "std")]
extern crate std;

#[cfg(any(feature = "xxh64", feature = "const_xxh64"))]
mod xxh64_common;
#[cfg(feature = "xxh64")]
pub mod xxh64;
#[cfg(feature = "const_xxh64")]
pub mod const_xxh64;
