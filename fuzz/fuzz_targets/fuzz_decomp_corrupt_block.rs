#![no_main]
use libfuzzer_sys::fuzz_target;

use lzf_flex::decompress_into;

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must decode or error, never panic.
    let mut output = [0u8; 1 << 16];
    let _ = decompress_into(data, &mut output);
});
