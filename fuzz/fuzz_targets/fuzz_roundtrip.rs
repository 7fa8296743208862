#![no_main]
use libfuzzer_sys::fuzz_target;

use lzf_flex::{compress, decompress};

fuzz_target!(|data: &[u8]| {
    let compressed = compress(data);
    let decompressed = decompress(&compressed, data.len()).unwrap();
    assert_eq!(data, &decompressed[..]);
});
