#![no_main]

use libfuzzer_sys::fuzz_target;
use snapfrag::{compress, decompress};

fuzz_target!(|data: &[u8]| {
    // Skip very large inputs to avoid OOM under the fuzzer.
    if data.len() > 1_000_000 {
        return;
    }

    let compressed = compress(data);
    let decompressed = decompress(&compressed).expect("compress() output failed to decompress");
    assert_eq!(data, &decompressed[..], "roundtrip failed");
});
