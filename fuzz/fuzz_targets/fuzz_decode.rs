#![no_main]

use libfuzzer_sys::fuzz_target;
use snapfrag::decompress;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary (possibly adversarial) data must never panic and
    // must never write past the destination it allocates internally -
    // either it succeeds or it returns one of the six documented errors.
    let _ = decompress(data);
});
