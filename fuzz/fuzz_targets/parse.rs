#![no_main]

use libfuzzer_sys::fuzz_target;
use protosyn::ParseOptions;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = protosyn::parse(s, &ParseOptions::default());
        let permissive = ParseOptions {
            permissive: true,
            ..ParseOptions::default()
        };
        let _ = protosyn::parse(s, &permissive);
    }
});
