#![no_main]
use libfuzzer_sys::fuzz_target;

use ipv6_text::ParseOptions;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    let options = ParseOptions::new().allow_zone_index(true);
    for options in [ParseOptions::DEFAULT, ParseOptions::STRICT, options] {
        // Accepted input must render into text which parses back into the same address
        if let Ok(addr) = ipv6_text::parse_ipv6_with(text, &options) {
            let canonical = addr.to_string();
            let reparsed = ipv6_text::parse_ipv6_with(&canonical, &ParseOptions::STRICT)
                .expect("canonical text should parse");
            assert_eq!(reparsed, addr);
        }
    }
});
