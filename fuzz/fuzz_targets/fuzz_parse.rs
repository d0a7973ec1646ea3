#![no_main]

use jsonarbor::parse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any accepted document must serialize to JSON the parser accepts
    // again, and the reparse must describe the same tree.
    if let Ok(value) = parse(data) {
        let text = value.to_json();
        let reparsed = parse(text.as_bytes()).expect("serialized JSON failed to reparse");
        assert!(reparsed.equals(&value));
        assert_eq!(reparsed.to_json(), text);
    }
});
