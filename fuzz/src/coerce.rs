#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    if let Ok(value) = extra_filters::parse(text) {
        // parsed text is already a number
        let coerced = extra_filters::coerce(value.clone()).unwrap();
        assert_eq!(format!("{:?}", value), format!("{:?}", coerced));
    }
});
