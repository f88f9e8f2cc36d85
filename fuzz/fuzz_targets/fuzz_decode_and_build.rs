#![no_main]

use libfuzzer_sys::fuzz_target;
use storefront::{decode_response, FieldDictionary, ResultViewModelBuilder};

fuzz_target!(|data: &[u8]| {
    let Ok(response) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    let fields = FieldDictionary::default();
    if let Ok(results) = decode_response(&response, &fields) {
        let views = ResultViewModelBuilder::default().build(&results);
        assert_eq!(views.len(), results.len());
    }
});
