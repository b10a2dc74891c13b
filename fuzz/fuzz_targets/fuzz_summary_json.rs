#![no_main]

use libfuzzer_sys::fuzz_target;
use taxtally::VatSummary;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse → serialize → parse must not panic at any step.
        if let Ok(summary) = serde_json::from_str::<VatSummary>(s) {
            if let Ok(json) = serde_json::to_string(&summary) {
                let _ = serde_json::from_str::<VatSummary>(&json);
            }
        }
    }
});
