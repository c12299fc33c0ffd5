#![no_main]

use chandas_core::ffi::run_json;
use libfuzzer_sys::fuzz_target;

const MAX_INPUT_SIZE: usize = 16 * 1024;
const MODES: [&str; 5] = ["identify", "explain", "catalog", "version", "bogus"];

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > MAX_INPUT_SIZE {
        return;
    }
    let mode = MODES[data[0] as usize % MODES.len()];
    let args = String::from_utf8_lossy(&data[1..]);

    let out = run_json(mode, &args);
    let envelope: serde_json::Value =
        serde_json::from_str(&out).expect("envelope is always valid JSON");
    let ok = envelope["ok"].as_bool().expect("ok is a bool");
    if ok {
        assert!(envelope.get("data").is_some());
    } else {
        assert!(envelope["error"]["code"].is_string());
    }
});
