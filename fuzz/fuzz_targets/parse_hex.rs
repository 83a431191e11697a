#![no_main]

use hashes::sha256;
use libfuzzer_sys::fuzz_target;

fn do_test(data: &[u8]) {
    let s = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    if let Ok(hash) = s.parse::<sha256::Hash>() {
        assert_eq!(hash.to_string(), s.to_ascii_lowercase());

        let json = serde_json::to_string(&hash).unwrap();
        let back: sha256::Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}

fuzz_target!(|data| {
    do_test(data)
});
