#![no_main]

use freefocus_core::Direction;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(token) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(dir) = token.parse::<Direction>() {
        // Accepted tokens are exactly the canonical names.
        assert_eq!(dir.as_str(), token);
        assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
    }
});
