#![no_main]

use codec::{Limits, ProtocolVersion, RlsCodec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let codec = RlsCodec::with_limits(ProtocolVersion::CURRENT, Limits::for_testing());

    // Force a valid marker and version so the body decoders get exercised.
    let mut framed = Vec::with_capacity(data.len() + 4);
    framed.push(wire::COMPAT_MARKER);
    framed.extend_from_slice(&ProtocolVersion::CURRENT.to_bytes());
    framed.extend_from_slice(data);

    for input in [data, framed.as_slice()] {
        if let Ok(message) = codec.decode(input) {
            let bytes = codec.encode(&message);
            assert_eq!(codec.decode(&bytes).as_ref(), Ok(&message));
        }
    }
});
