#![no_main]

use libfuzzer_sys::fuzz_target;
use octets::OctetReader;

fuzz_target!(|data: &[u8]| {
    let mut reader = OctetReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 7;
        idx += 1;

        let result = match op {
            0 => reader.read_u8().map(drop),
            1 => reader.read_bool().map(drop),
            2 => reader.read_u32().map(drop),
            3 => reader.read_u64().map(drop),
            4 => reader.read_blob(256).map(drop),
            5 => reader.read_str(256).map(drop),
            _ => {
                let count = usize::from(data[idx.saturating_sub(1)]);
                reader.ensure_items(count, 4)
            }
        };
        if result.is_err() {
            assert!(reader.position() <= data.len());
        }
    }
});
