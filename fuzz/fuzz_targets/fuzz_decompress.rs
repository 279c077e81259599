#![no_main]
use libfuzzer_sys::fuzz_target;
use rnc_unpack::{decompress, ContainerHeader};

fuzz_target!(|data: &[u8]| {
    // Cap the declared output size to avoid OOM on forged headers
    if let Ok(header) = ContainerHeader::parse(data) {
        if header.unpacked_size > 16 * 1024 * 1024 {
            return;
        }
    }

    let _ = decompress(data);
});
