#![no_main]
use libfuzzer_sys::fuzz_target;
use rnc_unpack::ContainerHeader;

fuzz_target!(|data: &[u8]| {
    let _ = ContainerHeader::parse(data);
});
