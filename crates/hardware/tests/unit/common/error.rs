//! # Error Formatting Tests

use std::io;
use std::path::PathBuf;

use rv5s_core::common::SimError;

#[test]
fn address_error_names_address_and_size() {
    let e = SimError::AddressOutOfRange { addr: 998, size: 1000 };
    assert_eq!(
        e.to_string(),
        "memory access at address 998 exceeds memory size 1000"
    );
}

#[test]
fn parse_error_names_file_and_line() {
    let e = SimError::Parse {
        path: PathBuf::from("imem.txt"),
        line: 3,
        content: "0102".to_owned(),
    };
    let msg = e.to_string();
    assert!(msg.starts_with("imem.txt:3:"), "{msg}");
    assert!(msg.contains("\"0102\""), "{msg}");
}

#[test]
fn io_error_keeps_source() {
    let e = SimError::io("missing.txt", io::Error::from(io::ErrorKind::NotFound));
    assert!(e.to_string().contains("missing.txt"));
    assert!(std::error::Error::source(&e).is_some());
}

#[test]
fn unsupported_instruction_prints_hex() {
    let e = SimError::UnsupportedInstruction { inst: 0x0000_0037 };
    assert_eq!(e.to_string(), "unsupported instruction 0x00000037");
}
