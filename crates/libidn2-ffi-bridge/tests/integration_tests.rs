//! Integration tests for the libidn2 FFI bridge
//!
//! These tests exercise the real library end to end: conversion round-trips,
//! each failure kind, resource cleanup on error paths, and concurrent use.

use idnconv_core::{Error, Flags};
use idnconv_libidn2_ffi_bridge::{
    ensure_supported_version, library_version, lookup, register, to_ascii, to_unicode,
};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_to_ascii_converts_u_label() {
    let converted = to_ascii("münchen", Flags::NO_TR46).unwrap();
    assert_eq!(converted, "xn--mnchen-3ya");
}

#[test]
fn test_to_ascii_with_default_flags() {
    // Lowercase input is valid under every processing mode the library
    // defaults to, so the empty flag set converges on the same A-label.
    let converted = to_ascii("münchen", Flags::empty()).unwrap();
    assert_eq!(converted, "xn--mnchen-3ya");
}

#[test]
fn test_to_unicode_converts_a_label() {
    let converted = to_unicode("xn--mnchen-3ya", Flags::empty()).unwrap();
    assert_eq!(converted, "münchen");
}

#[test]
fn test_lookup_produces_dns_form() {
    let converted = lookup("münchen", Flags::NFC_INPUT).unwrap();
    assert_eq!(converted, "xn--mnchen-3ya");
}

#[test]
fn test_ascii_labels_round_trip_unchanged() {
    for label in ["example", "a", "test-123", "www.example.com"] {
        let unicode = to_unicode(label, Flags::empty()).unwrap();
        assert_eq!(unicode, label);
        let ascii = to_ascii(&unicode, Flags::NO_TR46).unwrap();
        assert_eq!(ascii, label);
    }
}

#[test]
fn test_full_domain_conversion() {
    let converted = to_ascii("www.münchen.de", Flags::NO_TR46).unwrap();
    assert_eq!(converted, "www.xn--mnchen-3ya.de");

    let back = to_unicode("www.xn--mnchen-3ya.de", Flags::empty()).unwrap();
    assert_eq!(back, "www.münchen.de");
}

#[test]
fn test_disallowed_code_point_fails() {
    // U+2026 HORIZONTAL ELLIPSIS is disallowed by IDNA2008.
    let err = to_ascii("foo…bar", Flags::NO_TR46).unwrap_err();
    assert!(
        matches!(err, Error::DisallowedCodePoint { .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn test_bidi_violation_fails_as_disallowed() {
    // An LTR label containing a right-to-left character violates the
    // IDNA2008 bidi rule.
    let err = to_ascii("a\u{05D0}", Flags::NO_TR46).unwrap_err();
    assert!(
        matches!(err, Error::DisallowedCodePoint { .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn test_overlong_label_fails_with_overflow() {
    // 100 non-ASCII characters encode far past the 63-octet label limit.
    let label = "ü".repeat(100);
    let err = to_ascii(&label, Flags::NO_TR46).unwrap_err();
    assert!(
        matches!(err, Error::PunycodeOverflow { .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn test_unrecognized_flag_bits_rejected_before_ffi() {
    let err = Flags::from_bits(1 << 8).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_conflicting_flags_rejected_by_library() {
    let flags = Flags::TRANSITIONAL | Flags::NONTRANSITIONAL;
    let err = to_ascii("münchen", flags).unwrap_err();
    assert!(
        matches!(err, Error::InvalidArgument { .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn test_interior_nul_fails_before_ffi() {
    let err = to_ascii("mün\u{0}chen", Flags::NO_TR46).unwrap_err();
    assert!(matches!(err, Error::InvalidEncoding { .. }));
}

#[test]
fn test_register_requires_at_least_one_label() {
    let err = register(None, None, Flags::NFC_INPUT).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_register_from_u_label() {
    let converted = register(Some("münchen"), None, Flags::NFC_INPUT).unwrap();
    assert_eq!(converted, "xn--mnchen-3ya");
}

#[test]
fn test_repeated_failing_calls_do_not_leak() {
    // Drive the error path hard; every call must release the output buffer
    // it may have been handed. Completing without crashes or growth under a
    // leak checker means the drop discipline holds.
    for _ in 0..200 {
        let err = to_ascii("foo…bar", Flags::NO_TR46).unwrap_err();
        assert!(matches!(err, Error::DisallowedCodePoint { .. }));

        let err = to_ascii(&"ü".repeat(100), Flags::NO_TR46).unwrap_err();
        assert!(matches!(err, Error::PunycodeOverflow { .. }));
    }
}

#[test]
fn test_concurrent_conversions() {
    const NUM_THREADS: usize = 8;
    const CALLS_PER_THREAD: usize = 25;

    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..CALLS_PER_THREAD {
                    let ascii = to_ascii("münchen", Flags::NO_TR46).unwrap();
                    assert_eq!(ascii, "xn--mnchen-3ya");

                    let unicode = to_unicode("xn--mnchen-3ya", Flags::empty()).unwrap();
                    assert_eq!(unicode, "münchen");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_library_version_is_reported_and_supported() {
    let version = library_version().expect("linked libidn2 should report a version");
    assert!(!version.is_empty());
    assert_eq!(ensure_supported_version().unwrap(), version);
}
