//! Translation of libidn2 status codes into typed errors.
//!
//! libidn2 reports failure through a signed status code. The table below
//! covers every code documented for libidn2 2.x, mapping each to one error
//! kind with a readable description; codes outside the table surface as a
//! library failure carrying the raw number.

use idnconv_core::Error;
use libc::c_int;

pub(crate) const IDN2_OK: c_int = 0;

pub(crate) const IDN2_MALLOC: c_int = -100;
pub(crate) const IDN2_NO_CODESET: c_int = -101;
pub(crate) const IDN2_ICONV_FAIL: c_int = -102;
pub(crate) const IDN2_ENCODING_ERROR: c_int = -200;
pub(crate) const IDN2_NFC: c_int = -201;
pub(crate) const IDN2_PUNYCODE_BAD_INPUT: c_int = -202;
pub(crate) const IDN2_PUNYCODE_BIG_OUTPUT: c_int = -203;
pub(crate) const IDN2_PUNYCODE_OVERFLOW: c_int = -204;
pub(crate) const IDN2_TOO_BIG_DOMAIN: c_int = -205;
pub(crate) const IDN2_TOO_BIG_LABEL: c_int = -206;
pub(crate) const IDN2_INVALID_ALABEL: c_int = -207;
pub(crate) const IDN2_UALABEL_MISMATCH: c_int = -208;
pub(crate) const IDN2_INVALID_FLAGS: c_int = -209;
pub(crate) const IDN2_NOT_NFC: c_int = -300;
pub(crate) const IDN2_2HYPHEN: c_int = -301;
pub(crate) const IDN2_HYPHEN_STARTEND: c_int = -302;
pub(crate) const IDN2_LEADING_COMBINING: c_int = -303;
pub(crate) const IDN2_DISALLOWED: c_int = -304;
pub(crate) const IDN2_CONTEXTJ: c_int = -305;
pub(crate) const IDN2_CONTEXTJ_NO_RULE: c_int = -306;
pub(crate) const IDN2_CONTEXTO: c_int = -307;
pub(crate) const IDN2_CONTEXTO_NO_RULE: c_int = -308;
pub(crate) const IDN2_UNASSIGNED: c_int = -309;
pub(crate) const IDN2_BIDI: c_int = -310;
pub(crate) const IDN2_DOT_IN_LABEL: c_int = -311;
pub(crate) const IDN2_INVALID_TRANSITIONAL: c_int = -312;
pub(crate) const IDN2_INVALID_NONTRANSITIONAL: c_int = -313;
pub(crate) const IDN2_ALABEL_ROUNDTRIP_FAILED: c_int = -314;

/// Maps a non-`IDN2_OK` status code to the error raised to callers.
pub(crate) fn status_to_error(operation: &str, rc: c_int) -> Error {
    match rc {
        IDN2_NO_CODESET => Error::invalid_encoding("could not determine locale string encoding"),
        IDN2_ICONV_FAIL => Error::invalid_encoding("could not transcode locale string to UTF-8"),
        IDN2_ENCODING_ERROR => Error::invalid_encoding("Unicode data encoding error"),
        IDN2_NFC => Error::invalid_encoding("error normalizing string"),
        IDN2_NOT_NFC => Error::invalid_encoding("string is not NFC"),
        IDN2_PUNYCODE_BAD_INPUT => Error::invalid_encoding("punycode invalid input"),
        IDN2_INVALID_ALABEL => Error::invalid_encoding("input A-label is not valid"),

        IDN2_DISALLOWED => Error::disallowed_code_point("string has disallowed character"),
        IDN2_2HYPHEN => Error::disallowed_code_point("string has forbidden two hyphens"),
        IDN2_HYPHEN_STARTEND => {
            Error::disallowed_code_point("string has forbidden starting or ending hyphen")
        }
        IDN2_LEADING_COMBINING => {
            Error::disallowed_code_point("string has forbidden leading combining character")
        }
        IDN2_CONTEXTJ => Error::disallowed_code_point("string has forbidden context-j character"),
        IDN2_CONTEXTJ_NO_RULE => {
            Error::disallowed_code_point("string has context-j character with no rule")
        }
        IDN2_CONTEXTO => Error::disallowed_code_point("string has forbidden context-o character"),
        IDN2_CONTEXTO_NO_RULE => {
            Error::disallowed_code_point("string has context-o character with no rule")
        }
        IDN2_UNASSIGNED => {
            Error::disallowed_code_point("string has forbidden unassigned character")
        }
        IDN2_BIDI => Error::disallowed_code_point("string has forbidden bi-directional properties"),
        IDN2_DOT_IN_LABEL => Error::disallowed_code_point("label has forbidden dot"),
        IDN2_INVALID_TRANSITIONAL => {
            Error::disallowed_code_point("label has character forbidden in transitional mode")
        }
        IDN2_INVALID_NONTRANSITIONAL => {
            Error::disallowed_code_point("label has character forbidden in non-transitional mode")
        }

        IDN2_PUNYCODE_BIG_OUTPUT => Error::punycode_overflow("punycode output buffer too small"),
        IDN2_PUNYCODE_OVERFLOW => Error::punycode_overflow("punycode conversion would overflow"),
        IDN2_TOO_BIG_DOMAIN => Error::punycode_overflow("domain name longer than 255 characters"),
        IDN2_TOO_BIG_LABEL => Error::punycode_overflow("domain label longer than 63 characters"),

        IDN2_INVALID_FLAGS => Error::invalid_argument("invalid combination of flags"),

        IDN2_MALLOC => Error::library_failure(operation, "memory allocation error"),
        IDN2_UALABEL_MISMATCH => {
            Error::library_failure(operation, "input A-label and U-label do not match")
        }
        IDN2_ALABEL_ROUNDTRIP_FAILED => {
            Error::library_failure(operation, "A-label round-trip verification failed")
        }

        _ => Error::library_failure(operation, format!("unrecognized status code {rc}")),
    }
}
