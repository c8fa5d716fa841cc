//! FFI bridge to the GNU libidn2 IDNA2008 conversion library.
//!
//! This crate provides a safe Rust interface to libidn2. It handles the FFI
//! calls, buffer ownership, and status-code translation for the library's
//! conversion entry points. All normalization and Punycode logic lives in
//! the library itself; nothing here interprets domain names.

mod status;

use std::ffi::{CStr, CString};
use std::ptr;

use idnconv_core::{Error, Flags, Result};
use libc::{c_char, c_int, c_void};

use crate::status::{status_to_error, IDN2_OK};

/// Earliest libidn2 release whose flag set and status-code enumeration this
/// bridge understands. Flags introduced by later releases are rejected at
/// the [`Flags`] layer rather than passed through.
pub const MINIMUM_LIBIDN2_VERSION: &str = "2.0.0";

/// RAII wrapper for buffers allocated by libidn2
/// Ensures the library's free routine runs when the wrapper goes out of scope
pub struct Idn2Buffer {
    ptr: *mut c_char,
}

impl Idn2Buffer {
    /// Creates a new wrapper from a raw pointer
    ///
    /// # Safety
    /// The caller must ensure that:
    /// - `ptr` is either null or a valid pointer allocated by libidn2
    /// - The pointer has not been freed already
    /// - The pointer will not be used after this wrapper is dropped
    pub unsafe fn new(ptr: *mut c_char) -> Self {
        Self { ptr }
    }

    /// Checks if the wrapped pointer is null
    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Converts the buffer contents to a Rust &str
    ///
    /// # Safety
    /// The caller must ensure that the wrapped pointer is not null
    pub unsafe fn to_str(&self, operation: &str) -> Result<&str> {
        debug_assert!(!self.is_null(), "attempted to read a null libidn2 buffer");

        let cstr = CStr::from_ptr(self.ptr);
        cstr.to_str().map_err(|e| {
            Error::library_failure(operation, format!("output buffer is not valid UTF-8: {e}"))
        })
    }
}

impl Drop for Idn2Buffer {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe {
                idn2_free(self.ptr.cast::<c_void>());
            }
        }
    }
}

extern "C" {
    fn idn2_to_ascii_8z(input: *const c_char, output: *mut *mut c_char, flags: c_int) -> c_int;
    fn idn2_to_unicode_8z8z(input: *const c_char, output: *mut *mut c_char, flags: c_int)
        -> c_int;
    fn idn2_lookup_u8(src: *const u8, lookupname: *mut *mut u8, flags: c_int) -> c_int;
    fn idn2_register_u8(
        ulabel: *const u8,
        alabel: *const u8,
        insertname: *mut *mut u8,
        flags: c_int,
    ) -> c_int;
    fn idn2_free(ptr: *mut c_void);
    fn idn2_check_version(req_version: *const c_char) -> *const c_char;
}

fn to_c_string(input: &str) -> Result<CString> {
    CString::new(input)
        .map_err(|_| Error::invalid_encoding("input contains an interior NUL byte"))
}

/// Common exit path for every conversion call. The output pointer is taken
/// over unconditionally so the buffer is released even when the library both
/// allocated and reported failure.
fn finish(operation: &'static str, rc: c_int, output: *mut c_char) -> Result<String> {
    let buffer = unsafe { Idn2Buffer::new(output) };

    if rc != IDN2_OK {
        tracing::debug!(operation, rc, "libidn2 call failed");
        return Err(status_to_error(operation, rc));
    }

    if buffer.is_null() {
        return Err(Error::library_failure(
            operation,
            "conversion reported success but returned no output",
        ));
    }

    let converted = unsafe { buffer.to_str(operation)? };
    Ok(converted.to_owned())
}

/// Converts a domain name in Unicode form (U-labels) to its ASCII
/// (Punycode) form via `idn2_to_ascii_8z`.
///
/// # Arguments
/// * `input` - Domain name or single label in Unicode form
/// * `flags` - libidn2 processing options
///
/// # Returns
/// The ASCII-compatible (A-label) form, newly allocated and owned by the
/// caller.
pub fn to_ascii(input: &str, flags: Flags) -> Result<String> {
    let c_input = to_c_string(input)?;
    let mut output: *mut c_char = ptr::null_mut();

    tracing::debug!(flags = %flags, "calling idn2_to_ascii_8z");
    let rc = unsafe { idn2_to_ascii_8z(c_input.as_ptr(), &mut output, flags.bits() as c_int) };

    finish("idn2_to_ascii_8z", rc, output)
}

/// Converts a domain name in ASCII (Punycode) form back to Unicode form via
/// `idn2_to_unicode_8z8z`.
pub fn to_unicode(input: &str, flags: Flags) -> Result<String> {
    let c_input = to_c_string(input)?;
    let mut output: *mut c_char = ptr::null_mut();

    tracing::debug!(flags = %flags, "calling idn2_to_unicode_8z8z");
    let rc =
        unsafe { idn2_to_unicode_8z8z(c_input.as_ptr(), &mut output, flags.bits() as c_int) };

    finish("idn2_to_unicode_8z8z", rc, output)
}

/// Performs the IDNA2008 Lookup protocol on a domain name via
/// `idn2_lookup_u8`, producing the A-label form to use in DNS queries.
pub fn lookup(input: &str, flags: Flags) -> Result<String> {
    let c_input = to_c_string(input)?;
    let mut output: *mut u8 = ptr::null_mut();

    tracing::debug!(flags = %flags, "calling idn2_lookup_u8");
    let rc = unsafe {
        idn2_lookup_u8(
            c_input.as_ptr().cast::<u8>(),
            &mut output,
            flags.bits() as c_int,
        )
    };

    finish("idn2_lookup_u8", rc, output.cast::<c_char>())
}

/// Performs the IDNA2008 Register protocol via `idn2_register_u8`.
///
/// At least one of the U-label and A-label must be given; passing both lets
/// the library verify they correspond. Both-`None` fails with
/// [`Error::InvalidArgument`] without touching the library.
pub fn register(ulabel: Option<&str>, alabel: Option<&str>, flags: Flags) -> Result<String> {
    if ulabel.is_none() && alabel.is_none() {
        return Err(Error::invalid_argument(
            "at least one of the U-label and A-label arguments must be given",
        ));
    }

    let c_ulabel = ulabel.map(to_c_string).transpose()?;
    let c_alabel = alabel.map(to_c_string).transpose()?;

    let ulabel_ptr = c_ulabel
        .as_ref()
        .map_or(ptr::null(), |s| s.as_ptr().cast::<u8>());
    let alabel_ptr = c_alabel
        .as_ref()
        .map_or(ptr::null(), |s| s.as_ptr().cast::<u8>());

    let mut output: *mut u8 = ptr::null_mut();

    tracing::debug!(flags = %flags, "calling idn2_register_u8");
    let rc = unsafe {
        idn2_register_u8(ulabel_ptr, alabel_ptr, &mut output, flags.bits() as c_int)
    };

    finish("idn2_register_u8", rc, output.cast::<c_char>())
}

/// Version string of the libidn2 this binary is linked against, if the
/// library reports one.
pub fn library_version() -> Option<&'static str> {
    let ptr = unsafe { idn2_check_version(ptr::null()) };
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// Checks that the linked libidn2 is at least [`MINIMUM_LIBIDN2_VERSION`]
/// and returns its version string.
pub fn ensure_supported_version() -> Result<&'static str> {
    let version = library_version().ok_or_else(|| {
        Error::library_failure("idn2_check_version", "could not determine libidn2 version")
    })?;

    let required = to_c_string(MINIMUM_LIBIDN2_VERSION)?;
    let satisfied = unsafe { !idn2_check_version(required.as_ptr()).is_null() };
    if !satisfied {
        return Err(Error::library_failure(
            "idn2_check_version",
            format!(
                "libidn2 {version} is older than the minimum supported {MINIMUM_LIBIDN2_VERSION}"
            ),
        ));
    }

    Ok(version)
}
