//! Option flags accepted by the libidn2 conversion entry points.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::Serialize;

use crate::errors::{Error, Result};

/// Bit set of libidn2 `idn2_flags` options.
///
/// The supported bits are pinned to the flag enumeration shipped by libidn2
/// 2.x. Bits outside that set are rejected at construction time, before any
/// FFI call is made; flags added by future library versions are not assumed
/// to exist. Contradictory combinations of recognized flags (for example
/// [`Flags::TRANSITIONAL`] together with [`Flags::NONTRANSITIONAL`]) are
/// passed through and rejected by the library itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Flags(u32);

impl Flags {
    /// Input is already NFC-normalized; skip normalization.
    pub const NFC_INPUT: Flags = Flags(1);
    /// Verify that the produced A-label decodes back to the input U-label.
    pub const ALABEL_ROUNDTRIP: Flags = Flags(2);
    /// Apply TR46 transitional processing.
    pub const TRANSITIONAL: Flags = Flags(4);
    /// Apply TR46 non-transitional processing.
    pub const NONTRANSITIONAL: Flags = Flags(8);
    /// Permit unassigned code points.
    pub const ALLOW_UNASSIGNED: Flags = Flags(16);
    /// Enforce STD3 ASCII hostname rules.
    pub const USE_STD3_ASCII_RULES: Flags = Flags(32);
    /// Disable TR46 processing entirely.
    pub const NO_TR46: Flags = Flags(64);
    /// Disable the A-label round-trip verification.
    pub const NO_ALABEL_ROUNDTRIP: Flags = Flags(128);

    /// Union of every flag bit recognized by the supported libidn2 versions.
    const SUPPORTED_MASK: u32 = 0xff;

    /// The empty flag set.
    #[must_use]
    pub const fn empty() -> Self {
        Flags(0)
    }

    /// Raw bit pattern, as passed to the library.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when no flag bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Validate a raw bit pattern against the supported flag set.
    ///
    /// Fails with [`Error::InvalidArgument`] when any unrecognized bit is
    /// set, without any library involvement.
    pub fn from_bits(bits: u32) -> Result<Self> {
        let unknown = bits & !Self::SUPPORTED_MASK;
        if unknown != 0 {
            return Err(Error::invalid_argument(format!(
                "unrecognized option flags {unknown:#x}"
            )));
        }
        Ok(Flags(bits))
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
