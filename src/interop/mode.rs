//! Mode identifiers for both engines and the fixed table pairing them.

use std::fmt;
use std::str::FromStr;

use crate::interop::error::{Error, Result};
use crate::interop::key::KeySize;

/// Modes of operation as named by the legacy (mcrypt) engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LegacyMode {
    Cbc,
    /// CFB with an 8-bit feedback segment.
    Cfb,
    Ctr,
    Ecb,
    /// "Normal" CFB, full 128-bit feedback segment.
    Ncfb,
    /// "Normal" OFB, full 128-bit feedback.
    Nofb,
    /// OFB with 8-bit feedback. Implemented by the legacy engine but never mapped.
    Ofb,
}

impl LegacyMode {
    pub const fn name(self) -> &'static str {
        match self {
            LegacyMode::Cbc => "cbc",
            LegacyMode::Cfb => "cfb",
            LegacyMode::Ctr => "ctr",
            LegacyMode::Ecb => "ecb",
            LegacyMode::Ncfb => "ncfb",
            LegacyMode::Nofb => "nofb",
            LegacyMode::Ofb => "ofb",
        }
    }

    /// Block modes are zero padded to a whole number of blocks before encryption.
    pub const fn is_block_mode(self) -> bool {
        matches!(self, LegacyMode::Cbc | LegacyMode::Ecb)
    }

    pub const fn uses_iv(self) -> bool {
        !matches!(self, LegacyMode::Ecb)
    }
}

impl fmt::Display for LegacyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LegacyMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "cbc" => LegacyMode::Cbc,
            "cfb" => LegacyMode::Cfb,
            "ctr" => LegacyMode::Ctr,
            "ecb" => LegacyMode::Ecb,
            "ncfb" => LegacyMode::Ncfb,
            "nofb" => LegacyMode::Nofb,
            "ofb" => LegacyMode::Ofb,
            other => return Err(format!("unknown mcrypt mode '{other}'")),
        })
    }
}

/// Modes of operation offered by the modern (toolkit) engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ModernMode {
    Cbc,
    /// CFB with an 8-bit segment (`aes-*-cfb8`).
    Cfb8,
    /// CFB with a full-block segment, the toolkit's default CFB (`aes-*-cfb`).
    Cfb128,
    Ctr,
    Ecb,
    Ofb,
}

impl ModernMode {
    pub const fn name(self) -> &'static str {
        match self {
            ModernMode::Cbc => "cbc",
            ModernMode::Cfb8 => "cfb8",
            ModernMode::Cfb128 => "cfb",
            ModernMode::Ctr => "ctr",
            ModernMode::Ecb => "ecb",
            ModernMode::Ofb => "ofb",
        }
    }

    /// Toolkit cipher name for this mode at the given key size, e.g. `aes-128-cfb8`.
    pub fn cipher_name(self, size: KeySize) -> String {
        format!("aes-{}-{}", size.bits(), self.name())
    }

    /// ECB and CBC only operate on whole blocks.
    pub const fn is_block_mode(self) -> bool {
        matches!(self, ModernMode::Cbc | ModernMode::Ecb)
    }

    pub const fn uses_iv(self) -> bool {
        !matches!(self, ModernMode::Ecb)
    }
}

/// Pairs a legacy mode with the modern mode that must decrypt its output.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ModeMapping {
    pub legacy: LegacyMode,
    pub modern: ModernMode,
    pub uses_iv: bool,
}

/// Every pairing exercised by a trial, in check order.
pub const MODE_TABLE: [ModeMapping; 6] = [
    ModeMapping {
        legacy: LegacyMode::Cbc,
        modern: ModernMode::Cbc,
        uses_iv: true,
    },
    // mcrypt's default cfb feeds back 8 bits at a time
    ModeMapping {
        legacy: LegacyMode::Cfb,
        modern: ModernMode::Cfb8,
        uses_iv: true,
    },
    ModeMapping {
        legacy: LegacyMode::Ctr,
        modern: ModernMode::Ctr,
        uses_iv: true,
    },
    ModeMapping {
        legacy: LegacyMode::Ecb,
        modern: ModernMode::Ecb,
        uses_iv: false,
    },
    ModeMapping {
        legacy: LegacyMode::Ncfb,
        modern: ModernMode::Cfb128,
        uses_iv: true,
    },
    ModeMapping {
        legacy: LegacyMode::Nofb,
        modern: ModernMode::Ofb,
        uses_iv: true,
    },
];

impl ModeMapping {
    /// Finds the modern counterpart of `legacy`. 8-bit OFB has none.
    pub fn lookup(legacy: LegacyMode) -> Result<&'static ModeMapping> {
        MODE_TABLE
            .iter()
            .find(|m| m.legacy == legacy)
            .ok_or(Error::UnsupportedMode {
                mode: legacy,
                reason: "modern engine has no 8-bit feedback OFB",
            })
    }
}
