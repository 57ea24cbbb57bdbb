//! Library Codabar identifiers
//!
//! Many library systems number patron cards and items with a 14-digit
//! Codabar identifier:
//!
//! - digit 1: type of barcode (2 = patron, 3 = item)
//! - digits 2-5: institution (library id)
//! - digits 6-13: individual patron or item serial number, zero padded
//! - digit 14: mod-10 check digit over the first 13 digits
//!
//! ```
//! use codabar::IdentifierBuilder;
//! use rand::SeedableRng;
//!
//! let rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let mut builder = IdentifierBuilder::new(rng);
//! let id = builder.build(2, Some(10586)).unwrap();
//! assert_eq!(id.codabar(), "21310000105864");
//! ```

use crate::checksum;
use crate::render::human_readable;
use crate::{Error, Result};
use log::trace;
use rand::Rng;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Library id used when none is configured
pub const DEFAULT_LIBRARY_ID: &str = "1310";

/// Digits in a library id
pub const LIBRARY_ID_LEN: usize = 4;

/// Digits in a padded serial number
pub const SERIAL_LEN: usize = 8;

/// Digits in a complete identifier
pub const IDENTIFIER_LEN: usize = 1 + LIBRARY_ID_LEN + SERIAL_LEN + 1;

/// Range generated serial numbers are drawn from
pub const SERIAL_RANGE: RangeInclusive<u64> = 100..=99_999_999;

const MAX_SERIAL: u64 = 99_999_999;

/// What an identifier's first digit says it labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Patron = 2,
    Item = 3,
}

impl IdentifierKind {
    pub fn type_digit(self) -> u8 {
        self as u8
    }
}

/// A complete 14-digit identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    type_digit: u8,
    library_id: String,
    serial_number: String,
    check_digit: u8,
}

impl Identifier {
    /// Build an identifier from its parts, computing the check digit
    pub fn new(type_digit: u8, library_id: &str, serial: u64) -> Result<Self> {
        if type_digit > 9 {
            return Err(Error::InvalidTypeDigit(type_digit));
        }
        validate_library_id(library_id)?;
        if serial > MAX_SERIAL {
            return Err(Error::SerialNumberTooLong(serial));
        }

        let serial_number = format!("{serial:0width$}", width = SERIAL_LEN);
        let payload = format!("{type_digit}{library_id}{serial_number}");
        let check_digit = checksum::compute_str(&payload)?;

        Ok(Self {
            type_digit,
            library_id: library_id.to_string(),
            serial_number,
            check_digit,
        })
    }

    pub fn type_digit(&self) -> u8 {
        self.type_digit
    }

    /// Patron or item, if the type digit is one of the two
    pub fn kind(&self) -> Option<IdentifierKind> {
        match self.type_digit {
            2 => Some(IdentifierKind::Patron),
            3 => Some(IdentifierKind::Item),
            _ => None,
        }
    }

    pub fn library_id(&self) -> &str {
        &self.library_id
    }

    /// Zero-padded 8-digit serial number
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// The full 14-character Codabar string
    pub fn codabar(&self) -> String {
        format!(
            "{}{}{}{}",
            self.type_digit, self.library_id, self.serial_number, self.check_digit
        )
    }

    /// Codabar string grouped as `T LLLL SSSSS SSSC` for printing under the bars
    pub fn human_readable(&self) -> String {
        human_readable(&self.codabar())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.codabar())
    }
}

impl FromStr for Identifier {
    type Err = Error;

    /// Parse and validate a 14-digit identifier, check digit included
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let len = s.chars().count();
        if len != IDENTIFIER_LEN {
            return Err(Error::InvalidLength(len));
        }
        let digits = checksum::parse_digits(s)?;

        let expected = checksum::compute(&digits[..IDENTIFIER_LEN - 1]);
        let actual = digits[IDENTIFIER_LEN - 1];
        if expected != actual {
            return Err(Error::ChecksumMismatch { expected, actual });
        }

        Ok(Self {
            type_digit: digits[0],
            library_id: s[1..1 + LIBRARY_ID_LEN].to_string(),
            serial_number: s[1 + LIBRARY_ID_LEN..IDENTIFIER_LEN - 1].to_string(),
            check_digit: actual,
        })
    }
}

fn validate_library_id(library_id: &str) -> Result<()> {
    if library_id.len() != LIBRARY_ID_LEN || !library_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidLibraryId(library_id.to_string()));
    }
    Ok(())
}

/// Builds identifiers for one library
///
/// The random source is only used when no serial number is supplied.
#[derive(Debug, Clone)]
pub struct IdentifierBuilder<R> {
    rng: R,
    library_id: String,
}

impl<R: Rng> IdentifierBuilder<R> {
    /// Create a builder for the default library using `rng` for serial numbers
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            library_id: DEFAULT_LIBRARY_ID.to_string(),
        }
    }

    /// Use a different 4-digit library id
    pub fn library_id(mut self, library_id: &str) -> Result<Self> {
        validate_library_id(library_id)?;
        self.library_id = library_id.to_string();
        Ok(self)
    }

    /// Build an identifier
    ///
    /// When `serial` is `None` one is drawn from [`SERIAL_RANGE`].
    pub fn build(&mut self, type_digit: u8, serial: Option<u64>) -> Result<Identifier> {
        let serial = match serial {
            Some(serial) => serial,
            None => {
                let serial = self.rng.random_range(SERIAL_RANGE);
                trace!("generated serial number {serial}");
                serial
            }
        };
        Identifier::new(type_digit, &self.library_id, serial)
    }

    /// Build an identifier of a known kind
    pub fn build_kind(&mut self, kind: IdentifierKind, serial: Option<u64>) -> Result<Identifier> {
        self.build(kind.type_digit(), serial)
    }
}
