//! Health Resource Identifier (HRI) paths.
//!
//! An HRI looks like `/<scope>/<system serial>/<wwn>/<...>/<sensor>`. The
//! first character is the leading separator; the remaining text splits on
//! `/` into at least [`MIN_TOKENS`] tokens.

use crate::error::SkipReason;

pub const SEPARATOR: char = '/';

/// Suffix of HRIs that carry a temperature reading.
pub const TEMPERATURE_SUFFIX: &str = "/temperature";

/// Network Address Authority prefix some WWNs carry.
pub const WWN_PREFIX: &str = "naa.";

pub const MIN_TOKENS: usize = 5;

const SYSTEM_SERIAL_TOKEN: usize = 1;
const WWN_TOKEN: usize = 2;

/// True if the HRI names a temperature sensor.
pub fn is_temperature(hri: &str) -> bool {
    hri.ends_with(TEMPERATURE_SUFFIX)
}

/// Remove one leading `naa.` from a raw WWN token.
pub fn strip_wwn_prefix(raw: &str) -> &str {
    raw.strip_prefix(WWN_PREFIX).unwrap_or(raw)
}

/// A decomposed HRI with the structural check already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HriPath<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> HriPath<'a> {
    /// Split an HRI into tokens.
    ///
    /// The first character is dropped unconditionally, it is the leading
    /// separator in every well-formed HRI. Paths with fewer than
    /// [`MIN_TOKENS`] tokens are rejected.
    pub fn parse(hri: &'a str) -> Result<Self, SkipReason> {
        let mut chars = hri.chars();
        chars.next();
        let tokens: Vec<&'a str> = chars.as_str().split(SEPARATOR).collect();
        if tokens.len() < MIN_TOKENS {
            return Err(SkipReason::ShortPath(tokens.len()));
        }
        Ok(Self { tokens })
    }

    pub fn system_serial(&self) -> &'a str {
        self.tokens[SYSTEM_SERIAL_TOKEN]
    }

    /// World-Wide-Name of the drive, without the `naa.` prefix.
    pub fn wwn(&self) -> &'a str {
        strip_wwn_prefix(self.tokens[WWN_TOKEN])
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }
}
