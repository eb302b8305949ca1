//! Timestamped single-byte message.

use core::fmt;
use core::num::ParseIntError;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Calendar form used for display, e.g. `Tue Jan 02 03:04:05 2024`.
const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short] [month repr:short] [day] [hour]:[minute]:[second] [year]"
);

/// A single-byte payload paired with its creation instant.
///
/// Both fields are set at construction and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    payload: u8,
    created_at: OffsetDateTime,
}

impl Message {
    /// Create a message carrying `payload`, created at `created_at`.
    #[must_use]
    pub const fn new(payload: u8, created_at: OffsetDateTime) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    /// The data byte.
    #[inline]
    #[must_use]
    pub const fn payload(&self) -> u8 {
        self.payload
    }

    /// The creation instant.
    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Render the persisted form: the payload as decimal text, nothing else.
    ///
    /// The timestamp is deliberately not part of the on-disk format;
    /// [`from_line`](Self::from_line) stamps records with the load instant
    /// instead of recovering the original one.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.payload.to_string()
    }

    /// Parse one persisted line back into a message stamped `stamped_at`.
    ///
    /// Surrounding whitespace is tolerated. Fails on an empty line or a
    /// token that is not a decimal value in `0..=255`.
    pub fn from_line(line: &str, stamped_at: OffsetDateTime) -> Result<Self, ParseLineError> {
        let token = line.trim();
        if token.is_empty() {
            return Err(ParseLineError::Empty);
        }
        let payload = token.parse::<u8>().map_err(|source| {
            ParseLineError::InvalidPayload {
                token: token.to_owned(),
                source,
            }
        })?;
        Ok(Self::new(payload, stamped_at))
    }
}

/// Human-readable line: decimal payload, a tab, then the calendar time.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let when = self
            .created_at
            .format(DISPLAY_FORMAT)
            .map_err(|_| fmt::Error)?;
        write!(f, "{}\t{}", self.payload, when)
    }
}

/// A persisted line that could not be parsed back into a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLineError {
    /// The line held no token at all.
    Empty,

    /// The token was not a decimal value in `0..=255`.
    InvalidPayload {
        /// The offending token.
        token: String,
        /// The underlying integer-parse failure.
        source: ParseIntError,
    },
}

impl fmt::Display for ParseLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty record line"),
            Self::InvalidPayload { token, source } => {
                write!(f, "invalid payload {token:?}: {source}")
            }
        }
    }
}

impl core::error::Error for ParseLineError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::InvalidPayload { source, .. } => Some(source),
        }
    }
}
