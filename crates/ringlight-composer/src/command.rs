//! Pixel command decoding and validation
//!
//! Wire format (JSON text):
//!
//! ```text
//! {"pixel":[{"id":-1,"R":10,"G":20,"B":30},{"id":3,"R":255,"G":0,"B":0}]}
//! ```
//!
//! The `pixel` array is optional; a document without it is an empty command.
//! `id = -1` addresses every pixel of the ring. Unknown fields are ignored.

use core::fmt;

use heapless::Vec;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::color::Rgb;

/// Pixel id addressing the whole ring
pub const BROADCAST_ID: i32 = -1;

/// Maximum number of valid pixel updates carried by one command
pub const MAX_PIXEL_UPDATES: usize = 48;

/// Field of a pixel element, named by its wire key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelField {
    Id,
    Red,
    Green,
    Blue,
}

impl PixelField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The payload is not a decodable command document
    Malformed,
    /// A pixel element lacks a mandatory field
    MissingField { index: usize, field: PixelField },
    /// A pixel element carries a value outside its allowed range
    OutOfRange {
        index: usize,
        field: PixelField,
        value: i64,
    },
}

impl ParseError {
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => f.write_str("malformed command document"),
            Self::MissingField { index, field } => {
                write!(f, "pixel[{}]: missing field \"{}\"", index, field.as_str())
            }
            Self::OutOfRange {
                index,
                field,
                value,
            } => write!(
                f,
                "pixel[{}]: field \"{}\" out of range ({})",
                index,
                field.as_str(),
                value
            ),
        }
    }
}

/// Where a pixel update lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelTarget {
    All,
    Index(usize),
}

/// One validated pixel write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelUpdate {
    pub id: i32,
    pub color: Rgb,
}

impl PixelUpdate {
    pub const fn new(id: i32, color: Rgb) -> Self {
        Self { id, color }
    }

    /// Update addressing every pixel
    pub const fn broadcast(color: Rgb) -> Self {
        Self::new(BROADCAST_ID, color)
    }

    /// Resolve the id; `None` for negative ids other than the broadcast one.
    pub fn target(&self) -> Option<PixelTarget> {
        if self.id == BROADCAST_ID {
            return Some(PixelTarget::All);
        }
        usize::try_from(self.id).ok().map(PixelTarget::Index)
    }
}

/// Ordered list of pixel updates, applied front to back
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    updates: Vec<PixelUpdate, MAX_PIXEL_UPDATES>,
}

impl Command {
    pub const fn new() -> Self {
        Self {
            updates: Vec::new(),
        }
    }

    /// Append an update; hands it back when the command is full.
    pub fn push(&mut self, update: PixelUpdate) -> Result<(), PixelUpdate> {
        self.updates.push(update)
    }

    pub fn updates(&self) -> &[PixelUpdate] {
        &self.updates
    }

    pub fn iter(&self) -> impl Iterator<Item = &PixelUpdate> {
        self.updates.iter()
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

/// Result of the apply-what-you-can decode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Elements that passed validation, in document order
    pub command: Command,
    /// Number of elements that were dropped
    pub rejected: usize,
    /// The first element-level error, if any
    pub first_error: Option<ParseError>,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    pixel: Option<PixelList>,
}

/// The `pixel` array, validated element by element as it is decoded
///
/// Rejected elements never take a slot, so only valid updates count toward
/// [`MAX_PIXEL_UPDATES`].
struct PixelList(ParsedCommand);

impl<'de> Deserialize<'de> for PixelList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(PixelListVisitor)
    }
}

struct PixelListVisitor;

impl<'de> Visitor<'de> for PixelListVisitor {
    type Value = PixelList;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of pixel objects")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut parsed = ParsedCommand::default();
        let mut index = 0;
        while let Some(raw) = seq.next_element::<RawPixel>()? {
            match raw.validate(index) {
                Ok(update) => {
                    parsed
                        .command
                        .push(update)
                        .map_err(|_| <A::Error as de::Error>::custom("too many pixel updates"))?;
                }
                Err(err) => {
                    log::debug!("parser: rejected element, {}", err);
                    parsed.rejected += 1;
                    parsed.first_error.get_or_insert(err);
                }
            }
            index += 1;
        }
        Ok(PixelList(parsed))
    }
}

// Wider than any accepted value, so oversized numbers still decode and are
// reported as out of range.
#[derive(Deserialize)]
struct RawPixel {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default, rename = "R")]
    r: Option<i64>,
    #[serde(default, rename = "G")]
    g: Option<i64>,
    #[serde(default, rename = "B")]
    b: Option<i64>,
}

impl RawPixel {
    fn validate(&self, index: usize) -> Result<PixelUpdate, ParseError> {
        let id = require(index, PixelField::Id, self.id)?;
        let r = channel(index, PixelField::Red, self.r)?;
        let g = channel(index, PixelField::Green, self.g)?;
        let b = channel(index, PixelField::Blue, self.b)?;
        let id = i32::try_from(id)
            .ok()
            .filter(|id| *id >= BROADCAST_ID)
            .ok_or(ParseError::OutOfRange {
                index,
                field: PixelField::Id,
                value: id,
            })?;
        Ok(PixelUpdate::new(id, Rgb { r, g, b }))
    }
}

fn require(index: usize, field: PixelField, value: Option<i64>) -> Result<i64, ParseError> {
    value.ok_or(ParseError::MissingField { index, field })
}

fn channel(index: usize, field: PixelField, value: Option<i64>) -> Result<u8, ParseError> {
    let value = require(index, field, value)?;
    u8::try_from(value).map_err(|_| ParseError::OutOfRange {
        index,
        field,
        value,
    })
}

fn decode(payload: &[u8]) -> Result<ParsedCommand, ParseError> {
    // Clients may send NUL-terminated text.
    let end = payload.iter().position(|&b| b == 0).unwrap_or(payload.len());
    let payload = &payload[..end];
    serde_json_core::from_slice::<RawDocument>(payload)
        .map(|(document, _)| document.pixel.map(|list| list.0).unwrap_or_default())
        .map_err(|_e| {
            log::info!("parser: undecodable payload ({} bytes)", payload.len());
            ParseError::Malformed
        })
}

/// Strictly decode a command: any invalid element fails the whole payload.
pub fn parse(payload: &[u8]) -> Result<Command, ParseError> {
    let parsed = decode(payload)?;
    match parsed.first_error {
        Some(err) => Err(err),
        None => Ok(parsed.command),
    }
}

/// Decode a command keeping every valid element.
///
/// Only fails with [`ParseError::Malformed`]; elements with missing or
/// out-of-range fields are skipped and counted in
/// [`ParsedCommand::rejected`].
pub fn parse_lenient(payload: &[u8]) -> Result<ParsedCommand, ParseError> {
    decode(payload)
}
