//! Glyph Model
//!
//! Every glyph definition found in the stylesheet is mapped to a `GlyphRecord`
//! before filtering and rendering.

use serde::{Serialize, Serializer};

use crate::core::error::{NfError, Result};

/// One icon: its class name, its codepoint as written, and the decoded character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlyphRecord {
    /// Class name without the leading dot, e.g. `nf-dev-github`
    #[serde(rename = "class")]
    pub name: String,

    /// Hex digits as they appear in the stylesheet
    pub hex: String,

    /// Decoded character; serialized as its numeric codepoint
    #[serde(rename = "char", serialize_with = "serialize_codepoint")]
    pub character: char,
}

impl GlyphRecord {
    /// Build a record, decoding `hex` as a base-16 codepoint
    pub fn decode(name: impl Into<String>, hex: impl Into<String>) -> Result<Self> {
        let hex = hex.into();
        let character = char_from_hex(&hex)?;
        Ok(Self {
            name: name.into(),
            hex,
            character,
        })
    }
}

/// A definition the parser matched but could not decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedGlyph {
    pub name: String,
    pub hex: String,
    pub reason: String,
}

/// Decode a hex string into a Unicode scalar value
pub fn char_from_hex(hex: &str) -> Result<char> {
    let value = u32::from_str_radix(hex, 16).map_err(|e| NfError::Decode {
        hex: hex.to_string(),
        reason: e.to_string(),
    })?;

    char::from_u32(value).ok_or_else(|| NfError::Decode {
        hex: hex.to_string(),
        reason: format!("U+{:X} is not a Unicode scalar value", value),
    })
}

fn serialize_codepoint<S: Serializer>(c: &char, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u32(*c as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid() {
        let record = GlyphRecord::decode("nf-dev-github", "f121").unwrap();
        assert_eq!(record.character, '\u{f121}');
        assert_eq!(record.character as u32, 0xf121);
        assert_eq!(record.hex, "f121");
    }

    #[test]
    fn test_decode_uppercase_hex() {
        let record = GlyphRecord::decode("nf-md-ab_testing", "F01C9").unwrap();
        assert_eq!(record.character as u32, 0xF01C9);
    }

    #[test]
    fn test_decode_overflow() {
        let err = char_from_hex("123456789").unwrap_err();
        assert!(matches!(err, NfError::Decode { .. }));
    }

    #[test]
    fn test_decode_surrogate() {
        let err = char_from_hex("d800").unwrap_err();
        assert!(err.to_string().contains("not a Unicode scalar value"));
    }

    #[test]
    fn test_decode_out_of_range() {
        assert!(char_from_hex("110000").is_err());
    }

    #[test]
    fn test_serialize_shape() {
        let record = GlyphRecord::decode("nf-dev-github", "f121").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["class"], "nf-dev-github");
        assert_eq!(json["hex"], "f121");
        assert_eq!(json["char"], 0xf121);
    }
}
