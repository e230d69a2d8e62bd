use crate::error::StyleError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Font face, numbered the way graphics devices number them (1 = plain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum FontFace {
    #[default]
    Plain = 1,
    Bold = 2,
    Italic = 3,
    BoldItalic = 4,
    Symbol = 5,
}

impl FontFace {
    /// Returns the numeric face code (1-5).
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_bold(self) -> bool {
        matches!(self, FontFace::Bold | FontFace::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, FontFace::Italic | FontFace::BoldItalic)
    }

    /// Combines weight and slant into a face. Symbol faces are only reachable by code.
    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => FontFace::Plain,
            (true, false) => FontFace::Bold,
            (false, true) => FontFace::Italic,
            (true, true) => FontFace::BoldItalic,
        }
    }

    /// Parse a face from its name (e.g., "bold", "bold-italic").
    fn parse(s: &str) -> Result<Self, StyleError> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "normal" => Ok(FontFace::Plain),
            "bold" => Ok(FontFace::Bold),
            "italic" => Ok(FontFace::Italic),
            "bold-italic" | "bold_italic" | "bold.italic" => Ok(FontFace::BoldItalic),
            "symbol" => Ok(FontFace::Symbol),
            _ => Err(StyleError::invalid("fontFace", s, "unknown font face name")),
        }
    }
}

impl TryFrom<u8> for FontFace {
    type Error = StyleError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(FontFace::Plain),
            2 => Ok(FontFace::Bold),
            3 => Ok(FontFace::Italic),
            4 => Ok(FontFace::BoldItalic),
            5 => Ok(FontFace::Symbol),
            _ => Err(StyleError::invalid("fontFace", code, "expected a face code between 1 and 5")),
        }
    }
}

impl Serialize for FontFace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for FontFace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontFaceDef {
            Num(u8),
            Str(String),
        }

        match FontFaceDef::deserialize(deserializer)? {
            FontFaceDef::Num(n) => FontFace::try_from(n).map_err(de::Error::custom),
            FontFaceDef::Str(s) => FontFace::parse(&s).map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for code in 1..=5u8 {
            assert_eq!(FontFace::try_from(code).unwrap().code(), code);
        }
    }

    #[test]
    fn test_out_of_range_code_is_rejected() {
        assert!(matches!(
            FontFace::try_from(0),
            Err(StyleError::InvalidFieldValue { field: "fontFace", .. })
        ));
        assert!(FontFace::try_from(6).is_err());
    }

    #[test]
    fn test_flags() {
        assert_eq!(FontFace::from_flags(true, true), FontFace::BoldItalic);
        assert!(FontFace::BoldItalic.is_bold());
        assert!(FontFace::BoldItalic.is_italic());
        assert!(!FontFace::Symbol.is_bold());
        assert!(!FontFace::Plain.is_italic());
    }

    #[test]
    fn test_deserialize_number_and_name() {
        let face: FontFace = serde_json::from_str("3").unwrap();
        assert_eq!(face, FontFace::Italic);
        let face: FontFace = serde_json::from_str("\"bold-italic\"").unwrap();
        assert_eq!(face, FontFace::BoldItalic);
        assert!(serde_json::from_str::<FontFace>("\"heavy\"").is_err());
        assert!(serde_json::from_str::<FontFace>("9").is_err());
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&FontFace::Bold).unwrap(), "2");
    }
}
