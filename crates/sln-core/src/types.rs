//! Value types shared by the solution AST.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// A globally unique identifier in the canonical 36-character hyphenated
/// form (8-4-4-4-12 hex digits).
///
/// Solution files spell GUIDs three ways: plain, brace-wrapped, and
/// quote-and-brace-wrapped. All three normalize to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guid(pub Uuid);

impl Guid {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for Guid {
    fn from(id: Uuid) -> Self {
        Guid(id)
    }
}

impl FromStr for Guid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(s);
        let s = s
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .unwrap_or(s);
        Uuid::parse_str(s).map(Guid)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Upper-case hyphenated, the spelling Visual Studio writes.
        let mut buf = Uuid::encode_buffer();
        f.write_str(self.0.hyphenated().encode_upper(&mut buf))
    }
}

/// Visual Studio products recognized in the header's product-name comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisualStudioProduct {
    Vs2010,
    Vs2012,
    Vs2013,
    Unrecognized,
}

impl VisualStudioProduct {
    /// Recognize a product from the header's comment text.
    pub fn from_product_name(name: &str) -> Self {
        match name.trim() {
            "Visual Studio 2010" => Self::Vs2010,
            "Visual Studio 2012" => Self::Vs2012,
            "Visual Studio 2013" => Self::Vs2013,
            _ => Self::Unrecognized,
        }
    }

    /// The marketing name, if the product is recognized.
    pub fn version_string(&self) -> Option<&'static str> {
        match self {
            Self::Vs2010 => Some("Visual Studio 2010"),
            Self::Vs2012 => Some("Visual Studio 2012"),
            Self::Vs2013 => Some("Visual Studio 2013"),
            Self::Unrecognized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guid_spellings_normalize_to_one_value() {
        let plain: Guid = "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC".parse().unwrap();
        let braced: Guid = "{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}".parse().unwrap();
        let quoted: Guid = "\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\"".parse().unwrap();

        assert_eq!(plain, braced);
        assert_eq!(braced, quoted);
    }

    #[test]
    fn guid_displays_upper_hyphenated() {
        let guid: Guid = "{fae04ec0-301f-11d3-bf4b-00c04f79efbc}".parse().unwrap();
        assert_eq!(guid.to_string(), "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC");
    }

    #[test]
    fn guid_rejects_wrong_group_lengths() {
        assert!("FAE04EC0-301F-11D3-BF4B".parse::<Guid>().is_err());
        assert!("{FAE04EC0-301F-11D3-BF4B-00C04F79EFB}".parse::<Guid>().is_err());
    }

    #[test]
    fn product_recognized_from_comment_text() {
        assert_eq!(
            VisualStudioProduct::from_product_name("Visual Studio 2012"),
            VisualStudioProduct::Vs2012
        );
        assert_eq!(
            VisualStudioProduct::from_product_name("Visual Studio 2035"),
            VisualStudioProduct::Unrecognized
        );
        assert_eq!(
            VisualStudioProduct::Vs2010.version_string(),
            Some("Visual Studio 2010")
        );
        assert_eq!(VisualStudioProduct::Unrecognized.version_string(), None);
    }
}
