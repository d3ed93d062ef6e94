//! Domain name labels.

use core::{borrow::Borrow, fmt, str::FromStr};

use super::idna;

//------------ validate ------------------------------------------------------

/// Whether a string is a valid label in the preferred name syntax.
///
/// This is the LDH rule of RFC 1123: one to 63 ASCII letters, digits, and
/// hyphens, neither starting nor ending with a hyphen. A label consisting
/// of digits only is fine.
///
/// Runtime: `O(label.len())`.
pub fn validate(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= Label::MAX_LEN
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes
                    .iter()
                    .all(|&b| b.is_ascii_alphanumeric() || b == b'-')
        }
        _ => false,
    }
}

/// Whether a Unicode label places its hyphens acceptably.
///
/// It must neither start nor end with a hyphen and must not have hyphens
/// in both the third and fourth position. The Punycode form of such a
/// label would pass [`validate`] even though the label itself does not.
fn check_hyphens(label: &str) -> bool {
    let mut chars = label.chars();
    !label.starts_with('-')
        && !label.ends_with('-')
        && !(chars.nth(2) == Some('-') && chars.next() == Some('-'))
}

//------------ Label ---------------------------------------------------------

/// A label in a domain name.
///
/// The label is kept in its canonical ASCII form: lowercased, with
/// internationalized labels converted into A-labels. It always passes
/// [`validate`].
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Label(Box<str>);

impl Label {
    /// The maximum length of a label in its ASCII form.
    pub const MAX_LEN: usize = 63;

    /// Creates a label from its presentation form.
    ///
    /// The label may be given in Unicode, in which case it is converted
    /// into its A-label form before validation.
    pub fn new(raw: &str) -> Result<Self, LabelError> {
        if raw.is_empty() {
            return Err(LabelError::Empty);
        }

        // Whitespace and control characters would otherwise slip through
        // Punycode encoding of non-ASCII labels.
        if raw.chars().any(|ch| ch.is_control() || ch.is_whitespace()) {
            return Err(LabelError::BadChar);
        }

        if !raw.is_ascii() && !check_hyphens(raw) {
            return Err(LabelError::BadChar);
        }

        let ascii = idna::to_ascii(raw);
        if ascii.len() > Self::MAX_LEN {
            return Err(LabelError::Long);
        }
        if !validate(&ascii) {
            return Err(LabelError::BadChar);
        }

        Ok(Label(ascii.into_boxed_str()))
    }

    /// The length of the label in its ASCII form.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The ASCII form of the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is an internationalized label.
    ///
    /// If the label begins with the ACE prefix `xn--`, it is assumed to be
    /// a Unicode string encoded into ASCII using Punycode.
    pub fn is_internationalized(&self) -> bool {
        idna::has_ace_prefix(&self.0)
    }

    /// The Unicode form of the label.
    ///
    /// A-labels that cannot be decoded are returned in their ASCII form.
    pub fn to_unicode(&self) -> String {
        idna::to_unicode(&self.0)
    }
}

//--- FromStr

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

//--- AsRef, Borrow

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

//--- PartialEq

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

//--- Display and Debug

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Label").field(&self.as_str()).finish()
    }
}

//============ Error Types ===================================================

//------------ LabelError ----------------------------------------------------

/// An error in constructing a [`Label`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelError {
    /// The label was empty.
    Empty,

    /// The label was longer than 63 characters in its ASCII form.
    Long,

    /// The label contained a character outside the preferred name syntax.
    BadChar,
}

//--- Display and Error

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Self::Empty => "empty domain name label",
            Self::Long => "domain name label longer than 63 characters",
            Self::BadChar => "disallowed character in domain name label",
        })
    }
}

impl std::error::Error for LabelError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validate_ldh() {
        assert!(validate("a"));
        assert!(validate("9"));
        assert!(validate("example"));
        assert!(validate("e-x-a"));
        assert!(validate("42c"));
        assert!(validate("xn--1"));
        assert!(validate(&"a".repeat(63)));

        assert!(!validate(""));
        assert!(!validate(&"a".repeat(64)));
        assert!(!validate("-host"));
        assert!(!validate("com-"));
        assert!(!validate("_bad"));
        assert!(!validate("re view"));
        assert!(!validate("   "));
        assert!(!validate("examp\0le"));
        assert!(!validate("b\u{e9}b\u{e9}"));
    }

    #[test]
    fn new_normalizes() {
        assert_eq!(Label::new("EXAMPLE").unwrap().as_str(), "example");
        assert_eq!(Label::new("例子").unwrap().as_str(), "xn--fsqu00a");
        assert_eq!(Label::new("xn--fsqu00a").unwrap().to_unicode(), "例子");
        assert!(Label::new("例子").unwrap().is_internationalized());
        assert!(!Label::new("example").unwrap().is_internationalized());
    }

    #[test]
    fn new_rejects() {
        assert_eq!(Label::new(""), Err(LabelError::Empty));
        assert_eq!(Label::new(&"banana".repeat(11)), Err(LabelError::Long));
        assert_eq!(Label::new("host-"), Err(LabelError::BadChar));
        assert_eq!(Label::new("_bad"), Err(LabelError::BadChar));
        assert_eq!(Label::new("    "), Err(LabelError::BadChar));
        assert_eq!(Label::new("例\u{3000}子"), Err(LabelError::BadChar));
        assert_eq!(Label::new("examp\0le"), Err(LabelError::BadChar));
    }

    #[test]
    fn unicode_hyphens() {
        assert_eq!(Label::new("-ü"), Err(LabelError::BadChar));
        assert_eq!(Label::new("ü-"), Err(LabelError::BadChar));
        assert_eq!(Label::new("ab--ü"), Err(LabelError::BadChar));
        assert_eq!(Label::new("xn--bébé"), Err(LabelError::BadChar));
        assert_eq!(Label::new("ü-ü").unwrap().to_unicode(), "ü-ü");
        assert_eq!(Label::new("a-b--ü").unwrap().to_unicode(), "a-b--ü");
    }

    #[test]
    fn eq() {
        assert_eq!(Label::new("example").unwrap(), Label::new("eXAMple").unwrap());
        assert_ne!(Label::new("example").unwrap(), Label::new("e4ample").unwrap());
        assert!(Label::new("Com").unwrap() == *"com");
    }
}
