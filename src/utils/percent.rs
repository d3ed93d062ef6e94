//! Percent-encoding of query string keys and values.
//!
//! Two profiles are supported. The [RFC 3986] profile leaves the unreserved
//! characters `A-Z a-z 0-9 - . _ ~` alone and encodes every other octet of
//! the UTF-8 representation as `%XX` with upper-case hex digits. The
//! [RFC 1738] profile is the one used by HTML forms: it additionally encodes
//! `~` and writes a space as `+`.
//!
//! As with the other encodings in this module, there are functions writing
//! into a format stream for use in formatting traits as well as convenience
//! functions returning a string.
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986#section-2.1
//! [RFC 1738]: https://tools.ietf.org/html/rfc1738

use core::fmt;

//------------ Convenience Functions -----------------------------------------

/// Encodes a string using the RFC 3986 profile.
pub fn encode_rfc3986(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    // Writing into a string never fails.
    let _ = display_rfc3986(s, &mut res);
    res
}

/// Encodes a string using the RFC 1738 form profile.
pub fn encode_form(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    let _ = display_form(s, &mut res);
    res
}

/// Encodes a string using the RFC 3986 profile into a format stream.
///
/// This function is intended to be used in implementations of formatting
/// traits:
///
/// ```
/// use core::fmt;
/// use urlhost::utils::percent;
///
/// struct Key<'a>(&'a str);
///
/// impl<'a> fmt::Display for Key<'a> {
///     fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
///         percent::display_rfc3986(self.0, f)
///     }
/// }
///
/// assert_eq!(Key("a b").to_string(), "a%20b");
/// ```
pub fn display_rfc3986<Target: fmt::Write>(
    s: &str,
    f: &mut Target,
) -> fmt::Result {
    for &octet in s.as_bytes() {
        if is_unreserved(octet) {
            f.write_char(char::from(octet))?;
        } else {
            write_escaped(octet, f)?;
        }
    }
    Ok(())
}

/// Encodes a string using the RFC 1738 form profile into a format stream.
pub fn display_form<Target: fmt::Write>(
    s: &str,
    f: &mut Target,
) -> fmt::Result {
    for &octet in s.as_bytes() {
        match octet {
            b' ' => f.write_char('+')?,
            b'~' => write_escaped(octet, f)?,
            _ if is_unreserved(octet) => f.write_char(char::from(octet))?,
            _ => write_escaped(octet, f)?,
        }
    }
    Ok(())
}

//------------ Helpers -------------------------------------------------------

fn is_unreserved(octet: u8) -> bool {
    octet.is_ascii_alphanumeric() || matches!(octet, b'-' | b'.' | b'_' | b'~')
}

fn write_escaped<Target: fmt::Write>(octet: u8, f: &mut Target) -> fmt::Result {
    f.write_char('%')?;
    f.write_char(char::from(HEX_DIGITS[usize::from(octet >> 4)]))?;
    f.write_char(char::from(HEX_DIGITS[usize::from(octet & 0x0F)]))
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", "")]
    #[case("kingkong", "kingkong", "kingkong")]
    #[case("Aa-._~09", "Aa-._~09", "Aa-._%7E09")]
    #[case("a b", "a%20b", "a+b")]
    #[case("a+b", "a%2Bb", "a%2Bb")]
    #[case("toto=&?/#", "toto%3D%26%3F%2F%23", "toto%3D%26%3F%2F%23")]
    #[case("é", "%C3%A9", "%C3%A9")]
    #[case("例", "%E4%BE%8B", "%E4%BE%8B")]
    fn profiles(#[case] raw: &str, #[case] rfc3986: &str, #[case] form: &str) {
        assert_eq!(encode_rfc3986(raw), rfc3986);
        assert_eq!(encode_form(raw), form);
    }

    #[test]
    fn into_formatter() {
        struct Form<'a>(&'a str);

        impl<'a> fmt::Display for Form<'a> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                display_form(self.0, f)
            }
        }

        assert_eq!(format!("[{}]", Form("x y~")), "[x+y%7E]");
    }
}
