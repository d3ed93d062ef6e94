//! International Domain Names in Applications.
//!
//! Labels containing non-ASCII characters are stored as A-labels: the ACE
//! (ASCII Compatible Encoding) prefix `xn--` followed by the Punycode
//! encoding of the label, as specified in [RFC 3492].
//!
//! The label-level functions [`to_ascii`] and [`to_unicode`] never fail.
//! A label that cannot be transcoded is passed through unchanged, leaving it
//! to label validation to decide whether it is acceptable.
//!
//! [RFC 3492]: https://datatracker.ietf.org/doc/html/rfc3492

use core::fmt;

use tracing::trace;

//------------ Constants -----------------------------------------------------

/// The ACE prefix that marks an A-label.
pub const ACE_PREFIX: &str = "xn--";

// Punycode parameters, RFC 3492, section 5.
const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 128;

//------------ Label Functions -----------------------------------------------

/// Whether this label begins with the ACE prefix.
///
/// This does not perform the more expensive validation that the label can
/// actually be decoded into a Unicode string.
pub fn has_ace_prefix(label: &str) -> bool {
    label.len() >= ACE_PREFIX.len()
        && label.as_bytes()[..ACE_PREFIX.len()]
            .eq_ignore_ascii_case(ACE_PREFIX.as_bytes())
}

/// Converts a label into its ASCII form.
///
/// An ASCII label is returned lowercased. Any other label is lowercased and
/// converted into an A-label. If the conversion fails, the label is returned
/// as given.
pub fn to_ascii(label: &str) -> String {
    if label.is_ascii() {
        return label.to_ascii_lowercase();
    }

    if has_ace_prefix(label) {
        trace!(label, "A-label with non-ASCII characters kept as given");
        return label.into();
    }

    let lower = label.to_lowercase();
    if lower.is_ascii() {
        return lower;
    }

    match encode(&lower) {
        Ok(encoded) => {
            let mut res =
                String::with_capacity(ACE_PREFIX.len() + encoded.len());
            res.push_str(ACE_PREFIX);
            res.push_str(&encoded);
            res
        }
        Err(err) => {
            trace!(label, %err, "label kept as given");
            label.into()
        }
    }
}

/// Converts a label into its Unicode form.
///
/// If the label is an A-label, the Punycode algorithm is applied to decode
/// it. Any other label, including one that merely looks like an A-label but
/// does not decode, is returned unchanged.
pub fn to_unicode(label: &str) -> String {
    if !has_ace_prefix(label) {
        return label.into();
    }

    match decode_a_label(&label[ACE_PREFIX.len()..]) {
        Ok(decoded) => decoded,
        Err(err) => {
            trace!(label, %err, "A-label kept as given");
            label.into()
        }
    }
}

/// Decodes the part of an A-label following the ACE prefix.
///
/// Beyond plain Punycode decoding, this insists that the result actually
/// contains non-ASCII characters and that it encodes back into the same
/// label.
fn decode_a_label(encoded: &str) -> Result<String, PunycodeError> {
    let decoded = decode(encoded)?;

    // The ACE prefix shouldn't be used if there are no non-ASCII
    // characters in the label.
    if decoded.is_ascii() {
        return Err(PunycodeError::BadInput);
    }

    if !encode(&decoded)?.eq_ignore_ascii_case(encoded) {
        return Err(PunycodeError::BadInput);
    }

    Ok(decoded)
}

//------------ Punycode ------------------------------------------------------

/// Encodes a Unicode string with Punycode.
///
/// The result does not carry the ACE prefix. Basic code points are copied
/// over keeping their case.
pub fn encode(input: &str) -> Result<String, PunycodeError> {
    let input: Vec<u32> = input.chars().map(u32::from).collect();

    // Copy over any ASCII characters directly into the output.
    let mut output: String = input
        .iter()
        .filter(|&&c| c < INITIAL_N)
        .filter_map(|&c| char::from_u32(c))
        .collect();

    let basic = output.len() as u32;
    let total = input.len() as u32;
    if basic > 0 {
        output.push('-');
    }

    let mut n = INITIAL_N;
    let mut delta = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic;

    while handled < total {
        // The next code point to insert is the smallest one not yet handled.
        let m = input
            .iter()
            .copied()
            .filter(|&c| c >= n)
            .min()
            .ok_or(PunycodeError::BadInput)?;

        delta = (m - n)
            .checked_mul(handled + 1)
            .and_then(|d| d.checked_add(delta))
            .ok_or(PunycodeError::Overflow)?;
        n = m;

        for &c in &input {
            if c < n {
                delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
            } else if c == n {
                // Emit 'delta' as a variable-width integer.
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(encode_digit(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(encode_digit(q));

                bias = adapt(delta, handled + 1, handled == basic);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
        n = n.checked_add(1).ok_or(PunycodeError::Overflow)?;
    }

    Ok(output)
}

/// Decodes a Punycode string into Unicode.
///
/// The input must not carry the ACE prefix.
pub fn decode(input: &str) -> Result<String, PunycodeError> {
    if !input.is_ascii() {
        return Err(PunycodeError::BadInput);
    }
    let mut input = input.as_bytes();

    // The decoder specifies where characters must be inserted in the output
    // string. Labels are short, so inserting them right away is cheap
    // enough.
    let mut output: Vec<char> = Vec::with_capacity(input.len());

    // Copy over any ASCII characters directly into the output.
    if let Some(num_ascii) = input.iter().rposition(|&b| b == b'-') {
        output.extend(input[..num_ascii].iter().map(|&b| char::from(b)));
        input = &input[num_ascii + 1..];
    }

    // Determine the "digit-value" for every remaining character.
    let input_values = input
        .iter()
        .map(|&b| decode_digit(b).ok_or(PunycodeError::BadInput))
        .collect::<Result<Vec<u32>, _>>()?;
    let mut input = &input_values[..];

    // Begin decoding Unicode characters.
    let mut n = INITIAL_N;
    let mut i = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut first = true;
    while !input.is_empty() {
        // Find the end of the current variable-width integer.
        let end = input
            .iter()
            .enumerate()
            .position(|(k, &v)| v < threshold(BASE * (k as u32 + 1), bias))
            .ok_or(PunycodeError::BadInput)?;

        // Compute the variable-width integer.
        let delta = input[..end]
            .iter()
            .enumerate()
            .map(|(k, &v)| (threshold(BASE * (k as u32 + 1), bias), v))
            .try_rfold(input[end], |int, (t, v)| {
                int.checked_mul(BASE - t)?.checked_add(v)
            })
            .ok_or(PunycodeError::Overflow)?;

        let length = output.len() as u32 + 1;
        bias = adapt(delta, length, first);
        i = i.checked_add(delta).ok_or(PunycodeError::Overflow)?;

        // Insert the decoded character at its position.
        n = n.checked_add(i / length).ok_or(PunycodeError::Overflow)?;
        i %= length;
        let ch = char::from_u32(n).ok_or(PunycodeError::BadInput)?;
        output.insert(i as usize, ch);

        // Prepare for the next iteration.
        input = &input[end + 1..];
        first = false;
        i += 1;
    }

    Ok(output.into_iter().collect())
}

/// The threshold for the digit at position `k`.
fn threshold(k: u32, bias: u32) -> u32 {
    k.saturating_sub(bias).clamp(T_MIN, T_MAX)
}

/// Adjust the Punycode transcoding bias.
fn adapt(mut delta: u32, length: u32, first: bool) -> u32 {
    delta /= if first { DAMP } else { 2 };
    delta += delta / length;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (BASE - T_MIN + 1) * delta / (delta + SKEW)
}

fn encode_digit(d: u32) -> char {
    // 0..25 => 'a'..'z'
    // 26..35 => '0'..'9'
    match d {
        0..=25 => char::from(b'a' + d as u8),
        _ => char::from(b'0' + (d - 26) as u8),
    }
}

fn decode_digit(b: u8) -> Option<u32> {
    // 'A'..'Z' =>  0..25
    // 'a'..'z' =>  0..25
    // '0'..'9' => 26..35
    match b {
        b'A'..=b'Z' => Some(u32::from(b - b'A')),
        b'a'..=b'z' => Some(u32::from(b - b'a')),
        b'0'..=b'9' => Some(u32::from(b - b'0') + 26),
        _ => None,
    }
}

//------------ PunycodeError -------------------------------------------------

/// A Punycode transcoding error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PunycodeError {
    /// The input contained characters that cannot be transcoded.
    BadInput,

    /// A value exceeded the range of the transcoding state.
    Overflow,
}

//--- Display and Error

impl fmt::Display for PunycodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Self::BadInput => "invalid Punycode input",
            Self::Overflow => "Punycode value overflow",
        })
    }
}

impl std::error::Error for PunycodeError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    // RFC 3492, section 7.1.
    const A_LABELS: &[&str] = &[
        "egbpdaj6bu4bxfgehfvwxn",
        "ihqwcrb4cv8a8dqg056pqjye",
        "ihqwctvzc91f659drss3x8bo0yb",
        "Proprostnemluvesky-uyb24dma41a",
        "4dbcagdahymbxekheh6e0a7fei0b",
        "i1baa7eci9glrd9b2ae1bj0hfcgg6iyaf8o0a1dig0cd",
        "n8jok5ay5dzabd5bym9f0cm5685rrjetr6pdxa",
        "b1abfaaepdrnnbgefbaDotcwatmq2g4l",
        "PorqunopuedensimplementehablarenEspaol-fmd56a",
        "TisaohkhngthchnitingVit-kjcr8268qyxafd2f1b9g",
        "3B-ww4c5e180e575a65lsy2b",
        "-with-SUPER-MONKEYS-pc58ag80a8qai00g7n9n",
        "Hello-Another-Way--fc4qua05auwb3674vfr0b",
        "2-u9tlzr9756bt3uc0v",
        "MajiKoi5-783gue6qz075azm5e",
        "de-jg4avhby1noc0d",
        "d9juau41awczczp",
    ];

    const U_LABELS: &[&str] = &[
        "\u{0644}\u{064A}\u{0647}\u{0645}\u{0627}\u{0628}\u{062A}\u{0643}\u{0644}\u{0645}\u{0648}\u{0634}\u{0639}\u{0631}\u{0628}\u{064A}\u{061F}",
        "\u{4ED6}\u{4EEC}\u{4E3A}\u{4EC0}\u{4E48}\u{4E0D}\u{8BF4}\u{4E2D}\u{6587}",
        "\u{4ED6}\u{5011}\u{7232}\u{4EC0}\u{9EBD}\u{4E0D}\u{8AAA}\u{4E2D}\u{6587}",
        "\u{0050}\u{0072}\u{006F}\u{010D}\u{0070}\u{0072}\u{006F}\u{0073}\u{0074}\u{011B}\u{006E}\u{0065}\u{006D}\u{006C}\u{0075}\u{0076}\u{00ED}\u{010D}\u{0065}\u{0073}\u{006B}\u{0079}",
        "\u{05DC}\u{05DE}\u{05D4}\u{05D4}\u{05DD}\u{05E4}\u{05E9}\u{05D5}\u{05D8}\u{05DC}\u{05D0}\u{05DE}\u{05D3}\u{05D1}\u{05E8}\u{05D9}\u{05DD}\u{05E2}\u{05D1}\u{05E8}\u{05D9}\u{05EA}",
        "\u{092F}\u{0939}\u{0932}\u{094B}\u{0917}\u{0939}\u{093F}\u{0928}\u{094D}\u{0926}\u{0940}\u{0915}\u{094D}\u{092F}\u{094B}\u{0902}\u{0928}\u{0939}\u{0940}\u{0902}\u{092C}\u{094B}\u{0932}\u{0938}\u{0915}\u{0924}\u{0947}\u{0939}\u{0948}\u{0902}",
        "\u{306A}\u{305C}\u{307F}\u{3093}\u{306A}\u{65E5}\u{672C}\u{8A9E}\u{3092}\u{8A71}\u{3057}\u{3066}\u{304F}\u{308C}\u{306A}\u{3044}\u{306E}\u{304B}",
        "\u{043F}\u{043E}\u{0447}\u{0435}\u{043C}\u{0443}\u{0436}\u{0435}\u{043E}\u{043D}\u{0438}\u{043D}\u{0435}\u{0433}\u{043E}\u{0432}\u{043E}\u{0440}\u{044F}\u{0442}\u{043F}\u{043E}\u{0440}\u{0443}\u{0441}\u{0441}\u{043A}\u{0438}",
        "\u{0050}\u{006F}\u{0072}\u{0071}\u{0075}\u{00E9}\u{006E}\u{006F}\u{0070}\u{0075}\u{0065}\u{0064}\u{0065}\u{006E}\u{0073}\u{0069}\u{006D}\u{0070}\u{006C}\u{0065}\u{006D}\u{0065}\u{006E}\u{0074}\u{0065}\u{0068}\u{0061}\u{0062}\u{006C}\u{0061}\u{0072}\u{0065}\u{006E}\u{0045}\u{0073}\u{0070}\u{0061}\u{00F1}\u{006F}\u{006C}",
        "\u{0054}\u{1EA1}\u{0069}\u{0073}\u{0061}\u{006F}\u{0068}\u{1ECD}\u{006B}\u{0068}\u{00F4}\u{006E}\u{0067}\u{0074}\u{0068}\u{1EC3}\u{0063}\u{0068}\u{1EC9}\u{006E}\u{00F3}\u{0069}\u{0074}\u{0069}\u{1EBF}\u{006E}\u{0067}\u{0056}\u{0069}\u{1EC7}\u{0074}",
        "\u{0033}\u{5E74}\u{0042}\u{7D44}\u{91D1}\u{516B}\u{5148}\u{751F}",
        "\u{5B89}\u{5BA4}\u{5948}\u{7F8E}\u{6075}\u{002D}\u{0077}\u{0069}\u{0074}\u{0068}\u{002D}\u{0053}\u{0055}\u{0050}\u{0045}\u{0052}\u{002D}\u{004D}\u{004F}\u{004E}\u{004B}\u{0045}\u{0059}\u{0053}",
        "\u{0048}\u{0065}\u{006C}\u{006C}\u{006F}\u{002D}\u{0041}\u{006E}\u{006F}\u{0074}\u{0068}\u{0065}\u{0072}\u{002D}\u{0057}\u{0061}\u{0079}\u{002D}\u{305D}\u{308C}\u{305E}\u{308C}\u{306E}\u{5834}\u{6240}",
        "\u{3072}\u{3068}\u{3064}\u{5C4B}\u{6839}\u{306E}\u{4E0B}\u{0032}",
        "\u{004D}\u{0061}\u{006A}\u{0069}\u{3067}\u{004B}\u{006F}\u{0069}\u{3059}\u{308B}\u{0035}\u{79D2}\u{524D}",
        "\u{30D1}\u{30D5}\u{30A3}\u{30FC}\u{0064}\u{0065}\u{30EB}\u{30F3}\u{30D0}",
        "\u{305D}\u{306E}\u{30B9}\u{30D4}\u{30FC}\u{30C9}\u{3067}",
    ];

    #[test]
    fn rfc3492_decode() {
        for (&a, &u) in core::iter::zip(A_LABELS, U_LABELS) {
            assert_eq!(decode(a).unwrap(), u, "decoding {a}");
        }
    }

    #[test]
    fn rfc3492_encode() {
        for (&a, &u) in core::iter::zip(A_LABELS, U_LABELS) {
            let encoded = encode(u).unwrap();
            assert!(encoded.eq_ignore_ascii_case(a), "{encoded} != {a}");
        }
    }

    #[test]
    fn ascii_labels() {
        assert_eq!(to_ascii("Example"), "example");
        assert_eq!(to_ascii("xn--1"), "xn--1");
        assert_eq!(to_ascii("XN--P1AI"), "xn--p1ai");
        assert_eq!(to_unicode("example"), "example");
        assert_eq!(to_unicode("23"), "23");
    }

    #[test]
    fn idn_labels() {
        assert_eq!(to_ascii("例子"), "xn--fsqu00a");
        assert_eq!(to_ascii("derhausüberwacher"), "xn--derhausberwacher-pzb");
        assert_eq!(to_ascii("Gwóźdź"), "xn--gwd-hna98db");
        assert_eq!(to_unicode("xn--fsqu00a"), "例子");
        assert_eq!(to_unicode("XN--fsqu00a"), "例子");
        assert_eq!(to_unicode("xn--p1ai"), "рф");
    }

    #[test]
    fn non_ascii_a_label_kept() {
        assert_eq!(to_ascii("xn--bébé"), "xn--bébé");
        assert_eq!(to_ascii("XN--Bébé"), "XN--Bébé");
    }

    #[test]
    fn round_trip() {
        for label in ["例子", "пример", "δοκιμή", "guangdong", "renangonçalves"]
        {
            assert_eq!(to_unicode(&to_ascii(label)), label);
        }
    }

    #[test]
    fn undecodable_passthrough() {
        assert_eq!(to_unicode("xn--1"), "xn--1");
        assert_eq!(to_unicode("xn--bébé"), "xn--bébé");
        assert_eq!(to_unicode("xn--\0bébé"), "xn--\0bébé");
        assert_eq!(to_unicode("xn--abc-"), "xn--abc-");
        assert_eq!(decode("1"), Err(PunycodeError::BadInput));
        assert_eq!(decode("b\u{e9}b\u{e9}"), Err(PunycodeError::BadInput));
    }

    #[test]
    fn ace_prefix() {
        assert!(has_ace_prefix("xn--p1ai"));
        assert!(has_ace_prefix("XN--p1ai"));
        assert!(!has_ace_prefix("xn-"));
        assert!(!has_ace_prefix("example"));
    }
}
