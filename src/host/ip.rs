//! Recognizing IP literals.

use std::net::Ipv6Addr;

use super::label::Label;

/// Whether a string is an IPv4 address in dotted-quad notation.
///
/// Exactly four dot-separated decimal octets between 0 and 255 are
/// accepted.
pub(super) fn is_ipv4(s: &str) -> bool {
    let mut count = 0;
    for octet in s.split('.') {
        count += 1;
        if count > 4 || !is_octet(octet) {
            return false;
        }
    }
    count == 4
}

/// Whether a string is an IPv6 address without surrounding brackets.
pub(super) fn is_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

/// Whether the last four labels spell an IPv4 address.
pub(super) fn has_ipv4_suffix(labels: &[Label]) -> bool {
    match labels.len().checked_sub(4) {
        Some(start) => labels[start..].iter().all(|l| is_octet(l.as_str())),
        None => false,
    }
}

fn is_octet(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= 3
        && (s.len() == 1 || !s.starts_with('0'))
        && s.bytes().all(|b| b.is_ascii_digit())
        && s.parse::<u8>().is_ok()
}

//============ Testing =======================================================
