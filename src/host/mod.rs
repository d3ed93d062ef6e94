//! URL hosts.
//!
//! A host is the part of a URL naming the machine to talk to. It is either
//! an IP literal or a domain name. This module provides the [`Host`] value
//! type for both.
//!
//! A domain name is a sequence of *labels*. Unlike the wire format used in
//! the DNS, labels are kept in the order they are written: in
//! `www.example.com`, the first label is `www` and the most significant
//! label is the last one, `com`. A name written with a trailing dot, such as
//! `www.example.com.`, is *absolute*: it is anchored at the root of the
//! domain name tree. Without the dot, it is *relative*.
//!
//! Labels are validated against the preferred name syntax (see
//! [`label::validate`]) and stored lowercased. Labels containing non-ASCII
//! characters are accepted as well. They are converted into their ASCII
//! compatible form via the Punycode algorithm implemented in the [`idna`]
//! module and can be rendered back into Unicode with
//! [`Host::to_unicode`].
//!
//! Hosts are immutable. Methods such as [`Host::append`] or
//! [`Host::without`] return a new host and leave the original alone.

use core::{convert::Infallible, fmt, hash, str::FromStr};
use tracing::{debug, trace};

pub use self::label::{Label, LabelError};
pub use self::labels::Labels;

pub mod idna;
mod ip;
pub mod label;
mod labels;

//------------ Host ----------------------------------------------------------

/// The host part of a URL.
///
/// A host is one of
///
/// * an IPv4 literal such as `127.0.0.1`, kept as given,
/// * an IPv6 literal such as `[::1]`, kept without the brackets but always
///   displayed with them,
/// * a domain name, kept as a sequence of [`Label`]s plus a flag marking
///   whether it is absolute.
///
/// The empty host has no labels at all and displays as the empty string.
///
/// The [`Display`][fmt::Display] implementation provides the ASCII form of
/// the host. Use [`Host::to_unicode`] for the Unicode form.
#[derive(Clone, Debug, Default)]
pub struct Host {
    kind: Kind,
}

#[derive(Clone, Debug)]
enum Kind {
    Ipv4(Box<str>),
    Ipv6(Box<str>),
    Domain { labels: Vec<Label>, absolute: bool },
}

impl Default for Kind {
    fn default() -> Self {
        Kind::Domain {
            labels: Vec::new(),
            absolute: false,
        }
    }
}

impl Host {
    /// The maximum number of labels in a domain name.
    pub const MAX_LABELS: usize = 127;

    /// The maximum length of a domain name in its ASCII form.
    pub const MAX_LEN: usize = 255;
}

/// # Creation
///
impl Host {
    /// Returns the empty host.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a host from its string representation.
    ///
    /// An IPv6 literal may be given with or without brackets. The empty
    /// string results in the empty host.
    pub fn new(raw: &str) -> Result<Self, HostError> {
        let res = Self::parse(raw);
        if let Err(ref err) = res {
            debug!(host = raw, %err, "rejected host");
        }
        res
    }

    /// Creates a host from a sequence of labels.
    ///
    /// The labels are joined with dots and parsed like [`Host::new`] does,
    /// so the elements may themselves contain dots and anything that
    /// displays as a label, such as integers, can be used. Absolute names
    /// are requested through `absoluteness`. IP literals cannot be absolute.
    pub fn from_labels<I>(
        labels: I,
        absoluteness: Absoluteness,
    ) -> Result<Self, HostError>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let mut joined = String::new();
        for (i, label) in labels.into_iter().enumerate() {
            if i > 0 {
                joined.push('.');
            }
            joined.push_str(&label.to_string());
        }

        match absoluteness {
            Absoluteness::Relative => Self::new(&joined),
            Absoluteness::Absolute => {
                // The root alone is not a host, and the labels must not
                // bring their own trailing dot.
                if joined.is_empty() || joined.ends_with('.') {
                    return Err(HostError::EmptyLabel);
                }
                let host = Self::new(&joined)?;
                if host.is_ip() {
                    return Err(HostError::AbsoluteIpLiteral);
                }
                Ok(host.into_absolute())
            }
        }
    }

    fn parse(raw: &str) -> Result<Self, HostError> {
        if raw.is_empty() {
            return Ok(Self::empty());
        }

        if let Some(inner) = raw.strip_prefix('[') {
            return match inner.strip_suffix(']') {
                Some(addr) if ip::is_ipv6(addr) => Ok(Self::ipv6(addr)),
                _ => Err(HostError::BadIpLiteral),
            };
        }

        if raw.contains(':') {
            return if ip::is_ipv6(raw) {
                Ok(Self::ipv6(raw))
            } else {
                Err(HostError::BadIpLiteral)
            };
        }

        if ip::is_ipv4(raw) {
            trace!(host = raw, "IPv4 literal");
            return Ok(Host {
                kind: Kind::Ipv4(raw.into()),
            });
        }

        let (body, absolute) = match raw.strip_suffix('.') {
            Some(body) => (body, true),
            None => (raw, false),
        };
        let labels = body
            .split('.')
            .map(Label::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_domain(labels, absolute)
    }

    fn ipv6(addr: &str) -> Self {
        trace!(host = addr, "IPv6 literal");
        Host {
            kind: Kind::Ipv6(addr.into()),
        }
    }

    /// Creates a host from already validated labels.
    ///
    /// Checks the limits on the whole name. Labels spelling an IPv4 address
    /// become that address.
    fn from_domain(
        labels: Vec<Label>,
        absolute: bool,
    ) -> Result<Self, HostError> {
        if labels.is_empty() {
            return Ok(Self::empty());
        }
        if labels.len() > Self::MAX_LABELS {
            return Err(HostError::TooManyLabels);
        }
        let len = labels.iter().map(Label::len).sum::<usize>() + labels.len() - 1;
        if len > Self::MAX_LEN {
            return Err(HostError::LongName);
        }

        if ip::has_ipv4_suffix(&labels) {
            if labels.len() > 4 {
                return Err(HostError::MixedIpLiteral);
            }
            if absolute {
                return Err(HostError::AbsoluteIpLiteral);
            }
            let addr = labels
                .iter()
                .map(Label::as_str)
                .collect::<Vec<_>>()
                .join(".");
            return Ok(Host {
                kind: Kind::Ipv4(addr.into()),
            });
        }

        Ok(Host {
            kind: Kind::Domain { labels, absolute },
        })
    }

    fn into_absolute(self) -> Self {
        match self.kind {
            Kind::Domain { labels, .. } if !labels.is_empty() => Host {
                kind: Kind::Domain {
                    labels,
                    absolute: true,
                },
            },
            kind => Host { kind },
        }
    }
}

/// # Properties
///
impl Host {
    /// Whether the host is an IP literal.
    pub fn is_ip(&self) -> bool {
        matches!(self.kind, Kind::Ipv4(_) | Kind::Ipv6(_))
    }

    /// Whether the host is an IPv4 literal.
    pub fn is_ipv4(&self) -> bool {
        matches!(self.kind, Kind::Ipv4(_))
    }

    /// Whether the host is an IPv6 literal.
    pub fn is_ipv6(&self) -> bool {
        matches!(self.kind, Kind::Ipv6(_))
    }

    /// Whether the host is an absolute domain name.
    pub fn is_absolute(&self) -> bool {
        matches!(self.kind, Kind::Domain { absolute: true, .. })
    }

    /// The number of labels.
    ///
    /// An IP literal counts as a single label.
    pub fn len(&self) -> usize {
        match self.kind {
            Kind::Ipv4(_) | Kind::Ipv6(_) => 1,
            Kind::Domain { ref labels, .. } => labels.len(),
        }
    }

    /// Whether this is the empty host.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the labels in their ASCII form.
    pub fn iter(&self) -> Labels<'_> {
        match self.kind {
            Kind::Ipv4(ref addr) | Kind::Ipv6(ref addr) => {
                Labels::literal(addr)
            }
            Kind::Domain { ref labels, .. } => Labels::domain(labels),
        }
    }

    /// Returns the labels in their ASCII form.
    pub fn to_array(&self) -> Vec<String> {
        self.iter().map(Into::into).collect()
    }

    /// Returns the label at `index`.
    ///
    /// Index 0 is the first label as written, i.e., `master` in
    /// `master.example.com`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.iter().nth(index)
    }

    /// Returns the indexes of all labels.
    pub fn offsets(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }

    /// Returns the indexes of the labels equal to `label`.
    ///
    /// The given label is normalized first, so it may be given in Unicode
    /// or with different case.
    pub fn offsets_of(&self, label: &str) -> Vec<usize> {
        let label = label
            .strip_prefix('[')
            .and_then(|inner| inner.strip_suffix(']'))
            .unwrap_or(label);
        let label = idna::to_ascii(label);
        self.iter()
            .enumerate()
            .filter(|&(_, item)| item == label)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the Unicode form of the host.
    ///
    /// IP literals are returned as they are displayed.
    pub fn to_unicode(&self) -> String {
        match self.kind {
            Kind::Domain {
                ref labels,
                absolute,
            } => {
                let mut res = String::new();
                for (i, label) in labels.iter().enumerate() {
                    if i > 0 {
                        res.push('.');
                    }
                    res.push_str(&label.to_unicode());
                }
                if absolute {
                    res.push('.');
                }
                res
            }
            _ => self.to_string(),
        }
    }

    /// Whether two hosts have the same ASCII form.
    pub fn same_value_as(&self, other: &Host) -> bool {
        self.to_string() == other.to_string()
    }
}

/// # Label Surgery
///
/// None of these methods change the host they are called on.
impl Host {
    /// Returns the host without the labels at the given indexes.
    ///
    /// Indexes beyond the last label are ignored. Removing all labels,
    /// including the single label of an IP literal, results in the empty
    /// host. The remaining labels of a domain name are kept as a domain
    /// name, even if they happen to look like an IPv4 address.
    pub fn without(&self, indices: &[usize]) -> Self {
        match self.kind {
            Kind::Domain {
                ref labels,
                absolute,
            } => {
                let kept: Vec<Label> = labels
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !indices.contains(i))
                    .map(|(_, label)| label.clone())
                    .collect();
                if kept.is_empty() {
                    return Self::empty();
                }
                Host {
                    kind: Kind::Domain {
                        labels: kept,
                        absolute,
                    },
                }
            }
            _ if indices.contains(&0) => Self::empty(),
            _ => self.clone(),
        }
    }

    /// Returns the host with the labels of `value` in front.
    ///
    /// A trailing dot on `value` is dropped; the result is absolute if this
    /// host is. Prepending to the empty host results in `value`.
    ///
    /// Nothing can be prepended to an IP literal and an IP literal cannot
    /// be prepended to a domain name.
    pub fn prepend<T>(&self, value: T) -> Result<Self, EditError>
    where
        T: TryInto<Host>,
        HostError: From<T::Error>,
    {
        let value = value.try_into().map_err(HostError::from)?;
        self.combine(value, true)
    }

    /// Returns the host with the labels of `value` at the end.
    ///
    /// A trailing dot on `value` is dropped; the result is absolute if this
    /// host is. Appending to the empty host results in `value`.
    ///
    /// Nothing can be appended to an IP literal and an IP literal cannot be
    /// appended to a domain name.
    pub fn append<T>(&self, value: T) -> Result<Self, EditError>
    where
        T: TryInto<Host>,
        HostError: From<T::Error>,
    {
        let value = value.try_into().map_err(HostError::from)?;
        self.combine(value, false)
    }

    fn combine(&self, value: Host, front: bool) -> Result<Self, EditError> {
        if self.is_empty() {
            return Ok(value);
        }
        let (labels, absolute) = match self.kind {
            Kind::Domain {
                ref labels,
                absolute,
            } => (labels, absolute),
            _ => return Err(EditError::IpLiteral),
        };
        let added = match value.kind {
            Kind::Domain { labels, .. } => labels,
            _ => return Err(HostError::IpLiteralInName.into()),
        };
        if added.is_empty() {
            return Ok(self.clone());
        }

        let mut combined = Vec::with_capacity(labels.len() + added.len());
        if front {
            combined.extend(added);
            combined.extend_from_slice(labels);
        } else {
            combined.extend_from_slice(labels);
            combined.extend(added);
        }
        Ok(Self::from_domain(combined, absolute)?)
    }

    /// Returns the host with the label at `offset` replaced by `value`.
    ///
    /// All labels of `value` take the place of the replaced label; a
    /// trailing dot on `value` is dropped. If there is no label at
    /// `offset`, the host is returned unchanged. As an exception, replacing
    /// label 0 of the empty host results in `value`.
    ///
    /// The single label of an IP literal can be replaced by any host. An IP
    /// literal can only replace the single label of a relative domain name.
    pub fn replace<T>(&self, offset: usize, value: T) -> Result<Self, HostError>
    where
        T: TryInto<Host>,
        HostError: From<T::Error>,
    {
        let value = value.try_into()?;

        let (labels, absolute) = match self.kind {
            _ if self.is_empty() || offset >= self.len() => {
                if self.is_empty() && offset == 0 {
                    return Ok(value);
                }
                trace!(host = %self, offset, "no label to replace");
                return Ok(self.clone());
            }
            Kind::Ipv4(_) | Kind::Ipv6(_) => return Ok(value),
            Kind::Domain {
                ref labels,
                absolute,
            } => (labels, absolute),
        };

        match value.kind {
            Kind::Domain { labels: added, .. } => {
                let mut combined =
                    Vec::with_capacity(labels.len() + added.len());
                combined.extend_from_slice(&labels[..offset]);
                combined.extend(added);
                combined.extend_from_slice(&labels[offset + 1..]);
                Self::from_domain(combined, absolute)
            }
            _ if labels.len() > 1 => Err(HostError::IpLiteralInName),
            _ if absolute => Err(HostError::AbsoluteIpLiteral),
            _ => Ok(value),
        }
    }
}

//--- FromStr, TryFrom, and From

impl FromStr for Host {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'a> TryFrom<&'a str> for Host {
    type Error = HostError;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for Host {
    type Error = HostError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl<'a> From<&'a Host> for Host {
    fn from(host: &'a Host) -> Self {
        host.clone()
    }
}

//--- PartialEq, Eq, and Hash

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        self.same_value_as(other)
    }
}

impl Eq for Host {}

impl hash::Hash for Host {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.to_string(), state)
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a Host {
    type Item = &'a str;
    type IntoIter = Labels<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- Display

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            Kind::Ipv4(ref addr) => f.write_str(addr),
            Kind::Ipv6(ref addr) => write!(f, "[{}]", addr),
            Kind::Domain {
                ref labels,
                absolute,
            } => {
                for (i, label) in labels.iter().enumerate() {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(label.as_str())?;
                }
                if absolute {
                    f.write_str(".")?;
                }
                Ok(())
            }
        }
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Host {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct("Host", &format_args!("{}", self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Host {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::Error;

        struct InnerVisitor;

        impl<'de> serde::de::Visitor<'de> for InnerVisitor {
            type Value = Host;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a URL host")
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                Host::new(v).map_err(E::custom)
            }
        }

        struct NewtypeVisitor;

        impl<'de> serde::de::Visitor<'de> for NewtypeVisitor {
            type Value = Host;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a URL host")
            }

            fn visit_newtype_struct<D: serde::Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                deserializer.deserialize_str(InnerVisitor)
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                Host::new(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_newtype_struct("Host", NewtypeVisitor)
    }
}

//------------ Absoluteness --------------------------------------------------

/// Whether a domain name is anchored at the root.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Absoluteness {
    /// The name is relative and written without a trailing dot.
    #[default]
    Relative,

    /// The name is absolute and written with a trailing dot.
    Absolute,
}

impl TryFrom<i32> for Absoluteness {
    type Error = HostError;

    /// Converts the numeric flags `0` (relative) and `1` (absolute).
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Absoluteness::Relative),
            1 => Ok(Absoluteness::Absolute),
            _ => Err(HostError::UnknownAbsoluteness),
        }
    }
}

impl From<bool> for Absoluteness {
    fn from(absolute: bool) -> Self {
        if absolute {
            Absoluteness::Absolute
        } else {
            Absoluteness::Relative
        }
    }
}

//============ Error Types ===================================================

//------------ HostError -----------------------------------------------------

/// A host was invalid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HostError {
    /// The domain name contained an empty label.
    EmptyLabel,

    /// A label was longer than 63 characters.
    LongLabel,

    /// A label contained a disallowed character.
    BadLabel,

    /// The domain name was longer than 255 characters.
    LongName,

    /// The domain name had more than 127 labels.
    TooManyLabels,

    /// An IP literal was malformed.
    BadIpLiteral,

    /// An IP literal was to be absolute.
    AbsoluteIpLiteral,

    /// A domain name ended in the labels of an IPv4 address.
    MixedIpLiteral,

    /// An IP literal was to become a label of a domain name.
    IpLiteralInName,

    /// The numeric absoluteness flag was not recognized.
    UnknownAbsoluteness,
}

impl From<LabelError> for HostError {
    fn from(err: LabelError) -> Self {
        match err {
            LabelError::Empty => HostError::EmptyLabel,
            LabelError::Long => HostError::LongLabel,
            LabelError::BadChar => HostError::BadLabel,
        }
    }
}

impl From<Infallible> for HostError {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}

//--- Display and Error

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Self::EmptyLabel => "empty domain name label",
            Self::LongLabel => "domain name label longer than 63 characters",
            Self::BadLabel => "disallowed character in domain name label",
            Self::LongName => "domain name longer than 255 characters",
            Self::TooManyLabels => "domain name with more than 127 labels",
            Self::BadIpLiteral => "malformed IP literal",
            Self::AbsoluteIpLiteral => "IP literals cannot be absolute",
            Self::MixedIpLiteral => "domain name ending in an IPv4 address",
            Self::IpLiteralInName => {
                "IP literals cannot be part of a domain name"
            }
            Self::UnknownAbsoluteness => "unknown absoluteness flag",
        })
    }
}

impl std::error::Error for HostError {}

//------------ EditError -----------------------------------------------------

/// Labels could not be added to a host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditError {
    /// The labels to be added did not form a valid host.
    Host(HostError),

    /// Labels cannot be added to an IP literal.
    IpLiteral,
}

impl From<HostError> for EditError {
    fn from(err: HostError) -> Self {
        EditError::Host(err)
    }
}

//--- Display and Error

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EditError::Host(ref err) => err.fmt(f),
            EditError::IpLiteral => {
                f.write_str("cannot add labels to an IP literal")
            }
        }
    }
}

impl std::error::Error for EditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            EditError::Host(ref err) => Some(err),
            EditError::IpLiteral => None,
        }
    }
}

//============ Testing =======================================================
