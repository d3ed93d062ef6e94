//! The encoding options of the formatter.

use core::{fmt, str::FromStr};

use crate::utils::percent;

//------------ HostEncoding --------------------------------------------------

/// How a host is rendered.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HostEncoding {
    /// Internationalized labels are rendered as A-labels.
    Ascii,

    /// Internationalized labels are rendered in Unicode.
    #[default]
    Unicode,
}

impl HostEncoding {
    /// Returns the numeric value of the option.
    ///
    /// This is `1` for [`Unicode`][Self::Unicode] and `2` for
    /// [`Ascii`][Self::Ascii].
    pub fn to_int(self) -> i32 {
        match self {
            HostEncoding::Unicode => 1,
            HostEncoding::Ascii => 2,
        }
    }
}

impl TryFrom<i32> for HostEncoding {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HostEncoding::Unicode),
            2 => Ok(HostEncoding::Ascii),
            _ => Err(ConfigError::UnknownHostEncoding),
        }
    }
}

impl FromStr for HostEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ascii") {
            Ok(HostEncoding::Ascii)
        } else if s.eq_ignore_ascii_case("unicode") {
            Ok(HostEncoding::Unicode)
        } else {
            Err(ConfigError::UnknownHostEncoding)
        }
    }
}

impl fmt::Display for HostEncoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            HostEncoding::Ascii => "ascii",
            HostEncoding::Unicode => "unicode",
        })
    }
}

//------------ QueryEncoding -------------------------------------------------

/// How the keys and values of a query are percent-encoded.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum QueryEncoding {
    /// Percent-encoding of RFC 3986.
    #[default]
    Rfc3986,

    /// Form encoding of RFC 1738, with spaces as `+`.
    Rfc1738,
}

impl QueryEncoding {
    /// Returns the numeric value of the option.
    ///
    /// This is `1` for [`Rfc1738`][Self::Rfc1738] and `2` for
    /// [`Rfc3986`][Self::Rfc3986].
    pub fn to_int(self) -> i32 {
        match self {
            QueryEncoding::Rfc1738 => 1,
            QueryEncoding::Rfc3986 => 2,
        }
    }

    /// Writes `s` encoded under this profile into a format stream.
    pub fn display<Target: fmt::Write>(
        self,
        s: &str,
        f: &mut Target,
    ) -> fmt::Result {
        match self {
            QueryEncoding::Rfc3986 => percent::display_rfc3986(s, f),
            QueryEncoding::Rfc1738 => percent::display_form(s, f),
        }
    }

    /// Returns `s` encoded under this profile.
    pub fn encode(self, s: &str) -> String {
        match self {
            QueryEncoding::Rfc3986 => percent::encode_rfc3986(s),
            QueryEncoding::Rfc1738 => percent::encode_form(s),
        }
    }
}

impl TryFrom<i32> for QueryEncoding {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(QueryEncoding::Rfc1738),
            2 => Ok(QueryEncoding::Rfc3986),
            _ => Err(ConfigError::UnknownQueryEncoding),
        }
    }
}

impl FromStr for QueryEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("rfc3986") {
            Ok(QueryEncoding::Rfc3986)
        } else if s.eq_ignore_ascii_case("rfc1738") {
            Ok(QueryEncoding::Rfc1738)
        } else {
            Err(ConfigError::UnknownQueryEncoding)
        }
    }
}

impl fmt::Display for QueryEncoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            QueryEncoding::Rfc3986 => "rfc3986",
            QueryEncoding::Rfc1738 => "rfc1738",
        })
    }
}

//============ Error Types ===================================================

//------------ ConfigError ---------------------------------------------------

/// An encoding option was not recognized.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    UnknownHostEncoding,
    UnknownQueryEncoding,
}

//--- Display and Error

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ConfigError::UnknownHostEncoding => "unknown host encoding rule",
            ConfigError::UnknownQueryEncoding => {
                "unknown query encoding rule"
            }
        })
    }
}

impl std::error::Error for ConfigError {}

//============ Testing =======================================================
