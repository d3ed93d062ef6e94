//! Default ports of URL schemes.

use std::collections::HashMap;

//------------ SchemeRegistry ------------------------------------------------

/// A source of knowledge about URL schemes.
pub trait SchemeRegistry {
    /// Returns the default port of `scheme`.
    ///
    /// Returns `None` if the scheme is unknown or has no default port. The
    /// scheme is given lowercased.
    fn default_port(&self, scheme: &str) -> Option<u16>;
}

//------------ StandardSchemes -----------------------------------------------

/// A registry of schemes and their default ports.
///
/// The [`Default`] value knows the common schemes. More can be added via
/// [`insert`][Self::insert].
#[derive(Clone, Debug)]
pub struct StandardSchemes {
    ports: HashMap<String, Option<u16>>,
}

const STANDARD: &[(&str, Option<u16>)] = &[
    ("file", None),
    ("ftp", Some(21)),
    ("gopher", Some(70)),
    ("http", Some(80)),
    ("https", Some(443)),
    ("ldap", Some(389)),
    ("ldaps", Some(636)),
    ("ssh", Some(22)),
    ("ws", Some(80)),
    ("wss", Some(443)),
];

impl StandardSchemes {
    /// Creates a registry with the common schemes.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a registry that knows no schemes at all.
    pub fn empty() -> Self {
        StandardSchemes {
            ports: HashMap::new(),
        }
    }

    /// Adds a scheme or changes its default port.
    pub fn insert(&mut self, scheme: &str, port: Option<u16>) {
        self.ports.insert(scheme.to_ascii_lowercase(), port);
    }

    /// Whether the registry knows the scheme.
    pub fn contains(&self, scheme: &str) -> bool {
        self.ports.contains_key(&scheme.to_ascii_lowercase())
    }
}

impl Default for StandardSchemes {
    fn default() -> Self {
        StandardSchemes {
            ports: STANDARD
                .iter()
                .map(|&(scheme, port)| (scheme.into(), port))
                .collect(),
        }
    }
}

impl SchemeRegistry for StandardSchemes {
    fn default_port(&self, scheme: &str) -> Option<u16> {
        self.ports.get(scheme).copied().flatten()
    }
}

//============ Testing =======================================================
