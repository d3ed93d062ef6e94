//! The components of a URL other than the host.

use core::fmt;

use super::{QueryPairs, UriComponent};
use crate::utils::percent;

//------------ Scheme --------------------------------------------------------

/// The scheme of a URL.
///
/// The scheme is kept lowercased. Its component form carries the trailing
/// colon, e.g., `http:`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Scheme(String);

impl Scheme {
    /// Creates a new scheme.
    pub fn new(scheme: &str) -> Self {
        Scheme(scheme.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> From<&'a str> for Scheme {
    fn from(scheme: &'a str) -> Self {
        Self::new(scheme)
    }
}

impl UriComponent for Scheme {
    fn to_uri_component(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{}:", self.0)
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//------------ UserInfo ------------------------------------------------------

/// The user information of a URL.
///
/// This is a user name and an optional password. Its component form is
/// followed by an `@`, e.g., `user:pass@`. Without a user name, the
/// component is absent and the password ignored.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct UserInfo {
    user: String,
    pass: Option<String>,
}

impl UserInfo {
    /// Creates user information from a user name and an optional password.
    pub fn new(user: impl Into<String>, pass: Option<String>) -> Self {
        UserInfo {
            user: user.into(),
            pass,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn pass(&self) -> Option<&str> {
        self.pass.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_empty()
    }
}

impl UriComponent for UserInfo {
    fn to_uri_component(&self) -> String {
        match (self.is_empty(), &self.pass) {
            (true, _) => String::new(),
            (false, Some(pass)) => format!("{}:{}@", self.user, pass),
            (false, None) => format!("{}@", self.user),
        }
    }
}

//------------ Port ----------------------------------------------------------

/// The port of a URL.
///
/// Its component form is preceded by a colon, e.g., `:8080`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Port(Option<u16>);

impl Port {
    pub fn new(port: Option<u16>) -> Self {
        Port(port)
    }

    pub fn get(self) -> Option<u16> {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0.is_none()
    }
}

impl From<u16> for Port {
    fn from(port: u16) -> Self {
        Port(Some(port))
    }
}

impl From<Option<u16>> for Port {
    fn from(port: Option<u16>) -> Self {
        Port(port)
    }
}

impl UriComponent for Port {
    fn to_uri_component(&self) -> String {
        match self.0 {
            Some(port) => format!(":{}", port),
            None => String::new(),
        }
    }
}

//------------ Path ----------------------------------------------------------

/// The path of a URL.
///
/// The path is kept as given. Its component form is the path itself.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Path(String);

impl Path {
    pub fn new(path: impl Into<String>) -> Self {
        Path(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> From<&'a str> for Path {
    fn from(path: &'a str) -> Self {
        Path(path.into())
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Path(path)
    }
}

impl UriComponent for Path {
    fn to_uri_component(&self) -> String {
        self.0.clone()
    }
}

//------------ Query ---------------------------------------------------------

/// The query of a URL.
///
/// The query is kept as an ordered list of unencoded key-value pairs. Keys
/// may appear more than once. Its component form is preceded by a `?` and
/// uses the RFC 3986 percent-encoding with pairs separated by `&`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Query {
    pairs: Vec<(String, Option<String>)>,
}

impl Query {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a pair to the end of the query.
    pub fn push(&mut self, key: impl Into<String>, value: Option<String>) {
        self.pairs.push((key.into(), value))
    }

    /// Returns the query with a pair added to its end.
    pub fn with_pair(
        mut self,
        key: impl Into<String>,
        value: Option<&str>,
    ) -> Self {
        self.push(key, value.map(Into::into));
        self
    }

    /// Returns the value of the first pair with the given key.
    ///
    /// Returns `Some(None)` if the key is present without a value.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.pairs
            .iter()
            .find(|(item, _)| item == key)
            .map(|(_, value)| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Option<V>)>
    for Query
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Query {
            pairs: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.map(Into::into)))
                .collect(),
        }
    }
}

impl QueryPairs for Query {
    fn query_pairs(&self) -> Vec<(String, Option<String>)> {
        self.pairs.clone()
    }
}

impl UriComponent for Query {
    fn to_uri_component(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("?{}", self)
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            percent::display_rfc3986(key, f)?;
            if let Some(value) = value {
                f.write_str("=")?;
                percent::display_rfc3986(value, f)?;
            }
        }
        Ok(())
    }
}

//------------ Fragment ------------------------------------------------------

/// The fragment of a URL.
///
/// Its component form is preceded by a `#`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(fragment: impl Into<String>) -> Self {
        Fragment(fragment.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> From<&'a str> for Fragment {
    fn from(fragment: &'a str) -> Self {
        Fragment(fragment.into())
    }
}

impl UriComponent for Fragment {
    fn to_uri_component(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("#{}", self.0)
        }
    }
}

//============ Testing =======================================================
