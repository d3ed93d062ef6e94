//! URL components.
//!
//! A [`Url`] is assembled from already split components: a [`Scheme`],
//! [`UserInfo`], a [`Host`], a [`Port`], a [`Path`], a [`Query`], and a
//! [`Fragment`]. The types in this module do not parse URLs. They hold the
//! text of their component and know how to render it with the delimiter
//! that marks it in a URL.
//!
//! Rendering is provided through the [`UriComponent`] trait. Components
//! that can be re-encoded in different ways, currently only the query,
//! additionally implement [`QueryPairs`]. Both traits are what the
//! [`Formatter`][crate::format::Formatter] relies on.
//!
//! The [`SchemeRegistry`] trait supplies the default port of a scheme.
//! [`StandardSchemes`] is a registry with the well-known schemes.

pub use self::parts::{Fragment, Path, Port, Query, Scheme, UserInfo};
pub use self::registry::{SchemeRegistry, StandardSchemes};

use crate::host::Host;

mod parts;
mod registry;

//------------ UriComponent --------------------------------------------------

/// A type that renders as a component of a URL.
pub trait UriComponent {
    /// Returns the component including its delimiter.
    ///
    /// An absent component returns the empty string.
    fn to_uri_component(&self) -> String;
}

impl UriComponent for Host {
    fn to_uri_component(&self) -> String {
        self.to_string()
    }
}

impl<'a, T: UriComponent + ?Sized> UriComponent for &'a T {
    fn to_uri_component(&self) -> String {
        (**self).to_uri_component()
    }
}

//------------ QueryPairs ----------------------------------------------------

/// A type that can be decomposed into query pairs.
///
/// The pairs are returned unencoded and in order. A key without a value has
/// `None` as its value.
pub trait QueryPairs {
    /// Returns the key-value pairs of the query.
    fn query_pairs(&self) -> Vec<(String, Option<String>)>;
}

//------------ Url -----------------------------------------------------------

/// A URL composed of its components.
///
/// Every component is public and can be changed independently. A component
/// is absent if it is empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Url {
    /// The scheme, e.g., `http`.
    pub scheme: Scheme,

    /// The user information in front of the host.
    pub user_info: UserInfo,

    /// The host.
    pub host: Host,

    /// The port.
    pub port: Port,

    /// The path.
    pub path: Path,

    /// The query.
    pub query: Query,

    /// The fragment.
    pub fragment: Fragment,
}

impl Url {
    /// Creates a URL with all components absent.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the URL with the scheme replaced.
    pub fn with_scheme(mut self, scheme: impl Into<Scheme>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Returns the URL with the user information replaced.
    pub fn with_user_info(mut self, user_info: UserInfo) -> Self {
        self.user_info = user_info;
        self
    }

    /// Returns the URL with the host replaced.
    pub fn with_host(mut self, host: Host) -> Self {
        self.host = host;
        self
    }

    /// Returns the URL with the port replaced.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Port::from(port);
        self
    }

    /// Returns the URL with the path replaced.
    pub fn with_path(mut self, path: impl Into<Path>) -> Self {
        self.path = path.into();
        self
    }

    /// Returns the URL with the query replaced.
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Returns the URL with the fragment replaced.
    pub fn with_fragment(mut self, fragment: impl Into<Fragment>) -> Self {
        self.fragment = fragment.into();
        self
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn host_component() {
        assert_eq!(Host::new("::1").unwrap().to_uri_component(), "[::1]");
        assert_eq!(
            Host::new("例子.测试").unwrap().to_uri_component(),
            "xn--fsqu00a.xn--0zwm56d"
        );
        assert_eq!(Host::empty().to_uri_component(), "");
    }

    #[test]
    fn build() {
        let url = Url::new()
            .with_scheme("https")
            .with_host(Host::new("example.com").unwrap())
            .with_port(8443)
            .with_path("/index.html")
            .with_fragment("top");
        assert_eq!(url.scheme.as_str(), "https");
        assert_eq!(url.port.get(), Some(8443));
        assert_eq!(url.path.as_str(), "/index.html");
        assert_eq!(url.fragment.to_uri_component(), "#top");
        assert!(url.query.is_empty());
        assert!(url.user_info.is_empty());
    }
}
