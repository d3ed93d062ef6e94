//! URL hosts and URL formatting.
//!
//! This crate provides the building blocks for dealing with the host part
//! of a URL and for turning a composed URL back into a string.
//!
//! # Modules
//!
//! * [host] contains the [`Host`] value type: an IPv4 literal, an IPv6
//!   literal, or a domain name made of validated labels. Internationalized
//!   labels are stored in their ASCII-compatible Punycode form and can be
//!   rendered back to Unicode.
//! * [url] contains the remaining URL components, the traits through which
//!   the formatter talks to them, and the scheme registry.
//! * [format] contains the [`Formatter`], which renders a host, any other
//!   URL component, or a whole URL under configurable encoding rules.
//! * [utils] contains the percent-encoding used for query strings.
//!
//! # Reference of Feature Flags
//!
//! * `serde`: implements `Serialize` and `Deserialize` for [`Host`], the
//!   encoding options, and the formatter [`Config`].
//! * `logging`: adds the `logging` module with a helper that installs a
//!   `tracing` subscriber configured through the `RUST_LOG` environment
//!   variable.
//!
//! [`Host`]: host::Host
//! [`Formatter`]: format::Formatter
//! [`Config`]: format::Config

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod format;
pub mod host;
pub mod url;
pub mod utils;

#[cfg(feature = "logging")]
pub mod logging;

pub use self::format::Formatter;
pub use self::host::Host;
pub use self::url::Url;
