//! Iterating over the labels of a host.

use core::{iter, slice};

use super::Label;

/// An iterator over the labels of a host.
///
/// For an IP literal, the literal itself is the only label. IPv6 literals
/// are returned without brackets.
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    inner: Inner<'a>,
}

#[derive(Clone, Debug)]
enum Inner<'a> {
    Literal(iter::Once<&'a str>),
    Domain(slice::Iter<'a, Label>),
}

impl<'a> Labels<'a> {
    pub(super) fn literal(literal: &'a str) -> Self {
        Labels {
            inner: Inner::Literal(iter::once(literal)),
        }
    }

    pub(super) fn domain(labels: &'a [Label]) -> Self {
        Labels {
            inner: Inner::Domain(labels.iter()),
        }
    }
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner {
            Inner::Literal(ref mut it) => it.next(),
            Inner::Domain(ref mut it) => it.next().map(Label::as_str),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.inner {
            Inner::Literal(ref it) => it.size_hint(),
            Inner::Domain(ref it) => it.size_hint(),
        }
    }
}

impl<'a> DoubleEndedIterator for Labels<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.inner {
            Inner::Literal(ref mut it) => it.next_back(),
            Inner::Domain(ref mut it) => it.next_back().map(Label::as_str),
        }
    }
}

impl<'a> ExactSizeIterator for Labels<'a> {}
