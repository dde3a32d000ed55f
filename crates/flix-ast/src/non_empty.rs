//! A vector that holds at least one element.
//!
//! Grammar rules such as rule bodies, enum cases and match rules require at
//! least one entry. Storing them as `NonEmpty` turns that requirement into a
//! construction-time check instead of something every consumer re-validates.

use std::ops::Deref;

use serde::Serialize;

use crate::error::{ShapeError, ShapeResult};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NonEmpty<T>(Vec<T>);

impl<T> NonEmpty<T> {
    /// Create a sequence holding exactly one element.
    pub fn singleton(item: T) -> Self {
        Self(vec![item])
    }

    /// Wrap `items`, rejecting an empty vector.
    ///
    /// `what` names the grammar construct for the error message.
    pub fn new(what: &'static str, items: Vec<T>) -> ShapeResult<Self> {
        if items.is_empty() {
            Err(ShapeError::EmptySequence { what })
        } else {
            Ok(Self(items))
        }
    }

    pub fn first(&self) -> &T {
        &self.0[0]
    }

    pub fn last(&self) -> &T {
        &self.0[self.0.len() - 1]
    }

    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for NonEmpty<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
