// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//
use std::fmt::{self, Display};

use crate::never::Never;

/// A value that is either present or absent.
///
/// To access the value, match on the variant:
/// ```
/// use maybe::{present, Maybe};
///
/// let greeting = present("hello");
/// if let Maybe::Present(text) = greeting {
///     assert_eq!(text, "hello");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    Present(T),
    Absent,
}

/// Wrap `value` into a present `Maybe`.
pub const fn present<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

/// An absent `Maybe`, its payload type is inferred from the context.
///
/// Without context, use `absent::<Never>()` and later [`Maybe::widen`].
pub const fn absent<T>() -> Maybe<T> {
    Maybe::Absent
}

impl<T> Maybe<T> {
    pub const fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    pub const fn absent() -> Self {
        Maybe::Absent
    }

    /// Returns true if a value is present.
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns true if no value is present.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Apply `f` to the value if present, `f` is not called otherwise.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Return the value if present, or `default` otherwise.
    ///
    /// `default` is evaluated by the caller even when the value is present.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl Maybe<Never> {
    /// Give an absent value of unknown payload type a concrete payload type.
    pub fn widen<T>(self) -> Maybe<T> {
        match self {
            Maybe::Present(never) => never.absurd(),
            Maybe::Absent => Maybe::Absent,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T: Display> Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(value) => write!(f, "Present({value})"),
            Maybe::Absent => write!(f, "Absent"),
        }
    }
}
