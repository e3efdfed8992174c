//! # Option Module
//!
//! [`Opt<T>`] is an optional container that keeps track of *presence*, not of
//! content. A value that is itself "null" (see [`Nullable`]) can still be held:
//! `Opt::some(None::<i32>)` is defined, and mapping a value to null keeps the
//! container defined.
//!
//! A missing container, as opposed to an empty one, is spelled
//! `Option<Opt<T>>` with an outer `None`. [`Opt::narrow`] and
//! [`Opt::flat_map_nullable`] pass such a missing container through untouched.

use std::fmt;

use crate::error::{OptionError, Result};
use crate::nullable::Nullable;
use crate::partial_function::PartialFunction;

/// A container that is either empty or holds exactly one value.
///
/// Ordering matches `Option`: the empty container sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Opt<T> {
    /// No value.
    None,
    /// A present value, which may be the absent marker of `T`.
    Some(T),
}

impl<T> Opt<T> {
    /// The empty container.
    pub const NONE: Self = Opt::None;

    /// Wraps `value` unless it is the absent marker of its type.
    pub fn of(value: T) -> Self
    where
        T: Nullable,
    {
        if value.is_null() {
            Opt::None
        } else {
            Opt::Some(value)
        }
    }

    /// Always wraps `value`, even when it is null.
    pub const fn some(value: T) -> Self {
        Opt::Some(value)
    }

    pub const fn none() -> Self {
        Opt::None
    }

    /// `Some(value)` if `condition` holds. `value` is evaluated by the caller
    /// either way; see [`Opt::when_with`] for the lazy form.
    pub fn when(condition: bool, value: T) -> Self {
        if condition {
            Opt::Some(value)
        } else {
            Opt::None
        }
    }

    pub fn when_with<F: FnOnce() -> T>(condition: bool, supplier: F) -> Self {
        if condition {
            Opt::Some(supplier())
        } else {
            Opt::None
        }
    }

    /// Widens the payload type of a possibly missing container.
    ///
    /// The case is preserved and a missing container stays missing.
    pub fn narrow<S>(option: Option<Opt<S>>) -> Option<Self>
    where
        S: Into<T>,
    {
        option.map(|opt| opt.map(Into::into))
    }

    /// Converts a host optional.
    ///
    /// An empty host optional becomes `Opt::None`; a missing one is rejected.
    pub fn of_optional(optional: Option<Option<T>>) -> Result<Self> {
        optional
            .map(Opt::from)
            .ok_or_else(|| OptionError::IllegalArgument("optional is absent".to_string()))
    }

    /// Returns the held value, which may be null.
    pub fn get(self) -> Result<T> {
        match self {
            Opt::Some(value) => Ok(value),
            Opt::None => Err(OptionError::ElementNotFound),
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Opt::Some(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Opt::None)
    }

    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => fallback,
        }
    }

    pub fn get_or_else_get<F: FnOnce() -> T>(self, supplier: F) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => supplier(),
        }
    }

    /// Returns the held value or the error produced by `err`.
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, err: F) -> std::result::Result<T, E> {
        match self {
            Opt::Some(value) => Ok(value),
            Opt::None => Err(err()),
        }
    }

    pub fn or_else(self, other: Opt<T>) -> Opt<T> {
        match self {
            Opt::Some(_) => self,
            Opt::None => other,
        }
    }

    pub fn or_else_get<F: FnOnce() -> Opt<T>>(self, supplier: F) -> Opt<T> {
        match self {
            Opt::Some(_) => self,
            Opt::None => supplier(),
        }
    }

    pub fn fold<U, F: FnOnce(T) -> U>(self, if_empty: U, f: F) -> U {
        match self {
            Opt::Some(value) => f(value),
            Opt::None => if_empty,
        }
    }

    pub fn exists<P: FnOnce(&T) -> bool>(&self, predicate: P) -> bool {
        match self {
            Opt::Some(value) => predicate(value),
            Opt::None => false,
        }
    }

    /// True for an empty container, otherwise the predicate's verdict.
    pub fn for_all<P: FnOnce(&T) -> bool>(&self, predicate: P) -> bool {
        match self {
            Opt::Some(value) => predicate(value),
            Opt::None => true,
        }
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.exists(|value| value == element)
    }

    /// Maps the held value, keeping the container defined even when `f`
    /// returns null.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Opt<U> {
        match self {
            Opt::Some(value) => Opt::Some(f(value)),
            Opt::None => Opt::None,
        }
    }

    pub fn flat_map<U, F: FnOnce(T) -> Opt<U>>(self, f: F) -> Opt<U> {
        match self {
            Opt::Some(value) => f(value),
            Opt::None => Opt::None,
        }
    }

    /// Like [`Opt::flat_map`], for mappers that may produce no container at all.
    ///
    /// A missing container from `f` is returned as-is and is not turned into
    /// `Opt::None`. An empty `self` yields a present, empty container.
    pub fn flat_map_nullable<U, F>(self, f: F) -> Option<Opt<U>>
    where
        F: FnOnce(T) -> Option<Opt<U>>,
    {
        match self {
            Opt::Some(value) => f(value),
            Opt::None => Some(Opt::None),
        }
    }

    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        if let Opt::Some(ref value) = self {
            if !predicate(value) {
                return Opt::None;
            }
        }
        self
    }

    /// Filters and maps in one step through `partial_function`.
    ///
    /// The guard is consulted once; the mapping only runs on values inside the
    /// domain.
    pub fn collect<U, P>(self, partial_function: &P) -> Opt<U>
    where
        P: PartialFunction<T, U> + ?Sized,
    {
        match self {
            Opt::Some(value) if partial_function.is_defined_at(&value) => {
                Opt::Some(partial_function.call(value))
            }
            _ => Opt::None,
        }
    }

    /// Runs `action` on the held value, if any, and returns `self`.
    pub fn peek<F: FnOnce(&T)>(self, action: F) -> Self {
        if let Opt::Some(ref value) = self {
            action(value);
        }
        self
    }

    /// Runs `action` if empty, and returns `self`.
    pub fn on_empty<F: FnOnce()>(self, action: F) -> Self {
        if self.is_empty() {
            action();
        }
        self
    }

    pub fn as_ref(&self) -> Opt<&T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => Opt::None,
        }
    }

    pub fn as_mut(&mut self) -> Opt<&mut T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => Opt::None,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.as_ref().to_option() }
    }

    pub fn to_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Opt::None
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Opt::Some(value),
            None => Opt::None,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(opt: Opt<T>) -> Self {
        match opt {
            Opt::Some(value) => Some(value),
            Opt::None => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opt::Some(value) => write!(f, "Some({})", value),
            Opt::None => write!(f, "None"),
        }
    }
}

/// Borrowing iterator over the value of an [`Opt`], if any.
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

/// Owning iterator over the value of an [`Opt`], if any.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.to_option() }
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
