//! # Nullable Module
//!
//! Detection of the "absent marker" of a type.
//!
//! [`Opt::of`](crate::Opt::of) only wraps a value when it is not null. Rust has no
//! universal null, so each type states what its null looks like:
//!
//! - `Option<T>`: `None` is null
//! - `*const T` / `*mut T`: the null pointer is null
//! - everything else implemented here is never null
//!
//! Types outside this crate opt in with an empty impl, which inherits the
//! "never null" default:
//!
//! ```
//! use optio::Nullable;
//!
//! struct Owner;
//! impl Nullable for Owner {}
//!
//! assert!(!Owner.is_null());
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use crate::option::Opt;

/// A type that may hold an absent marker.
pub trait Nullable {
    /// Returns true if this value is the absent marker of its type.
    fn is_null(&self) -> bool {
        false
    }
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

macro_rules! never_null {
    ($($ty:ty),* $(,)?) => {
        $(impl Nullable for $ty {})*
    };
}

never_null!(
    (), bool, char, String, str, OsString, OsStr, PathBuf, Path, Duration,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

macro_rules! never_null_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(impl<$($name),+> Nullable for ($($name,)+) {})*
    };
}

never_null_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
);

impl<T: ?Sized> Nullable for &T {}
impl<T: ?Sized> Nullable for &mut T {}
impl<T: ?Sized> Nullable for Box<T> {}
impl<T: ?Sized> Nullable for Rc<T> {}
impl<T: ?Sized> Nullable for Arc<T> {}
impl<T, const N: usize> Nullable for [T; N] {}
impl<T> Nullable for [T] {}
impl<T> Nullable for Vec<T> {}
impl<T> Nullable for VecDeque<T> {}
impl<T> Nullable for LinkedList<T> {}
impl<T> Nullable for BinaryHeap<T> {}
impl<T, S> Nullable for HashSet<T, S> {}
impl<T> Nullable for BTreeSet<T> {}
impl<K, V, S> Nullable for HashMap<K, V, S> {}
impl<K, V> Nullable for BTreeMap<K, V> {}
impl<B: ?Sized + ToOwned> Nullable for Cow<'_, B> {}

// A container is a value in its own right; only the outer `Option` layer
// stands for a missing container.
impl<T> Nullable for Opt<T> {}
