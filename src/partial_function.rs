use std::fmt;
use std::marker::PhantomData;

use crate::error::{OptionError, Result};
use crate::option::Opt;

/// A function from `A` to `B` that is only meaningful on part of `A`.
///
/// Consumers check [`is_defined_at`](PartialFunction::is_defined_at) before
/// calling [`call`](PartialFunction::call). The guard must be pure: asking
/// twice about the same value gives the same answer.
pub trait PartialFunction<A, B> {
    /// Returns true if `value` lies inside the domain.
    fn is_defined_at(&self, value: &A) -> bool;

    /// The underlying mapping. Callers are expected to have checked the guard.
    fn call(&self, value: A) -> B;

    /// Checked application: fails with [`OptionError::NotDefinedAt`] outside
    /// the domain.
    fn apply(&self, value: A) -> Result<B> {
        if self.is_defined_at(&value) {
            Ok(self.call(value))
        } else {
            Err(OptionError::NotDefinedAt)
        }
    }

    fn lift(&self, value: A) -> Opt<B> {
        Opt::some(value).collect(self)
    }
}

impl<A, B, P: PartialFunction<A, B> + ?Sized> PartialFunction<A, B> for &P {
    fn is_defined_at(&self, value: &A) -> bool {
        (**self).is_defined_at(value)
    }

    fn call(&self, value: A) -> B {
        (**self).call(value)
    }
}

/// A [`PartialFunction`] built from a guard closure and a mapping closure.
pub struct Guarded<A, B, G, F> {
    guard: G,
    function: F,
    _marker: PhantomData<fn(A) -> B>,
}

impl<A, B, G, F> Guarded<A, B, G, F>
where
    G: Fn(&A) -> bool,
    F: Fn(A) -> B,
{
    pub fn new(guard: G, function: F) -> Self {
        Self {
            guard,
            function,
            _marker: PhantomData,
        }
    }
}

impl<A, B, G, F> PartialFunction<A, B> for Guarded<A, B, G, F>
where
    G: Fn(&A) -> bool,
    F: Fn(A) -> B,
{
    fn is_defined_at(&self, value: &A) -> bool {
        (self.guard)(value)
    }

    fn call(&self, value: A) -> B {
        (self.function)(value)
    }
}

impl<A, B, G: Clone, F: Clone> Clone for Guarded<A, B, G, F> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, B, G, F> fmt::Debug for Guarded<A, B, G, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guarded").finish_non_exhaustive()
    }
}

/// Pairs `guard` with `function`.
///
/// ```
/// use optio::{partial, Opt, PartialFunction};
///
/// let halve = partial(|n: &i32| n % 2 == 0, |n: i32| n / 2);
/// assert_eq!(Opt::of(8).collect(&halve), Opt::some(4));
/// assert_eq!(Opt::of(7).collect(&halve), Opt::none());
/// assert!(halve.apply(7).is_err());
/// ```
pub fn partial<A, B, G, F>(guard: G, function: F) -> Guarded<A, B, G, F>
where
    G: Fn(&A) -> bool,
    F: Fn(A) -> B,
{
    Guarded::new(guard, function)
}
