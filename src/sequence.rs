//! Lifting collections of [`Opt`] values into a single [`Opt`].
//!
//! All operations short-circuit: the first empty element makes the whole
//! result empty, and nothing after it is pulled from the input.

use tracing::trace;

use crate::option::Opt;

impl<T> Opt<Vec<T>> {
    /// Collects every held value, in input order, or returns `Opt::None` if
    /// any element is empty.
    pub fn sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Opt<T>>,
    {
        Self::traverse(values, |value| value)
    }

    /// Maps each input through `f` and sequences the results.
    pub fn traverse<A, I, F>(values: I, mut f: F) -> Self
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Opt<T>,
    {
        let values = values.into_iter();
        let mut collected = Vec::with_capacity(values.size_hint().0);
        for (index, value) in values.enumerate() {
            match f(value) {
                Opt::Some(value) => collected.push(value),
                Opt::None => {
                    trace!(index, "sequence short-circuited on empty element");
                    return Opt::None;
                }
            }
        }
        Opt::Some(collected)
    }
}

impl<T, V: FromIterator<T>> FromIterator<Opt<T>> for Opt<V> {
    fn from_iter<I: IntoIterator<Item = Opt<T>>>(iter: I) -> Self {
        let mut missing = None;
        let collected = iter
            .into_iter()
            .enumerate()
            .map_while(|(index, value)| match value {
                Opt::Some(value) => Some(value),
                Opt::None => {
                    missing = Some(index);
                    None
                }
            })
            .collect::<V>();

        match missing {
            Some(index) => {
                trace!(index, "collect short-circuited on empty element");
                Opt::None
            }
            None => Opt::Some(collected),
        }
    }
}
