// The wiring in this module is verbose: every trait method is dispatched to
// the variant by hand so the inner layers stay free of dynamic dispatch, and
// only the outermost iterator is boxed.

use crate::error;
use crate::traits::{SequenceCore, SequenceQuery};
use crate::variant::{Empty, Many, One};

/// The iterator type handed out by [`Sequence`] itself; each variant's
/// concrete iterator is boxed at this outer layer only.
pub type BoxedIter<'a, T> = Box<dyn Iterator<Item = &'a T> + 'a>;

/// An ordered, finite, immutable-input sequence of elements.
///
/// The representation collapses to the smallest variant that fits:
/// empty sequences and single elements carry no separate storage, and
/// anything longer is shared so cloning stays cheap. Queries never mutate
/// a sequence and never return a result aliasing its storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence<T> {
    Empty(Empty<T>),
    One(One<T>),
    Many(Many<T>),
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::Empty(Empty::new())
    }
}

impl<'a, T: Clone + 'a> SequenceCore<'a, T, BoxedIter<'a, T>> for Sequence<T> {
    fn is_empty(&self) -> bool {
        match self {
            Sequence::Empty(inner) => inner.is_empty(),
            Sequence::One(inner) => inner.is_empty(),
            Sequence::Many(inner) => inner.is_empty(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Sequence::Empty(inner) => inner.len(),
            Sequence::One(inner) => inner.len(),
            Sequence::Many(inner) => inner.len(),
        }
    }

    fn get(&self, index: usize) -> Option<&T> {
        match self {
            Sequence::Empty(inner) => inner.get(index),
            Sequence::One(inner) => inner.get(index),
            Sequence::Many(inner) => inner.get(index),
        }
    }

    fn iter(&'a self) -> BoxedIter<'a, T> {
        match self {
            Sequence::Empty(inner) => Box::new(inner.iter()),
            Sequence::One(inner) => Box::new(inner.iter()),
            Sequence::Many(inner) => Box::new(inner.iter()),
        }
    }

    fn one(self) -> error::Result<T> {
        match self {
            Sequence::Empty(inner) => inner.one(),
            Sequence::One(inner) => inner.one(),
            Sequence::Many(inner) => inner.one(),
        }
    }

    fn option(self) -> error::Result<Option<T>> {
        match self {
            Sequence::Empty(inner) => inner.option(),
            Sequence::One(inner) => inner.option(),
            Sequence::Many(inner) => inner.option(),
        }
    }
}

// The query passes are dispatched explicitly so each variant runs over its
// own concrete iterator, and the empty variant answers without any
// traversal at all.
impl<'a, T: Clone + 'a> SequenceQuery<'a, T, BoxedIter<'a, T>> for Sequence<T> {
    fn filter<P>(&'a self, predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Sequence::Empty(inner) => inner.filter(predicate),
            Sequence::One(inner) => inner.filter(predicate),
            Sequence::Many(inner) => inner.filter(predicate),
        }
    }

    fn reject<P>(&'a self, predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Sequence::Empty(inner) => inner.reject(predicate),
            Sequence::One(inner) => inner.reject(predicate),
            Sequence::Many(inner) => inner.reject(predicate),
        }
    }

    fn map<U, F>(&'a self, transform: F) -> Sequence<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        match self {
            Sequence::Empty(inner) => inner.map(transform),
            Sequence::One(inner) => inner.map(transform),
            Sequence::Many(inner) => inner.map(transform),
        }
    }

    fn reduce<A, F>(&'a self, initial: A, reducer: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        match self {
            Sequence::Empty(inner) => inner.reduce(initial, reducer),
            Sequence::One(inner) => inner.reduce(initial, reducer),
            Sequence::Many(inner) => inner.reduce(initial, reducer),
        }
    }

    fn all<P>(&'a self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Sequence::Empty(inner) => inner.all(predicate),
            Sequence::One(inner) => inner.all(predicate),
            Sequence::Many(inner) => inner.all(predicate),
        }
    }

    fn any<P>(&'a self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Sequence::Empty(inner) => inner.any(predicate),
            Sequence::One(inner) => inner.any(predicate),
            Sequence::Many(inner) => inner.any(predicate),
        }
    }

    fn none<P>(&'a self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Sequence::Empty(inner) => inner.none(predicate),
            Sequence::One(inner) => inner.none(predicate),
            Sequence::Many(inner) => inner.none(predicate),
        }
    }

    fn try_filter<P, E>(&'a self, predicate: P) -> Result<Sequence<T>, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        match self {
            Sequence::Empty(inner) => inner.try_filter(predicate),
            Sequence::One(inner) => inner.try_filter(predicate),
            Sequence::Many(inner) => inner.try_filter(predicate),
        }
    }

    fn try_reject<P, E>(&'a self, predicate: P) -> Result<Sequence<T>, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        match self {
            Sequence::Empty(inner) => inner.try_reject(predicate),
            Sequence::One(inner) => inner.try_reject(predicate),
            Sequence::Many(inner) => inner.try_reject(predicate),
        }
    }

    fn try_map<U, F, E>(&'a self, transform: F) -> Result<Sequence<U>, E>
    where
        U: Clone,
        F: FnMut(&T) -> Result<U, E>,
    {
        match self {
            Sequence::Empty(inner) => inner.try_map(transform),
            Sequence::One(inner) => inner.try_map(transform),
            Sequence::Many(inner) => inner.try_map(transform),
        }
    }

    fn try_reduce<A, F, E>(&'a self, initial: A, reducer: F) -> Result<A, E>
    where
        F: FnMut(A, &T) -> Result<A, E>,
    {
        match self {
            Sequence::Empty(inner) => inner.try_reduce(initial, reducer),
            Sequence::One(inner) => inner.try_reduce(initial, reducer),
            Sequence::Many(inner) => inner.try_reduce(initial, reducer),
        }
    }

    fn try_all<P, E>(&'a self, predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        match self {
            Sequence::Empty(inner) => inner.try_all(predicate),
            Sequence::One(inner) => inner.try_all(predicate),
            Sequence::Many(inner) => inner.try_all(predicate),
        }
    }

    fn try_any<P, E>(&'a self, predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        match self {
            Sequence::Empty(inner) => inner.try_any(predicate),
            Sequence::One(inner) => inner.try_any(predicate),
            Sequence::Many(inner) => inner.try_any(predicate),
        }
    }

    fn try_none<P, E>(&'a self, predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        match self {
            Sequence::Empty(inner) => inner.try_none(predicate),
            Sequence::One(inner) => inner.try_none(predicate),
            Sequence::Many(inner) => inner.try_none(predicate),
        }
    }
}
