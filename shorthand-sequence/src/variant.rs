use std::marker::PhantomData;
use std::sync::Arc;

use crate::core::Sequence;
use crate::error;
use crate::traits::{SequenceCore, SequenceQuery};

/// The empty sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Empty<T> {
    marker: PhantomData<T>,
}

impl<T> Empty<T> {
    pub(crate) fn new() -> Self {
        Empty {
            marker: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Clone + 'a> SequenceCore<'a, T, std::iter::Empty<&'a T>> for Empty<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        true
    }

    #[inline]
    fn len(&self) -> usize {
        0
    }

    #[inline]
    fn get(&self, _index: usize) -> Option<&T> {
        None
    }

    #[inline]
    fn iter(&'a self) -> std::iter::Empty<&'a T> {
        std::iter::empty()
    }

    #[inline]
    fn one(self) -> error::Result<T> {
        Err(error::Error::Empty)
    }

    #[inline]
    fn option(self) -> error::Result<Option<T>> {
        Ok(None)
    }
}

/// A sequence holding exactly one element, stored inline.
#[derive(Debug, Clone, PartialEq)]
pub struct One<T> {
    element: T,
}

impl<T> One<T> {
    pub(crate) fn into_element(self) -> T {
        self.element
    }
}

impl<T> From<T> for One<T> {
    fn from(element: T) -> Self {
        One { element }
    }
}

impl<'a, T: Clone + 'a> SequenceCore<'a, T, std::iter::Once<&'a T>> for One<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn len(&self) -> usize {
        1
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        if index == 0 {
            Some(&self.element)
        } else {
            None
        }
    }

    #[inline]
    fn iter(&'a self) -> std::iter::Once<&'a T> {
        std::iter::once(&self.element)
    }

    #[inline]
    fn one(self) -> error::Result<T> {
        Ok(self.element)
    }

    #[inline]
    fn option(self) -> error::Result<Option<T>> {
        Ok(Some(self.element))
    }
}

/// A sequence holding two or more elements.
///
/// Storage is shared, so cloning the sequence is cheap; query results are
/// always built into fresh storage and never alias it.
#[derive(Debug, Clone, PartialEq)]
pub struct Many<T> {
    elements: Arc<[T]>,
}

impl<T> Many<T> {
    // crate-private: callers must go through Sequence::new, which keeps
    // the two-or-more invariant
    pub(crate) fn new(elements: Vec<T>) -> Self {
        Many {
            elements: elements.into(),
        }
    }
}

impl<'a, T: Clone + 'a> SequenceCore<'a, T, std::slice::Iter<'a, T>> for Many<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    #[inline]
    fn iter(&'a self) -> std::slice::Iter<'a, T> {
        self.elements.iter()
    }

    #[inline]
    fn one(self) -> error::Result<T> {
        Err(error::Error::Multiple(self.elements.len()))
    }

    #[inline]
    fn option(self) -> error::Result<Option<T>> {
        Err(error::Error::Multiple(self.elements.len()))
    }
}

// We implement the query interface here per variant, instead of generically
// for everything implementing SequenceCore, because the empty variant can
// answer most queries without traversing anything.
impl<'a, T, I> SequenceQuery<'a, T, I> for Empty<T>
where
    T: Clone + 'a,
    I: Iterator<Item = &'a T> + 'a,
    Empty<T>: SequenceCore<'a, T, I>,
{
    fn filter<P>(&'a self, _predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool,
    {
        Sequence::empty()
    }

    fn reject<P>(&'a self, _predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool,
    {
        Sequence::empty()
    }

    fn map<U, F>(&'a self, _transform: F) -> Sequence<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        Sequence::empty()
    }

    fn reduce<A, F>(&'a self, initial: A, _reducer: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        initial
    }

    fn all<P>(&'a self, _predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        true
    }

    fn any<P>(&'a self, _predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        false
    }

    fn none<P>(&'a self, _predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        true
    }

    fn try_filter<P, E>(&'a self, _predicate: P) -> Result<Sequence<T>, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        Ok(Sequence::empty())
    }

    fn try_reject<P, E>(&'a self, _predicate: P) -> Result<Sequence<T>, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        Ok(Sequence::empty())
    }

    fn try_map<U, F, E>(&'a self, _transform: F) -> Result<Sequence<U>, E>
    where
        U: Clone,
        F: FnMut(&T) -> Result<U, E>,
    {
        Ok(Sequence::empty())
    }

    fn try_reduce<A, F, E>(&'a self, initial: A, _reducer: F) -> Result<A, E>
    where
        F: FnMut(A, &T) -> Result<A, E>,
    {
        Ok(initial)
    }

    fn try_all<P, E>(&'a self, _predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        Ok(true)
    }

    fn try_any<P, E>(&'a self, _predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        Ok(false)
    }

    fn try_none<P, E>(&'a self, _predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        Ok(true)
    }
}

impl<'a, T, I> SequenceQuery<'a, T, I> for One<T>
where
    T: Clone + 'a,
    I: Iterator<Item = &'a T> + 'a,
    One<T>: SequenceCore<'a, T, I>,
{
}

impl<'a, T, I> SequenceQuery<'a, T, I> for Many<T>
where
    T: Clone + 'a,
    I: Iterator<Item = &'a T> + 'a,
    Many<T>: SequenceCore<'a, T, I>,
{
}
