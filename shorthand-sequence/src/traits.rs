use crate::core::Sequence;
use crate::error;

/// The core sequence interface: a sequence must implement this to function.
///
/// If you do, [`SequenceQuery`] provides the whole query API on top of it.
pub trait SequenceCore<'a, T, I>
where
    T: Clone + 'a,
    I: Iterator<Item = &'a T>,
{
    /// Check whether the sequence is empty
    fn is_empty(&self) -> bool;

    /// The number of elements in the sequence
    fn len(&self) -> usize;

    /// Get a reference to the element at an index, if it exists
    fn get(&self, index: usize) -> Option<&T>;

    /// Get the elements of the sequence as an iterator, in order
    fn iter(&'a self) -> I;

    /// Get the single element of the sequence, if it contains exactly one
    fn one(self) -> error::Result<T>;

    /// Get an optional element from the sequence, if it contains at most one
    fn option(self) -> error::Result<Option<T>>;
}

/// Functional queries over a sequence.
///
/// Every operation is a single in-order pass over the input. The input is
/// never mutated; `filter`, `reject` and `map` build their result into
/// freshly allocated storage that never aliases the input, even when every
/// element is kept.
///
/// The `try_` forms take callables that may fail. The first error aborts
/// the traversal immediately and is returned as-is; no partial result is
/// produced and no elements past the failing one are visited.
pub trait SequenceQuery<'a, T, I>: SequenceCore<'a, T, I>
where
    T: Clone + 'a,
    I: Iterator<Item = &'a T> + 'a,
{
    /// A new sequence with only the elements passing the predicate.
    ///
    /// The predicate is invoked exactly once per element, in order; the
    /// result preserves relative order and may be empty.
    fn filter<P>(&'a self, mut predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut kept = Vec::new();
        for element in self.iter() {
            if predicate(element) {
                kept.push(element.clone());
            }
        }
        kept.into()
    }

    /// A new sequence with the elements passing the predicate removed.
    ///
    /// The logical complement of [`filter`](SequenceQuery::filter), with
    /// identical traversal order and call count.
    fn reject<P>(&'a self, mut predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.filter(move |element| !predicate(element))
    }

    /// A new sequence where the element at position `i` is
    /// `transform(&self[i])`.
    ///
    /// The result length always equals the input length; a transform that
    /// wants to signal "no value" is a caller-domain concern, not this
    /// crate's.
    fn map<U, F>(&'a self, mut transform: F) -> Sequence<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        let mut result = Vec::with_capacity(self.len());
        for element in self.iter() {
            result.push(transform(element));
        }
        result.into()
    }

    /// Left fold of the sequence into an accumulator.
    ///
    /// Over an empty sequence this returns `initial` unchanged, without
    /// invoking the reducer. The accumulator type is independent of the
    /// element type.
    fn reduce<A, F>(&'a self, initial: A, mut reducer: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        let mut accumulator = initial;
        for element in self.iter() {
            accumulator = reducer(accumulator, element);
        }
        accumulator
    }

    /// Whether every element satisfies the predicate.
    ///
    /// Short-circuits at the first failing element; later elements are not
    /// visited. Vacuously true on an empty sequence.
    fn all<P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        for element in self.iter() {
            if !predicate(element) {
                return false;
            }
        }
        true
    }

    /// Whether at least one element satisfies the predicate.
    ///
    /// Short-circuits at the first satisfying element. False on an empty
    /// sequence.
    fn any<P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        for element in self.iter() {
            if predicate(element) {
                return true;
            }
        }
        false
    }

    /// Whether no element satisfies the predicate.
    ///
    /// The complement of [`any`](SequenceQuery::any), but first-class: it
    /// halts (returning false) at the first satisfying element rather than
    /// invoking the predicate on elements past the match. True on an empty
    /// sequence.
    fn none<P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        for element in self.iter() {
            if predicate(element) {
                return false;
            }
        }
        true
    }

    /// [`filter`](SequenceQuery::filter) with a fallible predicate.
    fn try_filter<P, E>(&'a self, mut predicate: P) -> Result<Sequence<T>, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        let mut kept = Vec::new();
        for element in self.iter() {
            if predicate(element)? {
                kept.push(element.clone());
            }
        }
        Ok(kept.into())
    }

    /// [`reject`](SequenceQuery::reject) with a fallible predicate.
    fn try_reject<P, E>(&'a self, mut predicate: P) -> Result<Sequence<T>, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        self.try_filter(move |element| Ok(!predicate(element)?))
    }

    /// [`map`](SequenceQuery::map) with a fallible transform.
    fn try_map<U, F, E>(&'a self, mut transform: F) -> Result<Sequence<U>, E>
    where
        U: Clone,
        F: FnMut(&T) -> Result<U, E>,
    {
        let mut result = Vec::with_capacity(self.len());
        for element in self.iter() {
            result.push(transform(element)?);
        }
        Ok(result.into())
    }

    /// [`reduce`](SequenceQuery::reduce) with a fallible reducer.
    fn try_reduce<A, F, E>(&'a self, initial: A, mut reducer: F) -> Result<A, E>
    where
        F: FnMut(A, &T) -> Result<A, E>,
    {
        let mut accumulator = initial;
        for element in self.iter() {
            accumulator = reducer(accumulator, element)?;
        }
        Ok(accumulator)
    }

    /// [`all`](SequenceQuery::all) with a fallible predicate.
    ///
    /// An error raised before the deciding element propagates; a deciding
    /// element still ends the traversal, so the predicate is never invoked
    /// past it.
    fn try_all<P, E>(&'a self, mut predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        for element in self.iter() {
            if !predicate(element)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// [`any`](SequenceQuery::any) with a fallible predicate.
    fn try_any<P, E>(&'a self, mut predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        for element in self.iter() {
            if predicate(element)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// [`none`](SequenceQuery::none) with a fallible predicate.
    fn try_none<P, E>(&'a self, mut predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        for element in self.iter() {
            if predicate(element)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
