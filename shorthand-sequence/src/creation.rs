use crate::core::{BoxedIter, Sequence};
use crate::traits::SequenceCore;
use crate::variant::{Empty, Many};

impl<T: Clone> Sequence<T> {
    /// Build a sequence from a vector, collapsing to the smallest variant.
    pub fn new(elements: Vec<T>) -> Self {
        match elements.len() {
            0 => Self::Empty(Empty::new()),
            1 => Self::One(elements.into_iter().next().unwrap().into()),
            _ => Self::Many(Many::new(elements)),
        }
    }

    /// Construct an empty sequence
    pub fn empty() -> Self {
        Self::Empty(Empty::new())
    }

    /// Construct a sequence holding a single element
    pub fn single(element: T) -> Self {
        Self::One(element.into())
    }

    /// Copy the elements out into a vector, in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Concatenate two sequences producing a new sequence.
    pub fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Self::Empty(_), b) => b,
            (a, Self::Empty(_)) => a,
            (Self::One(a), Self::One(b)) => {
                Self::Many(Many::new(vec![a.into_element(), b.into_element()]))
            }
            (Self::One(a), Self::Many(b)) => {
                let mut elements = Vec::with_capacity(b.len() + 1);
                elements.push(a.into_element());
                elements.extend(b.iter().cloned());
                Self::Many(Many::new(elements))
            }
            (Self::Many(a), Self::One(b)) => {
                let mut elements = Vec::with_capacity(a.len() + 1);
                elements.extend(a.iter().cloned());
                elements.push(b.into_element());
                Self::Many(Many::new(elements))
            }
            (Self::Many(a), Self::Many(b)) => {
                let mut elements = Vec::with_capacity(a.len() + b.len());
                elements.extend(a.iter().cloned());
                elements.extend(b.iter().cloned());
                Self::Many(Many::new(elements))
            }
        }
    }
}

impl<T: Clone> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T: Clone> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: Clone + 'a> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = BoxedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
