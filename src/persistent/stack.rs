//! Persistent (immutable) stack.
//!
//! [`PersistentStack`] is a cons-list read from the top: `push` is O(1) and
//! shares every existing node with the original stack, so old versions stay
//! valid after an update.
//!
//! ```text
//! base:          2 -> 1 -> nil
//! base.push(3):  3 -> [2 -> 1 -> nil]   // shares [2, 1] with base
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_trans::persistent::PersistentStack;
//!
//! let base = PersistentStack::new().push(1).push(2);
//! let extended = base.push(3);
//!
//! assert_eq!(base.peek(), Some(&2));
//! assert_eq!(extended.peek(), Some(&3));
//! assert_eq!(base.len(), 2);
//! assert_eq!(extended.len(), 3);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

struct Node<T> {
    element: T,
    below: Option<Rc<Self>>,
}

/// Releases a chain of nodes iteratively, stopping at the first node still
/// shared with another stack.
fn release<T>(mut current: Option<Rc<Node<T>>>) {
    while let Some(node) = current {
        current = match Rc::try_unwrap(node) {
            Ok(mut owned) => owned.below.take(),
            Err(_) => None,
        };
    }
}

/// A persistent last-in first-out stack with structural sharing.
///
/// Iteration, folding and equality all read the stack from the top down.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `push`    | O(1)       |
/// | `peek`    | O(1)       |
/// | `pop`     | O(1)       |
/// | `len`     | O(1)       |
/// | `append`  | O(n) in the upper stack |
#[derive(Clone)]
pub struct PersistentStack<T> {
    top: Option<Rc<Node<T>>>,
    length: usize,
}

impl<T> PersistentStack<T> {
    /// Creates an empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            top: None,
            length: 0,
        }
    }

    /// Creates a stack holding a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().push(element)
    }

    /// Returns a new stack with `element` on top.
    #[inline]
    #[must_use]
    pub fn push(&self, element: T) -> Self {
        Self {
            top: Some(Rc::new(Node {
                element,
                below: self.top.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns the top element, if any.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.element)
    }

    /// Splits off the top element, returning it with the remaining stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_trans::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::new().push(1).push(2);
    /// let (top, rest) = stack.pop().unwrap();
    /// assert_eq!(*top, 2);
    /// assert_eq!(rest.peek(), Some(&1));
    /// ```
    pub fn pop(&self) -> Option<(&T, Self)> {
        self.top.as_ref().map(|node| {
            (
                &node.element,
                Self {
                    top: node.below.clone(),
                    length: self.length - 1,
                },
            )
        })
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Iterates over the elements from the top down.
    #[inline]
    pub fn iter(&self) -> PersistentStackIterator<'_, T> {
        PersistentStackIterator {
            current: self.top.as_deref(),
            remaining: self.length,
        }
    }
}

impl<T: Clone> PersistentStack<T> {
    /// Places every element of `self` on top of `below`, keeping their order.
    ///
    /// Only the upper stack is copied; `below` is shared.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_trans::persistent::PersistentStack;
    ///
    /// let upper: PersistentStack<i32> = [1, 2].into_iter().collect();
    /// let lower: PersistentStack<i32> = [3, 4].into_iter().collect();
    /// let joined = upper.append(lower);
    /// assert_eq!(joined.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn append(&self, below: Self) -> Self {
        let upper: Vec<&T> = self.iter().collect();
        upper
            .into_iter()
            .rev()
            .fold(below, |stack, element| stack.push(element.clone()))
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A top-down iterator over references to the elements of a [`PersistentStack`].
pub struct PersistentStackIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentStackIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.below.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentStackIterator<'_, T> {}

/// A top-down owning iterator over the elements of a [`PersistentStack`].
///
/// Nodes shared with other stacks are cloned; uniquely owned nodes are moved.
pub struct PersistentStackIntoIterator<T> {
    current: Option<Rc<Node<T>>>,
    remaining: usize,
}

impl<T: Clone> Iterator for PersistentStackIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.remaining -= 1;
        match Rc::try_unwrap(node) {
            Ok(owned) => {
                self.current = owned.below;
                Some(owned.element)
            }
            Err(shared) => {
                self.current = shared.below.clone();
                Some(shared.element.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentStackIntoIterator<T> {}

impl<T> Drop for PersistentStackIntoIterator<T> {
    fn drop(&mut self) {
        release(self.current.take());
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Drop for PersistentStack<T> {
    fn drop(&mut self) {
        release(self.top.take());
    }
}

impl<T> Default for PersistentStack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a stack whose top is the first element yielded by the iterator.
impl<T> FromIterator<T> for PersistentStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(Self::new(), |stack, element| stack.push(element))
    }
}

impl<T: Clone> IntoIterator for PersistentStack<T> {
    type Item = T;
    type IntoIter = PersistentStackIntoIterator<T>;

    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        PersistentStackIntoIterator {
            current: self.top.take(),
            remaining: self.length,
        }
    }
}

impl<'a, T> IntoIterator for &'a PersistentStack<T> {
    type Item = &'a T;
    type IntoIter = PersistentStackIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentStack<T> {}

impl<T: Hash> Hash for PersistentStack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentStack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentStackVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentStackVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = PersistentStack<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence, top of the stack first")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = sequence.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = sequence.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentStack<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentStackVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn stack_of(elements: &[i32]) -> PersistentStack<i32> {
        elements.iter().copied().collect()
    }

    #[rstest]
    fn push_shares_structure_with_original() {
        let base = stack_of(&[2, 1]);
        let extended = base.push(3);

        assert_eq!(base.len(), 2);
        assert_eq!(extended.len(), 3);
        assert_eq!(base.peek(), Some(&2));
        assert_eq!(extended.peek(), Some(&3));
    }

    #[rstest]
    fn from_iter_puts_first_element_on_top() {
        let stack = stack_of(&[1, 2, 3]);
        assert_eq!(stack.peek(), Some(&1));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn pop_on_empty_returns_none() {
        let stack: PersistentStack<i32> = PersistentStack::new();
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
    }

    #[rstest]
    #[case(&[], &[], &[])]
    #[case(&[1], &[], &[1])]
    #[case(&[], &[2], &[2])]
    #[case(&[1, 2], &[3, 4], &[1, 2, 3, 4])]
    fn append_keeps_upper_stack_on_top(
        #[case] upper: &[i32],
        #[case] lower: &[i32],
        #[case] expected: &[i32],
    ) {
        let joined = stack_of(upper).append(stack_of(lower));
        assert_eq!(joined, stack_of(expected));
        assert_eq!(joined.len(), expected.len());
    }

    #[rstest]
    fn into_iter_clones_shared_nodes_and_keeps_original_intact() {
        let base = stack_of(&[1, 2, 3]);
        let shared = base.clone();
        let drained: Vec<i32> = shared.into_iter().collect();

        assert_eq!(drained, vec![1, 2, 3]);
        assert_eq!(base.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn into_iter_reports_exact_length() {
        let iterator = stack_of(&[5, 6]).into_iter();
        assert_eq!(iterator.len(), 2);
    }

    #[rstest]
    fn dropping_a_long_stack_does_not_recurse() {
        let stack: PersistentStack<i32> = (0..1_000_000).collect();
        assert_eq!(stack.len(), 1_000_000);
        drop(stack);
    }

    #[rstest]
    fn dropping_one_version_keeps_shared_nodes_alive() {
        let base: PersistentStack<i32> = (0..100_000).collect();
        let extended = base.push(-1);
        drop(base);
        assert_eq!(extended.len(), 100_001);
        assert_eq!(extended.iter().last(), Some(&99_999));
        drop(extended);
    }

    #[rstest]
    fn dropping_a_partly_drained_iterator_does_not_recurse() {
        let mut iterator = (0..1_000_000).collect::<PersistentStack<i32>>().into_iter();
        assert_eq!(iterator.next(), Some(0));
        drop(iterator);
    }

    #[rstest]
    fn debug_renders_top_first() {
        assert_eq!(format!("{:?}", stack_of(&[1, 2])), "[1, 2]");
    }
}
