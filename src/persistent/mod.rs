//! Persistent (immutable) data structures.
//!
//! - [`PersistentStack`]: persistent last-in first-out stack, the container
//!   behind [`StackW`](crate::witness::StackW)
//!
//! # Structural Sharing
//!
//! Pushing onto a stack creates a new version that shares every existing
//! node with the original, which stays valid and unchanged.
//!
//! # Examples
//!
//! ```rust
//! use lambars_trans::persistent::PersistentStack;
//!
//! let stack: PersistentStack<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(stack.peek(), Some(&1));
//!
//! let pushed = stack.push(0);
//! assert_eq!(stack.len(), 3);
//! assert_eq!(pushed.len(), 4);
//! ```

mod stack;

pub use stack::{PersistentStack, PersistentStackIntoIterator, PersistentStackIterator};
