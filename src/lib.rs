//! Bounded priority queues keeping the N best elements of a stream

pub mod base;
pub mod compare;
pub mod heap;
pub mod search;

pub use compare::{ByKey, Compare, FnCompare, NaturalOrder, ReverseOrder};
pub use heap::BoundedTopKHeap;
