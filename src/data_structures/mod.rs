pub mod apq;

pub use apq::{AdaptablePriorityQueue, Handle};
