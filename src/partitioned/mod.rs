mod layout;
mod segment;
mod set;

pub use layout::{Layout, Span};
pub use segment::Segment;
pub use set::PartitionedQueueSet;

/// Write side of a single bounded queue.
pub trait Producer<T> {
  /// Hands `val` back when the queue is full.
  fn enqueue(&mut self, val: T) -> Result<(), T>;
}

/// Read side of a single bounded queue.
pub trait Consumer<T> {
  fn dequeue(&mut self) -> Option<T>;
}
