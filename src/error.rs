use thiserror::Error;

/// Errors raised by the partitioned queue set.
///
/// A full queue on enqueue or an empty queue on dequeue is not an error;
/// those are reported through `bool` / `Option` return values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
  #[error("queue index {qn} out of range for {queues} queues")]
  IndexOutOfRange { qn: usize, queues: usize },

  #[error("layout needs at least one queue")]
  NoQueues,

  #[error("{slots} slots cannot host {queues} queues")]
  TooFewSlots { slots: usize, queues: usize },
}

pub type Result<T> = std::result::Result<T, QueueError>;
