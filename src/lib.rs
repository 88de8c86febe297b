//! Fixed-partition multi-queue.
//!
//! One contiguous buffer of `n` slots is cut into `k` equal segments, each
//! running an independent circular FIFO. Nothing is reallocated after
//! construction and no queue ever borrows space from another.
//!
//! ```
//! use kqueues::PartitionedQueueSet;
//!
//! let mut queues = PartitionedQueueSet::new(10, 3)?;
//! assert!(queues.enqueue(10, 0)?);
//! assert!(queues.enqueue(20, 1)?);
//! assert_eq!(queues.dequeue(0)?, Some(10));
//! assert_eq!(queues.dequeue(0)?, None);
//! # Ok::<(), kqueues::QueueError>(())
//! ```

pub mod error;
pub mod partitioned;

pub use error::{QueueError, Result};
pub use partitioned::{Consumer, Layout, PartitionedQueueSet, Producer, Segment, Span};
