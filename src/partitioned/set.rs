use core::fmt;
use core::mem::MaybeUninit;

use tracing::debug;

use super::layout::{Layout, Span};
use super::segment::Segment;
use super::{Consumer, Producer};
use crate::error::Result;

/// `k` independent circular queues sharing one storage buffer of `n` slots.
///
/// Queue `qn` lives entirely inside segment `[qn * size, qn * size + size)`
/// where `size = n / k`, and holds at most `size` elements. Segments never
/// grow, shrink or lend space to each other. Every operation is O(1) and
/// every queue index is bounds-checked.
pub struct PartitionedQueueSet<T> {
  layout: Layout,
  storage: Box<[MaybeUninit<T>]>,
  spans: Box<[Option<Span>]>,
}

impl<T> PartitionedQueueSet<T> {
  /// Creates `queues` empty queues over `slots` cells.
  pub fn new(slots: usize, queues: usize) -> Result<Self> {
    Ok(Self::with_layout(Layout::new(slots, queues)?))
  }

  pub fn with_layout(layout: Layout) -> Self {
    debug!(
      slots = layout.slots(),
      queues = layout.queues(),
      segment_size = layout.segment_size(),
      wasted = layout.wasted(),
      "partitioned queue set created"
    );

    Self {
      layout,
      storage: (0..layout.slots()).map(|_| MaybeUninit::uninit()).collect(),
      spans: vec![None; layout.queues()].into_boxed_slice(),
    }
  }

  pub fn layout(&self) -> Layout {
    self.layout
  }

  /// Maximum number of elements any single queue can hold.
  pub fn capacity(&self) -> usize {
    self.layout.segment_size()
  }

  pub fn is_empty(&self, qn: usize) -> Result<bool> {
    Ok(self.span(qn)?.is_none())
  }

  pub fn is_full(&self, qn: usize) -> Result<bool> {
    let size = self.capacity();
    Ok(self.span(qn)?.is_some_and(|span| span.is_full(size)))
  }

  pub fn len(&self, qn: usize) -> Result<usize> {
    let size = self.capacity();
    Ok(self.span(qn)?.map_or(0, |span| span.len(size)))
  }

  /// Current front and rear of queue `qn`, `None` while it is empty.
  pub fn span(&self, qn: usize) -> Result<Option<Span>> {
    self.layout.check(qn)?;
    Ok(self.spans[qn])
  }

  /// Appends `value` to queue `qn`.
  ///
  /// Returns `Ok(false)` and drops `value` if the queue is full; use
  /// [`segment_mut`](Self::segment_mut) to get the value back instead.
  pub fn enqueue(&mut self, value: T, qn: usize) -> Result<bool> {
    Ok(self.segment_mut(qn)?.enqueue(value).is_ok())
  }

  /// Removes the oldest element of queue `qn`, `Ok(None)` if it is empty.
  pub fn dequeue(&mut self, qn: usize) -> Result<Option<T>> {
    Ok(self.segment_mut(qn)?.dequeue())
  }

  pub fn peek(&self, qn: usize) -> Result<Option<&T>> {
    let Some(span) = self.span(qn)? else {
      return Ok(None);
    };
    // SAFETY: the front of a live span is always initialised.
    Ok(Some(unsafe { self.storage[span.front].assume_init_ref() }))
  }

  pub fn clear(&mut self, qn: usize) -> Result<()> {
    self.segment_mut(qn)?.clear();
    Ok(())
  }

  /// Handle over queue `qn` alone.
  pub fn segment_mut(&mut self, qn: usize) -> Result<Segment<'_, T>> {
    self.layout.check(qn)?;
    let range = self.layout.segment(qn);
    let base = range.start;

    Ok(Segment::new(qn, base, &mut self.storage[range], &mut self.spans[qn]))
  }

  /// One disjoint handle per queue, ordered by queue number.
  pub fn split(&mut self) -> Vec<Segment<'_, T>> {
    let size = self.layout.segment_size();

    // `chunks_exact_mut` may yield extra chunks from the wasted tail; zipping
    // with the spans keeps only the first `k`.
    self.storage
      .chunks_exact_mut(size)
      .zip(self.spans.iter_mut())
      .enumerate()
      .map(|(qn, (slots, span))| Segment::new(qn, qn * size, slots, span))
      .collect()
  }
}

impl<T> Drop for PartitionedQueueSet<T> {
  fn drop(&mut self) {
    for mut segment in self.split() {
      segment.clear();
    }
  }
}

impl<T> fmt::Debug for PartitionedQueueSet<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let size = self.capacity();
    let lens: Vec<usize> = self
      .spans
      .iter()
      .map(|span| span.map_or(0, |span| span.len(size)))
      .collect();

    f.debug_struct("PartitionedQueueSet")
      .field("layout", &self.layout)
      .field("lens", &lens)
      .finish()
  }
}
