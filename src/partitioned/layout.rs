use core::ops::Range;

use crate::error::{QueueError, Result};

/// How `slots` storage cells are carved into `queues` equal segments.
///
/// Segment `qn` owns `[qn * size, qn * size + size)` with `size = slots / queues`.
/// When `slots` is not a multiple of `queues` the trailing `wasted()` cells
/// belong to no queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
  slots: usize,
  queues: usize,
}

impl Layout {
  pub fn new(slots: usize, queues: usize) -> Result<Self> {
    if queues == 0 {
      return Err(QueueError::NoQueues);
    }
    if slots < queues {
      return Err(QueueError::TooFewSlots { slots, queues });
    }
    Ok(Self { slots, queues })
  }

  pub const fn slots(&self) -> usize {
    self.slots
  }

  pub const fn queues(&self) -> usize {
    self.queues
  }

  /// Cells per segment, also the usable capacity of every queue.
  pub const fn segment_size(&self) -> usize {
    self.slots / self.queues
  }

  /// Trailing cells no queue can reach.
  pub const fn wasted(&self) -> usize {
    self.slots - self.segment_size() * self.queues
  }

  pub const fn base(&self, qn: usize) -> usize {
    qn * self.segment_size()
  }

  pub const fn segment(&self, qn: usize) -> Range<usize> {
    let base = self.base(qn);
    base..base + self.segment_size()
  }

  pub fn check(&self, qn: usize) -> Result<()> {
    if qn < self.queues {
      Ok(())
    } else {
      Err(QueueError::IndexOutOfRange { qn, queues: self.queues })
    }
  }
}

/// Front and rear of a non-empty queue, as absolute storage indices.
///
/// An empty queue has no span at all, so both ends are either present
/// together or absent together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
  pub front: usize,
  pub rear: usize,
}

impl Span {
  pub(crate) const fn single(at: usize) -> Self {
    Self { front: at, rear: at }
  }

  // Bases are multiples of `size`, so `% size` yields the segment-local
  // position of either end. A full queue therefore holds exactly `size` items.
  pub const fn is_full(&self, size: usize) -> bool {
    (self.rear + 1) % size == self.front % size
  }

  pub const fn len(&self, size: usize) -> usize {
    (self.rear + size - self.front) % size + 1
  }
}

/// Next position after `pos`, wrapping within the segment starting at `base`.
#[inline]
pub(crate) const fn advance(base: usize, size: usize, pos: usize) -> usize {
  base + (pos + 1 - base) % size
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_degenerate_layouts() {
    assert_eq!(Layout::new(10, 0), Err(QueueError::NoQueues));
    assert_eq!(
      Layout::new(2, 3),
      Err(QueueError::TooFewSlots { slots: 2, queues: 3 })
    );
    assert!(Layout::new(3, 3).is_ok());
  }

  #[test]
  fn uneven_split_wastes_the_tail() {
    let layout = Layout::new(10, 3).unwrap();
    assert_eq!(layout.segment_size(), 3);
    assert_eq!(layout.wasted(), 1);
    assert_eq!(layout.segment(0), 0..3);
    assert_eq!(layout.segment(1), 3..6);
    assert_eq!(layout.segment(2), 6..9);
  }

  #[test]
  fn check_bounds() {
    let layout = Layout::new(8, 4).unwrap();
    assert!(layout.check(3).is_ok());
    assert_eq!(
      layout.check(4),
      Err(QueueError::IndexOutOfRange { qn: 4, queues: 4 })
    );
  }

  #[test]
  fn advance_wraps_inside_segment() {
    assert_eq!(advance(3, 3, 3), 4);
    assert_eq!(advance(3, 3, 5), 3);
    assert_eq!(advance(0, 1, 0), 0);
  }

  #[test]
  fn span_len_and_fullness() {
    // segment [3, 6)
    assert_eq!(Span::single(3).len(3), 1);
    assert!(!Span::single(3).is_full(3));
    assert_eq!(Span { front: 4, rear: 3 }.len(3), 3);
    assert!(Span { front: 4, rear: 3 }.is_full(3));
    assert!(Span { front: 3, rear: 5 }.is_full(3));
    assert!(Span::single(7).is_full(1));
  }
}
