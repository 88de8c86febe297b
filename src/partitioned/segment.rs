use core::mem::MaybeUninit;

use tracing::trace;

use super::layout::{advance, Span};
use super::{Consumer, Producer};

/// Mutable handle over one queue of a `PartitionedQueueSet`.
///
/// Borrows the queue's storage segment and its span, nothing else, so handles
/// for different queues can be held (and sent to scoped threads) together.
pub struct Segment<'a, T> {
  index: usize,
  base: usize,
  slots: &'a mut [MaybeUninit<T>],
  span: &'a mut Option<Span>,
}

impl<'a, T> Segment<'a, T> {
  pub(crate) fn new(
    index: usize,
    base: usize,
    slots: &'a mut [MaybeUninit<T>],
    span: &'a mut Option<Span>,
  ) -> Self {
    debug_assert!(!slots.is_empty());
    Self { index, base, slots, span }
  }

  /// Queue number this handle operates on.
  pub fn index(&self) -> usize {
    self.index
  }

  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  pub fn is_empty(&self) -> bool {
    self.span.is_none()
  }

  pub fn is_full(&self) -> bool {
    self.span.is_some_and(|span| span.is_full(self.capacity()))
  }

  pub fn len(&self) -> usize {
    self.span.map_or(0, |span| span.len(self.capacity()))
  }

  pub fn peek(&self) -> Option<&T> {
    let span = (*self.span)?;
    // SAFETY: every slot from front to rear holds an initialised value.
    Some(unsafe { self.slots[span.front - self.base].assume_init_ref() })
  }

  /// Drops every queued value and leaves the queue empty.
  pub fn clear(&mut self) {
    while self.dequeue().is_some() {}
  }

  fn next(&self, pos: usize) -> usize {
    advance(self.base, self.capacity(), pos)
  }
}

impl<T> Producer<T> for Segment<'_, T> {
  fn enqueue(&mut self, val: T) -> Result<(), T> {
    if self.is_full() {
      trace!(qn = self.index, "enqueue rejected, queue full");
      return Err(val);
    }

    let span = match *self.span {
      None => Span::single(self.base),
      Some(span) => Span { front: span.front, rear: self.next(span.rear) },
    };
    self.slots[span.rear - self.base].write(val);
    *self.span = Some(span);

    Ok(())
  }
}

impl<T> Consumer<T> for Segment<'_, T> {
  fn dequeue(&mut self) -> Option<T> {
    let Some(span) = *self.span else {
      trace!(qn = self.index, "dequeue rejected, queue empty");
      return None;
    };

    // SAFETY: `front` is initialised while the span exists, and it is
    // retired below so the value is never read twice.
    let val = unsafe { self.slots[span.front - self.base].assume_init_read() };

    *self.span = if span.front == span.rear {
      None
    } else {
      Some(Span { front: self.next(span.front), rear: span.rear })
    };

    Some(val)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn storage<const N: usize>() -> [MaybeUninit<u32>; N] {
    [(); N].map(|_| MaybeUninit::uninit())
  }

  #[test]
  fn wraps_within_its_slice() {
    let mut slots = storage::<3>();
    let mut span = None;
    let mut seg = Segment::new(1, 3, &mut slots, &mut span);

    assert!(seg.enqueue(1).is_ok());
    assert!(seg.enqueue(2).is_ok());
    assert_eq!(seg.dequeue(), Some(1));
    assert!(seg.enqueue(3).is_ok());
    assert!(seg.enqueue(4).is_ok());
    assert!(seg.is_full());
    assert_eq!(seg.enqueue(5), Err(5));
    assert_eq!(seg.len(), 3);
    assert_eq!(span, Some(Span { front: 4, rear: 3 }));
  }

  #[test]
  fn drains_to_empty() {
    let mut slots = storage::<2>();
    let mut span = None;
    let mut seg = Segment::new(0, 0, &mut slots, &mut span);

    assert_eq!(seg.dequeue(), None);
    seg.enqueue(7).unwrap();
    assert_eq!(seg.peek(), Some(&7));
    assert_eq!(seg.dequeue(), Some(7));
    assert!(seg.is_empty());
    assert_eq!(seg.peek(), None);
    assert_eq!(span, None);
  }
}
