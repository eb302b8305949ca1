//! Fixed-capacity ring buffer over [`Message`] slots.

use time::OffsetDateTime;
use tracing::warn;

use crate::message::Message;

/// Capacity used by the interactive shell and a reasonable default.
pub const DEFAULT_CAPACITY: usize = 10;

/// Ring buffer holding up to `N` timestamped byte messages.
///
/// `tail` indexes the oldest occupied slot; the next write lands at
/// `(tail + len) % N`. Occupied slots are exactly `(tail + i) % N` for
/// `i in 0..len`.
#[derive(Debug, Clone)]
pub struct MsgRing<const N: usize> {
    slots: [Option<Message>; N],
    tail: usize,
    len: usize,
}

impl<const N: usize> MsgRing<N> {
    /// Create an empty ring.
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(N > 0, "capacity must be > 0") };

        Self {
            slots: [const { None }; N],
            tail: 0,
            len: 0,
        }
    }

    /// Store a new message at the head, created at `now`.
    ///
    /// Never fails. If the ring was already full, the oldest message is
    /// overwritten and returned; `Some` is the overflow warning for the
    /// caller to report.
    pub fn produce(&mut self, payload: u8, now: OffsetDateTime) -> Option<Message> {
        let head = (self.tail + self.len) % N;

        let evicted = if self.len == N {
            // Full: head and tail coincide; drop the oldest.
            let oldest = self.slots[head].take();
            self.tail = (self.tail + 1) % N;
            oldest
        } else {
            self.len += 1;
            None
        };

        self.slots[head] = Some(Message::new(payload, now));

        if let Some(oldest) = &evicted {
            warn!(payload = oldest.payload(), "ring full, overwrote oldest message");
        }
        evicted
    }

    /// Remove and return the oldest message, or `None` when empty.
    pub fn consume(&mut self) -> Option<Message> {
        if self.len == 0 {
            return None;
        }
        let msg = self.slots[self.tail].take();
        self.tail = (self.tail + 1) % N;
        self.len -= 1;
        msg
    }

    /// Peek at the oldest message without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Message> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.tail].as_ref()
    }

    /// Iterate oldest to newest, yielding `(slot_index, message)` pairs.
    ///
    /// `slot_index` is the absolute position within the backing storage,
    /// the "offset" column of a buffer listing. Read-only; cursors are
    /// untouched and each call restarts from the current state.
    #[inline]
    pub fn iter(&self) -> Iter<'_, N> {
        Iter { ring: self, pos: 0 }
    }

    /// Number of occupied slots.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if no slot is occupied.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if every slot is occupied.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Ring capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Drop all messages and reset the cursors.
    pub fn clear(&mut self) {
        self.slots = [const { None }; N];
        self.tail = 0;
        self.len = 0;
    }
}

impl<const N: usize> Default for MsgRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a ring's occupied slots, oldest to newest.
pub struct Iter<'a, const N: usize> {
    ring: &'a MsgRing<N>,
    pos: usize,
}

impl<'a, const N: usize> Iterator for Iter<'a, N> {
    type Item = (usize, &'a Message);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.ring.len {
            return None;
        }
        let idx = (self.ring.tail + self.pos) % N;
        self.pos += 1;
        self.ring.slots[idx].as_ref().map(|msg| (idx, msg))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Iter<'_, N> {}
