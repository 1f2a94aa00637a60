//! Express-lane discipline: short baskets overtake a trailing run of long ones.
//!
//! # Insertion rule
//!
//! A queued ticket is *long-basket* when it holds more than
//! `max_priority_items` items.  A new customer is appended at the tail when
//!
//! - the queue is empty, or
//! - the customer is long-basket themselves, or
//! - the tail ticket is not long-basket.
//!
//! Otherwise the customer is inserted directly in front of the first
//! long-basket ticket, scanning from the head.  This is a one-time jump: once
//! placed, a ticket keeps its relative position like any FIFO entry.
//!
//! Because short customers only ever land in front of long ones, a queue fed
//! exclusively through this rule always has the shape
//! `[short…, long…]`; the first long-basket ticket is therefore also the start
//! of the trailing long run.

use std::collections::VecDeque;

use crate::{Discipline, Ticket};

/// Threshold used by the stock configurations.
pub const DEFAULT_MAX_PRIORITY_ITEMS: u32 = 5;

/// A [`Discipline`] that lets customers with at most `max_priority_items`
/// items jump ahead of long baskets.
#[derive(Copy, Clone, Debug)]
pub struct Priority {
    pub max_priority_items: u32,
}

impl Priority {
    pub fn new(max_priority_items: u32) -> Self {
        Self { max_priority_items }
    }

    #[inline]
    fn is_long(&self, items: u32) -> bool {
        items > self.max_priority_items
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PRIORITY_ITEMS)
    }
}

impl Discipline for Priority {
    fn kind(&self) -> &'static str {
        "priority"
    }

    fn insertion_index(&self, queue: &VecDeque<Ticket>, items: u32) -> usize {
        let tail_is_long = queue.back().is_some_and(|t| self.is_long(t.items));
        if self.is_long(items) || !tail_is_long {
            return queue.len();
        }
        queue
            .iter()
            .position(|t| self.is_long(t.items))
            .unwrap_or(queue.len())
    }
}
