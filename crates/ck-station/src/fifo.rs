//! Strict arrival-order discipline.

use std::collections::VecDeque;

use crate::{Discipline, Ticket};

/// A [`Discipline`] that always appends at the tail.
///
/// The head of the queue is the oldest admitted customer still waiting.
#[derive(Copy, Clone, Debug, Default)]
pub struct Fifo;

impl Discipline for Fifo {
    fn kind(&self) -> &'static str {
        "fifo"
    }

    #[inline]
    fn insertion_index(&self, queue: &VecDeque<Ticket>, _items: u32) -> usize {
        queue.len()
    }
}
