//! Queue entries.

use ck_core::{Customer, CustomerId, SimTime};

/// A customer's place in a station queue.
///
/// The ticket is stamped with the station clock at admission; that stamp is
/// the `queued_at` instant the customer's wait time is measured from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub customer:  CustomerId,
    pub items:     u32,
    pub queued_at: SimTime,
}

impl Ticket {
    pub fn new(customer: &Customer, queued_at: SimTime) -> Self {
        Self {
            customer: customer.id,
            items: customer.number_of_items(),
            queued_at,
        }
    }
}
