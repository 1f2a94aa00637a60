//! Linear checkout-time model.

/// How long a checkout takes as a function of basket size.
///
/// ```text
/// service_time(0) = 0
/// service_time(n) = fixed_secs + secs_per_item * n
/// ```
///
/// A customer without items is a free pass: they never occupy the station.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ServiceModel {
    /// Per-customer overhead (greeting, payment, bagging).  Default: 20 s.
    pub fixed_secs:    u64,
    /// Scanning time per item.  Default: 2 s.
    pub secs_per_item: u64,
}

impl ServiceModel {
    pub const fn new(fixed_secs: u64, secs_per_item: u64) -> Self {
        Self { fixed_secs, secs_per_item }
    }

    #[inline]
    pub fn service_time(&self, items: u32) -> u64 {
        if items == 0 {
            return 0;
        }
        self.fixed_secs + self.secs_per_item * items as u64
    }
}

impl Default for ServiceModel {
    fn default() -> Self {
        Self::new(20, 2)
    }
}
