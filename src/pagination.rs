pub const MOVIES_PER_PAGE: u64 = 10;

/// A 1-indexed page of a query result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Page {
    number: u64,
    size: u64,
}

impl Page {
    /// Returns `None` for page numbers below 1, which select nothing.
    pub fn new(number: i64, size: u64) -> Option<Self> {
        let number = u64::try_from(number).ok().filter(|n| *n >= 1)?;
        Some(Self { number, size })
    }

    pub fn offset(&self) -> u64 {
        // SQLite binds offsets as signed 64-bit integers.
        (self.number - 1).saturating_mul(self.size).min(i64::MAX as u64)
    }

    pub fn limit(&self) -> u64 {
        self.size
    }
}
