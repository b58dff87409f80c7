//! Clock port - current time for reading timestamps and date checks.

use chrono::NaiveDate;

use crate::domain::foundation::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Today's UTC calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
