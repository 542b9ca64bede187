use chrono::NaiveDate;

/// An inclusive calendar date range.
///
/// The range is not validated: a start after the end is an empty range that
/// contains no date.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    pub fn start(&self) -> NaiveDate {
        self.0
    }

    pub fn end(&self) -> NaiveDate {
        self.1
    }

    /// True if `date` falls between start and end, both ends inclusive.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.0 <= *date && *date <= self.1
    }

    pub fn is_empty(&self) -> bool {
        self.0 > self.1
    }

    /// The tightest range covering every date yielded by `dates`, or `None`
    /// when the iterator is empty.
    pub fn spanning<I>(dates: I) -> Option<DateRange>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        dates.into_iter().fold(None, |acc, date| match acc {
            None => Some(DateRange(date, date)),
            Some(DateRange(start, end)) => Some(DateRange(start.min(date), end.max(date))),
        })
    }
}
