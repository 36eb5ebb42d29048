//! `DateRange`: a closed, contiguous span of days.

use crate::date::LiturgicalDate;

/// The days from `start` through `end`, both inclusive.
///
/// An empty range has `end < start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    /// First day.
    pub start: LiturgicalDate,
    /// Last day.
    pub end: LiturgicalDate,
}

impl DateRange {
    /// Build the closed range `[start, end]`.
    pub fn new(start: LiturgicalDate, end: LiturgicalDate) -> Self {
        Self { start, end }
    }

    /// Number of days in the range.
    pub fn len(&self) -> usize {
        (self.end - self.start + 1).max(0) as usize
    }

    /// Whether the range holds no day.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Whether `date` lies inside the range.
    pub fn contains(&self, date: LiturgicalDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// First day, if any.
    pub fn first(&self) -> Option<LiturgicalDate> {
        (!self.is_empty()).then_some(self.start)
    }

    /// Last day, if any.
    pub fn last(&self) -> Option<LiturgicalDate> {
        (!self.is_empty()).then_some(self.end)
    }

    /// Intersection with `other` (possibly empty).
    pub fn clamp_to(&self, other: &DateRange) -> DateRange {
        DateRange::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// Iterate over every day in order.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: self.start.serial(),
            end: self.end.serial(),
        }
    }

    /// Every Sunday of the range.
    pub fn sundays(&self) -> impl Iterator<Item = LiturgicalDate> {
        self.iter().filter(LiturgicalDate::is_sunday)
    }
}

impl IntoIterator for DateRange {
    type Item = LiturgicalDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = LiturgicalDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: i32,
    end: i32,
}

impl Iterator for DateRangeIter {
    type Item = LiturgicalDate;

    fn next(&mut self) -> Option<LiturgicalDate> {
        if self.next > self.end {
            return None;
        }
        let day = LiturgicalDate::from_serial(self.next).ok()?;
        self.next += 1;
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end - self.next + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRangeIter {}

impl LiturgicalDate {
    /// The closed range from this date through `end`.
    pub fn range_inclusive(self, end: LiturgicalDate) -> DateRange {
        DateRange::new(self, end)
    }
}
