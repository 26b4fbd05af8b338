use chrono::{NaiveDateTime, TimeDelta};

use crate::{AwdError, AwdResult};

/// Значение активности (число срабатываний акселерометра за эпоху)
pub type ActivityCount = i64;

/// Регулярный временной ряд: `timestamp(i) = start + i × period`.
///
/// Метки времени не хранятся, а вычисляются из начала и шага, поэтому ряд
/// всегда строго возрастающий и равномерный.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeries {
    start: NaiveDateTime,
    period: TimeDelta,
    values: Vec<ActivityCount>,
}

impl TimeSeries {
    /// Создаёт ряд. Шаг должен быть положительным целым числом миллисекунд,
    /// а метка последней выборки должна помещаться в диапазон дат.
    pub fn new(
        start: NaiveDateTime,
        period: TimeDelta,
        values: Vec<ActivityCount>,
    ) -> AwdResult<Self> {
        let step = period.num_milliseconds();
        if step <= 0 {
            return Err(AwdError::configuration(format!(
                "sampling period must be positive, got {period}"
            )));
        }
        if TimeDelta::milliseconds(step) != period {
            return Err(AwdError::configuration(format!(
                "sampling period must be a whole number of milliseconds, got {period}"
            )));
        }

        let last = values.len().saturating_sub(1) as i64;
        let end = step
            .checked_mul(last)
            .and_then(TimeDelta::try_milliseconds)
            .and_then(|span| start.checked_add_signed(span));
        if end.is_none() {
            return Err(AwdError::configuration(format!(
                "{} samples every {period} from {start} run past the supported date range",
                values.len()
            )));
        }

        Ok(Self {
            start,
            period,
            values,
        })
    }

    /// Пустой ряд с началом в `start`.
    pub fn empty(
        start: NaiveDateTime,
        period: TimeDelta,
    ) -> AwdResult<Self> {
        Self::new(start, period, Vec::new())
    }

    /// Начало оси времени (метка первой выборки, если она есть).
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn period(&self) -> TimeDelta {
        self.period
    }

    pub fn values(&self) -> &[ActivityCount] {
        &self.values
    }

    pub fn into_values(self) -> Vec<ActivityCount> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Метка времени `i`-й выборки.
    pub fn timestamp(
        &self,
        i: usize,
    ) -> Option<NaiveDateTime> {
        (i < self.values.len()).then(|| self.offset(i))
    }

    pub fn get(
        &self,
        i: usize,
    ) -> Option<(NaiveDateTime, ActivityCount)> {
        self.values.get(i).map(|v| (self.offset(i), *v))
    }

    pub fn first(&self) -> Option<(NaiveDateTime, ActivityCount)> {
        self.get(0)
    }

    pub fn last(&self) -> Option<(NaiveDateTime, ActivityCount)> {
        self.values.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Метка последней выборки.
    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.last().map(|(ts, _)| ts)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDateTime, ActivityCount)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (self.offset(i), *v))
    }

    pub fn timestamps(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        (0..self.values.len()).map(|i| self.offset(i))
    }

    /// Срез по меткам времени, обе границы включительно.
    ///
    /// Границы, выходящие за ряд, обрезаются по первой и последней выборке.
    /// Результат пустой, если окно не пересекается с рядом или `to < from`.
    pub fn slice(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> TimeSeries {
        let empty = TimeSeries {
            start: from,
            period: self.period,
            values: Vec::new(),
        };

        let Some(last) = self.end_time() else {
            return empty;
        };
        if from > last || to < self.start || to < from {
            return empty;
        }

        let step = self.period.num_milliseconds();
        let from_ms = (from - self.start).num_milliseconds();
        let to_ms = (to - self.start).num_milliseconds();

        // Первая выборка не раньше `from`, последняя не позже `to`
        let lo = ceil_div(from_ms, step).max(0) as usize;
        let hi = (to_ms.div_euclid(step) as usize).min(self.values.len() - 1);

        if lo > hi {
            return empty;
        }

        TimeSeries {
            start: self.offset(lo),
            period: self.period,
            values: self.values[lo..=hi].to_vec(),
        }
    }

    fn offset(
        &self,
        i: usize,
    ) -> NaiveDateTime {
        self.start + TimeDelta::milliseconds(self.period.num_milliseconds() * i as i64)
    }
}

fn ceil_div(
    a: i64,
    b: i64,
) -> i64 {
    a.div_euclid(b) + i64::from(a.rem_euclid(b) != 0)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn t(
        h: u32,
        m: u32,
        s: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn series() -> TimeSeries {
        TimeSeries::new(t(8, 0, 0), TimeDelta::seconds(15), vec![10, 20, 5, 0]).unwrap()
    }

    #[test]
    fn test_regular_timestamps() {
        let s = series();
        let ts: Vec<_> = s.timestamps().collect();
        assert_eq!(ts, vec![t(8, 0, 0), t(8, 0, 15), t(8, 0, 30), t(8, 0, 45)]);
        assert_eq!(s.end_time(), Some(t(8, 0, 45)));
        assert_eq!(s.last(), Some((t(8, 0, 45), 0)));
        assert_eq!(s.timestamp(4), None);
    }

    #[test]
    fn test_non_positive_period_rejected() {
        assert!(TimeSeries::new(t(8, 0, 0), TimeDelta::zero(), vec![1]).is_err());
        assert!(TimeSeries::new(t(8, 0, 0), TimeDelta::seconds(-15), vec![1]).is_err());
    }

    #[test]
    fn test_slice_inclusive_bounds() {
        let s = series().slice(t(8, 0, 15), t(8, 0, 30));
        assert_eq!(s.values(), &[20, 5]);
        assert_eq!(s.start(), t(8, 0, 15));
    }

    #[test]
    fn test_slice_between_samples() {
        // 08:00:10 → первая выборка 08:00:15; 08:00:40 → последняя 08:00:30
        let s = series().slice(t(8, 0, 10), t(8, 0, 40));
        assert_eq!(s.values(), &[20, 5]);
        assert_eq!(s.first(), Some((t(8, 0, 15), 20)));
    }

    #[test]
    fn test_slice_end_clamped() {
        let s = series().slice(t(8, 0, 30), t(9, 0, 0));
        assert_eq!(s.values(), &[5, 0]);
    }

    #[test]
    fn test_slice_start_before_series_is_clamped() {
        let s = series().slice(t(7, 59, 0), t(8, 4, 0));
        assert_eq!(s.values(), &[10, 20, 5, 0]);
        assert_eq!(s.start(), t(8, 0, 0));

        let s = series().slice(t(7, 59, 0), t(8, 0, 20));
        assert_eq!(s.values(), &[10, 20]);
    }

    #[test]
    fn test_slice_without_overlap_is_empty() {
        assert!(series().slice(t(8, 1, 0), t(8, 2, 0)).is_empty());
        assert!(series().slice(t(7, 0, 0), t(7, 59, 59)).is_empty());
    }

    #[test]
    fn test_sub_millisecond_period_rejected() {
        let err =
            TimeSeries::new(t(8, 0, 0), TimeDelta::microseconds(1500), vec![1, 2]).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(TimeSeries::new(t(8, 0, 0), TimeDelta::microseconds(500), vec![1]).is_err());
        assert!(TimeSeries::new(t(8, 0, 0), TimeDelta::milliseconds(1500), vec![1, 2]).is_ok());
    }

    #[test]
    fn test_series_past_date_range_rejected() {
        let huge = TimeDelta::weeks(100_000_000);
        let err = TimeSeries::new(t(8, 0, 0), huge, vec![1, 2]).unwrap_err();
        assert!(err.is_configuration_error());

        // Одна выборка не выходит за начало
        let s = TimeSeries::new(t(8, 0, 0), huge, vec![1]).unwrap();
        assert_eq!(s.end_time(), Some(t(8, 0, 0)));
    }

    #[test]
    fn test_slice_reversed_bounds_is_empty() {
        assert!(series().slice(t(8, 0, 30), t(8, 0, 15)).is_empty());
    }

    #[test]
    fn test_slice_of_empty_series() {
        let s = TimeSeries::empty(t(8, 0, 0), TimeDelta::seconds(15)).unwrap();
        assert!(s.slice(t(8, 0, 0), t(9, 0, 0)).is_empty());
        assert_eq!(s.end_time(), None);
    }
}
