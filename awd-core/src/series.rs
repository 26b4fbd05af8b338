use awd_types::{ActivityCount, AwdError, AwdResult, TimeSeries};
use chrono::{NaiveDateTime, TimeDelta};

/// Окно чтения: границы среза и длина, которая попадёт в запись.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Начало окна
    pub start: NaiveDateTime,
    /// Конец окна (включительно)
    pub end: NaiveDateTime,
    /// Длина окна
    pub duration: TimeDelta,
}

/// Строит полный регулярный ряд от начала записи.
pub fn build_series(
    start: NaiveDateTime,
    period: TimeDelta,
    samples: Vec<ActivityCount>,
) -> AwdResult<TimeSeries> {
    TimeSeries::new(start, period, samples)
}

/// Вычисляет окно по опциям вызывающей стороны.
///
/// Без `start_time` окно начинается с первой выборки. Без `period` окно
/// заканчивается последней выборкой, а длина равна `last - start`;
/// для пустого ряда длина нулевая.
///
/// Конец окна за пределами диапазона дат даёт `InvalidOption("period")`.
pub fn resolve_window(
    full: &TimeSeries,
    start_time: Option<NaiveDateTime>,
    period: Option<TimeDelta>,
) -> AwdResult<Window> {
    let start = start_time.unwrap_or(full.start());

    let window = match (period, full.end_time()) {
        (Some(duration), _) => {
            let end = start.checked_add_signed(duration).ok_or_else(|| {
                AwdError::invalid_option(
                    "period",
                    format!("window of {duration} from {start} runs past the supported date range"),
                )
            })?;
            Window {
                start,
                end,
                duration,
            }
        }
        (None, Some(last)) => Window {
            start,
            end: last,
            duration: last - start,
        },
        (None, None) => Window {
            start,
            end: start,
            duration: TimeDelta::zero(),
        },
    };

    Ok(window)
}

/// Срез `[window.start, window.end]` полного ряда.
pub fn apply_window(
    full: &TimeSeries,
    window: &Window,
) -> TimeSeries {
    full.slice(window.start, window.end)
}
