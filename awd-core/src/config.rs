use awd_types::{AwdError, AwdResult};
use chrono::{NaiveDateTime, TimeDelta};

use crate::format::DEFAULT_HEADER_SIZE;

/// Форматы даты/времени, которые встречаются в заголовках AWD и в опции
/// `start_time`. Даты через `/` читаются как месяц/день/год.
///
/// Варианты с двузначным годом идут раньше четырёхзначных: `%Y` успешно
/// разбирает `18` как 18 год н.э.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%d-%b-%y %H:%M:%S",
    "%d-%b-%y %H:%M",
    "%d-%b-%Y %H:%M:%S",
    "%d-%b-%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Параметры чтения AWD файла.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Число строк заголовка
    pub header_size: usize,
    /// Период дискретизации, если его не удалось взять из заголовка
    pub frequency: Option<TimeDelta>,
    /// Начало окна чтения (по умолчанию начало записи)
    pub start_time: Option<NaiveDateTime>,
    /// Длина окна чтения (по умолчанию до последней выборки)
    pub period: Option<TimeDelta>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl ReadOptions {
    /// Собирает опции из строковых значений (как они приходят из CLI).
    pub fn from_strs(
        header_size: Option<usize>,
        frequency: Option<&str>,
        start_time: Option<&str>,
        period: Option<&str>,
    ) -> AwdResult<Self> {
        let frequency = frequency
            .map(parse_period)
            .transpose()
            .map_err(|e| AwdError::invalid_option("frequency", e))?;
        let start_time = start_time
            .map(parse_datetime)
            .transpose()
            .map_err(|e| AwdError::invalid_option("start_time", e))?;
        let period = period
            .map(parse_period)
            .transpose()
            .map_err(|e| AwdError::invalid_option("period", e))?;

        Ok(Self {
            header_size: header_size.unwrap_or(DEFAULT_HEADER_SIZE),
            frequency,
            start_time,
            period,
        })
    }

    pub fn with_header_size(
        mut self,
        header_size: usize,
    ) -> Self {
        self.header_size = header_size;
        self
    }

    pub fn with_frequency(
        mut self,
        frequency: TimeDelta,
    ) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_start_time(
        mut self,
        start_time: NaiveDateTime,
    ) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_period(
        mut self,
        period: TimeDelta,
    ) -> Self {
        self.period = Some(period);
        self
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            header_size: DEFAULT_HEADER_SIZE,
            frequency: None,
            start_time: None,
            period: None,
        }
    }
}

/// Парсит длительность в стиле псевдонимов pandas.
///
/// Поддерживает суффиксы `ms`/`L`, `s`/`S`/`sec`, `min`/`T`/`m`, `h`/`H`,
/// `d`/`D`/`day`, `w`/`W` и запись `ЧЧ:ММ:СС`. Суффикс без числа означает
/// одну единицу.
///
/// # Примеры
/// ```
/// use awd_core::config::parse_period;
/// use chrono::TimeDelta;
/// assert_eq!(parse_period("15s").unwrap(), TimeDelta::seconds(15));
/// assert_eq!(parse_period("2min").unwrap(), TimeDelta::minutes(2));
/// assert_eq!(parse_period("00:00:30").unwrap(), TimeDelta::seconds(30));
/// ```
pub fn parse_period(s: &str) -> Result<TimeDelta, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration".to_string());
    }

    if s.contains(':') {
        return parse_clock_duration(s);
    }

    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (num_str, unit) = (s[..split].trim(), s[split..].trim());

    let n: f64 = if num_str.is_empty() {
        1.0
    } else {
        num_str
            .parse()
            .map_err(|e| format!("Invalid duration value '{num_str}': {e}"))?
    };

    let mult_ms: f64 = match unit.to_lowercase().as_str() {
        "ms" | "l" | "milli" | "millis" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => 1_000.0,
        "t" | "m" | "min" | "mins" | "minute" | "minutes" => 60_000.0,
        "h" | "hr" | "hour" | "hours" => 3_600_000.0,
        "d" | "day" | "days" => 86_400_000.0,
        "w" | "week" | "weeks" => 604_800_000.0,
        "" => return Err(format!("Missing unit in duration '{s}'")),
        other => return Err(format!("Unknown duration unit '{other}' in '{s}'")),
    };

    millis_to_delta((n * mult_ms).round(), s)
}

/// `ЧЧ:ММ:СС[.fff]` или `ММ:СС`.
fn parse_clock_duration(s: &str) -> Result<TimeDelta, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let (h, m, sec) = match parts.as_slice() {
        [h, m, sec] => (*h, *m, *sec),
        [m, sec] => ("0", *m, *sec),
        _ => return Err(format!("Invalid clock duration '{s}'")),
    };

    let h: u64 = h
        .parse()
        .map_err(|e| format!("Invalid hours in '{s}': {e}"))?;
    let m: u64 = m
        .parse()
        .map_err(|e| format!("Invalid minutes in '{s}': {e}"))?;
    let sec: f64 = sec
        .parse()
        .map_err(|e| format!("Invalid seconds in '{s}': {e}"))?;

    let ms = (h * 3_600 + m * 60) as f64 * 1_000.0 + (sec * 1_000.0).round();
    millis_to_delta(ms, s)
}

fn millis_to_delta(
    ms: f64,
    src: &str,
) -> Result<TimeDelta, String> {
    if !ms.is_finite() || ms < 0.0 || ms > i64::MAX as f64 {
        return Err(format!("Duration out of range: '{src}'"));
    }
    TimeDelta::try_milliseconds(ms as i64).ok_or_else(|| format!("Duration out of range: '{src}'"))
}

/// Парсит дату и время (без часового пояса).
///
/// # Примеры
/// ```
/// use awd_core::config::parse_datetime;
/// assert!(parse_datetime("2021-01-01 08:00:00").is_ok());
/// assert!(parse_datetime("18-Jan-2018 14:00").is_ok());
/// assert!(parse_datetime("not a date").is_err());
/// ```
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| format!("Unrecognized date-time '{s}'"))
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
