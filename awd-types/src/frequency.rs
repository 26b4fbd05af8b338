use chrono::TimeDelta;
use serde::Serialize;

/// Код частоты дискретизации из строки 3 заголовка AWD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FrequencyCode {
    /// `1`: эпоха 15 с
    Epoch15s,
    /// `2`: эпоха 30 с
    Epoch30s,
    /// `4`: эпоха 60 с
    Epoch60s,
    /// `8`: эпоха 2 мин
    Epoch2min,
    /// `20`: эпоха 5 мин
    Epoch5min,
    /// `81`: эпоха 2 с
    Epoch2s,
    /// `C1`: эпоха 5 с
    Epoch5s,
    /// `C2`: эпоха 10 с
    Epoch10s,
}

impl FrequencyCode {
    /// Все известные коды в порядке документации производителя.
    pub const ALL: [FrequencyCode; 8] = [
        FrequencyCode::Epoch15s,
        FrequencyCode::Epoch30s,
        FrequencyCode::Epoch60s,
        FrequencyCode::Epoch2min,
        FrequencyCode::Epoch5min,
        FrequencyCode::Epoch2s,
        FrequencyCode::Epoch5s,
        FrequencyCode::Epoch10s,
    ];

    /// Ищет код в таблице. Сравнение точное: вызывающая сторона сама
    /// обрезает пробелы и перевод строки.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(FrequencyCode::Epoch15s),
            "2" => Some(FrequencyCode::Epoch30s),
            "4" => Some(FrequencyCode::Epoch60s),
            "8" => Some(FrequencyCode::Epoch2min),
            "20" => Some(FrequencyCode::Epoch5min),
            "81" => Some(FrequencyCode::Epoch2s),
            "C1" => Some(FrequencyCode::Epoch5s),
            "C2" => Some(FrequencyCode::Epoch10s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyCode::Epoch15s => "1",
            FrequencyCode::Epoch30s => "2",
            FrequencyCode::Epoch60s => "4",
            FrequencyCode::Epoch2min => "8",
            FrequencyCode::Epoch5min => "20",
            FrequencyCode::Epoch2s => "81",
            FrequencyCode::Epoch5s => "C1",
            FrequencyCode::Epoch10s => "C2",
        }
    }

    /// Длительность эпохи в секундах
    pub fn period_secs(&self) -> i64 {
        match self {
            FrequencyCode::Epoch15s => 15,
            FrequencyCode::Epoch30s => 30,
            FrequencyCode::Epoch60s => 60,
            FrequencyCode::Epoch2min => 120,
            FrequencyCode::Epoch5min => 300,
            FrequencyCode::Epoch2s => 2,
            FrequencyCode::Epoch5s => 5,
            FrequencyCode::Epoch10s => 10,
        }
    }

    pub fn period(&self) -> TimeDelta {
        TimeDelta::seconds(self.period_secs())
    }
}

/// Период дискретизации для кода из заголовка (`None`, если код неизвестен).
pub fn sampling_period(code: &str) -> Option<TimeDelta> {
    FrequencyCode::from_code(code).map(|c| c.period())
}

impl std::fmt::Display for FrequencyCode {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let secs = self.period_secs();
        if secs % 60 == 0 && secs > 60 {
            write!(f, "{}min", secs / 60)
        } else {
            write!(f, "{secs}s")
        }
    }
}
