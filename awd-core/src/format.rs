//! Заголовок текстового формата AWD
//!
//! Файл `.AWD` начинается с блока строк фиксированной длины (обычно 7).
//! Поля извлекаются по номеру строки:
//!
//! | строка | поле                         |
//! |--------|------------------------------|
//! | 0      | имя записи                   |
//! | 1      | дата начала                  |
//! | 2      | время начала                 |
//! | 3      | код частоты дискретизации    |
//! | 5      | идентификатор прибора (UUID) |
//!
//! Строки 4 и 6 не используются. Все строки после заголовка содержат данные.

use awd_types::{
    AwdError, AwdResult, DecodeWarning, FrequencyCode, ModelResolution, DEFAULT_CHANNELS,
};
use chrono::{NaiveDateTime, TimeDelta};
use log::{debug, info, warn};

use crate::config::parse_datetime;

/// Размер заголовка по умолчанию (строк)
pub const DEFAULT_HEADER_SIZE: usize = 7;

/// Номера строк полей заголовка (с нуля)
pub const NAME_LINE: usize = 0;
pub const START_DATE_LINE: usize = 1;
pub const START_TIME_LINE: usize = 2;
pub const FREQUENCY_LINE: usize = 3;
pub const UUID_LINE: usize = 5;

/// Минимальный размер заголовка, при котором доступны все поля
pub const MIN_HEADER_SIZE: usize = UUID_LINE + 1;

/// Разобранный заголовок AWD файла.
#[derive(Debug, Clone)]
pub struct AwdHeader {
    /// Имя записи
    pub name: String,
    /// Время первой выборки
    pub start_time: NaiveDateTime,
    /// Код частоты как он записан в файле (без пробелов)
    pub frequency_code: String,
    /// Код, найденный в таблице частот
    pub frequency: Option<FrequencyCode>,
    /// Уникальный идентификатор прибора
    pub uuid: String,
    /// Модель, определённая по идентификатору
    pub model: ModelResolution,
    /// Замечания, возникшие при разборе заголовка
    pub warnings: Vec<DecodeWarning>,
}

impl AwdHeader {
    /// Разбирает заголовок из первых строк файла.
    ///
    /// Ошибка, если строк меньше [`MIN_HEADER_SIZE`] или не читается
    /// дата/время начала. Неизвестный код частоты и неизвестная модель
    /// дают только предупреждения.
    pub fn decode<S: AsRef<str>>(lines: &[S]) -> AwdResult<Self> {
        let name = strip_terminator(header_field(lines, NAME_LINE)?).to_string();

        let date = header_field(lines, START_DATE_LINE)?;
        let time = header_field(lines, START_TIME_LINE)?;
        let start_time = parse_start_time(date, time)?;

        let mut warnings = Vec::new();

        let frequency_code = header_field(lines, FREQUENCY_LINE)?.trim().to_string();
        let frequency = FrequencyCode::from_code(&frequency_code);
        if frequency.is_none() {
            let w = DecodeWarning::UnknownFrequencyCode {
                code: frequency_code.clone(),
            };
            warn!("{w}");
            warnings.push(w);
        }

        let uuid = strip_terminator(header_field(lines, UUID_LINE)?).to_string();
        let model = ModelResolution::from_identifier(&uuid);
        match model {
            ModelResolution::Known(m) => {
                if let Some(ch) = m.additional_channel() {
                    info!(
                        "{} records {} + {ch}; only {} is decoded",
                        m.name(),
                        DEFAULT_CHANNELS
                            .iter()
                            .map(|c| c.to_string())
                            .collect::<Vec<_>>()
                            .join(", "),
                        DEFAULT_CHANNELS[0]
                    );
                }
            }
            ModelResolution::Unsupported { code } => {
                let w = DecodeWarning::UnsupportedModel { code };
                warn!("{w}");
                warnings.push(w);
            }
            ModelResolution::Undetermined => {
                let w = DecodeWarning::UndeterminedModel {
                    identifier: uuid.clone(),
                };
                warn!("{w}");
                warnings.push(w);
            }
        }

        debug!(
            "AWD header: name={name:?} start={start_time} freq_code={frequency_code:?} uuid={uuid:?} model={model}"
        );

        Ok(Self {
            name,
            start_time,
            frequency_code,
            frequency,
            uuid,
            model,
            warnings,
        })
    }

    /// Период дискретизации из заголовка, если код известен.
    pub fn sampling_period(&self) -> Option<TimeDelta> {
        self.frequency.map(|f| f.period())
    }
}

/// Доступ к строке заголовка с проверкой границ.
fn header_field<S: AsRef<str>>(
    lines: &[S],
    index: usize,
) -> AwdResult<&str> {
    lines
        .get(index)
        .map(|l| l.as_ref())
        .ok_or(AwdError::TruncatedHeader {
            expected: MIN_HEADER_SIZE,
            found: lines.len(),
        })
}

/// Убирает завершающие `\n` / `\r\n`.
pub fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Склеивает строки даты и времени через пробел и разбирает результат.
pub fn parse_start_time(
    date: &str,
    time: &str,
) -> AwdResult<NaiveDateTime> {
    let joined = format!("{} {}", date.trim(), time.trim());
    parse_datetime(&joined).map_err(|e| AwdError::parse(START_DATE_LINE + 1, e))
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use awd_types::DeviceModel;
    use chrono::NaiveDate;

    use super::*;

    fn header_lines(
        freq: &str,
        uuid: &str,
    ) -> Vec<String> {
        vec![
            "Subject1\n".to_string(),
            "2021-01-01\n".to_string(),
            "08:00:00\n".to_string(),
            format!("{freq}\n"),
            "...\n".to_string(),
            format!("{uuid}\n"),
            "...\n".to_string(),
        ]
    }

    #[test]
    fn test_decode_header_fields() {
        let h = AwdHeader::decode(&header_lines("1", "D123456")).unwrap();
        assert_eq!(h.name, "Subject1");
        assert_eq!(
            h.start_time,
            NaiveDate::from_ymd_opt(2021, 1, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
        );
        assert_eq!(h.frequency, Some(FrequencyCode::Epoch15s));
        assert_eq!(h.sampling_period(), Some(TimeDelta::seconds(15)));
        assert_eq!(h.uuid, "D123456");
        assert_eq!(h.model, ModelResolution::Known(DeviceModel::Actiwatch7));
        assert!(h.warnings.is_empty());
    }

    #[test]
    fn test_frequency_code_is_trimmed() {
        let h = AwdHeader::decode(&header_lines("  C1  \r", "D1")).unwrap();
        assert_eq!(h.frequency_code, "C1");
        assert_eq!(h.sampling_period(), Some(TimeDelta::seconds(5)));
    }

    #[test]
    fn test_unknown_frequency_is_warning() {
        let h = AwdHeader::decode(&header_lines("99", "D1")).unwrap();
        assert_eq!(h.frequency, None);
        assert_eq!(
            h.warnings,
            vec![DecodeWarning::UnknownFrequencyCode { code: "99".into() }]
        );
    }

    #[test]
    fn test_model_sentinels_are_warnings() {
        let h = AwdHeader::decode(&header_lines("1", "9xyz")).unwrap();
        assert_eq!(h.model, ModelResolution::Undetermined);
        assert!(matches!(
            h.warnings[0],
            DecodeWarning::UndeterminedModel { .. }
        ));

        let h = AwdHeader::decode(&header_lines("1", "z999")).unwrap();
        assert_eq!(h.model, ModelResolution::Unsupported { code: 'Z' });
        assert_eq!(
            h.warnings,
            vec![DecodeWarning::UnsupportedModel { code: 'Z' }]
        );
    }

    #[test]
    fn test_crlf_terminators() {
        let lines = [
            "Subject1\r\n",
            "2021-01-01\r\n",
            "08:00:00\r\n",
            "2\r\n",
            "\r\n",
            "M0001\r\n",
            "\r\n",
        ];
        let h = AwdHeader::decode(&lines).unwrap();
        assert_eq!(h.name, "Subject1");
        assert_eq!(h.uuid, "M0001");
        assert_eq!(h.sampling_period(), Some(TimeDelta::seconds(30)));
    }

    #[test]
    fn test_short_header_is_error() {
        let lines = ["Subject1", "2021-01-01", "08:00:00", "1"];
        let err = AwdHeader::decode(&lines).unwrap_err();
        assert!(matches!(
            err,
            AwdError::TruncatedHeader {
                expected: 6,
                found: 4
            }
        ));
    }

    #[test]
    fn test_bad_start_time_is_parse_error() {
        let mut lines = header_lines("1", "D1");
        lines[1] = "not-a-date\n".to_string();
        let err = AwdHeader::decode(&lines).unwrap_err();
        assert!(matches!(err, AwdError::Parse { line: 2, .. }));
    }
}
