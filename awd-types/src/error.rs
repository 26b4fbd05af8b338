use thiserror::Error;

/// Результат для операций декодирования AWD
pub type AwdResult<T> = std::result::Result<T, AwdError>;

/// Типы ошибок декодирования AWD.
#[derive(Debug, Error)]
pub enum AwdError {
    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Некорректная строка файла (номер строки считается с 1)
    #[error("Parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// В файле меньше строк, чем заявленный размер заголовка
    #[error("Truncated header: expected {expected} lines, found {found}")]
    TruncatedHeader { expected: usize, found: usize },

    /// Недостаточно данных для построения временной оси
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Некорректное значение опции, переданной вызывающей стороной
    #[error("Invalid option '{option}': {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },
}

impl AwdError {
    /// Удобные конструкторы
    pub fn parse<S: Into<String>>(
        line: usize,
        reason: S,
    ) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub fn configuration<S: Into<String>>(s: S) -> Self {
        Self::Configuration(s.into())
    }

    pub fn invalid_option<S: Into<String>>(
        option: &'static str,
        reason: S,
    ) -> Self {
        Self::InvalidOption {
            option,
            reason: reason.into(),
        }
    }

    /// `true` для ошибок разбора содержимого файла.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::TruncatedHeader { .. })
    }

    /// `true`, если не удалось определить период дискретизации или
    /// параметры чтения противоречивы.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
