use serde::Serialize;

use crate::device::supported_models_listing;

const FIRST_COLUMN_NOTE: &str =
    "Only the first data column will be used, assuming it corresponds to activity counts.";

/// Нефатальные замечания, накопленные при декодировании.
///
/// Каждое замечание пишется в лог (`warn!`) и сохраняется в записи.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DecodeWarning {
    /// Код частоты из заголовка отсутствует в таблице
    UnknownFrequencyCode { code: String },
    /// Буква модели из идентификатора не поддерживается
    UnsupportedModel { code: char },
    /// Модель невозможно определить по идентификатору
    UndeterminedModel { identifier: String },
}

impl std::fmt::Display for DecodeWarning {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            DecodeWarning::UnknownFrequencyCode { code } => write!(
                f,
                "Could not find acquisition frequency in header info (code '{code}')."
            ),
            DecodeWarning::UnsupportedModel { code } => write!(
                f,
                "The model specified in the UUID ({code}) is not supported at the moment.\n\
                 List of supported Actiwatch models:\n{}\n{FIRST_COLUMN_NOTE}",
                supported_models_listing()
            ),
            DecodeWarning::UndeterminedModel { identifier } => write!(
                f,
                "Cannot detect from the header info (UUID '{identifier}') which Actiwatch \
                 model was used to acquire the data.\n{FIRST_COLUMN_NOTE}"
            ),
        }
    }
}
