use std::ops::Deref;

use awd_types::{DecodeWarning, DeviceModel, ModelResolution, RawRecord};

/// Запись, прочитанная из AWD файла.
///
/// Общие поля доступны через [`RawRecord`] (`Deref`), а модель прибора и
/// накопленные предупреждения доступны через собственные методы.
#[derive(Debug, Clone)]
pub struct AwdRecord {
    raw: RawRecord,
    model: ModelResolution,
    warnings: Vec<DecodeWarning>,
}

impl AwdRecord {
    pub fn new(
        raw: RawRecord,
        model: ModelResolution,
        warnings: Vec<DecodeWarning>,
    ) -> Self {
        Self {
            raw,
            model,
            warnings,
        }
    }

    /// Название модели Actiwatch, определённое по идентификатору.
    ///
    /// Для неизвестных моделей возвращается имя заглушки, а не ошибка.
    pub fn model(&self) -> &'static str {
        self.model.name()
    }

    pub fn model_resolution(&self) -> ModelResolution {
        self.model
    }

    pub fn device_model(&self) -> Option<DeviceModel> {
        self.model.model()
    }

    /// Нефатальные замечания, возникшие при чтении.
    pub fn warnings(&self) -> &[DecodeWarning] {
        &self.warnings
    }

    pub fn raw(&self) -> &RawRecord {
        &self.raw
    }

    pub fn into_raw(self) -> RawRecord {
        self.raw
    }
}

impl Deref for AwdRecord {
    type Target = RawRecord;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}
