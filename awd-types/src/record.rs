use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::TimeSeries;

/// Тег формата для записей, прочитанных из `.AWD`
pub const AWD_FORMAT: &str = "AWD";

/// Число осей измерения прибора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxialMode {
    /// Одна ось (Actiwatch)
    #[serde(rename = "mono-axial")]
    MonoAxial,
}

/// Метаданные записи, заполняемые декодером.
#[derive(Debug, Clone)]
pub struct RecordInfo {
    /// Имя записи (обычно идентификатор испытуемого)
    pub name: String,
    /// Уникальный идентификатор прибора
    pub uuid: String,
    /// Тег формата источника
    pub format: &'static str,
    pub axial_mode: AxialMode,
    /// Начало окна чтения
    pub start_time: NaiveDateTime,
    /// Длина окна чтения
    pub duration: TimeDelta,
    /// Период дискретизации
    pub frequency: TimeDelta,
    /// Абсолютный путь к исходному файлу, если запись читалась с диска
    pub path: Option<PathBuf>,
}

/// Сырая запись актиграфа: метаданные и ряд активности.
///
/// Неизменяема после создания.
#[derive(Debug, Clone)]
pub struct RawRecord {
    info: RecordInfo,
    data: TimeSeries,
    light: Option<TimeSeries>,
}

impl RawRecord {
    pub fn new(
        info: RecordInfo,
        data: TimeSeries,
        light: Option<TimeSeries>,
    ) -> Self {
        Self { info, data, light }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn uuid(&self) -> &str {
        &self.info.uuid
    }

    pub fn format(&self) -> &str {
        self.info.format
    }

    pub fn axial_mode(&self) -> AxialMode {
        self.info.axial_mode
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.info.start_time
    }

    pub fn duration(&self) -> TimeDelta {
        self.info.duration
    }

    /// Период дискретизации (не частота в Гц, а длительность эпохи)
    pub fn frequency(&self) -> TimeDelta {
        self.info.frequency
    }

    pub fn path(&self) -> Option<&Path> {
        self.info.path.as_deref()
    }

    /// Ряд активности (после применения окна)
    pub fn data(&self) -> &TimeSeries {
        &self.data
    }

    /// Канал освещённости. У AWD всегда `None`.
    pub fn light(&self) -> Option<&TimeSeries> {
        self.light.as_ref()
    }

    pub fn info(&self) -> &RecordInfo {
        &self.info
    }
}

impl std::fmt::Display for AxialMode {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            AxialMode::MonoAxial => write!(f, "mono-axial"),
        }
    }
}
