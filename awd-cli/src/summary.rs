use std::path::PathBuf;

use awd_core::AwdRecord;
use awd_types::{ActivityCount, AxialMode, Channel};
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

/// Одна выборка в выводе.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SamplePoint {
    pub timestamp: NaiveDateTime,
    pub activity: ActivityCount,
}

/// Сводка по прочитанной записи (текст или JSON).
#[derive(Debug, Clone, Serialize)]
pub struct RecordSummary {
    pub name: String,
    pub uuid: String,
    pub format: String,
    pub axial_mode: AxialMode,
    pub model: String,
    pub model_code: Option<char>,
    /// Канал, который прибор пишет, но который не декодируется
    pub additional_channel: Option<Channel>,
    pub path: Option<PathBuf>,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub duration_secs: f64,
    pub period_secs: f64,
    pub sample_count: usize,
    pub warnings: Vec<String>,
    /// Первые выборки окна
    pub samples: Vec<SamplePoint>,
}

impl RecordSummary {
    /// Собирает сводку; `max_samples` ограничивает список выборок.
    pub fn from_record(
        record: &AwdRecord,
        max_samples: usize,
    ) -> Self {
        let device = record.device_model();

        Self {
            name: record.name().to_string(),
            uuid: record.uuid().to_string(),
            format: record.format().to_string(),
            axial_mode: record.axial_mode(),
            model: record.model().to_string(),
            model_code: device.map(|m| m.code()),
            additional_channel: device.and_then(|m| m.additional_channel()),
            path: record.path().map(|p| p.to_path_buf()),
            start_time: record.start_time(),
            end_time: record.data().end_time(),
            duration_secs: secs(record.duration()),
            period_secs: secs(record.frequency()),
            sample_count: record.data().len(),
            warnings: record.warnings().iter().map(|w| w.to_string()).collect(),
            samples: record
                .data()
                .iter()
                .take(max_samples)
                .map(|(timestamp, activity)| SamplePoint {
                    timestamp,
                    activity,
                })
                .collect(),
        }
    }
}

fn secs(d: TimeDelta) -> f64 {
    d.num_milliseconds() as f64 / 1_000.0
}

impl std::fmt::Display for RecordSummary {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(f, "  Name          : {}", self.name)?;
        writeln!(f, "  UUID          : {}", self.uuid)?;
        writeln!(f, "  Format        : {} ({})", self.format, self.axial_mode)?;
        writeln!(f, "  Model         : {}", self.model)?;
        if let Some(ch) = self.additional_channel {
            writeln!(f, "  Extra channel : {ch} (not decoded)")?;
        }
        if let Some(path) = &self.path {
            writeln!(f, "  File          : {}", path.display())?;
        }
        writeln!(f, "  Start         : {}", self.start_time)?;
        match self.end_time {
            Some(end) => writeln!(f, "  Last sample   : {end}")?,
            None => writeln!(f, "  Last sample   : -")?,
        }
        writeln!(f, "  Duration      : {:.0} s", self.duration_secs)?;
        writeln!(f, "  Period        : {} s", self.period_secs)?;
        writeln!(f, "  Samples       : {}", self.sample_count)?;
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;

        for w in &self.warnings {
            writeln!(f, "⚠ {w}")?;
        }

        for (i, p) in self.samples.iter().enumerate() {
            writeln!(f, "  [{i}] {} {}", p.timestamp, p.activity)?;
        }

        if self.sample_count > self.samples.len() {
            writeln!(
                f,
                "  ... {} more",
                self.sample_count - self.samples.len()
            )?;
        }

        Ok(())
    }
}
