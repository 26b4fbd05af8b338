use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use awd_types::{
    ActivityCount, AwdError, AwdResult, AxialMode, RawRecord, RecordInfo, AWD_FORMAT,
};
use chrono::TimeDelta;
use log::{debug, info, warn};

use crate::{
    config::ReadOptions,
    format::{AwdHeader, MIN_HEADER_SIZE},
    loader::load_samples,
    record::AwdRecord,
    series::{apply_window, build_series, resolve_window},
};

/// Читатель AWD файлов.
///
/// Файл читается целиком при создании: заголовок разбирается и
/// проверяется сразу, строки данных превращаются в выборки. Построение
/// временной оси и окна выполняет [`AwdReader::decode`].
#[derive(Debug, Clone)]
pub struct AwdReader {
    header: AwdHeader,
    header_size: usize,
    samples: Vec<ActivityCount>,
    path: Option<PathBuf>,
}

impl AwdReader {
    /// Создаёт читатель из произвольного источника.
    ///
    /// `header_size`: число строк заголовка; всё, что ниже, считается
    /// данными.
    pub fn new<R: Read>(
        inner: R,
        header_size: usize,
    ) -> AwdResult<Self> {
        if header_size < MIN_HEADER_SIZE {
            return Err(AwdError::configuration(format!(
                "header_size must be at least {MIN_HEADER_SIZE} to reach the identifier line, got {header_size}"
            )));
        }

        let mut reader = BufReader::new(inner);
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;

        // Имена испытуемых бывают не в UTF-8; на числа это не влияет
        let text = String::from_utf8_lossy(&raw);
        let lines: Vec<&str> = text.lines().collect();

        if lines.len() < header_size {
            return Err(AwdError::TruncatedHeader {
                expected: header_size,
                found: lines.len(),
            });
        }

        let (head, data) = lines.split_at(header_size);
        let header = AwdHeader::decode(head)?;
        let samples = load_samples(data.iter().copied(), header_size + 1)?;

        debug!(
            "AWD file: {} header lines, {} data lines",
            header_size,
            samples.len()
        );

        Ok(Self {
            header,
            header_size,
            samples,
            path: None,
        })
    }

    /// Открывает файл по пути. Путь приводится к абсолютному; файл
    /// закрывается сразу после чтения, в том числе при ошибке разбора.
    pub fn open<P: AsRef<Path>>(
        path: P,
        header_size: usize,
    ) -> AwdResult<Self> {
        let path = std::path::absolute(path.as_ref())?;

        let mut reader = {
            let file = File::open(&path)?;
            Self::new(file, header_size)?
        };

        reader.path = Some(path);
        Ok(reader)
    }

    /// Строит запись: разрешает период дискретизации, строит временной ряд
    /// и применяет окно из `options`.
    ///
    /// `options.header_size` здесь не используется, он уже применён при
    /// создании читателя. Расхождение с ним попадает в лог.
    pub fn decode(
        self,
        options: &ReadOptions,
    ) -> AwdResult<AwdRecord> {
        if options.header_size != self.header_size {
            warn!(
                "Ignoring header_size {} from options: reader was opened with {} header lines",
                options.header_size, self.header_size
            );
        }

        let period = resolve_sampling_period(self.header.sampling_period(), options.frequency)?;

        let full = build_series(self.header.start_time, period, self.samples)?;
        let window = resolve_window(&full, options.start_time, options.period)?;
        let data = apply_window(&full, &window);

        debug!(
            "AWD window: {} .. {} ({} of {} samples)",
            window.start,
            window.end,
            data.len(),
            full.len()
        );

        let info = RecordInfo {
            name: self.header.name,
            uuid: self.header.uuid,
            format: AWD_FORMAT,
            axial_mode: AxialMode::MonoAxial,
            start_time: window.start,
            duration: window.duration,
            frequency: period,
            path: self.path,
        };

        Ok(AwdRecord::new(
            RawRecord::new(info, data, None),
            self.header.model,
            self.header.warnings,
        ))
    }

    /// Разобранный заголовок файла.
    pub fn header(&self) -> &AwdHeader {
        &self.header
    }

    pub fn header_size(&self) -> usize {
        self.header_size
    }

    /// Все выборки в порядке файла (без окна).
    pub fn samples(&self) -> &[ActivityCount] {
        &self.samples
    }

    /// Абсолютный путь, если читатель создан через [`AwdReader::open`].
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Период из заголовка важнее резервного значения от пользователя. Если
/// нет ни того, ни другого, временную ось построить нельзя.
///
/// Неизвестная модель прибора, напротив, не мешает чтению: модель нужна
/// только для справки.
pub fn resolve_sampling_period(
    from_header: Option<TimeDelta>,
    fallback: Option<TimeDelta>,
) -> AwdResult<TimeDelta> {
    match (from_header, fallback) {
        (Some(period), _) => Ok(period),
        (None, Some(period)) => {
            info!("Using user-supplied sampling period: {period}");
            Ok(period)
        }
        (None, None) => Err(AwdError::configuration(
            "The acquisition frequency could not be retrieved from the header and was not \
             provided by the user. Please specify the 'frequency' option.",
        )),
    }
}
