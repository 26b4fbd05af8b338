//! Библиотека чтения формата AWD
//!
//! Декодер текстовых файлов `.AWD`, которые выгружают актиграфы Actiwatch:
//! заголовок фиксированной длины с метаданными записи и по одной строке на
//! эпоху, где первое число задаёт счётчик активности.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use awd_core::{read_raw_awd, ReadOptions};
//!
//! let record = read_raw_awd("subject1.AWD", &ReadOptions::default())?;
//! println!("{} ({}): {} samples", record.name(), record.model(), record.data().len());
//!
//! for (ts, count) in record.data().iter().take(5) {
//!     println!("{ts} {count}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod format;
pub mod loader;
pub mod reader;
pub mod record;
pub mod series;

use std::path::Path;

pub use awd_types::{AwdError, AwdResult};
pub use config::*;
pub use format::*;
pub use loader::*;
pub use reader::*;
pub use record::*;
pub use series::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Читает AWD файл целиком и строит запись с учётом `options`.
pub fn read_raw_awd<P: AsRef<Path>>(
    path: P,
    options: &ReadOptions,
) -> AwdResult<AwdRecord> {
    AwdReader::open(path, options.header_size)?.decode(options)
}
