use std::path::PathBuf;

use awd_core::{read_raw_awd, AwdResult, ReadOptions, DEFAULT_HEADER_SIZE};
use clap::Parser;
use log::LevelFilter;

use crate::{CliResult, RecordSummary};

#[derive(Parser, Debug)]
#[command(
    name = "awd-inspect",
    version = env!("CARGO_PKG_VERSION"),
    about = "Decode an Actiwatch .AWD file and print a summary",
    long_about = None,
)]
pub struct Cli {
    /// Путь к AWD файлу
    pub input: PathBuf,
    /// Число строк заголовка
    #[arg(long, default_value_t = DEFAULT_HEADER_SIZE)]
    pub header_size: usize,
    /// Период дискретизации, если код в заголовке неизвестен (15s, 1min, 00:00:30)
    #[arg(short, long)]
    pub frequency: Option<String>,
    /// Начало окна чтения ("2021-01-01 08:00:00")
    #[arg(short, long)]
    pub start_time: Option<String>,
    /// Длина окна чтения (1h, 2D, 90min)
    #[arg(short, long)]
    pub period: Option<String>,
    /// Сколько первых выборок показать
    #[arg(short = 'n', long, default_value = "10")]
    pub samples: usize,
    /// Вывод сводки в JSON
    #[arg(long)]
    pub json: bool,
    /// Тихий режим (только ошибки)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Подробный лог (debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Уровень логирования по флагам `--quiet` / `--verbose`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Error
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn read_options(&self) -> AwdResult<ReadOptions> {
        ReadOptions::from_strs(
            Some(self.header_size),
            self.frequency.as_deref(),
            self.start_time.as_deref(),
            self.period.as_deref(),
        )
    }

    /// Читает файл и возвращает готовый к печати текст.
    pub fn run(&self) -> CliResult<String> {
        let options = self.read_options()?;
        let record = read_raw_awd(&self.input, &options)?;
        let summary = RecordSummary::from_record(&record, self.samples);

        if self.json {
            Ok(serde_json::to_string_pretty(&summary)?)
        } else {
            Ok(summary.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use awd_core::AwdError;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::CliError;

    fn awd_file(freq: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        write!(
            f,
            "Subject1\n2021-01-01\n08:00:00\n{freq}\n...\nD123456\n...\n10 x\n20 y\n5 z\n0 w\n"
        )
        .unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["awd-inspect", "file.AWD"]);
        assert_eq!(cli.header_size, 7);
        assert_eq!(cli.samples, 10);
        assert!(!cli.json);
        assert_eq!(cli.log_level(), LevelFilter::Info);
        assert_eq!(cli.read_options().unwrap(), ReadOptions::default());
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::parse_from([
            "awd-inspect",
            "file.AWD",
            "--header-size",
            "8",
            "-f",
            "30s",
            "--start-time",
            "2021-01-01 08:00:15",
            "-p",
            "15s",
            "-q",
        ]);
        let opts = cli.read_options().unwrap();
        assert_eq!(opts.header_size, 8);
        assert_eq!(opts.frequency, Some(chrono::TimeDelta::seconds(30)));
        assert_eq!(opts.period, Some(chrono::TimeDelta::seconds(15)));
        assert!(opts.start_time.is_some());
        assert_eq!(cli.log_level(), LevelFilter::Error);
    }

    #[test]
    fn test_cli_run_text_and_json() {
        let file = awd_file("1");
        let path = file.path().to_str().unwrap();

        let text = Cli::parse_from(["awd-inspect", path]).run().unwrap();
        assert!(text.contains("Actiwatch-7"));
        assert!(text.contains("Samples       : 4"));

        let json = Cli::parse_from(["awd-inspect", path, "--json", "-p", "15s"])
            .run()
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["sample_count"], 2);
    }

    #[test]
    fn test_cli_run_missing_frequency() {
        let file = awd_file("??");
        let path = file.path().to_str().unwrap();

        let err = Cli::parse_from(["awd-inspect", path]).run().unwrap_err();
        assert!(matches!(err, CliError::Awd(AwdError::Configuration(_))));

        let ok = Cli::parse_from(["awd-inspect", path, "-f", "1min"]).run();
        assert!(ok.is_ok());
    }

    #[test]
    fn test_cli_bad_option_string() {
        let cli = Cli::parse_from(["awd-inspect", "file.AWD", "-p", "soon"]);
        assert!(matches!(
            cli.read_options(),
            Err(AwdError::InvalidOption {
                option: "period",
                ..
            })
        ));
    }
}
