//! Пример: чтение AWD-файла через AwdReader
//!
//! Демонстрирует:
//! - разбор заголовка при открытии файла
//! - определение модели прибора и накопленные предупреждения
//! - построение ряда активности с окном чтения

use awd_core::{parse_period, AwdReader, ReadOptions, DEFAULT_HEADER_SIZE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "awd-core/test_data/subject1.AWD".to_string());

    // --- AwdReader разбирает заголовок и строки данных при открытии ---
    let reader = match AwdReader::open(&input_path, DEFAULT_HEADER_SIZE) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("✗ Failed to read {input_path}: {e}");
            return Err(Box::new(e));
        }
    };

    let h = reader.header();
    println!("✓ Header decoded");
    println!("  Name          : {}", h.name);
    println!("  Start         : {}", h.start_time);
    println!("  Freq code     : {:?} -> {:?}", h.frequency_code, h.frequency);
    println!("  UUID          : {}", h.uuid);
    println!("  Model         : {}", h.model);
    println!("  Samples       : {}", reader.samples().len());

    // --- Первый час записи; 1 мин если код частоты неизвестен ---
    let options = ReadOptions::default()
        .with_frequency(parse_period("60s")?)
        .with_period(parse_period("1h")?);
    let record = reader.decode(&options)?;

    println!("\n✓ Decode complete");
    println!("  Period        : {}", record.frequency());
    println!("  Window        : {} (+{})", record.start_time(), record.duration());
    println!("  Samples kept  : {}", record.data().len());

    for w in record.warnings() {
        println!("  ⚠ {w}");
    }

    // --- Показываем первые 3 выборки ---
    println!("\nFirst samples:");
    for (i, (ts, count)) in record.data().iter().take(3).enumerate() {
        println!("  [{i}] {ts} {count}");
    }

    Ok(())
}
