use awd_types::{ActivityCount, AwdError, AwdResult};

/// Разбирает строку данных. Первое слово это счётчик активности, остальное
/// (маркер, свет и т.п.) отбрасывается.
///
/// `line_no`: номер строки в файле (с 1), только для текста ошибки.
pub fn parse_activity_line(
    line: &str,
    line_no: usize,
) -> AwdResult<ActivityCount> {
    let token = line
        .split_whitespace()
        .next()
        .ok_or_else(|| AwdError::parse(line_no, "empty data line"))?;

    token.parse::<ActivityCount>().map_err(|e| {
        AwdError::parse(
            line_no,
            format!("expected integer activity count, found '{token}': {e}"),
        )
    })
}

/// Читает все строки данных по порядку. Первая ошибка прерывает чтение.
///
/// `first_line_no`: номер первой строки данных в файле (с 1).
pub fn load_samples<'a, I>(
    lines: I,
    first_line_no: usize,
) -> AwdResult<Vec<ActivityCount>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| parse_activity_line(line, first_line_no + i))
        .collect()
}
