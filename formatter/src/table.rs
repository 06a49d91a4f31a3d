mod rules;

use std::io::{Read, Write};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, warn};
use crate::error::FormatError;
use crate::indian::PLACEHOLDER;

pub use rules::{CellStyle, ColumnRule};

/// Таблица из CSV-выгрузки агрегированных данных (штаты, районы, почтовые индексы)
///
/// Пример использования:
/// ```
/// use formatter::{CellStyle, ColumnRule, Table};
///
/// let csv = "State,Transaction_count\nkarnataka,1234567\n";
/// let mut table = Table::parse(csv.as_bytes())?;
/// table.apply(&[ColumnRule::new("Transaction_count", CellStyle::Count)])?;
///
/// let mut out = Vec::new();
/// table.write_csv(&mut out)?;
/// let written = String::from_utf8(out).unwrap();
/// assert_eq!(written, "State,Transaction_count\nkarnataka,\"12,34,567\"\n");
/// # Ok::<(), formatter::FormatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

/// Итог применения правил к таблице
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    /// сколько ячеек отформатировано
    pub formatted: usize,
    /// сколько ячеек заменено на заглушку из-за невалидного значения
    pub substituted: usize,
}

impl Table {
    /// Читает CSV с заголовком
    pub fn parse<R: Read>(reader: R) -> Result<Self, FormatError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;

        debug!(columns = headers.len(), rows = rows.len(), "parsed table");

        Ok(Table { headers, rows })
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Форматирует ячейки колонок по правилам
    ///
    /// Все колонки проверяются до начала форматирования: если хоть одной нет,
    /// таблица остаётся нетронутой.
    pub fn apply(&mut self, rules: &[ColumnRule]) -> Result<ApplyReport, FormatError> {
        let resolved = rules
            .iter()
            .map(|rule| find_col(&self.headers, &rule.column).map(|idx| (idx, rule)))
            .collect::<Result<Vec<_>, _>>()?;

        // второе правило получило бы уже отформатированный текст и заменило бы его заглушкой
        for (pos, (idx, rule)) in resolved.iter().enumerate() {
            if resolved[..pos].iter().any(|(seen, _)| seen == idx) {
                return Err(FormatError::BadRule(format!(
                    "duplicate rule for column '{}'",
                    rule.column
                )));
            }
        }

        let mut report = ApplyReport::default();

        for (row_idx, row) in self.rows.iter_mut().enumerate() {
            let mut cells: Vec<String> = row.iter().map(str::to_string).collect();

            for &(col_idx, rule) in &resolved {
                // короткие строки (flexible csv) просто пропускаем
                let Some(cell) = cells.get_mut(col_idx) else {
                    continue;
                };

                match rule.style.format(cell.as_str()) {
                    Ok(formatted) => {
                        *cell = formatted;
                        report.formatted += 1;
                    }
                    Err(err) => {
                        warn!(
                            row = row_idx + 1,
                            column = rule.column.as_str(),
                            value = cell.as_str(),
                            error = %err,
                            "cell replaced with placeholder"
                        );
                        *cell = PLACEHOLDER.to_string();
                        report.substituted += 1;
                    }
                }
            }

            *row = StringRecord::from(cells);
        }

        debug!(formatted = report.formatted, substituted = report.substituted, "rules applied");

        Ok(report)
    }

    /// Записывает таблицу в CSV вместе с заголовком
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), FormatError> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;

        Ok(())
    }
}

/// Ищет индекс колонки по точному заголовку
///
/// Возвращает первый найденный, если не находит - возвращает ошибку
fn find_col(headers: &StringRecord, name: &str) -> Result<usize, FormatError> {
    headers
        .iter()
        .position(|field| field.trim() == name)
        .ok_or_else(|| FormatError::Header(format!("column '{name}' not found")))
}
