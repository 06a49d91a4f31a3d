use std::io::Error as IoError;
use thiserror::Error;

/// Ошибки при форматировании чисел и таблиц
#[derive(Debug, Error)]
pub enum FormatError {
    // обёртки

    /// обёртка csv::Error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// обёртка std::io::Error
    #[error("io error: {0}")]
    Io(#[from] IoError),

    // логические ошибки

    /// отрицательное, нечисловое или искажённое значение
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// в таблице нет колонки, на которую ссылается правило
    #[error("invalid header: {0}")]
    Header(String),
    /// не удалось разобрать правило `колонка=стиль`
    #[error("bad column rule: {0}")]
    BadRule(String),
}
