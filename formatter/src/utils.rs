use crate::error::FormatError;
use once_cell::sync::Lazy;
use regex::Regex;

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    // ^(\d+) - целая часть, хотя бы одна цифра
    // (?:\.(\d+))? - необязательная дробная часть, хотя бы одна цифра после точки
    Regex::new(r"^([0-9]+)(?:\.([0-9]+))?$").unwrap()
});

/// Разбирает строку с неотрицательным десятичным числом на целую и дробную части
///
/// Пустая строка считается нулём.
/// Ведущие нули целой части убираются, дробная часть возвращается как есть.
pub(crate) fn split_amount(raw: &str) -> Result<(String, Option<String>), FormatError> {
    let cleaned = raw.trim();

    if cleaned.is_empty() {
        return Ok(("0".to_string(), None));
    }
    if cleaned.starts_with('-') {
        return Err(FormatError::InvalidInput(format!("negative amount: '{cleaned}'")));
    }
    if cleaned.matches('.').count() > 1 {
        return Err(FormatError::InvalidInput(format!("too many dots in amount: '{cleaned}'")));
    }

    let caps = AMOUNT_RE
        .captures(cleaned)
        .ok_or_else(|| FormatError::InvalidInput(format!("not a decimal number: '{cleaned}'")))?;

    // группа 1 обязательна в регулярке, так что она точно есть
    let int_part = strip_leading_zeros(&caps[1]);
    let dec_part = caps.get(2).map(|m| m.as_str().to_string());

    Ok((int_part, dec_part))
}

/// Убирает ведущие нули, оставляя хотя бы один "0"
pub(crate) fn strip_leading_zeros(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
