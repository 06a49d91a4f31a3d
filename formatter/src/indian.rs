//! Группировка разрядов по индийской системе (лакхи/кроры).
//!
//! Первый разделитель ставится через 3 цифры справа, каждый следующий - через 2:
//! `1234567` -> `12,34,567`.

use crate::error::FormatError;
use crate::model::IntoAmount;

/// Знак рупии перед суммой
pub const RUPEE_SIGN: &str = "₹";
/// Подпись единиц после суммы в крорах
pub const CRORE_SUFFIX: &str = " Cr";
/// Что показывать вместо значения, которое не удалось отформатировать
pub const PLACEHOLDER: &str = "—";

const SEPARATOR: &str = ",";

/// Расставляет разделители в строке из ASCII-цифр
///
/// Ожидает уже проверенную строку без знака и точки.
pub(crate) fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);

    // пары набираются от границы с последней тройкой влево,
    // старшая группа может остаться из одной цифры
    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 2);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);

    groups.join(SEPARATOR)
}

/// Первые два знака дробной части: короче - дополняются нулями, длиннее - отбрасываются
fn two_fraction_digits(fraction: Option<&str>) -> String {
    let fraction = fraction.unwrap_or("");
    let mut out: String = fraction.chars().take(2).collect();
    while out.len() < 2 {
        out.push('0');
    }
    out
}

/// Форматирует целое неотрицательное количество: `123456` -> `1,23,456`
///
/// Дробная часть (даже нулевая) и любые невалидные строки - [`FormatError::InvalidInput`].
pub fn format_count<A: IntoAmount>(value: A) -> Result<String, FormatError> {
    let amount = value.into_amount()?;
    if amount.has_fraction() {
        return Err(FormatError::InvalidInput(format!(
            "count must be a whole number: '{amount}'"
        )));
    }

    Ok(group_digits(amount.integer_digits()))
}

/// Форматирует сумму в крорах: `1234.5` -> `₹1,234.50 Cr`
///
/// Сумма уже должна быть в крорах, перевод из рупий - [`crate::Amount::in_crores`].
/// Дробная часть обрезается до двух знаков без округления.
pub fn format_currency<A: IntoAmount>(value: A) -> Result<String, FormatError> {
    let rupees = format_rupees(value)?;
    Ok(format!("{rupees}{CRORE_SUFFIX}"))
}

/// То же, что [`format_currency`], но без подписи единиц: `1234.5` -> `₹1,234.50`
///
/// Используется для средних сумм платежа, которые не пересчитываются в кроры.
pub fn format_rupees<A: IntoAmount>(value: A) -> Result<String, FormatError> {
    let amount = value.into_amount()?;
    let integer = group_digits(amount.integer_digits());
    let fraction = two_fraction_digits(amount.fraction_digits());

    Ok(format!("{RUPEE_SIGN}{integer}.{fraction}"))
}

/// Подставляет [`PLACEHOLDER`] вместо ошибки форматирования
pub fn or_placeholder(result: Result<String, FormatError>) -> String {
    result.unwrap_or_else(|_| PLACEHOLDER.to_string())
}
