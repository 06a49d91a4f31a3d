use std::fmt;
use std::str::FromStr;
use crate::error::FormatError;
use crate::utils::{split_amount, strip_leading_zeros};

/// Количество десятичных знаков в одном кроре (1 Cr = 10^7)
pub const CRORE_DIGITS: usize = 7;

/// Неотрицательное десятичное число, хранящееся в виде строки цифр.
///
/// Хранение в строках, а не в `f64`, нужно для того, чтобы группировка разрядов
/// не получала "хвостов" от двоичного округления.
///
/// Пример использования:
/// ```
/// use formatter::Amount;
///
/// let amount: Amount = "1234.5".parse()?;
/// assert_eq!(amount.integer_digits(), "1234");
/// assert_eq!(amount.fraction_digits(), Some("5"));
/// # Ok::<(), formatter::FormatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount {
    /// целая часть, без ведущих нулей (кроме единственного "0")
    integer: String,
    /// дробная часть, если во входе была точка
    fraction: Option<String>,
}

impl Amount {
    /// Разбирает строку вида `цифры[.цифры]`
    ///
    /// Пустая строка даёт ноль, знак, лишние точки и прочие символы - [`FormatError::InvalidInput`]
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        let (integer, fraction) = split_amount(raw)?;
        Ok(Amount { integer, fraction })
    }

    /// Ноль без дробной части
    pub fn zero() -> Self {
        Amount { integer: "0".to_string(), fraction: None }
    }

    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    pub fn fraction_digits(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// Есть ли у числа дробная часть (даже нулевая, как в "12.0")
    pub fn has_fraction(&self) -> bool {
        self.fraction.is_some()
    }

    /// Равно ли число нулю: "0", "0.000" и пустой ввод - ноль
    pub fn is_zero(&self) -> bool {
        self.integer == "0"
            && self
                .fraction
                .as_deref()
                .is_none_or(|f| f.bytes().all(|b| b == b'0'))
    }

    /// Переводит сумму в рупиях в кроры сдвигом десятичной точки на 7 знаков влево.
    ///
    /// Деление точное: цифры не теряются, только переезжают в дробную часть.
    pub fn in_crores(&self) -> Amount {
        if self.is_zero() {
            return Amount::zero();
        }
        self.shift_point_left(CRORE_DIGITS)
    }

    fn shift_point_left(&self, places: usize) -> Amount {
        let fraction = self.fraction.as_deref().unwrap_or("");

        // "0" в целой части не должен попасть в дробную как значащая цифра
        let integer = if self.integer == "0" { "" } else { self.integer.as_str() };

        let (int_part, moved) = if integer.len() > places {
            integer.split_at(integer.len() - places)
        } else {
            ("", integer)
        };

        let pad = places.saturating_sub(integer.len());
        let mut new_fraction = String::with_capacity(pad + moved.len() + fraction.len());
        new_fraction.extend(std::iter::repeat_n('0', pad));
        new_fraction.push_str(moved);
        new_fraction.push_str(fraction);

        // хвостовые нули дробной части ничего не меняют, но раздувают строку
        let trimmed = new_fraction.trim_end_matches('0');

        Amount {
            integer: strip_leading_zeros(int_part),
            fraction: if trimmed.is_empty() { None } else { Some(trimmed.to_string()) },
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

impl FromStr for Amount {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s)
    }
}

macro_rules! amount_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount {
                fn from(value: $t) -> Self {
                    Amount { integer: value.to_string(), fraction: None }
                }
            }
        )*
    };
}

amount_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fraction {
            Some(frac) => write!(f, "{}.{}", self.integer, frac),
            None => write!(f, "{}", self.integer),
        }
    }
}

/// Всё, что можно превратить в [`Amount`]: строки и беззнаковые целые.
///
/// Знаковые целые и числа с плавающей точкой намеренно не поддерживаются.
pub trait IntoAmount {
    fn into_amount(self) -> Result<Amount, FormatError>;
}

impl IntoAmount for Amount {
    fn into_amount(self) -> Result<Amount, FormatError> {
        Ok(self)
    }
}

impl IntoAmount for &Amount {
    fn into_amount(self) -> Result<Amount, FormatError> {
        Ok(self.clone())
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> Result<Amount, FormatError> {
        Amount::parse(self)
    }
}

impl IntoAmount for &String {
    fn into_amount(self) -> Result<Amount, FormatError> {
        Amount::parse(self)
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> Result<Amount, FormatError> {
        Amount::parse(&self)
    }
}

macro_rules! into_amount_unsigned {
    ($($t:ty),*) => {
        $(
            impl IntoAmount for $t {
                fn into_amount(self) -> Result<Amount, FormatError> {
                    Ok(Amount::from(self))
                }
            }
        )*
    };
}

into_amount_unsigned!(u8, u16, u32, u64, u128, usize);
