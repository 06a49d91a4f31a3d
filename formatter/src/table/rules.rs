use std::fmt;
use std::str::FromStr;
use crate::error::FormatError;
use crate::indian::{format_count, format_currency, format_rupees};
use crate::model::Amount;

/// Как форматировать значения колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// количество (транзакции, пользователи, открытия приложения)
    Count,
    /// сумма, уже переведённая в кроры
    Crore,
    /// сумма в рупиях, переводится в кроры перед форматированием
    RupeesToCrore,
    /// сумма в рупиях без подписи единиц (средний платёж)
    Rupees,
}

impl CellStyle {
    /// Форматирует одно значение ячейки
    pub fn format(self, raw: &str) -> Result<String, FormatError> {
        match self {
            CellStyle::Count => format_count(raw),
            CellStyle::Crore => format_currency(raw),
            CellStyle::RupeesToCrore => {
                let amount = Amount::parse(raw)?;
                format_currency(amount.in_crores())
            }
            CellStyle::Rupees => format_rupees(raw),
        }
    }
}

impl FromStr for CellStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "count" => Ok(CellStyle::Count),
            "crore" | "cr" => Ok(CellStyle::Crore),
            "rupees-to-crore" => Ok(CellStyle::RupeesToCrore),
            "rupees" | "inr" => Ok(CellStyle::Rupees),
            other => Err(FormatError::BadRule(format!("unknown cell style: '{other}'"))),
        }
    }
}

impl fmt::Display for CellStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellStyle::Count => write!(f, "count"),
            CellStyle::Crore => write!(f, "crore"),
            CellStyle::RupeesToCrore => write!(f, "rupees-to-crore"),
            CellStyle::Rupees => write!(f, "rupees"),
        }
    }
}

/// Правило форматирования одной колонки: `колонка=стиль`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRule {
    /// заголовок колонки, как в CSV
    pub column: String,
    pub style: CellStyle,
}

impl ColumnRule {
    /// Go to [`ColumnRule`]
    pub fn new(column: impl Into<String>, style: CellStyle) -> Self {
        ColumnRule { column: column.into(), style }
    }
}

impl FromStr for ColumnRule {
    type Err = FormatError;

    /// Разбирает правило по последнему `=`, чтобы в заголовке мог встретиться знак равенства
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, style) = s
            .rsplit_once('=')
            .ok_or_else(|| FormatError::BadRule(format!("expected COLUMN=STYLE, got '{s}'")))?;

        let column = column.trim();
        if column.is_empty() {
            return Err(FormatError::BadRule(format!("empty column name in rule '{s}'")));
        }

        Ok(ColumnRule::new(column, style.parse()?))
    }
}
