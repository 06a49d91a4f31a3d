pub mod error;
pub mod model;
pub mod indian;
pub mod table;

mod utils;

pub use crate::model::{Amount, IntoAmount, CRORE_DIGITS};
pub use crate::indian::{
    format_count, format_currency, format_rupees, or_placeholder, CRORE_SUFFIX, PLACEHOLDER,
    RUPEE_SIGN,
};
pub use crate::table::{ApplyReport, CellStyle, ColumnRule, Table};
pub use crate::error::FormatError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Amount>();
        assert_send_sync::<Table>();
    }
}
