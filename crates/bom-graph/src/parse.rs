//! 數值欄位清洗

use std::str::FromStr;

use rust_decimal::Decimal;

/// 解析原始數值欄位
///
/// 去除貨幣符號、千分位與百分號後解析為 Decimal。
/// 回傳 `(值, 是否成功)`：失敗時以 0 代入，呼叫端決定是否記錄。
pub fn parse_numeric(raw: &str) -> (Decimal, bool) {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | '¥' | ',' | '%' | ' '))
        .collect();

    if cleaned.is_empty() {
        return (Decimal::ZERO, false);
    }

    match Decimal::from_str(&cleaned) {
        Ok(value) => (value, true),
        Err(_) => (Decimal::ZERO, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2", Decimal::from(2))]
    #[case("2.5", Decimal::new(25, 1))]
    #[case("$1,234.56", Decimal::new(123456, 2))]
    #[case("  10 % ", Decimal::from(10))]
    #[case("€0.75", Decimal::new(75, 2))]
    #[case("-3", Decimal::from(-3))]
    fn test_parse_ok(#[case] raw: &str, #[case] expected: Decimal) {
        let (value, ok) = parse_numeric(raw);
        assert!(ok);
        assert_eq!(value, expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("N/A")]
    #[case("abc")]
    #[case("$")]
    fn test_parse_fallback_zero(#[case] raw: &str) {
        let (value, ok) = parse_numeric(raw);
        assert!(!ok);
        assert_eq!(value, Decimal::ZERO);
    }
}
