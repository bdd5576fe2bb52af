//! Форматирование цен для отображения

use super::config::CURRENCY_PREFIX;

/// Целое число с разделителем тысяч (запятая, как в ja-JP)
///
/// # Примеры
///
/// ```
/// use contracts::shared::number_format::format_number_int;
/// assert_eq!(format_number_int(1234567), "1,234,567");
/// ```
pub fn format_number_int(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Цена в иенах с префиксом валюты: `¥29,980`
pub fn format_yen(price: u32) -> String {
    format!("{}{}", CURRENCY_PREFIX, format_number_int(u64::from(price)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(0), "0");
        assert_eq!(format_number_int(999), "999");
        assert_eq!(format_number_int(1000), "1,000");
        assert_eq!(format_number_int(100000), "100,000");
        assert_eq!(format_number_int(1234567), "1,234,567");
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(29980), "¥29,980");
        assert_eq!(format_yen(5980), "¥5,980");
        assert_eq!(format_yen(0), "¥0");
    }
}
