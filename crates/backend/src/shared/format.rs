/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```ignore
/// assert_eq!(format_thousands(1234567), "1.234.567");
/// assert_eq!(format_thousands(42), "42");
/// ```
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - head) % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result
}
