//! Number formatting for chart labels and tooltips

/// Число с разделителем тысяч (пробел) и заданным количеством знаков после точки
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    let len = integer_part.len();
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Whole numbers (counts) without decimals, everything else as money
pub fn format_chart_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format_number_with_decimals(value, 0)
    } else {
        format_money(value)
    }
}
