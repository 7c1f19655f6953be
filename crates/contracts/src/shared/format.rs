//! Number formatting shared by server and browser

const UNITS: [&str; 4] = ["", "mil", "milhões", "bilhões"];

/// Compact value with a Portuguese magnitude suffix and two decimals.
///
/// The value is divided by 1000 until it drops below 1000 (or the largest
/// unit is reached). An empty `prefix` produces no leading space.
///
/// # Examples
/// ```
/// use contracts::shared::format::formata_numero;
/// assert_eq!(formata_numero(950.0, ""), "950.00 ");
/// assert_eq!(formata_numero(1500.0, ""), "1.50 mil");
/// assert_eq!(formata_numero(2_500_000.0, "R$"), "R$ 2.50 milhões");
/// ```
pub fn formata_numero(value: f64, prefix: &str) -> String {
    let mut value = value;
    let mut unit = UNITS[0];
    for (i, candidate) in UNITS.iter().enumerate() {
        unit = candidate;
        if value < 1000.0 || i == UNITS.len() - 1 {
            break;
        }
        value /= 1000.0;
    }

    if prefix.is_empty() {
        format!("{:.2} {}", value, unit)
    } else {
        format!("{} {:.2} {}", prefix, value, unit)
    }
}
