// src/domain/format.rs

/// Euro amount in German notation without cents, e.g. `1.250.000 €`.
/// A non-breaking space sits between amount and sign.
pub fn format_price_eur(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}\u{a0}€")
}

/// Plain number for rooms / m², or a dash when the dataset has none.
pub fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "–".to_string(),
    }
}
