/// Compact cost label: `$0`, `$950`, `$1.2k`.
pub fn format_cost(cost: u64) -> String {
    match cost {
        0 => "$0".to_string(),
        1000.. => format!("${:.1}k", cost as f64 / 1000.0),
        _ => format!("${cost}"),
    }
}

/// Monthly cost label: `Free` or `$1,234`.
pub fn format_monthly(cost: u64) -> String {
    if cost == 0 {
        "Free".to_string()
    } else {
        format!("${}", group_thousands(cost))
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// `+2`, `-1`, or `=` for an unchanged rank.
pub fn format_rank_delta(delta: i64) -> String {
    match delta {
        0 => "=".to_string(),
        d if d > 0 => format!("+{d}"),
        d => d.to_string(),
    }
}
