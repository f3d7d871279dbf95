/// Parse a price or area figure that feeds store as a display string, e.g.
/// `"$1,226,600"`, `"1.226.600"`, or `"210,45 m2"`. Returns `None` for
/// anything that does not resolve to a positive finite number (placeholder
/// text such as `"consultar"` included), which excludes the unit upstream.
pub fn parse_amount(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let run = numeric_run(trimmed)?;
    let normalized = normalize_separators(&run);

    match normalized.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Some(amount),
        _ => None,
    }
}

/// First contiguous run of digits and separators, skipping currency symbols
/// and trailing unit suffixes like `m2`.
fn numeric_run(value: &str) -> Option<String> {
    let start = value.find(|c: char| c.is_ascii_digit())?;
    let run: String = value[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    Some(run)
}

/// Collapse thousands separators and settle on `.` as the decimal mark. When
/// both separators appear the rightmost one is the decimal mark; a lone
/// separator followed by exactly three digits is read as a thousands group.
fn normalize_separators(run: &str) -> String {
    let last_dot = run.rfind('.');
    let last_comma = run.rfind(',');

    match (last_dot, last_comma) {
        (Some(dot), Some(comma)) if dot > comma => run.replace(',', ""),
        (Some(_), Some(_)) => run.replace('.', "").replace(',', "."),
        (None, Some(comma)) => normalize_single(run, ',', comma),
        (Some(dot), None) => normalize_single(run, '.', dot),
        (None, None) => run.to_string(),
    }
}

fn normalize_single(run: &str, separator: char, last_index: usize) -> String {
    let trailing_digits = run.len() - last_index - 1;
    let occurrences = run.matches(separator).count();
    if occurrences == 1 && trailing_digits != 3 {
        run.replace(separator, ".")
    } else {
        run.replace(separator, "")
    }
}

/// Render an amount with thousands separators and at most two decimals, for
/// reason strings and outreach text.
pub fn format_amount(value: f64) -> String {
    let rendered = format!("{:.2}", value.abs());
    let (whole, fraction) = match rendered.split_once('.') {
        Some(parts) => parts,
        None => (rendered.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if fraction == "00" {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}
