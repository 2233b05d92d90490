use crate::process::raw_row::CellValue;

/// 1) Trim whitespace + strip outer quotes if present.
pub fn clean_str(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// 2) Missing and NaN-like cells collapse to `None`; everything else is passed through.
pub fn clean_value(value: &CellValue) -> Option<&CellValue> {
    match value {
        CellValue::Missing => None,
        CellValue::Number(n) if n.is_nan() => None,
        other => Some(other),
    }
}

/// 3) Integer coercion through a float intermediate, so `"12.0"` → `12`.
/// Anything that doesn't coerce is simply `None`.
pub fn coerce_int(value: &CellValue) -> Option<i64> {
    match clean_value(value)? {
        CellValue::Number(n) => float_to_int(*n),
        CellValue::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(float_to_int))
        }
        CellValue::Time(_) | CellValue::Missing => None,
    }
}

fn float_to_int(n: f64) -> Option<i64> {
    if !n.is_finite() {
        return None;
    }
    let t = n.trunc();
    if t < i64::MIN as f64 || t >= i64::MAX as f64 {
        return None;
    }
    Some(t as i64)
}

/// 4) Infer a cell from a cleaned CSV field: numbers become `Number`, the rest stays text.
pub fn infer_cell_from_str(s: &str, na_values: &[String]) -> CellValue {
    if s.is_empty() || na_values.iter().any(|na| na == s) {
        return CellValue::Missing;
    }
    match s.parse::<f64>() {
        // "inf"/"nan" spellings parse as floats too; keep them as text
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::Text(s.to_string()),
    }
}
