use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// One untyped spreadsheet cell, as handed over by the row source.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    /// A typed time-of-day cell.
    Time(NaiveTime),
    Missing,
}

impl CellValue {
    /// Render the cell as plain text.
    /// Integral numbers drop their fractional part (`1500.0` → `"1500"`).
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Time(t) => format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second()),
            CellValue::Missing => String::new(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<NaiveTime> for CellValue {
    fn from(t: NaiveTime) -> Self {
        CellValue::Time(t)
    }
}

/// `sentToReg` passes through untouched, so cells need a JSON shape of their own.
impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                serializer.serialize_i64(*n as i64)
            }
            CellValue::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            CellValue::Number(_) | CellValue::Missing => serializer.serialize_none(),
            CellValue::Time(_) => serializer.serialize_str(&self.to_text()),
        }
    }
}

/// A single sheet row: column name → cell.
/// Looking up a column the sheet doesn't have behaves like an empty cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: BTreeMap<String, CellValue>,
}

static MISSING: CellValue = CellValue::Missing;

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Builder-style insert, handy when assembling rows by hand.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&MISSING)
    }

    /// Column names in sorted order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_column_reads_as_missing() {
        let row = RawRow::new().with("Subject", "ENG");
        assert_eq!(row.get("Subject"), &CellValue::Text("ENG".into()));
        assert_eq!(row.get("Catalog #"), &CellValue::Missing);
    }

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(CellValue::Number(1500.0).to_text(), "1500");
        assert_eq!(CellValue::Number(2.5).to_text(), "2.5");
        let t = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(CellValue::Time(t).to_text(), "09:05:00");
    }

    #[test]
    fn opaque_cells_serialize_naturally() {
        let json = serde_json::to_string(&vec![
            CellValue::Text("yes".into()),
            CellValue::Number(3.0),
            CellValue::Number(0.5),
            CellValue::Time(NaiveTime::from_hms_opt(13, 0, 0).unwrap()),
        ])
        .unwrap();
        assert_eq!(json, r#"["yes",3,0.5,"13:00:00"]"#);
    }
}
