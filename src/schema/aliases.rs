//! Declarative column-name aliases for every logical field.
//!
//! Sheets exported in different years name the same column differently
//! (`"Class #"` vs `"Class Number"`). Each logical field carries an ordered
//! alias list; the first alias with a non-empty cell wins.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::debug;

use crate::process::raw_row::{CellValue, RawRow};
use crate::process::utils::clean_value;

/// Ordered alias table, one entry per logical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnAliases {
    pub class_number: Vec<String>,
    pub subject: Vec<String>,
    pub catalog_number: Vec<String>,
    pub section: Vec<String>,
    pub component: Vec<String>,
    pub title: Vec<String>,
    pub days: Vec<String>,
    pub meet_time_start: Vec<String>,
    pub meet_time_end: Vec<String>,
    pub cluster_call: Vec<String>,
    pub pfx_num_section: Vec<String>,
    pub college: Vec<String>,
    pub communities: Vec<String>,
    pub course: Vec<String>,
    pub seats: Vec<String>,
    pub sent_to_reg: Vec<String>,
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            // newer exports first, older names after
            class_number: names(&["Class #", "Class Number"]),
            subject: names(&["Subject"]),
            catalog_number: names(&["Catalog #", "Catalog Number"]),
            section: names(&["Section", "Class Section"]),
            component: names(&["Component"]),
            title: names(&["Title"]),
            days: names(&["Days"]),
            meet_time_start: names(&["Meet Time Start"]),
            meet_time_end: names(&["Meet Time End"]),
            cluster_call: names(&["Cluster Call #"]),
            // the sheet's header cell really does end in a line break
            pfx_num_section: names(&["PFX/NUM section\n", "PFX/NUM section"]),
            college: names(&["College"]),
            communities: names(&["Communities"]),
            course: names(&["Course"]),
            seats: names(&["Seats"]),
            sent_to_reg: names(&["Sent to Reg"]),
        }
    }
}

/// First non-absent cell among `aliases`, in priority order.
pub fn resolve<'r>(row: &'r RawRow, aliases: &[String]) -> Option<&'r CellValue> {
    aliases.iter().find_map(|name| clean_value(row.get(name)))
}

/// How extra meeting-time columns and multi-pattern day fields are recognised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingColumns {
    /// Separates day-groups inside one days cell, e.g. `"MWF;TTH"`.
    pub day_group_delimiter: String,
    /// Numbered slots probed beyond the primary pair (`"Meet Time Start 2"` …).
    pub max_extra_slots: usize,
    pub time_keyword: String,
    pub start_keyword: String,
    pub end_keyword: String,
}

impl Default for MeetingColumns {
    fn default() -> Self {
        Self {
            day_group_delimiter: ";".into(),
            max_extra_slots: 4,
            time_keyword: "time".into(),
            start_keyword: "start".into(),
            end_keyword: "end".into(),
        }
    }
}

/// Settings for the CSV row source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Cell texts treated as missing.
    pub na_values: Vec<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            na_values: names(&["NA", "N/A", "NaN", "nan", "NULL", "null", "#N/A", "None"]),
        }
    }
}

/// Everything that can be tuned without touching the grouping logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub columns: ColumnAliases,
    pub meetings: MeetingColumns,
    pub reader: ReaderConfig,
}

impl Config {
    /// Load from a `.yaml`/`.yml` or `.json` file; omitted keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).with_context(|| format!("reading config {:?}", path))?;

        let is_json = path
            .extension()
            .and_then(|s| s.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        let cfg: Config = if is_json {
            serde_json::from_str(&text).with_context(|| format!("parsing {:?}", path))?
        } else {
            serde_yaml::from_str(&text).with_context(|| format!("parsing {:?}", path))?
        };
        debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }
}
