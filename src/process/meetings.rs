//! Merge several start/end column pairs and `;`-separated day-groups into one
//! ordered list of meeting entries.

use std::collections::HashMap;
use tracing::trace;

use crate::process::raw_row::RawRow;
use crate::process::time_parser::normalize_time;
use crate::schema::aliases::{resolve, Config};
use crate::schema::types::MeetingEntry;

type TimePair = (Option<String>, Option<String>);

/// Reconciled meeting information for one row.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Meetings {
    /// First pair, kept on the record for consumers that only know one meeting.
    pub start: Option<String>,
    pub end: Option<String>,
    /// Set only when two or more distinct pairs were found.
    pub entries: Option<Vec<MeetingEntry>>,
}

fn push_unique(pairs: &mut Vec<TimePair>, pair: TimePair) {
    if pair.0.is_none() && pair.1.is_none() {
        return;
    }
    if !pairs.contains(&pair) {
        pairs.push(pair);
    }
}

/// Lower-cased name of the end column matching a lower-cased start column:
/// "lab time start 2" → "lab time end 2".
fn partner_name(start_lower: &str, start_kw: &str, end_kw: &str) -> Option<String> {
    let pos = start_lower.rfind(start_kw)?;
    Some(format!(
        "{}{}{}",
        &start_lower[..pos],
        end_kw,
        &start_lower[pos + start_kw.len()..]
    ))
}

/// Every distinct (start, end) pair on the row, primary pair first.
fn collect_time_pairs(row: &RawRow, cfg: &Config) -> Vec<TimePair> {
    let cols = &cfg.columns;
    let mc = &cfg.meetings;
    let mut pairs = Vec::new();

    // 1) primary pair through the alias table
    push_unique(
        &mut pairs,
        (
            resolve(row, &cols.meet_time_start).and_then(normalize_time),
            resolve(row, &cols.meet_time_end).and_then(normalize_time),
        ),
    );

    // 2) any "... time ... start" column with its "... time ... end" partner;
    //    row columns come back sorted
    let time_kw = mc.time_keyword.to_ascii_lowercase();
    let start_kw = mc.start_keyword.to_ascii_lowercase();
    let end_kw = mc.end_keyword.to_ascii_lowercase();
    let mut starts = Vec::new();
    let mut ends: HashMap<String, &str> = HashMap::new();
    for name in row.columns() {
        let lower = name.to_ascii_lowercase();
        if !lower.contains(&time_kw) {
            continue;
        }
        if lower.contains(&start_kw) {
            starts.push((name, lower));
        } else if lower.contains(&end_kw) {
            ends.insert(lower, name);
        }
    }
    for (s, lower) in &starts {
        let Some(e) = partner_name(lower, &start_kw, &end_kw).and_then(|k| ends.get(&k)) else {
            trace!(column = %s, "start column without end partner");
            continue;
        };
        push_unique(
            &mut pairs,
            (normalize_time(row.get(s)), normalize_time(row.get(e))),
        );
    }

    // 3) numbered variants of the primary aliases: "Meet Time Start 2", "Meet Time Start2"
    for (s_base, e_base) in cols.meet_time_start.iter().zip(cols.meet_time_end.iter()) {
        for slot in 2..=mc.max_extra_slots + 1 {
            for sep in [" ", ""] {
                let s = format!("{}{}{}", s_base, sep, slot);
                let e = format!("{}{}{}", e_base, sep, slot);
                push_unique(
                    &mut pairs,
                    (normalize_time(row.get(&s)), normalize_time(row.get(&e))),
                );
            }
        }
    }

    pairs
}

/// Reconcile the meeting times of `row`, given its (already resolved) days text.
pub fn reconcile_meetings(row: &RawRow, days: Option<&str>, cfg: &Config) -> Meetings {
    let pairs = collect_time_pairs(row, cfg);

    let (start, end) = pairs.first().cloned().unwrap_or((None, None));
    if pairs.len() < 2 {
        return Meetings {
            start,
            end,
            entries: None,
        };
    }

    let delim = cfg.meetings.day_group_delimiter.as_str();
    let groups: Vec<&str> = match days {
        Some(d) if !delim.is_empty() && d.contains(delim) => d
            .split(delim)
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .collect(),
        _ => Vec::new(),
    };

    let entries: Vec<MeetingEntry> = if groups.is_empty() {
        // one days value shared by every time block
        pairs
            .iter()
            .map(|(s, e)| MeetingEntry {
                days: days.map(str::to_string),
                start: s.clone(),
                end: e.clone(),
            })
            .collect()
    } else {
        let n = groups.len().max(pairs.len());
        (0..n)
            .map(|i| {
                // extra day-groups fall back to the primary pair
                let (s, e) = pairs.get(i).unwrap_or(&pairs[0]).clone();
                MeetingEntry {
                    days: groups.get(i).map(|g| g.to_string()),
                    start: s,
                    end: e,
                }
            })
            .collect()
    };

    trace!(count = entries.len(), "multiple meetings");
    Meetings {
        start,
        end,
        entries: Some(entries),
    }
}
