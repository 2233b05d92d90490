// src/schema/types.rs

use serde::Serialize;

use crate::process::raw_row::CellValue;

/// One weekly meeting pattern of a class.
#[derive(Debug, Serialize, PartialEq, Clone, Eq)]
pub struct MeetingEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// A class row nested under its community.
#[derive(Debug, Serialize, PartialEq, Clone, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    /// Absent when the cell held something non-numeric like `"TBA"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_number: Option<i64>,
    pub subject: String,
    /// Kept as text: catalog numbers like `"1500L"` are alphanumeric.
    pub catalog_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Mirrors the first meeting entry when there are several.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meet_time_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meet_time_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<String>,
    /// Only present when two or more distinct time pairs were found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_times: Option<Vec<MeetingEntry>>,
}

/// Community-level fields from a header ("Cluster Call #") row.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommunityHeader {
    pub cluster_call_number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pfx_num_section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to_reg: Option<CellValue>,
}

/// A header plus the classes that followed it, in sheet order.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Community {
    #[serde(flatten)]
    pub header: CommunityHeader,
    pub classes: Vec<ClassRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_are_omitted() {
        let community = Community {
            header: CommunityHeader {
                cluster_call_number: 12,
                pfx_num_section: None,
                college: Some("Arts".into()),
                communities: None,
                course: None,
                seats: Some(25),
                sent_to_reg: None,
            },
            classes: vec![ClassRecord {
                class_number: Some(1001),
                subject: "ENG".into(),
                catalog_number: "1510".into(),
                section: None,
                component: Some("LEC".into()),
                title: None,
                meet_time_start: Some("09:00 AM".into()),
                meet_time_end: None,
                days: None,
                meeting_times: None,
            }],
        };

        let v = serde_json::to_value(&community).unwrap();
        assert_eq!(
            v,
            json!({
                "clusterCallNumber": 12,
                "college": "Arts",
                "seats": 25,
                "classes": [{
                    "classNumber": 1001,
                    "subject": "ENG",
                    "catalogNumber": "1510",
                    "component": "LEC",
                    "meetTimeStart": "09:00 AM"
                }]
            })
        );
    }
}
