use tracing::trace;

use crate::process::meetings::reconcile_meetings;
use crate::process::raw_row::RawRow;
use crate::process::utils::coerce_int;
use crate::schema::aliases::{resolve, Config};
use crate::schema::types::{ClassRecord, CommunityHeader};

/// Text of the first present alias.
fn text_field(row: &RawRow, aliases: &[String]) -> Option<String> {
    resolve(row, aliases).map(|v| v.to_text())
}

/// Integer of the first present alias; a cell that doesn't coerce is `None`.
fn int_field(row: &RawRow, aliases: &[String]) -> Option<i64> {
    resolve(row, aliases).and_then(coerce_int)
}

/// Pull a class record out of `row`.
/// Returns `None` when class number, subject or catalog number is missing.
/// A class number that is present but not numeric still yields a record,
/// just without `classNumber`.
pub fn extract_class(row: &RawRow, cfg: &Config) -> Option<ClassRecord> {
    let cols = &cfg.columns;

    let class_number = resolve(row, &cols.class_number);
    let subject = text_field(row, &cols.subject);
    let catalog_number = text_field(row, &cols.catalog_number);

    let (class_number, subject, catalog_number) = match (class_number, subject, catalog_number) {
        (Some(n), Some(s), Some(c)) => (coerce_int(n), s, c),
        (n, s, c) => {
            trace!(
                class_number = ?n,
                subject = ?s,
                catalog_number = ?c,
                "not a class row"
            );
            return None;
        }
    };

    let days = text_field(row, &cols.days);
    let meetings = reconcile_meetings(row, days.as_deref(), cfg);

    Some(ClassRecord {
        class_number,
        subject,
        catalog_number,
        section: int_field(row, &cols.section),
        component: text_field(row, &cols.component),
        title: text_field(row, &cols.title),
        meet_time_start: meetings.start,
        meet_time_end: meetings.end,
        days,
        meeting_times: meetings.entries,
    })
}

/// Build the community header for a row whose cluster call number is already known.
pub fn extract_community_header(
    row: &RawRow,
    cluster_call_number: i64,
    cfg: &Config,
) -> CommunityHeader {
    let cols = &cfg.columns;
    CommunityHeader {
        cluster_call_number,
        pfx_num_section: text_field(row, &cols.pfx_num_section),
        college: text_field(row, &cols.college),
        communities: text_field(row, &cols.communities),
        course: text_field(row, &cols.course),
        seats: int_field(row, &cols.seats),
        sent_to_reg: resolve(row, &cols.sent_to_reg).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::raw_row::CellValue;

    fn class_row() -> RawRow {
        RawRow::new()
            .with("Class #", 5012_i64)
            .with("Subject", "ENG")
            .with("Catalog #", "1510")
            .with("Section", "100.0")
            .with("Component", "LEC")
            .with("Title", "Writing and Rhetoric I")
            .with("Days", "MWF")
            .with("Meet Time Start", "09:40:00")
            .with("Meet Time End", "10:35 am")
    }

    #[test]
    fn extracts_typed_class_fields() {
        let rec = extract_class(&class_row(), &Config::default()).unwrap();
        assert_eq!(rec.class_number, Some(5012));
        assert_eq!(rec.subject, "ENG");
        assert_eq!(rec.catalog_number, "1510");
        assert_eq!(rec.section, Some(100));
        assert_eq!(rec.component.as_deref(), Some("LEC"));
        assert_eq!(rec.title.as_deref(), Some("Writing and Rhetoric I"));
        assert_eq!(rec.days.as_deref(), Some("MWF"));
        assert_eq!(rec.meet_time_start.as_deref(), Some("09:40 AM"));
        assert_eq!(rec.meet_time_end.as_deref(), Some("10:35 AM"));
        assert_eq!(rec.meeting_times, None);
    }

    #[test]
    fn older_column_names_resolve() {
        let row = RawRow::new()
            .with("Class Number", "777")
            .with("Subject", "BIOS")
            .with("Catalog Number", "1700L")
            .with("Class Section", 3_i64);
        let rec = extract_class(&row, &Config::default()).unwrap();
        assert_eq!(rec.class_number, Some(777));
        assert_eq!(rec.catalog_number, "1700L");
        assert_eq!(rec.section, Some(3));
    }

    #[test]
    fn numeric_catalog_stays_text() {
        let row = class_row().with("Catalog #", 1500_i64);
        let rec = extract_class(&row, &Config::default()).unwrap();
        assert_eq!(rec.catalog_number, "1500");
    }

    #[test]
    fn missing_required_fields_drop_the_row() {
        let cfg = Config::default();
        for col in ["Class #", "Subject", "Catalog #"] {
            let row = class_row().with(col, CellValue::Missing);
            assert!(extract_class(&row, &cfg).is_none(), "{} missing", col);
        }
        let nan = class_row().with("Class #", f64::NAN);
        assert!(extract_class(&nan, &cfg).is_none());
    }

    #[test]
    fn non_numeric_class_number_keeps_the_row() {
        let row = RawRow::new()
            .with("Class #", "TBA")
            .with("Subject", "ENG")
            .with("Catalog #", "1510");
        let rec = extract_class(&row, &Config::default()).unwrap();
        assert_eq!(rec.class_number, None);
        assert_eq!(rec.subject, "ENG");
        assert_eq!(rec.catalog_number, "1510");

        let v = serde_json::to_value(&rec).unwrap();
        assert!(v.get("classNumber").is_none());
    }

    #[test]
    fn uncoercible_optional_number_is_absent() {
        let row = class_row().with("Section", "A1");
        let rec = extract_class(&row, &Config::default()).unwrap();
        assert_eq!(rec.section, None);
    }

    #[test]
    fn header_fields() {
        let row = RawRow::new()
            .with("Cluster Call #", 12_i64)
            .with("PFX/NUM section\n", "UC 1900 - 101")
            .with("College", "CAS")
            .with("Communities", "Pre-Med")
            .with("Seats", "24.0")
            .with("Sent to Reg", "Y");
        let h = extract_community_header(&row, 12, &Config::default());
        assert_eq!(h.cluster_call_number, 12);
        assert_eq!(h.pfx_num_section.as_deref(), Some("UC 1900 - 101"));
        assert_eq!(h.college.as_deref(), Some("CAS"));
        assert_eq!(h.communities.as_deref(), Some("Pre-Med"));
        assert_eq!(h.course, None);
        assert_eq!(h.seats, Some(24));
        assert_eq!(h.sent_to_reg, Some(CellValue::Text("Y".into())));
    }
}
