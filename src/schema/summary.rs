use std::fmt;

use super::Community;

/// Totals over a grouped sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub communities: usize,
    pub classes: usize,
    /// Classes with more than one weekly meeting pattern.
    pub multi_meeting_classes: usize,
}

impl Summary {
    pub fn of(communities: &[Community]) -> Self {
        let classes = communities.iter().flat_map(|c| c.classes.iter());
        Self {
            communities: communities.len(),
            classes: classes.clone().count(),
            multi_meeting_classes: classes.filter(|c| c.meeting_times.is_some()).count(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} communities, {} classes ({} with multiple meetings)",
            self.communities, self.classes, self.multi_meeting_classes
        )
    }
}

fn or_na(v: Option<&str>) -> &str {
    v.unwrap_or("N/A")
}

/// Multi-line console description of one community and its first class.
pub fn describe(community: &Community) -> String {
    let h = &community.header;
    let mut out = format!(
        "  Cluster Call #: {}\n  Community: {}\n  College: {}\n  Course: {}\n  Number of classes: {}\n",
        h.cluster_call_number,
        or_na(h.communities.as_deref()),
        or_na(h.college.as_deref()),
        or_na(h.course.as_deref()),
        community.classes.len(),
    );
    if let Some(first) = community.classes.first() {
        out.push_str(&format!(
            "  First class:\n    - {} {} Section {} ({})\n      {}\n      {} {}-{}\n",
            first.subject,
            first.catalog_number,
            first
                .section
                .map_or_else(|| "N/A".to_string(), |s| s.to_string()),
            or_na(first.component.as_deref()),
            or_na(first.title.as_deref()),
            or_na(first.days.as_deref()),
            or_na(first.meet_time_start.as_deref()),
            or_na(first.meet_time_end.as_deref()),
        ));
    }
    out
}
