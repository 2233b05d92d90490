//! Single pass over sheet rows, nesting class rows under the most recent header row.

use std::borrow::Borrow;
use tracing::{debug, info, instrument, trace};

use crate::process::classify::{classify_row, RowKind};
use crate::process::extract::{extract_class, extract_community_header};
use crate::process::raw_row::RawRow;
use crate::schema::aliases::Config;
use crate::schema::types::Community;

/// Whether a community is currently collecting classes.
#[derive(Debug)]
enum GroupState {
    NoCommunity,
    Open(Community),
}

/// Accumulator threaded through the fold.
#[derive(Debug)]
struct Grouping {
    state: GroupState,
    finished: Vec<Community>,
    /// Rows seen before the first header.
    orphans: usize,
    /// Rows inside a community that weren't classes.
    skipped: usize,
}

impl Grouping {
    fn new() -> Self {
        Self {
            state: GroupState::NoCommunity,
            finished: Vec::new(),
            orphans: 0,
            skipped: 0,
        }
    }

    fn step(mut self, idx: usize, row: &RawRow, cfg: &Config) -> Self {
        match (classify_row(row, cfg), self.state) {
            (RowKind::Header(cluster_call_number), prev) => {
                if let GroupState::Open(done) = prev {
                    self.finished.push(done);
                }
                let header = extract_community_header(row, cluster_call_number, cfg);
                // a header row can describe a class too
                let classes: Vec<_> = extract_class(row, cfg).into_iter().collect();
                trace!(row = idx, cluster_call_number, "community opened");
                self.state = GroupState::Open(Community { header, classes });
            }
            (RowKind::Ordinary, GroupState::Open(mut community)) => {
                match extract_class(row, cfg) {
                    Some(class) => community.classes.push(class),
                    None => {
                        debug!(row = idx, "row skipped: missing class fields");
                        self.skipped += 1;
                    }
                }
                self.state = GroupState::Open(community);
            }
            (RowKind::Ordinary, GroupState::NoCommunity) => {
                trace!(row = idx, "row before first community, discarded");
                self.orphans += 1;
                self.state = GroupState::NoCommunity;
            }
        }
        self
    }

    fn finish(mut self) -> Vec<Community> {
        if let GroupState::Open(last) = self.state {
            self.finished.push(last);
        }
        let classes: usize = self.finished.iter().map(|c| c.classes.len()).sum();
        info!(
            communities = self.finished.len(),
            classes,
            orphans = self.orphans,
            skipped = self.skipped,
            "grouped rows"
        );
        self.finished
    }
}

/// Group rows (in sheet order) into communities with their nested classes.
///
/// Rows whose cluster-call column holds an integer open a community; rows
/// after it, up to the next such row, contribute classes. Rows before the
/// first community and rows without class number, subject and catalog
/// number are dropped.
#[instrument(level = "debug", skip_all)]
pub fn group_classes_by_community<I>(rows: I, cfg: &Config) -> Vec<Community>
where
    I: IntoIterator,
    I::Item: Borrow<RawRow>,
{
    rows.into_iter()
        .enumerate()
        .fold(Grouping::new(), |acc, (idx, row)| {
            acc.step(idx, row.borrow(), cfg)
        })
        .finish()
}
