use tracing::debug;

use crate::process::raw_row::RawRow;
use crate::process::utils::coerce_int;
use crate::schema::aliases::{resolve, Config};

/// What a single sheet row is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// Opens a new community with this cluster call number.
    Header(i64),
    /// Anything else: a class row, a blank row, or noise.
    Ordinary,
}

/// A row is a community header iff its cluster-call cell coerces to an integer.
/// A non-numeric cluster-call cell (e.g. a repeated title line) makes an ordinary row.
pub fn classify_row(row: &RawRow, cfg: &Config) -> RowKind {
    let Some(cell) = resolve(row, &cfg.columns.cluster_call) else {
        return RowKind::Ordinary;
    };
    match coerce_int(cell) {
        Some(n) => RowKind::Header(n),
        None => {
            debug!(
                value = %cell.to_text(),
                "non-numeric cluster call, treating row as ordinary"
            );
            RowKind::Ordinary
        }
    }
}
