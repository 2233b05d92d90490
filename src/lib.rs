//! Group a learning-community sheet export into communities with nested classes.
//!
//! Rows whose "Cluster Call #" holds an integer open a community; the class
//! rows after it belong to that community until the next header row.

pub mod process;
pub mod schema;

pub use process::group::group_classes_by_community;
pub use process::raw_row::{CellValue, RawRow};
pub use process::read_rows;
pub use schema::{Community, Config};
