//! Shared allotment domain objects.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Wire representation of a seat nobody could be assigned to.
pub const EMPTY_SEAT_MARKER: &str = "---";

/// One cohort definition as submitted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CohortSpec {
    pub name: String,
    pub prefix: String,
    pub start: i64,
    pub end: i64,
    /// Comma-separated numeric suffixes to exclude from the range.
    #[serde(default)]
    pub skip: Option<String>,
}

/// One room as submitted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomSpec {
    #[serde(default)]
    pub name: Option<String>,
    pub benches: u32,
    pub class_columns: u32,
    /// Explicit per-column bench counts; even split when absent or empty.
    #[serde(default)]
    pub benches_in_columns: Option<Vec<u32>>,
}

/// The full allotment request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AllotmentRequest {
    #[serde(default)]
    pub room_configurations: Vec<RoomSpec>,
    #[serde(default)]
    pub branch_details: Vec<CohortSpec>,
    pub students_per_bench: i64,
    #[serde(default)]
    pub common_paper_groups: String,
}

/// A named group of examinees seated under one seating identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    pub name: String,
    pub roster: Vec<String>,
}

/// A single seat on a bench.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seat {
    Student(String),
    Empty,
}

impl Seat {
    pub fn as_str(&self) -> &str {
        match self {
            Seat::Student(usn) => usn,
            Seat::Empty => EMPTY_SEAT_MARKER,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Seat::Empty)
    }
}

impl Serialize for Seat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One bench in the flat scheduler output, before room placement.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Bench {
    pub seats: Vec<Seat>,
}

/// A bench placed into a room, numbered within that room.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BenchPlacement {
    pub bench_number: u32,
    pub seats: Vec<Seat>,
}

/// A run of benches forming one column of a room.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ColumnArrangement {
    pub name: String,
    pub seating_plan: Vec<BenchPlacement>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RoomArrangement {
    pub room_name: String,
    pub arrangement_by_column: Vec<ColumnArrangement>,
}

/// The final seating plan returned to the caller.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SeatingPlan {
    pub student_seat_headers: Vec<String>,
    pub room_arrangements: Vec<RoomArrangement>,
    pub skipped_students: BTreeMap<String, Vec<String>>,
    pub unseated_students: BTreeMap<String, Vec<String>>,
}
