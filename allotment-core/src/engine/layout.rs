//! Projection of the flat bench sequence onto the declared room topology.

use crate::error::AllotmentError;
use crate::model::{
    Bench, BenchPlacement, ColumnArrangement, RoomArrangement, RoomSpec,
};

/// A room whose geometry has been validated and resolved to per-column counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPlan {
    pub name: Option<String>,
    pub column_benches: Vec<u32>,
}

impl RoomPlan {
    pub fn total_benches(&self) -> usize {
        self.column_benches.iter().map(|&count| count as usize).sum()
    }
}

/// Validate every room up front so no seating work happens on bad geometry.
pub fn plan_rooms(rooms: &[RoomSpec]) -> Result<Vec<RoomPlan>, AllotmentError> {
    rooms
        .iter()
        .enumerate()
        .map(|(index, room)| {
            Ok(RoomPlan {
                name: room.name.clone(),
                column_benches: column_counts(room, index)?,
            })
        })
        .collect()
}

fn room_label(room: &RoomSpec, index: usize) -> String {
    room.name
        .clone()
        .unwrap_or_else(|| format!("Room {}", index + 1))
}

/// Resolve a room to its per-column bench counts.
///
/// An explicit `benchesInColumns` must match the declared column count and
/// sum to the declared bench total. Without one, benches split as evenly as
/// possible with the remainder going to the earliest columns, one extra each.
pub fn column_counts(room: &RoomSpec, index: usize) -> Result<Vec<u32>, AllotmentError> {
    if room.benches == 0 {
        return Err(AllotmentError::MalformedRoom {
            name: room_label(room, index),
            reason: "bench count must be greater than 0".to_string(),
        });
    }
    if room.class_columns == 0 {
        return Err(AllotmentError::MalformedRoom {
            name: room_label(room, index),
            reason: "column count must be greater than 0".to_string(),
        });
    }

    // An empty explicit list means "use the even split", matching absence.
    let explicit = room
        .benches_in_columns
        .as_ref()
        .filter(|counts| !counts.is_empty());
    if let Some(counts) = explicit {
        if counts.len() != room.class_columns as usize {
            return Err(AllotmentError::MalformedRoom {
                name: room_label(room, index),
                reason: format!(
                    "{} column bench counts declared for {} columns",
                    counts.len(),
                    room.class_columns
                ),
            });
        }
        let sum: u32 = counts.iter().sum();
        if sum != room.benches {
            return Err(AllotmentError::MalformedRoom {
                name: room_label(room, index),
                reason: format!(
                    "column bench counts sum to {} but the room declares {} benches",
                    sum, room.benches
                ),
            });
        }
        return Ok(counts.clone());
    }

    let base = room.benches / room.class_columns;
    let remainder = room.benches % room.class_columns;
    Ok((0..room.class_columns)
        .map(|column| base + u32::from(column < remainder))
        .collect())
}

/// Slice the flat bench sequence into rooms and columns.
///
/// Bench numbering restarts at 1 for every room. Slicing stops as soon as the
/// flat sequence is exhausted; surplus rooms and columns are omitted.
pub fn project_rooms(benches: &[Bench], plans: &[RoomPlan]) -> Vec<RoomArrangement> {
    let mut arrangements = Vec::new();
    let mut next_bench = 0usize;

    for plan in plans {
        if next_bench >= benches.len() {
            break;
        }
        let mut bench_number = 1u32;
        let mut columns = Vec::new();

        for (column_index, &count) in plan.column_benches.iter().enumerate() {
            if next_bench >= benches.len() {
                break;
            }
            let mut seating_plan = Vec::new();
            for _ in 0..count {
                if next_bench >= benches.len() {
                    break;
                }
                seating_plan.push(BenchPlacement {
                    bench_number,
                    seats: benches[next_bench].seats.clone(),
                });
                next_bench += 1;
                bench_number += 1;
            }
            if !seating_plan.is_empty() {
                columns.push(ColumnArrangement {
                    name: format!(
                        "Column {} ({} Benches)",
                        column_index + 1,
                        seating_plan.len()
                    ),
                    seating_plan,
                });
            }
        }

        if !columns.is_empty() {
            arrangements.push(RoomArrangement {
                room_name: plan
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("Room {}", arrangements.len() + 1)),
                arrangement_by_column: columns,
            });
        }
    }

    arrangements
}
