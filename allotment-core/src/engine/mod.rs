//! The seat-allotment pipeline.
//!
//! Data flows strictly forward: cohort building, common-paper merging,
//! sticky-pairing scheduling, topology projection, residual reporting.
//! The first validation failure aborts the whole run.

pub mod cohort;
pub mod layout;
pub mod merge;
pub mod report;
pub mod schedule;

use crate::error::AllotmentError;
use crate::model::{AllotmentRequest, SeatingPlan};

/// Run the full pipeline over one request.
pub fn generate_allotment(request: &AllotmentRequest) -> Result<SeatingPlan, AllotmentError> {
    if request.branch_details.is_empty() {
        return Err(AllotmentError::MissingInput(
            "at least one cohort must be defined".to_string(),
        ));
    }
    if request.room_configurations.is_empty() {
        return Err(AllotmentError::MissingInput(
            "at least one room must be defined".to_string(),
        ));
    }
    if request.students_per_bench <= 0 {
        return Err(AllotmentError::MissingInput(
            "students per bench must be greater than 0".to_string(),
        ));
    }
    let students_per_bench = request.students_per_bench as usize;

    let built = cohort::build_cohorts(&request.branch_details)?;
    let groups = merge::parse_common_groups(&request.common_paper_groups);
    let cohorts = merge::merge_common_papers(built.cohorts, &groups)?;

    let plans = layout::plan_rooms(&request.room_configurations)?;
    let total_benches: usize = plans.iter().map(layout::RoomPlan::total_benches).sum();

    let outcome = schedule::schedule_benches(cohorts, students_per_bench, total_benches);
    let room_arrangements = layout::project_rooms(&outcome.benches, &plans);

    Ok(SeatingPlan {
        student_seat_headers: (1..=students_per_bench)
            .map(|seat| format!("Seat {seat}"))
            .collect(),
        room_arrangements,
        skipped_students: built.skipped,
        unseated_students: report::unseated_report(&outcome.residual),
    })
}
