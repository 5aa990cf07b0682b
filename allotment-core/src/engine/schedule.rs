//! Sticky-pairing bench scheduler.
//!
//! Each round picks the two largest remaining cohorts and keeps them as
//! bench partners (primary on even seats, secondary on odd seats) until one
//! side runs dry, then re-ranks. Pure round-robin would scatter a cohort
//! across distant benches; greedy packing would produce long same-cohort
//! runs. Holding the pair fixed keeps every bench alternating between
//! exactly two cohorts without a new cohort surfacing on every bench.

use crate::model::{Bench, Cohort, Seat};
use std::collections::VecDeque;

struct WorkingCohort {
    name: String,
    students: VecDeque<String>,
}

/// Flat bench sequence plus whatever rosters remain unseated.
pub struct ScheduleOutcome {
    pub benches: Vec<Bench>,
    pub residual: Vec<Cohort>,
}

/// Seat cohorts onto at most `total_benches` benches of `students_per_bench`
/// seats each.
///
/// Ranking sorts by remaining roster size, largest first; the sort is stable,
/// so equal-sized cohorts keep their map order. Scheduling stops the moment
/// the bench budget is spent, leaving the rest as residual.
pub fn schedule_benches(
    cohorts: Vec<Cohort>,
    students_per_bench: usize,
    total_benches: usize,
) -> ScheduleOutcome {
    let mut working: Vec<WorkingCohort> = cohorts
        .into_iter()
        .map(|cohort| WorkingCohort {
            name: cohort.name,
            students: cohort.roster.into(),
        })
        .collect();
    let mut benches: Vec<Bench> = Vec::new();

    while benches.len() < total_benches {
        let mut ranked: Vec<usize> = (0..working.len())
            .filter(|&index| !working[index].students.is_empty())
            .collect();
        ranked.sort_by_key(|&index| std::cmp::Reverse(working[index].students.len()));

        let Some(&primary) = ranked.first() else {
            break;
        };
        let secondary = ranked.get(1).copied();

        // Sticky pairing: this pair stays together until one side is exhausted
        // or the bench budget runs out.
        loop {
            if benches.len() >= total_benches {
                return finish(benches, working);
            }
            if working[primary].students.is_empty() {
                break;
            }
            if let Some(index) = secondary {
                if working[index].students.is_empty() {
                    break;
                }
            }

            let mut seats = Vec::with_capacity(students_per_bench);
            for seat_index in 0..students_per_bench {
                let source = if seat_index % 2 == 0 {
                    Some(primary)
                } else {
                    secondary
                };
                let seat = source
                    .and_then(|index| working[index].students.pop_front())
                    .map_or(Seat::Empty, Seat::Student);
                seats.push(seat);
            }
            benches.push(Bench { seats });
        }
    }

    finish(benches, working)
}

fn finish(benches: Vec<Bench>, working: Vec<WorkingCohort>) -> ScheduleOutcome {
    let residual = working
        .into_iter()
        .filter(|cohort| !cohort.students.is_empty())
        .map(|cohort| Cohort {
            name: cohort.name,
            roster: cohort.students.into_iter().collect(),
        })
        .collect();
    ScheduleOutcome { benches, residual }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cohort(name: &str, roster: &[&str]) -> Cohort {
        Cohort {
            name: name.to_string(),
            roster: roster.iter().map(|usn| usn.to_string()).collect(),
        }
    }

    fn seats(bench: &Bench) -> Vec<&str> {
        bench.seats.iter().map(Seat::as_str).collect()
    }

    #[test]
    fn two_cohorts_alternate_on_every_bench() {
        let cohorts = vec![
            cohort("A", &["A001", "A002", "A003"]),
            cohort("B", &["B001", "B002"]),
        ];
        let outcome = schedule_benches(cohorts, 2, 3);
        assert_eq!(outcome.benches.len(), 3);
        assert_eq!(seats(&outcome.benches[0]), vec!["A001", "B001"]);
        assert_eq!(seats(&outcome.benches[1]), vec!["A002", "B002"]);
        assert_eq!(seats(&outcome.benches[2]), vec!["A003", "---"]);
        assert!(outcome.residual.is_empty());
    }

    #[test]
    fn lone_cohort_leaves_odd_seats_empty() {
        let outcome = schedule_benches(vec![cohort("C", &["C001", "C002"])], 3, 4);
        assert_eq!(outcome.benches.len(), 1);
        assert_eq!(seats(&outcome.benches[0]), vec!["C001", "---", "C002"]);
        assert!(outcome.residual.is_empty());
    }

    #[test]
    fn bench_budget_caps_output_and_leaves_residual() {
        let outcome = schedule_benches(
            vec![cohort("C", &["C001", "C002", "C003", "C004"])],
            2,
            1,
        );
        // A lone cohort only occupies even seats, so one bench seats one student.
        assert_eq!(outcome.benches.len(), 1);
        assert_eq!(seats(&outcome.benches[0]), vec!["C001", "---"]);
        assert_eq!(outcome.residual.len(), 1);
        assert_eq!(outcome.residual[0].roster, vec!["C002", "C003", "C004"]);
    }

    #[test]
    fn pairing_is_sticky_until_exhaustion() {
        let cohorts = vec![
            cohort("A", &["A001", "A002", "A003", "A004"]),
            cohort("B", &["B001", "B002"]),
            cohort("C", &["C001", "C002"]),
        ];
        let outcome = schedule_benches(cohorts, 2, 10);
        // First run pairs A with B (declaration order breaks the B/C tie)
        // and no bench in that run touches C.
        assert_eq!(seats(&outcome.benches[0]), vec!["A001", "B001"]);
        assert_eq!(seats(&outcome.benches[1]), vec!["A002", "B002"]);
        // B exhausted; the re-rank pairs the A remainder with C.
        assert_eq!(seats(&outcome.benches[2]), vec!["A003", "C001"]);
        assert_eq!(seats(&outcome.benches[3]), vec!["A004", "C002"]);
        assert!(outcome.residual.is_empty());
    }

    #[test]
    fn secondary_exhausting_mid_bench_fills_with_empty_seats() {
        let cohorts = vec![
            cohort("A", &["A001", "A002", "A003"]),
            cohort("B", &["B001"]),
        ];
        let outcome = schedule_benches(cohorts, 4, 5);
        // One bench drains B; A continues alone afterwards.
        assert_eq!(seats(&outcome.benches[0]), vec!["A001", "B001", "A002", "---"]);
        assert_eq!(seats(&outcome.benches[1]), vec!["A003", "---", "---", "---"]);
        assert!(outcome.residual.is_empty());
    }

    #[test]
    fn every_bench_has_the_declared_seat_count() {
        let cohorts = vec![
            cohort("A", &["A001", "A002", "A003", "A004", "A005"]),
            cohort("B", &["B001", "B002", "B003"]),
        ];
        let outcome = schedule_benches(cohorts, 3, 20);
        for bench in &outcome.benches {
            assert_eq!(bench.seats.len(), 3);
        }
    }

    #[test]
    fn no_students_means_no_benches() {
        let outcome = schedule_benches(Vec::new(), 2, 5);
        assert!(outcome.benches.is_empty());
        assert!(outcome.residual.is_empty());
    }
}
