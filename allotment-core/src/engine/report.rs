//! Residual reporting.

use crate::model::Cohort;
use std::collections::BTreeMap;

/// Map each cohort with unseated students to its sorted remainder.
pub fn unseated_report(residual: &[Cohort]) -> BTreeMap<String, Vec<String>> {
    residual
        .iter()
        .filter(|cohort| !cohort.roster.is_empty())
        .map(|cohort| {
            let mut students = cohort.roster.clone();
            students.sort();
            (cohort.name.clone(), students)
        })
        .collect()
}
