//! Cohort construction from prefix/range definitions.

use crate::error::AllotmentError;
use crate::model::{Cohort, CohortSpec};
use std::collections::{BTreeMap, BTreeSet};

/// Rosters in declaration order plus the excluded-identifier report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCohorts {
    pub cohorts: Vec<Cohort>,
    pub skipped: BTreeMap<String, Vec<String>>,
}

/// Trim and uppercase a cohort name. Idempotent.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn identifier(prefix: &str, number: i64) -> String {
    format!("{prefix}{number:03}")
}

/// Expand every cohort definition into an ordered, exclusion-filtered roster.
///
/// Definitions whose name is empty after normalization are skipped. A name
/// declared twice keeps its first position but takes the later roster.
pub fn build_cohorts(specs: &[CohortSpec]) -> Result<BuiltCohorts, AllotmentError> {
    let mut cohorts: Vec<Cohort> = Vec::new();
    let mut skipped = BTreeMap::new();

    for spec in specs {
        let name = normalize_name(&spec.name);
        if name.is_empty() {
            continue;
        }
        if spec.start > spec.end {
            return Err(AllotmentError::MalformedCohort {
                name,
                reason: format!("start {} is greater than end {}", spec.start, spec.end),
            });
        }

        let excluded = parse_skip_list(&name, spec)?;
        let roster: Vec<String> = (spec.start..=spec.end)
            .map(|number| identifier(&spec.prefix, number))
            .filter(|usn| !excluded.contains(usn))
            .collect();

        if !excluded.is_empty() {
            skipped.insert(name.clone(), excluded.iter().cloned().collect());
        }
        upsert(&mut cohorts, Cohort { name, roster });
    }

    Ok(BuiltCohorts { cohorts, skipped })
}

fn parse_skip_list(name: &str, spec: &CohortSpec) -> Result<BTreeSet<String>, AllotmentError> {
    let mut excluded = BTreeSet::new();
    let Some(skip) = spec.skip.as_deref() else {
        return Ok(excluded);
    };
    for token in skip.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let number: i64 = token.parse().map_err(|_| AllotmentError::MalformedCohort {
            name: name.to_string(),
            reason: format!("skip entry '{token}' is not an integer"),
        })?;
        excluded.insert(identifier(&spec.prefix, number));
    }
    Ok(excluded)
}

fn upsert(cohorts: &mut Vec<Cohort>, cohort: Cohort) {
    match cohorts.iter_mut().find(|existing| existing.name == cohort.name) {
        Some(existing) => existing.roster = cohort.roster,
        None => cohorts.push(cohort),
    }
}
