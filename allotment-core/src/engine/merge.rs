//! Common-paper group merging.
//!
//! Cohorts that share a question paper must sit as one seating identity, so
//! their rosters are concatenated (never interleaved) before scheduling.

use crate::error::AllotmentError;
use crate::model::Cohort;
use std::collections::HashSet;

/// Split the grouping directive into uppercase member lists.
///
/// Groups are separated by `;`, members by `,`; blank fragments are dropped.
pub fn parse_common_groups(directive: &str) -> Vec<Vec<String>> {
    directive
        .to_uppercase()
        .split(';')
        .filter_map(|group| {
            let members: Vec<String> = group
                .split(',')
                .map(str::trim)
                .filter(|member| !member.is_empty())
                .map(str::to_string)
                .collect();
            if members.is_empty() {
                None
            } else {
                Some(members)
            }
        })
        .collect()
}

/// Apply the grouping directive and produce the final seating cohorts.
///
/// Each valid group (two or more members, all defined) becomes one cohort
/// named after its first member, the roster being the concatenation of the
/// member rosters in group order, each member roster sorted ascending first.
/// Cohorts untouched by any group pass through with their rosters sorted.
/// A member already consumed by an earlier group is skipped (first-group-wins).
pub fn merge_common_papers(
    mut cohorts: Vec<Cohort>,
    groups: &[Vec<String>],
) -> Result<Vec<Cohort>, AllotmentError> {
    let defined: HashSet<String> = cohorts.iter().map(|cohort| cohort.name.clone()).collect();
    for group in groups.iter().filter(|group| group.len() >= 2) {
        for member in group {
            if !defined.contains(member) {
                return Err(AllotmentError::UnknownGroupMember {
                    group: group[0].clone(),
                    member: member.clone(),
                });
            }
        }
    }

    let mut consumed: HashSet<String> = HashSet::new();
    let mut output: Vec<Cohort> = Vec::new();

    for group in groups.iter().filter(|group| group.len() >= 2) {
        let mut roster = Vec::new();
        let mut took_any = false;
        for member in group {
            if !consumed.insert(member.clone()) {
                continue;
            }
            if let Some(source) = cohorts.iter_mut().find(|cohort| &cohort.name == member) {
                let mut part = std::mem::take(&mut source.roster);
                part.sort();
                roster.extend(part);
                took_any = true;
            }
        }
        if took_any {
            output.push(Cohort {
                name: group[0].clone(),
                roster,
            });
        }
    }

    for mut cohort in cohorts {
        if consumed.contains(&cohort.name) {
            continue;
        }
        cohort.roster.sort();
        output.push(cohort);
    }

    Ok(output)
}
