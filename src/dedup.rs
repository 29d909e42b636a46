/*! Duplicate ILI detection

Direct (`equal`) links are expected to be one-to-one.
When several IndoWordNet synsets reach the same ILI through direct links, the alignment is ambiguous:
*every* member of the group is relabeled [Relation::Dupe] and the group is reported.
!*/
use std::collections::HashMap;

use itertools::Itertools;
use log::info;

use crate::error::Error;
use crate::issues::{DuplicateIli, DuplicateMember, Issues};
use crate::record::{Record, Relation};
use crate::resolve::Resolver;
use crate::wordnet::Wordnet;

/// A set of records sharing an ILI, as indices into the record slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DupeGroup {
    pub ili: String,
    /// Ordered by numeric IWN id.
    pub members: Vec<usize>,
}

/// Order records by the numeric value of their IWN id.
///
/// Non-numeric ids come first, ordered as text.
fn member_order(records: &[Record], a: usize, b: usize) -> std::cmp::Ordering {
    let (a, b) = (&records[a], &records[b]);
    (a.numeric_id(), &a.iwn_id).cmp(&(b.numeric_id(), &b.iwn_id))
}

/// Resolve every direct link, then relabel the ones sharing an ILI.
///
/// Records that are already `dupe` are not considered,
/// so running this again on its own output finds no new group.
pub fn detect_and_mark_dupes<W: Wordnet>(
    records: &mut [Record],
    resolver: &Resolver<W>,
    issues: &mut Issues,
) -> Result<Vec<DupeGroup>, Error> {
    for record in records.iter_mut().filter(|r| r.rel == Relation::Equal) {
        resolver.resolve(record, issues)?;
    }

    // keep groups in order of first appearance
    let mut order: Vec<&str> = Vec::new();
    let mut by_ili: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, record) in records.iter().enumerate() {
        if record.rel != Relation::Equal {
            continue;
        }
        if let Some(ili) = record.ili() {
            by_ili
                .entry(ili)
                .or_insert_with(|| {
                    order.push(ili);
                    Vec::new()
                })
                .push(idx);
        }
    }

    let groups: Vec<DupeGroup> = order
        .into_iter()
        .filter_map(|ili| {
            let members = by_ili.remove(ili)?;
            (members.len() > 1).then(|| DupeGroup {
                ili: ili.to_string(),
                members: members
                    .into_iter()
                    .sorted_by(|a, b| member_order(records, *a, *b))
                    .collect(),
            })
        })
        .collect();

    let mut dupe_count = 0;
    for group in &groups {
        let first = &records[group.members[0]];
        issues.duplicate_ili.push(DuplicateIli {
            ili: group.ili.clone(),
            pwn30_key: first.pwn30_key(),
            english_lemmas: first.english_lemmas.clone(),
            english_gloss: first.english_gloss.clone(),
            iwn_entries: group
                .members
                .iter()
                .map(|idx| {
                    let r = &records[*idx];
                    DuplicateMember {
                        iwn_id: r.iwn_id.clone(),
                        hindi_lemmas: r.hindi_lemmas.clone(),
                        hindi_gloss: r.hindi_gloss.clone(),
                    }
                })
                .collect(),
        });

        for idx in &group.members {
            records[*idx].rel = Relation::Dupe;
            dupe_count += 1;
        }
    }

    info!("Detected {} ILIs with multiple IWN mappings", groups.len());
    info!("Marked {} entries as 'dupe'", dupe_count);

    Ok(groups)
}
