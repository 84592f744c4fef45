//! Palette assembly: exclusion filter, stable dedup, classification,
//! partition, ordering.

use std::collections::HashSet;

use color_triage::{classify, Classification};

use crate::models::{BlacklistMatch, ColorRecord};

/// Remove records matching an excluded value.
///
/// Applied before merging, so deduplication never sees excluded records.
pub fn apply_blacklist(
    records: Vec<ColorRecord>,
    blacklist: &[String],
    mode: BlacklistMatch,
) -> Vec<ColorRecord> {
    if blacklist.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| !is_excluded(record, blacklist, mode))
        .collect()
}

fn is_excluded(record: &ColorRecord, blacklist: &[String], mode: BlacklistMatch) -> bool {
    blacklist.iter().any(|entry| match mode {
        BlacklistMatch::Color => record.color == *entry,
        BlacklistMatch::Slug => record.slug == *entry,
        BlacklistMatch::Any => record.color == *entry || record.slug == *entry,
    })
}

/// Merge color collections into the final ordered palette.
///
/// Collections are concatenated in first-seen order and deduplicated by
/// slug, keeping the first occurrence whole; later duplicates are discarded,
/// not merged field by field. Records that classify as grayscale always sort
/// after everything else so the gray swatches sit together at the end of the
/// picker; within each group the order is alphabetical by name.
pub fn merge(collections: Vec<Vec<ColorRecord>>) -> Vec<ColorRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut colors: Vec<ColorRecord> = Vec::new();
    let mut grayscale: Vec<ColorRecord> = Vec::new();

    for record in collections.into_iter().flatten() {
        if !seen.insert(record.slug.clone()) {
            continue;
        }
        match classify(&record.color) {
            Classification::Grayscale => grayscale.push(record),
            // AmbiguousFormat and NonColor ride along with the true colors;
            // they were configured on purpose and must not be dropped
            _ => colors.push(record),
        }
    }

    colors.sort_by(|a, b| a.name.cmp(&b.name));
    grayscale.sort_by(|a, b| a.name.cmp(&b.name));

    colors.extend(grayscale);
    colors
}
