//! Label duration aggregation.
//!
//! Groups entries by label, merges overlapping or endpoint-sharing date
//! ranges within each group, and sums the non-overlapping whole-month
//! duration per label.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::duration::months_between;
use crate::entry::{Label, TimelineEntry};

/// A closed date interval inside one label group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Collapses intervals into a non-overlapping sequence.
///
/// Intervals are sorted by start, then folded left to right: an interval
/// merges into the last accumulated one when its start is `<=` that
/// interval's end, by raw date comparison. Endpoint-sharing intervals
/// therefore merge, so a shared month is never counted twice; the
/// accumulated end extends to the later of the two. A strictly later
/// start opens a new interval.
#[must_use]
pub fn merge_intervals(mut intervals: Vec<DateInterval>) -> Vec<DateInterval> {
    intervals.sort_by_key(|interval| interval.start);

    intervals
        .into_iter()
        .fold(Vec::new(), |mut merged, interval| {
            match merged.last_mut() {
                Some(last) if interval.start <= last.end => {
                    last.end = last.end.max(interval.end);
                }
                _ => merged.push(interval),
            }
            merged
        })
}

/// Total non-overlapping whole-month duration per label.
///
/// An entry with N labels contributes an interval to N groups
/// independently; labels attached to no entry never appear in the
/// output. Ongoing entries end at the clock's current date. The map has
/// no defined iteration order; display layers sort.
pub fn label_durations<C: Clock>(entries: &[TimelineEntry], clock: &C) -> HashMap<Label, u32> {
    let today = clock.today();

    let mut groups: HashMap<Label, Vec<DateInterval>> = HashMap::new();
    for entry in entries {
        for label in &entry.labels {
            groups.entry(label.clone()).or_default().push(DateInterval {
                start: entry.start_date,
                end: entry.effective_end(today),
            });
        }
    }

    groups
        .into_iter()
        .map(|(label, intervals)| {
            let total = merge_intervals(intervals)
                .iter()
                .map(|interval| months_between(interval.start, interval.end))
                .sum();
            (label, total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::entry::EntryId;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn labeled(
        id: &str,
        labels: &[&str],
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> TimelineEntry {
        TimelineEntry::new(
            EntryId::new(id).unwrap(),
            "Entry",
            "",
            "#3B82F6",
            labels.iter().map(|l| Label::new(*l).unwrap()).collect(),
            start,
            end,
        )
        .unwrap()
    }

    fn duration_of(durations: &HashMap<Label, u32>, label: &str) -> u32 {
        durations[&Label::new(label).unwrap()]
    }

    // A clock far past every closed range in these tests.
    fn clock() -> FixedClock {
        FixedClock(date(2025, 6, 15))
    }

    #[test]
    fn merge_collapses_overlapping_intervals() {
        let merged = merge_intervals(vec![
            DateInterval {
                start: date(2020, 5, 1),
                end: date(2020, 12, 31),
            },
            DateInterval {
                start: date(2020, 1, 1),
                end: date(2020, 6, 30),
            },
        ]);

        assert_eq!(
            merged,
            vec![DateInterval {
                start: date(2020, 1, 1),
                end: date(2020, 12, 31),
            }]
        );
    }

    #[test]
    fn merge_keeps_contained_interval_end() {
        // A range fully inside the previous one must not shrink it.
        let merged = merge_intervals(vec![
            DateInterval {
                start: date(2020, 1, 1),
                end: date(2020, 12, 31),
            },
            DateInterval {
                start: date(2020, 3, 1),
                end: date(2020, 4, 30),
            },
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].end, date(2020, 12, 31));
    }

    #[test]
    fn merge_joins_endpoint_sharing_intervals() {
        // Mar 1 <= Mar 31: a shared endpoint month merges.
        let merged = merge_intervals(vec![
            DateInterval {
                start: date(2020, 1, 1),
                end: date(2020, 3, 31),
            },
            DateInterval {
                start: date(2020, 3, 1),
                end: date(2020, 6, 30),
            },
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].start, date(2020, 1, 1));
        assert_eq!(merged[0].end, date(2020, 6, 30));
    }

    #[test]
    fn merge_keeps_adjacent_months_separate() {
        // Apr 1 > Mar 31 under raw date comparison: adjacent months do
        // not merge into one interval.
        let merged = merge_intervals(vec![
            DateInterval {
                start: date(2020, 1, 1),
                end: date(2020, 3, 31),
            },
            DateInterval {
                start: date(2020, 4, 1),
                end: date(2020, 6, 30),
            },
        ]);

        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn overlapping_entries_do_not_double_count() {
        let entries = vec![
            labeled("a", &["work"], date(2020, 1, 1), Some(date(2020, 6, 1))),
            labeled("b", &["work"], date(2020, 5, 1), Some(date(2020, 12, 1))),
        ];

        let durations = label_durations(&entries, &clock());

        // One merged interval Jan..Dec, not the double-counted 6 + 8.
        assert_eq!(
            duration_of(&durations, "work"),
            months_between(date(2020, 1, 1), date(2020, 12, 31))
        );
        assert_eq!(duration_of(&durations, "work"), 12);
    }

    #[test]
    fn disjoint_entries_sum_individually() {
        let entries = vec![
            labeled("a", &["work"], date(2020, 1, 1), Some(date(2020, 3, 1))),
            labeled("b", &["work"], date(2020, 8, 1), Some(date(2020, 10, 1))),
        ];

        let durations = label_durations(&entries, &clock());
        assert_eq!(duration_of(&durations, "work"), 3 + 3);
    }

    #[test]
    fn adjacent_entries_total_matches_the_merged_span() {
        // Apr 1 vs Mar 31 keeps the intervals separate, but the
        // inclusive month count makes the total equal either way.
        let entries = vec![
            labeled("a", &["work"], date(2020, 1, 1), Some(date(2020, 3, 1))),
            labeled("b", &["work"], date(2020, 4, 1), Some(date(2020, 6, 1))),
        ];

        let durations = label_durations(&entries, &clock());
        assert_eq!(
            duration_of(&durations, "work"),
            months_between(date(2020, 1, 1), date(2020, 6, 30))
        );
    }

    #[test]
    fn endpoint_sharing_entries_drop_the_shared_month() {
        let entries = vec![
            labeled("a", &["work"], date(2020, 1, 1), Some(date(2020, 3, 1))),
            labeled("b", &["work"], date(2020, 3, 1), Some(date(2020, 6, 1))),
        ];

        let durations = label_durations(&entries, &clock());
        // Merged Jan..Jun is 6 months; the unmerged sum would be 3 + 4.
        assert_eq!(duration_of(&durations, "work"), 6);
    }

    #[test]
    fn entry_feeds_every_label_it_carries() {
        let entries = vec![
            labeled(
                "a",
                &["work", "remote"],
                date(2020, 1, 1),
                Some(date(2020, 6, 1)),
            ),
            labeled("b", &["remote"], date(2021, 1, 1), Some(date(2021, 2, 1))),
        ];

        let durations = label_durations(&entries, &clock());
        assert_eq!(durations.len(), 2);
        assert_eq!(duration_of(&durations, "work"), 6);
        assert_eq!(duration_of(&durations, "remote"), 6 + 2);
    }

    #[test]
    fn duplicate_label_on_one_entry_counts_once() {
        let entries = vec![labeled(
            "a",
            &["work", "work"],
            date(2020, 1, 1),
            Some(date(2020, 6, 1)),
        )];

        let durations = label_durations(&entries, &clock());
        assert_eq!(duration_of(&durations, "work"), 6);
    }

    #[test]
    fn ongoing_entry_uses_the_clock() {
        let entries = vec![labeled("a", &["side"], date(2025, 1, 1), None)];

        let durations = label_durations(&entries, &FixedClock(date(2025, 6, 15)));
        assert_eq!(duration_of(&durations, "side"), 6);
    }

    #[test]
    fn unlabeled_entries_produce_no_groups() {
        let entries = vec![labeled("a", &[], date(2020, 1, 1), None)];
        assert!(label_durations(&entries, &clock()).is_empty());
    }
}
