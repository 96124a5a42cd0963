use crate::domain::model::{Combination, Draw, HitDetail, HitReport};

/// Smallest hit count that makes a combination a near miss.
pub const MIN_REPORTED_HITS: usize = 4;

/// Score every combination against the draw, in submission order.
///
/// Details are sorted by hit count, highest first; ties keep submission order.
pub fn analyse_hits(combinations: &[Combination], draw: &Draw) -> HitReport {
    let draw_set = draw.value_set();
    let mut report = HitReport::default();

    for (i, combination) in combinations.iter().enumerate() {
        let set = combination.value_set();
        let hit_set = set.intersection(draw_set);
        let hits = hit_set.len();

        match hits {
            4 => report.four_hits += 1,
            5 => report.five_hits += 1,
            6 => report.six_hits += 1,
            _ => {}
        }

        if hits < MIN_REPORTED_HITS {
            continue;
        }
        if hits == set.len() {
            tracing::warn!("Combination {} matches the draw exactly", i + 1);
        }

        report.details.push(HitDetail {
            index: i + 1,
            combination: combination.sorted_numbers(),
            hits,
            hit_numbers: hit_set.to_sorted_vec(),
            miss_numbers: set.difference(draw_set).to_sorted_vec(),
        });
    }

    report.total_with_hits = report.six_hits + report.five_hits + report.four_hits;
    // sort_by 為穩定排序
    report.details.sort_by(|a, b| b.hits.cmp(&a.hits));
    report
}
