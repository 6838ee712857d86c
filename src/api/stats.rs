use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::DisplaySeries;

use super::label_format::{EMPTY_STATS_PLACEHOLDER, format_arrivals, format_signed_percent};

/// What the ranked list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatsKind {
    /// Single selected year: largest arrivals first.
    TopArrivals { year: i32 },
    /// Year range: largest relative growth between the endpoints first.
    TopGrowth { year_min: i32, year_max: i32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsEntry {
    pub key: String,
    pub region: String,
    /// Arrivals for `TopArrivals`, growth ratio (0.5 = +50%) for `TopGrowth`.
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsPanel {
    pub kind: StatsKind,
    pub title: String,
    pub entries: SmallVec<[StatsEntry; 5]>,
}

impl StatsPanel {
    /// Display lines; an empty list renders the placeholder.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![EMPTY_STATS_PLACEHOLDER.to_owned()];
        }
        self.entries
            .iter()
            .map(|entry| format!("{} — {}", entry.key, entry.label))
            .collect()
    }
}

/// Ranks displayed series using their absolute (untransformed) values.
#[must_use]
pub fn build_stats(series: &[DisplaySeries], year_range: (i32, i32), top_n: usize) -> StatsPanel {
    let (year_min, year_max) = year_range;
    if year_min == year_max {
        top_arrivals(series, year_min, top_n)
    } else {
        top_growth(series, year_min, year_max, top_n)
    }
}

fn top_arrivals(series: &[DisplaySeries], year: i32, top_n: usize) -> StatsPanel {
    let mut ranked: Vec<(&DisplaySeries, f64)> = series
        .iter()
        .map(|entry| {
            let arrivals = entry.original_at(year).map_or(0.0, |value| value.arrivals);
            (entry, arrivals)
        })
        .filter(|(_, arrivals)| *arrivals > 0.0)
        .collect();
    ranked.sort_by_key(|(_, arrivals)| Reverse(OrderedFloat(*arrivals)));

    StatsPanel {
        kind: StatsKind::TopArrivals { year },
        title: format!("Top destinations ({year})"),
        entries: ranked
            .into_iter()
            .take(top_n)
            .map(|(entry, arrivals)| StatsEntry {
                key: entry.key.clone(),
                region: entry.region.clone(),
                value: arrivals,
                label: format_arrivals(arrivals),
            })
            .collect(),
    }
}

fn top_growth(series: &[DisplaySeries], year_min: i32, year_max: i32, top_n: usize) -> StatsPanel {
    let mut ranked: Vec<(&DisplaySeries, f64)> = series
        .iter()
        .filter_map(|entry| {
            let first = entry.original_at(year_min)?.arrivals;
            let last = entry.original_at(year_max)?.arrivals;
            if first.is_nan() || first <= 0.0 {
                return None;
            }
            let growth = (last - first) / first;
            (!growth.is_nan()).then_some((entry, growth))
        })
        .collect();
    ranked.sort_by_key(|(_, growth)| Reverse(OrderedFloat(*growth)));

    StatsPanel {
        kind: StatsKind::TopGrowth { year_min, year_max },
        title: format!("Top growth ({year_min}–{year_max})"),
        entries: ranked
            .into_iter()
            .take(top_n)
            .map(|(entry, growth)| StatsEntry {
                key: entry.key.clone(),
                region: entry.region.clone(),
                value: growth,
                label: format_signed_percent(growth * 100.0),
            })
            .collect(),
    }
}
