use std::collections::HashMap;

use chrono::NaiveDate;

use crate::config::ChartOrder;
use crate::types::{DayCount, Note};

/// Counts notes per UTC calendar day of `createdAt`.
///
/// Notes with an unparseable timestamp are left out of the histogram.
pub fn notes_per_day(notes: &[Note], order: ChartOrder) -> Vec<DayCount> {
    let mut days: Vec<(NaiveDate, usize)> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for note in notes {
        let Some(day) = note.created_day() else {
            log::debug!("note {} has unreadable createdAt '{}'", note.id, note.created_at);
            continue;
        };
        match index.get(&day) {
            Some(&slot) => days[slot].1 += 1,
            None => {
                index.insert(day, days.len());
                days.push((day, 1));
            }
        }
    }

    if order == ChartOrder::Chronological {
        days.sort_by_key(|(day, _)| *day);
    }

    days.into_iter()
        .map(|(day, count)| DayCount {
            date: day.format("%Y-%m-%d").to_string(),
            count,
        })
        .collect()
}

/// Geometry of the bar chart, in SVG user units.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub bars: Vec<BarGeometry>,
    pub y_ticks: Vec<YTick>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub date: String,
    pub count: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal center, where the date label sits.
    pub label_x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YTick {
    pub value: usize,
    pub y: f64,
}

pub const MARGIN_LEFT: f64 = 40.0;
pub const MARGIN_BOTTOM: f64 = 30.0;
pub const MARGIN_TOP: f64 = 10.0;
const SLOT_WIDTH: f64 = 80.0;
const BAR_FILL_RATIO: f64 = 0.8;
const MAX_TICKS: usize = 5;

impl ChartLayout {
    pub fn compute(data: &[DayCount], height: f64) -> Self {
        let plot_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let width = MARGIN_LEFT + SLOT_WIDTH * data.len().max(1) as f64;
        let max = data.iter().map(|d| d.count).max().unwrap_or(0);
        let scale_max = max.max(1) as f64;
        let baseline = MARGIN_TOP + plot_height;

        let bars = data
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let bar_height = d.count as f64 / scale_max * plot_height;
                let bar_width = SLOT_WIDTH * BAR_FILL_RATIO;
                let slot_x = MARGIN_LEFT + SLOT_WIDTH * i as f64;
                BarGeometry {
                    date: d.date.clone(),
                    count: d.count,
                    x: slot_x + (SLOT_WIDTH - bar_width) / 2.0,
                    y: baseline - bar_height,
                    width: bar_width,
                    height: bar_height,
                    label_x: slot_x + SLOT_WIDTH / 2.0,
                }
            })
            .collect();

        let top = max.max(1);
        let step = max.div_ceil(MAX_TICKS).max(1);
        let mut values: Vec<usize> = (0..=top).step_by(step).collect();
        if values.last() != Some(&top) {
            values.push(top);
        }
        let y_ticks = values
            .into_iter()
            .map(|value| YTick {
                value,
                y: baseline - value as f64 / scale_max * plot_height,
            })
            .collect();

        Self {
            width,
            height,
            bars,
            y_ticks,
        }
    }

    pub fn baseline(&self) -> f64 {
        self.height - MARGIN_BOTTOM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn note_at(id: i64, created_at: &str) -> Note {
        let mut note = Note::new(id, Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
        note.created_at = created_at.to_string();
        note
    }

    fn day(date: &str, count: usize) -> DayCount {
        DayCount {
            date: date.to_string(),
            count,
        }
    }

    #[test]
    fn groups_by_calendar_day() {
        let notes = vec![
            note_at(1, "2024-01-01T10:00"),
            note_at(2, "2024-01-01T14:00"),
            note_at(3, "2024-01-02T09:00"),
        ];
        assert_eq!(
            notes_per_day(&notes, ChartOrder::FirstSeen),
            vec![day("2024-01-01", 2), day("2024-01-02", 1)]
        );
    }

    #[test]
    fn first_seen_order_is_not_sorted() {
        let notes = vec![
            note_at(1, "2024-03-05T08:00:00.000Z"),
            note_at(2, "2024-01-01T08:00:00.000Z"),
            note_at(3, "2024-03-05T18:00:00.000Z"),
        ];
        assert_eq!(
            notes_per_day(&notes, ChartOrder::FirstSeen),
            vec![day("2024-03-05", 2), day("2024-01-01", 1)]
        );
        assert_eq!(
            notes_per_day(&notes, ChartOrder::Chronological),
            vec![day("2024-01-01", 1), day("2024-03-05", 2)]
        );
    }

    #[test]
    fn unreadable_timestamps_are_skipped() {
        let notes = vec![note_at(1, "garbage"), note_at(2, "2024-01-01")];
        assert_eq!(notes_per_day(&notes, ChartOrder::FirstSeen), vec![day("2024-01-01", 1)]);
        assert!(notes_per_day(&[], ChartOrder::FirstSeen).is_empty());
    }

    #[test]
    fn tallest_bar_fills_plot_area() {
        let layout = ChartLayout::compute(&[day("2024-01-01", 2), day("2024-01-02", 1)], 300.0);
        let plot_height = 300.0 - MARGIN_TOP - MARGIN_BOTTOM;
        assert_eq!(layout.bars.len(), 2);
        assert_eq!(layout.bars[0].height, plot_height);
        assert_eq!(layout.bars[0].y, MARGIN_TOP);
        assert_eq!(layout.bars[1].height, plot_height / 2.0);
        assert!(layout.bars[1].x > layout.bars[0].x);
        assert_eq!(layout.baseline(), 270.0);
    }

    #[test]
    fn ticks_span_zero_to_max() {
        let layout = ChartLayout::compute(&[day("2024-01-01", 3)], 300.0);
        let values: Vec<usize> = layout.y_ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
        assert_eq!(layout.y_ticks[0].y, layout.baseline());

        let layout = ChartLayout::compute(&[day("2024-01-01", 20)], 300.0);
        let values: Vec<usize> = layout.y_ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 4, 8, 12, 16, 20]);
    }

    #[test]
    fn top_tick_is_max_when_step_does_not_divide_it() {
        let layout = ChartLayout::compute(&[day("2024-01-01", 7)], 300.0);
        let values: Vec<usize> = layout.y_ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 2, 4, 6, 7]);
        let top = layout.y_ticks.last().unwrap();
        assert_eq!(top.y, layout.bars[0].y);

        let layout = ChartLayout::compute(&[day("2024-01-01", 11)], 300.0);
        let values: Vec<usize> = layout.y_ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 3, 6, 9, 11]);
    }

    #[test]
    fn empty_data_still_has_an_axis() {
        let layout = ChartLayout::compute(&[], 300.0);
        assert!(layout.bars.is_empty());
        assert_eq!(layout.y_ticks.len(), 2);
    }
}
