// src/chart.rs
//! Shapes fixture rows into the flat point and bar records egui_plot draws.

/// `[x, y]` pairs for every row with a value; rows without one are skipped.
pub fn points<T>(rows: &[T], x: impl Fn(&T) -> f64, y: impl Fn(&T) -> Option<f64>) -> Vec<[f64; 2]> {
    rows.iter()
        .filter_map(|row| y(row).map(|value| [x(row), value]))
        .collect()
}

/// Contiguous runs of present values. A missing value ends the current run so
/// no line is drawn across the gap.
pub fn segments<T>(rows: &[T], x: impl Fn(&T) -> f64, y: impl Fn(&T) -> Option<f64>) -> Vec<Vec<[f64; 2]>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for row in rows {
        match y(row) {
            Some(value) => current.push([x(row), value]),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }

    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Horizontal offset of bar `series` within a group of `count` side-by-side
/// bars, each `width` wide, centred on the category position.
pub fn grouped_offset(series: usize, count: usize, width: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (series as f64 - (count as f64 - 1.0) / 2.0) * width
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaterfallStep {
    pub label: String,
    /// `None` marks a total bar that shows the running value.
    pub delta: Option<f64>,
}

impl WaterfallStep {
    pub fn delta(label: &str, value: f64) -> Self {
        Self { label: label.to_string(), delta: Some(value) }
    }

    pub fn total(label: &str) -> Self {
        Self { label: label.to_string(), delta: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaterfallBar {
    pub label: String,
    /// Where the bar starts.
    pub base: f64,
    /// Signed bar height.
    pub value: f64,
    /// Running total after this bar.
    pub running: f64,
}

/// Floating bars for a waterfall chart. Delta steps hang from the running
/// total; total steps stand on zero at the running total.
pub fn waterfall(steps: &[WaterfallStep]) -> Vec<WaterfallBar> {
    let mut running = 0.0;
    steps
        .iter()
        .map(|step| match step.delta {
            Some(delta) => {
                let base = running;
                running += delta;
                WaterfallBar { label: step.label.clone(), base, value: delta, running }
            }
            None => WaterfallBar { label: step.label.clone(), base: 0.0, value: running, running },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        year: i32,
        historical: Option<f64>,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { year: 2017, historical: Some(1.0) },
            Row { year: 2018, historical: Some(2.0) },
            Row { year: 2019, historical: None },
            Row { year: 2020, historical: Some(4.0) },
        ]
    }

    #[test]
    fn points_skip_missing_values() {
        let pts = points(&rows(), |r| r.year as f64, |r| r.historical);
        assert_eq!(pts, vec![[2017.0, 1.0], [2018.0, 2.0], [2020.0, 4.0]]);
    }

    #[test]
    fn segments_break_at_gaps() {
        let runs = segments(&rows(), |r| r.year as f64, |r| r.historical);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![[2017.0, 1.0], [2018.0, 2.0]]);
        assert_eq!(runs[1], vec![[2020.0, 4.0]]);
    }

    #[test]
    fn segments_of_all_missing_rows_is_empty() {
        let empty: Vec<Row> = vec![Row { year: 1, historical: None }];
        assert!(segments(&empty, |r| r.year as f64, |r| r.historical).is_empty());
    }

    #[test]
    fn grouped_offsets_are_centred() {
        assert_eq!(grouped_offset(0, 2, 0.3), -0.15);
        assert_eq!(grouped_offset(1, 2, 0.3), 0.15);
        assert_eq!(grouped_offset(1, 3, 0.2), 0.0);
        assert_eq!(grouped_offset(0, 0, 0.2), 0.0);
    }

    #[test]
    fn waterfall_hangs_deltas_from_the_running_total() {
        let bars = waterfall(&[
            WaterfallStep::delta("Start", 100.0),
            WaterfallStep::delta("Less", -30.0),
            WaterfallStep::total("End"),
        ]);
        assert_eq!(bars[0].base, 0.0);
        assert_eq!(bars[1].base, 100.0);
        assert_eq!(bars[1].value, -30.0);
        assert_eq!(bars[1].running, 70.0);
        assert_eq!(bars[2].base, 0.0);
        assert_eq!(bars[2].value, 70.0);
    }
}
