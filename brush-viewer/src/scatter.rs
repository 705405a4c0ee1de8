use emath::{pos2, Pos2, Rect};
use itertools::{Itertools, MinMaxResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

/// Deterministic bubble-chart-like data, no randomness involved
pub fn sample_data(count: usize) -> Vec<Datum> {
    (0..count)
        .map(|i| {
            let t = i as f32;
            Datum {
                name: format!("p{i}"),
                x: t * 0.5 + (t * 0.37).sin() * 40.0,
                y: (t * 0.61).cos() * 25.0 + (t * 0.13).sin() * 10.0,
            }
        })
        .collect()
}

pub fn extent(values: impl Iterator<Item = f32>) -> Option<(f32, f32)> {
    match values.minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f32, f32),
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// A degenerate domain maps everything to the middle of the range
    pub fn apply(&self, value: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) * 0.5;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Positions `data` inside `plot` with y growing upwards
pub fn layout(data: &[Datum], plot: Rect) -> Vec<Pos2> {
    let x_scale = LinearScale::new(
        extent(data.iter().map(|d| d.x)).unwrap_or((0.0, 1.0)),
        (plot.min.x, plot.max.x),
    );
    let y_scale = LinearScale::new(
        extent(data.iter().map(|d| d.y)).unwrap_or((0.0, 1.0)),
        (plot.max.y, plot.min.y),
    );
    data.iter()
        .map(|d| pos2(x_scale.apply(d.x), y_scale.apply(d.y)))
        .collect()
}
