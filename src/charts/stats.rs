//! Small numeric helpers shared by the chart builders.

// ---------------------------------------------------------------------------
// Five-number summary (box plots, histogram marginals)
// ---------------------------------------------------------------------------

/// Min, quartiles, max of a sample. Whiskers sit at the data extremes;
/// quartiles use linear interpolation on the sorted sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumber {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumber {
    /// Summarize a sample; `None` for an empty one.
    pub fn of(values: &[f64]) -> Option<FiveNumber> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Some(FiveNumber {
            min: sorted[0],
            q1: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.5),
            q3: percentile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Linear-interpolated percentile of an ascending-sorted, non-empty sample.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

// ---------------------------------------------------------------------------
// Pearson correlation (heatmap)
// ---------------------------------------------------------------------------

/// Pearson correlation coefficient of two equal-length samples.
/// Returns NaN when undefined: fewer than two points, or zero variance in
/// either sample.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

// ---------------------------------------------------------------------------
// Equal-width binning (histograms)
// ---------------------------------------------------------------------------

/// Equal-width histogram bins over a sample's range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bins {
    /// Left edge of the first bin.
    pub start: f64,
    /// Width of every bin; always positive.
    pub width: f64,
    /// Number of bins; zero for an empty sample.
    pub count: usize,
}

impl Bins {
    /// Bins covering `[min, max]` of the sample, split `requested` ways.
    /// A constant sample collapses to a single unit-width bin around the
    /// value; an empty sample has no bins.
    pub fn equal_width(values: &[f64], requested: usize) -> Bins {
        let Some(first) = values.first() else {
            return Bins {
                start: 0.0,
                width: 1.0,
                count: 0,
            };
        };
        let (min, max) = values.iter().fold((*first, *first), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
        if max == min {
            return Bins {
                start: min - 0.5,
                width: 1.0,
                count: 1,
            };
        }
        Bins {
            start: min,
            width: (max - min) / requested as f64,
            count: requested,
        }
    }

    /// Index of the bin containing `v`; the top edge belongs to the last bin.
    pub fn index_of(&self, v: f64) -> usize {
        let i = ((v - self.start) / self.width).floor() as isize;
        i.clamp(0, self.count as isize - 1) as usize
    }

    /// Center of bin `i`, for bar placement.
    pub fn center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.width
    }
}
