// src/frame.rs

//! In-memory table over one downloaded category file, plus the load-time
//! preparation pipeline and the descriptive statistics the dashboard shows.
//!
//! Cells stay as text; numeric access parses on demand. The files use a
//! decimal comma in coordinate columns, so all parsing goes through
//! [`parse_number`].

use crate::csv;

#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Frame {
    /// First parsed row becomes the header row.
    pub fn from_csv(text: &str, sep: char) -> Frame {
        let mut rows = csv::parse_rows(text, sep);
        if rows.is_empty() {
            return Frame::default();
        }
        let headers = rows.remove(0);
        Frame { headers, rows }
    }

    pub fn ncols(&self) -> usize { self.headers.len() }
    pub fn nrows(&self) -> usize { self.rows.len() }

    /// Column index by exact header name.
    pub fn col(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        match self.col(from) {
            Some(ci) => { self.headers[ci] = s!(to); true }
            None => false,
        }
    }

    pub fn drop_column(&mut self, name: &str) -> bool {
        let Some(ci) = self.col(name) else { return false };
        self.headers.remove(ci);
        for row in &mut self.rows {
            if ci < row.len() {
                row.remove(ci);
            }
        }
        true
    }

    /// Cell text; ragged or out-of-range reads as empty.
    pub fn cell(&self, r: usize, c: usize) -> &str {
        self.rows
            .get(r)
            .and_then(|row| row.get(c))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Per-row parsed values for one column. `None` = null or unparsable.
    pub fn numeric(&self, ci: usize) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|row| row.get(ci).and_then(|c| parse_number(c)))
            .collect()
    }

    /// A column counts as numeric when every non-empty cell parses
    /// and at least one cell is non-empty.
    pub fn is_numeric_column(&self, ci: usize) -> bool {
        let mut seen = false;
        for row in &self.rows {
            match row.get(ci).map(|s| s.trim()) {
                None | Some("") => {}
                Some(cell) => {
                    if parse_number(cell).is_none() {
                        return false;
                    }
                    seen = true;
                }
            }
        }
        seen
    }

    pub fn numeric_columns(&self) -> Vec<usize> {
        (0..self.ncols()).filter(|&ci| self.is_numeric_column(ci)).collect()
    }
}

/// Trim, turn a decimal comma into a dot, parse as f64.
/// Empty and non-numeric text is null.
pub fn parse_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    let t = t.replace(',', ".");
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/* ---------------- Preparation pipeline ---------------- */

/// Load-time cleanup, mirroring what the published files need:
/// - `long` → `lon`;
/// - coordinate cells normalized to dot-decimal, rows with an unparsable
///   latitude or longitude dropped (maps and the model require both);
/// - `hrmn` `HH:MM` → decimal, unparsable → null;
/// - `dep` unparsable → null; `com` unparsable → `0`;
/// - free-text `adr` column dropped.
///
/// Each step applies only where its column exists, so every category file
/// loads; only carcteristiques carries coordinates.
pub fn prepare(mut f: Frame) -> Frame {
    if f.col("lon").is_none() && f.col("long").is_some() {
        f.rename("long", "lon");
    }

    if let (Some(lat), Some(lon)) = (f.col("lat"), f.col("lon")) {
        f.rows.retain_mut(|row| {
            normalize_numeric_cell(row, lat) && normalize_numeric_cell(row, lon)
        });
    }

    if let Some(ci) = f.col("hrmn") {
        for row in &mut f.rows {
            if let Some(cell) = row.get_mut(ci) {
                let fixed = cell.replace(':', ".");
                *cell = match parse_number(&fixed) {
                    Some(_) => fixed,
                    None => s!(),
                };
            }
        }
    }

    if let Some(ci) = f.col("dep") {
        for row in &mut f.rows {
            if let Some(cell) = row.get_mut(ci) {
                if parse_number(cell).is_none() {
                    *cell = s!();
                }
            }
        }
    }

    // Corsican communes ("2A004") don't parse; they become zero, not null.
    if let Some(ci) = f.col("com") {
        for row in &mut f.rows {
            if let Some(cell) = row.get_mut(ci) {
                if parse_number(cell).is_none() {
                    *cell = s!("0");
                }
            }
        }
    }

    f.drop_column("adr");
    f
}

/// Rewrite one cell to dot-decimal in place; false when it can't be a number.
fn normalize_numeric_cell(row: &mut Vec<String>, ci: usize) -> bool {
    let Some(cell) = row.get_mut(ci) else { return false };
    let fixed = cell.trim().replace(',', ".");
    match parse_number(&fixed) {
        Some(_) => {
            *cell = fixed;
            true
        }
        None => false,
    }
}

/* ---------------- Descriptive statistics ---------------- */

/// Per-column summary in the conventions analysts expect from pandas:
/// sample standard deviation (ddof = 1), linearly interpolated quantiles.
#[derive(Clone, Copy, Debug)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

pub fn describe(f: &Frame) -> Vec<(String, Summary)> {
    let mut out = Vec::new();

    for ci in f.numeric_columns() {
        let mut vals: Vec<f64> = f.numeric(ci).into_iter().flatten().collect();
        if vals.is_empty() {
            continue;
        }
        vals.sort_by(|a, b| a.total_cmp(b));

        let n = vals.len();
        let mean = vals.iter().sum::<f64>() / n as f64;
        let std = if n > 1 {
            let ss = vals.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
            (ss / (n - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        out.push((f.headers[ci].clone(), Summary {
            count: n,
            mean,
            std,
            min: vals[0],
            q25: quantile(&vals, 0.25),
            q50: quantile(&vals, 0.50),
            q75: quantile(&vals, 0.75),
            max: vals[n - 1],
        }));
    }

    out
}

/// Empty cells per column; a missing cell in a ragged row counts too.
pub fn null_counts(f: &Frame) -> Vec<(String, usize)> {
    f.headers
        .iter()
        .enumerate()
        .map(|(ci, h)| {
            let nulls = f
                .rows
                .iter()
                .filter(|r| r.get(ci).map(|c| c.trim().is_empty()).unwrap_or(true))
                .count();
            (h.clone(), nulls)
        })
        .collect()
}

/// Linear interpolation between closest ranks. `sorted` must be ascending.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/* ---------------- Histogram ---------------- */

#[derive(Clone, Debug)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.counts.len() as f64
    }

    pub fn bin_range(&self, i: usize) -> (f64, f64) {
        let w = self.bin_width();
        (self.lo + w * i as f64, self.lo + w * (i + 1) as f64)
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Equal-width bins over [min, max]; the upper edge lands in the last bin.
/// `None` when there is nothing to bin.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    if values.is_empty() || bins == 0 {
        return None;
    }
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut counts = vec![0usize; bins];
    if hi == lo {
        // degenerate: single value, single occupied bin
        counts[0] = values.len();
        return Some(Histogram { lo, hi, counts });
    }

    let w = (hi - lo) / bins as f64;
    for &v in values {
        let mut b = ((v - lo) / w) as usize;
        if b >= bins {
            b = bins - 1;
        }
        counts[b] += 1;
    }
    Some(Histogram { lo, hi, counts })
}
