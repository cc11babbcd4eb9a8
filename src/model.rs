// src/model.rs

//! Location predictor: a small dense network mapping (day, month, hour)
//! to (lat, lon), trained on the active category table.
//!
//! Shape: 3 → 128 relu → dropout 0.1 → 64 relu → dropout 0.1 → 2 linear,
//! MSE loss, Adam. Features are standardized before training; targets are
//! not. Training holds out the last fifth of the rows for validation and
//! shuffles the rest each epoch.
//!
//! Everything is hand-rolled over `Vec<f64>` — the parameter count is
//! under ten thousand, which no dependency is needed for. `rand` supplies
//! Glorot init, shuffling, and dropout masks, and makes runs seedable.

use std::error::Error;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::consts::*;
use crate::frame::{parse_number, Frame};
use crate::progress::Progress;

/* ---------------- Standardization ---------------- */

/// Per-feature standardization fitted on the training split only.
/// Population std; constant features scale by 1 so transform is total.
#[derive(Clone, Debug)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Scaler {
    pub fn fit(rows: &[Vec<f64>]) -> Scaler {
        let dims = rows.first().map(|r| r.len()).unwrap_or(0);
        let n = rows.len().max(1) as f64;

        let mut mean = vec![0.0; dims];
        for r in rows {
            for (d, v) in r.iter().enumerate() {
                mean[d] += v;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut var = vec![0.0; dims];
        for r in rows {
            for (d, v) in r.iter().enumerate() {
                let dv = v - mean[d];
                var[d] += dv * dv;
            }
        }
        let scale = var
            .iter()
            .map(|v| {
                let s = (v / n).sqrt();
                if s == 0.0 { 1.0 } else { s }
            })
            .collect();

        Scaler { mean, scale }
    }

    pub fn transform(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(v, (m, s))| (v - m) / s)
            .collect()
    }
}

/* ---------------- Network ---------------- */

#[derive(Clone, Debug)]
pub struct Dense {
    /// Row-major `out × inp`.
    pub w: Vec<f64>,
    pub b: Vec<f64>,
    pub inp: usize,
    pub out: usize,
}

impl Dense {
    /// Glorot-uniform weights, zero biases.
    fn new(inp: usize, out: usize, rng: &mut StdRng) -> Dense {
        let limit = (6.0 / (inp + out) as f64).sqrt();
        let w = (0..inp * out).map(|_| rng.gen_range(-limit..limit)).collect();
        Dense { w, b: vec![0.0; out], inp, out }
    }

    fn forward(&self, x: &[f64]) -> Vec<f64> {
        let mut y = self.b.clone();
        for o in 0..self.out {
            let row = &self.w[o * self.inp..(o + 1) * self.inp];
            let mut acc = 0.0;
            for (wi, xi) in row.iter().zip(x) {
                acc += wi * xi;
            }
            y[o] += acc;
        }
        y
    }
}

#[derive(Clone, Debug)]
pub struct Mlp {
    pub layers: Vec<Dense>,
}

impl Mlp {
    /// `sizes` lists the hidden widths plus the output width.
    pub fn new(input: usize, sizes: &[usize], rng: &mut StdRng) -> Mlp {
        let mut layers = Vec::with_capacity(sizes.len());
        let mut prev = input;
        for &n in sizes {
            layers.push(Dense::new(prev, n, rng));
            prev = n;
        }
        Mlp { layers }
    }

    /// Inference pass: ReLU on every layer but the last, no dropout.
    pub fn forward(&self, x: &[f64]) -> Vec<f64> {
        let last = self.layers.len() - 1;
        let mut a = x.to_vec();
        for (li, layer) in self.layers.iter().enumerate() {
            let mut z = layer.forward(&a);
            if li < last {
                for v in &mut z {
                    if *v < 0.0 {
                        *v = 0.0;
                    }
                }
            }
            a = z;
        }
        a
    }
}

/* ---------------- Adam ---------------- */

struct Adam {
    lr: f64,
    beta1: f64,
    beta2: f64,
    eps: f64,
    t: i32,
    m: Vec<(Vec<f64>, Vec<f64>)>,
    v: Vec<(Vec<f64>, Vec<f64>)>,
}

impl Adam {
    fn new(net: &Mlp, lr: f64) -> Adam {
        let zeros = |net: &Mlp| -> Vec<(Vec<f64>, Vec<f64>)> {
            net.layers
                .iter()
                .map(|l| (vec![0.0; l.w.len()], vec![0.0; l.b.len()]))
                .collect()
        };
        Adam {
            lr,
            beta1: 0.9,
            beta2: 0.999,
            eps: 1e-7,
            t: 0,
            m: zeros(net),
            v: zeros(net),
        }
    }

    /// One update from batch-averaged gradients.
    fn step(&mut self, net: &mut Mlp, grads: &[(Vec<f64>, Vec<f64>)]) {
        self.t += 1;
        let bc1 = 1.0 - self.beta1.powi(self.t);
        let bc2 = 1.0 - self.beta2.powi(self.t);

        for (li, layer) in net.layers.iter_mut().enumerate() {
            let (gw, gb) = &grads[li];
            let (mw, mb) = &mut self.m[li];
            let (vw, vb) = &mut self.v[li];

            for k in 0..layer.w.len() {
                mw[k] = self.beta1 * mw[k] + (1.0 - self.beta1) * gw[k];
                vw[k] = self.beta2 * vw[k] + (1.0 - self.beta2) * gw[k] * gw[k];
                layer.w[k] -= self.lr * (mw[k] / bc1) / ((vw[k] / bc2).sqrt() + self.eps);
            }
            for k in 0..layer.b.len() {
                mb[k] = self.beta1 * mb[k] + (1.0 - self.beta1) * gb[k];
                vb[k] = self.beta2 * vb[k] + (1.0 - self.beta2) * gb[k] * gb[k];
                layer.b[k] -= self.lr * (mb[k] / bc1) / ((vb[k] / bc2).sqrt() + self.eps);
            }
        }
    }
}

/* ---------------- Training ---------------- */

#[derive(Clone, Copy, Debug)]
pub struct EpochStats {
    pub loss: f64,
    pub val_loss: f64,
    pub val_mae: f64,
}

#[derive(Clone, Debug)]
pub struct TrainedModel {
    /// Content key of the source table; the cache invalidates on mismatch.
    pub key: u64,
    pub scaler: Scaler,
    pub net: Mlp,
    pub history: Vec<EpochStats>,
    pub rows_used: usize,
}

impl TrainedModel {
    pub fn predict(&self, day: f64, month: f64, hour: f64) -> (f64, f64) {
        let x = self.scaler.transform(&[day, month, hour]);
        let y = self.net.forward(&x);
        (y[0], y[1])
    }

    /// Validation MAE from the last epoch, in degrees.
    pub fn val_mae(&self) -> f64 {
        self.history.last().map(|e| e.val_mae).unwrap_or(f64::NAN)
    }
}

/// Train on the prepared frame. Rows with a null in any of the five
/// involved columns are skipped; missing columns or too little data
/// are errors.
pub fn train(
    frame: &Frame,
    key: u64,
    rng: &mut StdRng,
    mut progress: Option<&mut dyn Progress>,
) -> Result<TrainedModel, Box<dyn Error>> {
    let mut cols = Vec::with_capacity(MODEL_FEATURES.len() + MODEL_TARGETS.len());
    for name in MODEL_FEATURES.iter().chain(MODEL_TARGETS.iter()) {
        match frame.col(name) {
            Some(ci) => cols.push(ci),
            None => {
                return Err(format!(
                    "Missing column '{}' — prediction needs jour, mois, hrmn, lat, lon",
                    name
                )
                .into());
            }
        }
    }
    let nf = MODEL_FEATURES.len();

    // Complete rows only
    let mut features: Vec<Vec<f64>> = Vec::new();
    let mut targets: Vec<Vec<f64>> = Vec::new();
    'rows: for row in &frame.rows {
        let mut vals = Vec::with_capacity(cols.len());
        for &ci in &cols {
            match row.get(ci).and_then(|c| parse_number(c)) {
                Some(v) => vals.push(v),
                None => continue 'rows,
            }
        }
        targets.push(vals.split_off(nf));
        features.push(vals);
    }

    let n = features.len();
    if n < MODEL_MIN_ROWS {
        return Err(format!(
            "Not enough complete rows to train on ({} of {} needed)",
            n, MODEL_MIN_ROWS
        )
        .into());
    }

    // Hold out the tail for validation, before any shuffling.
    let split_at = (n as f64 * (1.0 - MODEL_VALIDATION_SPLIT)) as usize;
    let scaler = Scaler::fit(&features[..split_at]);

    let xs: Vec<Vec<f64>> = features.iter().map(|f| scaler.transform(f)).collect();
    let (train_x, val_x) = xs.split_at(split_at);
    let (train_y, val_y) = targets.split_at(split_at);

    let mut sizes: Vec<usize> = MODEL_HIDDEN.to_vec();
    sizes.push(MODEL_TARGETS.len());
    let mut net = Mlp::new(nf, &sizes, rng);
    let mut adam = Adam::new(&net, MODEL_LEARNING_RATE);

    let mut grads: Vec<(Vec<f64>, Vec<f64>)> = net
        .layers
        .iter()
        .map(|l| (vec![0.0; l.w.len()], vec![0.0; l.b.len()]))
        .collect();

    let mut order: Vec<usize> = (0..train_x.len()).collect();
    let mut history = Vec::with_capacity(MODEL_EPOCHS);

    logf!("Model: training on {} rows ({} validation)", train_x.len(), val_x.len());

    for epoch in 0..MODEL_EPOCHS {
        order.shuffle(rng);
        let mut epoch_loss = 0.0;

        for batch in order.chunks(MODEL_BATCH) {
            for (gw, gb) in &mut grads {
                gw.iter_mut().for_each(|g| *g = 0.0);
                gb.iter_mut().for_each(|g| *g = 0.0);
            }
            for &i in batch {
                epoch_loss += backprop_sample(
                    &net, &train_x[i], &train_y[i], MODEL_DROPOUT, rng, &mut grads,
                );
            }
            let inv = 1.0 / batch.len() as f64;
            for (gw, gb) in &mut grads {
                gw.iter_mut().for_each(|g| *g *= inv);
                gb.iter_mut().for_each(|g| *g *= inv);
            }
            adam.step(&mut net, &grads);
        }

        let loss = epoch_loss / train_x.len() as f64;
        let (val_loss, val_mae) = evaluate(&net, val_x, val_y);
        history.push(EpochStats { loss, val_loss, val_mae });

        logf!(
            "Model: epoch {}/{} loss={:.4} val_loss={:.4} val_mae={:.4}",
            epoch + 1, MODEL_EPOCHS, loss, val_loss, val_mae
        );
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Training model: epoch {}/{}", epoch + 1, MODEL_EPOCHS));
        }
    }

    Ok(TrainedModel { key, scaler, net, history, rows_used: n })
}

/// MSE and MAE over a held-out set, inference mode.
pub fn evaluate(net: &Mlp, xs: &[Vec<f64>], ys: &[Vec<f64>]) -> (f64, f64) {
    if xs.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let mut se = 0.0;
    let mut ae = 0.0;
    let mut count = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let p = net.forward(x);
        for (pi, yi) in p.iter().zip(y) {
            let d = pi - yi;
            se += d * d;
            ae += d.abs();
            count += 1.0;
        }
    }
    (se / count, ae / count)
}

/// Forward with inverted dropout on the hidden layers, then accumulate
/// gradients for one sample. Returns the sample's MSE.
fn backprop_sample(
    net: &Mlp,
    x: &[f64],
    y: &[f64],
    dropout: f64,
    rng: &mut StdRng,
    grads: &mut [(Vec<f64>, Vec<f64>)],
) -> f64 {
    let nl = net.layers.len();
    let last = nl - 1;
    let keep = 1.0 - dropout;

    // Forward, keeping each layer's input and the hidden relu/dropout
    // gates; a gate of 0 blocks the backward path the same way it
    // blocked the forward one.
    let mut inputs: Vec<Vec<f64>> = Vec::with_capacity(nl);
    let mut gates: Vec<Vec<f64>> = Vec::with_capacity(last);

    let mut a = x.to_vec();
    for (li, layer) in net.layers.iter().enumerate() {
        inputs.push(a.clone());
        let mut z = layer.forward(&a);
        if li < last {
            let mut gate = vec![0.0; z.len()];
            for (i, v) in z.iter_mut().enumerate() {
                if *v > 0.0 {
                    let g = if dropout > 0.0 && !rng.gen_bool(keep) {
                        0.0
                    } else if dropout > 0.0 {
                        1.0 / keep
                    } else {
                        1.0
                    };
                    gate[i] = g;
                    *v *= g;
                } else {
                    *v = 0.0;
                }
            }
            gates.push(gate);
        }
        a = z;
    }

    // Output error; MSE averaged over the output axis, not summed.
    let out_dim = a.len() as f64;
    let mut loss = 0.0;
    let mut delta: Vec<f64> = a
        .iter()
        .zip(y)
        .map(|(p, t)| {
            let d = p - t;
            loss += d * d;
            2.0 * d / out_dim
        })
        .collect();
    loss /= out_dim;

    for li in (0..nl).rev() {
        let layer = &net.layers[li];
        let input = &inputs[li];
        let (gw, gb) = &mut grads[li];

        for o in 0..layer.out {
            let d = delta[o];
            gb[o] += d;
            let row = o * layer.inp;
            for i in 0..layer.inp {
                gw[row + i] += d * input[i];
            }
        }

        if li > 0 {
            let mut prev = vec![0.0; layer.inp];
            for o in 0..layer.out {
                let d = delta[o];
                let row = o * layer.inp;
                for i in 0..layer.inp {
                    prev[i] += d * layer.w[row + i];
                }
            }
            let gate = &gates[li - 1];
            for (p, g) in prev.iter_mut().zip(gate) {
                *p *= g;
            }
            delta = prev;
        }
    }

    loss
}
