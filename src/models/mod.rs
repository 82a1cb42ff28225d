pub mod bs;

/// Numeric helpers shared by the pricer, the grid builder and the renderers
pub mod utils {
    /// Rounds `x` to `decimals` places, half-to-even on the scaled value.
    ///
    /// Matches the rounding applied to heatmap axis samples, where the rounded spot is
    /// also the value that gets priced, so the tie rule matters for output parity.
    pub fn round_to_decimals(x: f64, decimals: i32) -> f64 {
        let scale = 10f64.powi(decimals);
        (x * scale).round_ties_even() / scale
    }

    /// `n` evenly spaced values from `start` to `stop`, both endpoints included.
    ///
    /// Interior points are `start + i * step`; the last point is pinned to `stop` so
    /// accumulated error never moves the upper endpoint.
    pub fn linspace<const N: usize>(start: f64, stop: f64) -> [f64; N] {
        let mut out = [start; N];
        if N < 2 {
            return out;
        }
        let step = (stop - start) / (N - 1) as f64;
        for (i, v) in out.iter_mut().enumerate() {
            *v = start + i as f64 * step;
        }
        out[N - 1] = stop;
        out
    }

}
