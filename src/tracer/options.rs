use serde::Deserialize;

/// Knobs of the sliding-window crawl.
///
/// - `window_height`: band height in rows; bands do not overlap.
/// - `window_half_width`: columns searched on each side of the current x.
/// - `min_mass`: zeroth-moment floor (intensity units) a band must exceed.
/// - `patience`: consecutive empty bands tolerated before giving up.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TraceOptions {
    pub window_height: usize,
    pub window_half_width: usize,
    pub min_mass: f64,
    pub patience: usize,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            window_height: 15,
            window_half_width: 50,
            min_mass: 250.0,
            patience: 3,
        }
    }
}
