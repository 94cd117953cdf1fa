use serde::Deserialize;

/// Bottom-band search used to seed each trace.
///
/// - `band_height`: rows at the bottom of the mask included in the search.
/// - `half_width`: tunnel half-width around the last x (lane lock only).
/// - `min_mass`: zeroth-moment floor (intensity units) required to lock.
///
/// `Default` is the lane-lock search; [`SeedOptions::full_width`] is the
/// shallower, stricter search used without a tunnel.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedOptions {
    pub band_height: usize,
    pub half_width: usize,
    pub min_mass: f64,
}

impl SeedOptions {
    pub fn lane_lock() -> Self {
        Self {
            band_height: 40,
            half_width: 50,
            min_mass: 400.0,
        }
    }

    /// 30-row band and a floor of 500, so a lone pair of pixels cannot pull
    /// an unrestricted search across the frame.
    pub fn full_width() -> Self {
        Self {
            band_height: 30,
            half_width: 50,
            min_mass: 500.0,
        }
    }
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self::lane_lock()
    }
}

/// Which seed strategy the follower runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// Search only a tunnel around the previous fix.
    #[default]
    LaneLock,
    /// Search the whole bottom band.
    FullWidth,
}

impl SeedMode {
    /// Search parameters used by this mode unless overridden.
    pub fn default_options(self) -> SeedOptions {
        match self {
            SeedMode::LaneLock => SeedOptions::lane_lock(),
            SeedMode::FullWidth => SeedOptions::full_width(),
        }
    }
}

/// Per-field overrides of a mode's [`SeedOptions`], as read from config.
/// Unset fields keep the mode's own default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedOverrides {
    pub band_height: Option<usize>,
    pub half_width: Option<usize>,
    pub min_mass: Option<f64>,
}

impl SeedOverrides {
    pub fn apply(&self, base: SeedOptions) -> SeedOptions {
        SeedOptions {
            band_height: self.band_height.unwrap_or(base.band_height),
            half_width: self.half_width.unwrap_or(base.half_width),
            min_mass: self.min_mass.unwrap_or(base.min_mass),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_keep_mode_defaults_for_unset_fields() {
        let overrides = SeedOverrides {
            min_mass: Some(300.0),
            ..Default::default()
        };
        let opts = overrides.apply(SeedMode::FullWidth.default_options());
        assert_eq!(opts.band_height, 30);
        assert_eq!(opts.min_mass, 300.0);

        let opts = SeedOverrides::default().apply(SeedMode::LaneLock.default_options());
        assert_eq!(opts, SeedOptions::lane_lock());
    }
}
