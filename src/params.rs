use std::ops::RangeInclusive;
use std::sync::Arc;

use anyhow::{bail, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::traits::ParameterSource;

pub const FREQUENCY_RANGE: RangeInclusive<u32> = 1..=10;
pub const SPEED_RANGE: RangeInclusive<f32> = 0.0..=10.0;
pub const SPEED_STEP: f64 = 0.1;
pub const AMOUNT_RANGE: RangeInclusive<f32> = 0.0..=2.0;
pub const AMOUNT_STEP: f64 = 0.01;

/// Live deformation controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Spatial frequency of the wave (integer steps)
    pub frequency: u32,
    /// Phase velocity in radians per second
    pub speed: f32,
    /// Displacement magnitude in world units
    pub amount: f32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            frequency: 4,
            speed: 2.0,
            amount: 0.2,
        }
    }
}

impl Parameters {
    /// Builds a snapshot, clamping each value into its declared range and
    /// snapping it to the slider step.
    pub fn new(frequency: u32, speed: f32, amount: f32) -> Self {
        Self {
            frequency: frequency.clamp(*FREQUENCY_RANGE.start(), *FREQUENCY_RANGE.end()),
            speed: snap(speed, &SPEED_RANGE, SPEED_STEP),
            amount: snap(amount, &AMOUNT_RANGE, AMOUNT_STEP),
        }
    }

    /// Like [`Parameters::new`] but rejects values outside the declared bounds
    /// instead of clamping them.
    pub fn try_new(frequency: u32, speed: f32, amount: f32) -> Result<Self> {
        if !FREQUENCY_RANGE.contains(&frequency) {
            bail!(
                "frequency {} outside {}..={}",
                frequency,
                FREQUENCY_RANGE.start(),
                FREQUENCY_RANGE.end()
            );
        }
        if !speed.is_finite() || !SPEED_RANGE.contains(&speed) {
            bail!(
                "speed {} outside {}..={}",
                speed,
                SPEED_RANGE.start(),
                SPEED_RANGE.end()
            );
        }
        if !amount.is_finite() || !AMOUNT_RANGE.contains(&amount) {
            bail!(
                "amount {} outside {}..={}",
                amount,
                AMOUNT_RANGE.start(),
                AMOUNT_RANGE.end()
            );
        }
        Ok(Self::new(frequency, speed, amount))
    }

    /// Re-checks a deserialized snapshot against the declared bounds.
    pub fn validated(self) -> Result<Self> {
        Self::try_new(self.frequency, self.speed, self.amount)
    }

    /// True when heights no longer depend on time for this snapshot.
    pub fn is_static(&self) -> bool {
        self.speed == 0.0 || self.amount == 0.0
    }
}

fn snap(value: f32, range: &RangeInclusive<f32>, step: f64) -> f32 {
    if !value.is_finite() {
        return *range.start();
    }
    let per_unit = (1.0 / step).round();
    let snapped = ((value as f64 * per_unit).round() / per_unit) as f32;
    snapped.clamp(*range.start(), *range.end())
}

#[derive(Debug)]
struct ParameterState {
    params: Parameters,
    revision: u64,
}

/// Shared handle to the live parameters.
///
/// The debug panel writes through one clone, the frame driver reads a
/// snapshot through another. Every effective change bumps the revision.
#[derive(Debug, Clone)]
pub struct SharedParameters {
    inner: Arc<Mutex<ParameterState>>,
}

impl SharedParameters {
    pub fn new(params: Parameters) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ParameterState {
                params,
                revision: 0,
            })),
        }
    }

    /// Replaces the live values. Returns true if anything changed.
    pub fn set(&self, params: Parameters) -> bool {
        let params = Parameters::new(params.frequency, params.speed, params.amount);
        let mut state = self.inner.lock();
        if state.params == params {
            return false;
        }
        state.params = params;
        state.revision += 1;
        true
    }

    /// Edits the live values in place. Returns true if anything changed.
    pub fn update(&self, edit: impl FnOnce(&mut Parameters)) -> bool {
        let mut next = self.snapshot();
        edit(&mut next);
        self.set(next)
    }
}

impl Default for SharedParameters {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}

impl ParameterSource for SharedParameters {
    fn snapshot(&self) -> Parameters {
        self.inner.lock().params
    }

    fn revision(&self) -> u64 {
        self.inner.lock().revision
    }
}

/// A fixed snapshot never changes revision.
impl ParameterSource for Parameters {
    fn snapshot(&self) -> Parameters {
        *self
    }

    fn revision(&self) -> u64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_panel() {
        let p = Parameters::default();
        assert_eq!(p.frequency, 4);
        assert_eq!(p.speed, 2.0);
        assert_eq!(p.amount, 0.2);
    }

    #[test]
    fn new_clamps_into_range() {
        let p = Parameters::new(42, -3.0, 9.0);
        assert_eq!(p.frequency, 10);
        assert_eq!(p.speed, 0.0);
        assert_eq!(p.amount, 2.0);

        let p = Parameters::new(0, 11.0, -1.0);
        assert_eq!(p.frequency, 1);
        assert_eq!(p.speed, 10.0);
        assert_eq!(p.amount, 0.0);
    }

    #[test]
    fn new_snaps_to_step() {
        let p = Parameters::new(3, 1.234, 0.1234);
        assert!((p.speed - 1.2).abs() < 1e-5);
        assert!((p.amount - 0.12).abs() < 1e-5);
    }

    #[test]
    fn non_finite_falls_back_to_minimum() {
        let p = Parameters::new(3, f32::NAN, f32::INFINITY);
        assert_eq!(p.speed, 0.0);
        assert_eq!(p.amount, 0.0);
    }

    #[test]
    fn try_new_rejects_out_of_bounds() {
        assert!(Parameters::try_new(0, 1.0, 0.5).is_err());
        assert!(Parameters::try_new(11, 1.0, 0.5).is_err());
        assert!(Parameters::try_new(5, 10.5, 0.5).is_err());
        assert!(Parameters::try_new(5, 1.0, 2.5).is_err());
        assert!(Parameters::try_new(5, f32::NAN, 0.5).is_err());
        assert!(Parameters::try_new(5, 1.0, 0.5).is_ok());
    }

    #[test]
    fn static_when_still_or_flat() {
        assert!(Parameters::new(4, 0.0, 0.2).is_static());
        assert!(Parameters::new(4, 2.0, 0.0).is_static());
        assert!(!Parameters::default().is_static());
    }

    #[test]
    fn shared_revision_bumps_only_on_change() {
        let shared = SharedParameters::default();
        assert_eq!(shared.revision(), 0);

        assert!(!shared.set(Parameters::default()));
        assert_eq!(shared.revision(), 0);

        assert!(shared.update(|p| p.frequency = 7));
        assert_eq!(shared.revision(), 1);
        assert_eq!(shared.snapshot().frequency, 7);
    }

    #[test]
    fn clones_share_state() {
        let panel_side = SharedParameters::default();
        let driver_side = panel_side.clone();

        panel_side.update(|p| p.amount = 1.5);
        assert_eq!(driver_side.snapshot().amount, 1.5);
        assert_eq!(driver_side.revision(), 1);
    }

    #[test]
    fn deserializes_partial_with_defaults() {
        let p: Parameters = serde_json::from_str(r#"{ "speed": 0.5 }"#).unwrap();
        assert_eq!(p.frequency, 4);
        assert_eq!(p.speed, 0.5);
        assert_eq!(p.amount, 0.2);
    }
}
