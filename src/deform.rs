use crate::params::Parameters;

/// Height offset of a plane vertex at `time` seconds.
///
/// `z = sin(frequency * (x + y) + time * speed) * amount`
///
/// Evaluated in f64: `time` may be measured from a distant epoch and would
/// lose its fractional part in f32.
pub fn wave_height(x: f32, y: f32, time: f64, frequency: f32, speed: f32, amount: f32) -> f32 {
    let phase = frequency as f64 * (x as f64 + y as f64) + time * speed as f64;
    (phase.sin() * amount as f64) as f32
}

/// Applies [`wave_height`] with a parameter snapshot.
pub fn height_at(x: f32, y: f32, time: f64, params: &Parameters) -> f32 {
    wave_height(
        x,
        y,
        time,
        params.frequency as f32,
        params.speed,
        params.amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn zero_at_origin_at_time_zero() {
        let z = wave_height(0.0, 0.0, 0.0, 4.0, 2.0, 0.2);
        assert!(z.abs() < 1e-7);
    }

    #[test]
    fn peak_without_speed() {
        for t in [0.0, 1.5, 1_700_000_000.25] {
            let z = wave_height(FRAC_PI_2, 0.0, t, 1.0, 0.0, 1.0);
            assert!((z - 1.0).abs() < 1e-6, "t={t} z={z}");
        }
    }

    #[test]
    fn amount_scales_linearly() {
        let a = wave_height(0.3, -0.7, 2.0, 3.0, 1.5, 1.0);
        let b = wave_height(0.3, -0.7, 2.0, 3.0, 1.5, 0.5);
        assert!((a * 0.5 - b).abs() < 1e-6);
    }

    #[test]
    fn height_at_uses_snapshot() {
        let params = Parameters::new(1, 0.0, 1.0);
        assert!((height_at(FRAC_PI_2, 0.0, 9.0, &params) - 1.0).abs() < 1e-6);
    }
}
