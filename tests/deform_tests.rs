use std::f32::consts::{FRAC_PI_2, PI};

use wave_morph::deform::wave_height;
use wave_morph::mesh::PlaneMesh;
use wave_morph::params::Parameters;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[cfg(test)]
mod deform_tests {
    use super::*;

    #[test]
    fn test_zero_amount_is_flat() {
        for &(x, y) in &[(0.0, 0.0), (1.3, -2.7), (-5.0, 5.0)] {
            for &time in &[0.0, 0.5, 123.4] {
                for frequency in [0.0, 1.0, 7.0] {
                    for speed in [0.0, 2.0, 10.0] {
                        assert_eq!(wave_height(x, y, time, frequency, speed, 0.0), 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_frequency_is_uniform_across_the_plane() {
        let time = 0.37;
        let reference = wave_height(0.0, 0.0, time, 0.0, 3.0, 1.5);

        for &(x, y) in &[(1.0, 2.0), (-4.5, 0.25), (5.0, -5.0)] {
            assert!(approx_eq(wave_height(x, y, time, 0.0, 3.0, 1.5), reference));
        }
    }

    #[test]
    fn test_periodic_in_time() {
        let speed = 2.0_f32;
        let period = 2.0 * std::f64::consts::PI / speed as f64;

        for &time in &[0.0, 0.25, 1.7] {
            let now = wave_height(0.4, -1.1, time, 4.0, speed, 0.2);
            let later = wave_height(0.4, -1.1, time + period, 4.0, speed, 0.2);
            assert!(approx_eq(now, later), "{} vs {}", now, later);
        }
    }

    #[test]
    fn test_default_parameters_at_origin() {
        assert!(approx_eq(wave_height(0.0, 0.0, 0.0, 4.0, 2.0, 0.2), 0.0));
    }

    #[test]
    fn test_static_peak_at_quarter_wave() {
        for &time in &[0.0, 10.0, 9999.0] {
            assert!(approx_eq(wave_height(FRAC_PI_2, 0.0, time, 1.0, 0.0, 1.0), 1.0));
        }
    }

    #[test]
    fn test_height_bounded_by_amount() {
        for i in 0..50 {
            let x = i as f32 * 0.21 - 5.0;
            let z = wave_height(x, PI - x, i as f64 * 0.1, 6.0, 4.0, 0.75);
            assert!(z.abs() <= 0.75 + EPSILON);
        }
    }

    #[test]
    fn test_mesh_heights_match_function() {
        let params = Parameters::new(3, 1.5, 0.4);
        let time = 2.25;
        let mut mesh = PlaneMesh::new(10.0, 10.0, 8, 8);

        mesh.deform(time, &params);

        for p in mesh.positions() {
            let expected = wave_height(p.x, p.y, time, 3.0, 1.5, 0.4);
            assert!(approx_eq(p.z, expected));
        }
    }
}
