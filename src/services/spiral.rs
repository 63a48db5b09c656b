//! Golden-angle spiral layout.
//!
//! Places keywords quasi-uniformly on the surface of a sphere. Successive points
//! step down the vertical axis in equal increments while their azimuth advances
//! by the golden angle `π(3 − √5)`, which avoids the banding regular angular
//! steps would produce.

// Plain arithmetic keeps the rounded output identical to what clients already render
#![allow(clippy::suboptimal_flops)]

use std::f64::consts::PI;

use tracing::info;

use crate::constants::SPHERE_RADIUS;
use crate::models::{KeywordPoint, Position, Subcategory};

/// Returns the golden angle in radians (≈ 2.39996).
#[must_use]
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5.0_f64.sqrt())
}

/// Rounds `value` to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Computes the unit-sphere point for a 1-based `keyword_id` out of `total`.
///
/// The azimuth uses the 1-based id while the vertical step divides by
/// `total - 1`. Both are kept as-is so positions match what existing clients
/// already render.
///
/// With `keyword_id == total` the vertical step overshoots the south pole
/// (`y < -1`); the horizontal radius is clamped to zero, so that point sits on
/// the axis just below the sphere. For `total <= 1` the divisor is 1.
#[must_use]
pub fn spiral_point(keyword_id: u32, total: u32) -> Position {
    let id = f64::from(keyword_id);
    let divisor = f64::from(total.saturating_sub(1).max(1));

    let theta = golden_angle() * id;
    let y = 1.0 - (id / divisor) * 2.0;
    let radius = (1.0 - y * y).max(0.0).sqrt();

    Position::new(theta.cos() * radius, y, theta.sin() * radius)
}

/// Scales a unit-sphere point to [`SPHERE_RADIUS`] and rounds each axis to 3 decimals.
#[must_use]
pub fn to_sphere_position(unit: Position) -> Position {
    Position::new(
        round_to(unit.x * SPHERE_RADIUS, 3),
        round_to(unit.y * SPHERE_RADIUS, 3),
        round_to(unit.z * SPHERE_RADIUS, 3),
    )
}

/// Weight of the keyword at 0-based `index` within its subcategory.
///
/// Cycles with period 5: 5.0, 6.2, 7.4, 8.6, 9.8.
#[must_use]
pub fn keyword_weight(index: u32) -> f64 {
    round_to(5.0 + f64::from(index % 5) * 1.2, 1)
}

/// Generates one keyword point per slot across `subcategories`, in order.
///
/// Ids are assigned 1..=N walking the subcategories front to back, where N is
/// the sum of their counts.
#[must_use]
pub fn generate_keywords(subcategories: &[Subcategory]) -> Vec<KeywordPoint> {
    let total: u32 = subcategories.iter().map(|sub| sub.count).sum();
    let mut points = Vec::with_capacity(total as usize);
    let mut keyword_id = 1;

    for sub in subcategories {
        for index in 0..sub.count {
            points.push(KeywordPoint {
                id: keyword_id,
                label: format!("{}_{:02}", sub.display_name, index + 1),
                subcategory_code: sub.code.to_string(),
                weight: keyword_weight(index),
                active: true,
                dependency_ids: Vec::new(),
                position: to_sphere_position(spiral_point(keyword_id, total)),
                color: sub.color.to_string(),
            });
            keyword_id += 1;
        }
    }

    info!("Generated {} keyword points", points.len());
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SUBCATEGORIES;

    #[test]
    fn test_golden_angle_value() {
        assert!((golden_angle() - 2.399_963_229_728_653).abs() < 1e-12);
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(1.234_56, 3) - 1.235).abs() < 1e-12);
        assert!((round_to(-2.0004, 3) - -2.0).abs() < 1e-12);
        assert!((round_to(8.6, 1) - 8.6).abs() < 1e-12);
    }

    #[test]
    fn test_first_point() {
        let p = spiral_point(1, 442);
        let expected_y = 1.0 - 2.0 / 441.0;
        assert!((p.y - expected_y).abs() < 1e-12);

        let radius = (1.0 - expected_y * expected_y).sqrt();
        assert!((p.x - golden_angle().cos() * radius).abs() < 1e-12);
        assert!((p.z - golden_angle().sin() * radius).abs() < 1e-12);
    }

    #[test]
    fn test_last_points_at_south_pole() {
        let p = spiral_point(441, 442);
        assert!((p.y + 1.0).abs() < f64::EPSILON);
        assert!(p.x.abs() < f64::EPSILON && p.z.abs() < f64::EPSILON);

        // The final id overshoots; it stays on the axis, distinct from 441
        let p = spiral_point(442, 442);
        assert!((p.y - (1.0 - 2.0 * 442.0 / 441.0)).abs() < 1e-12);
        assert!(p.y < -1.0);
        assert!(p.x.abs() < f64::EPSILON && p.z.abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_totals_do_not_divide_by_zero() {
        for total in [0, 1] {
            let p = spiral_point(1, total);
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
            assert!((p.norm_squared() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unit_points_on_sphere() {
        for id in 1..442 {
            let p = spiral_point(id, 442);
            assert!(
                (p.norm_squared() - 1.0).abs() < 1e-9,
                "point {id} off the unit sphere"
            );
        }
    }

    #[test]
    fn test_keyword_weight_cycle() {
        let expected = [5.0, 6.2, 7.4, 8.6, 9.8];
        for index in 0..15 {
            let got = keyword_weight(index);
            assert!(
                (got - expected[(index % 5) as usize]).abs() < 1e-12,
                "index {index} -> {got}"
            );
        }
        assert!((keyword_weight(7) - 7.4).abs() < 1e-12);
    }

    #[test]
    fn test_generate_labels_and_order() {
        let points = generate_keywords(&SUBCATEGORIES);
        assert_eq!(points.len(), 442);

        assert_eq!(points[0].label, "인지차원_01");
        assert_eq!(points[43].label, "인지차원_44");
        assert_eq!(points[44].label, "개방성차원_01");
        assert_eq!(points[44].subcategory_code, "A-2");
        assert_eq!(points[441].label, "성격장애_23");
        assert_eq!(points[441].color, "#450A0A");
    }

    #[test]
    fn test_generate_partial_table() {
        let points = generate_keywords(&SUBCATEGORIES[5..6]);
        assert_eq!(points.len(), 11);
        assert_eq!(points[0].id, 1);
        assert_eq!(points[10].id, 11);
        assert!(points.iter().all(|p| p.subcategory_code == "B-1"));
    }

    #[test]
    fn test_generate_empty_table() {
        assert!(generate_keywords(&[]).is_empty());
    }
}
