//! Sphere vs. oriented box distances
//!
//! Two families, each with a z-aligned specialization that skips the z
//! component of the first two axes and uses `|dz|` for the third:
//!
//! - **Squared / clamped** (`sphere_cuboid`, `sphere_z_aligned_cuboid`):
//!   squared length of the per-axis overshoot minus the squared radius.
//!   Correct sign, not a distance.
//! - **Euclidean** (`sphere_cuboid_l2`, `sphere_z_aligned_cuboid_l2`):
//!   exact signed distance from the box surface to the sphere surface,
//!   positive outside and negative inside.

use crate::shapes::{Cuboid, Sphere};
use crate::simd::{dot_2, dot_3, Lane};

/// Squared overshoot outside the box minus `rsq` (squared radius)
#[inline(always)]
pub fn sphere_cuboid<T: Lane>(c: &Cuboid<T>, x: T, y: T, z: T, rsq: T) -> T {
    let xs = x - c.x;
    let ys = y - c.y;
    let zs = z - c.z;

    let a1 = (dot_3(c.axis_1_x, c.axis_1_y, c.axis_1_z, xs, ys, zs).abs() - c.axis_1_r)
        .max(T::ZERO);
    let a2 = (dot_3(c.axis_2_x, c.axis_2_y, c.axis_2_z, xs, ys, zs).abs() - c.axis_2_r)
        .max(T::ZERO);
    let a3 = (dot_3(c.axis_3_x, c.axis_3_y, c.axis_3_z, xs, ys, zs).abs() - c.axis_3_r)
        .max(T::ZERO);

    dot_3(a1, a2, a3, a1, a2, a3) - rsq
}

/// [`sphere_cuboid`] taking a sphere
#[inline(always)]
pub fn sphere_cuboid_sphere<T: Lane>(c: &Cuboid<T>, s: &Sphere<T>) -> T {
    sphere_cuboid(c, s.x, s.y, s.z, s.r * s.r)
}

/// [`sphere_cuboid`] for a cuboid whose third axis is global z
#[inline(always)]
pub fn sphere_z_aligned_cuboid<T: Lane>(c: &Cuboid<T>, x: T, y: T, z: T, rsq: T) -> T {
    let xs = x - c.x;
    let ys = y - c.y;
    let zs = z - c.z;

    let a1 = (dot_2(c.axis_1_x, c.axis_1_y, xs, ys).abs() - c.axis_1_r).max(T::ZERO);
    let a2 = (dot_2(c.axis_2_x, c.axis_2_y, xs, ys).abs() - c.axis_2_r).max(T::ZERO);
    let a3 = (zs.abs() - c.axis_3_r).max(T::ZERO);

    dot_3(a1, a2, a3, a1, a2, a3) - rsq
}

/// [`sphere_z_aligned_cuboid`] taking a sphere
#[inline(always)]
pub fn sphere_z_aligned_cuboid_sphere<T: Lane>(c: &Cuboid<T>, s: &Sphere<T>) -> T {
    sphere_z_aligned_cuboid(c, s.x, s.y, s.z, s.r * s.r)
}

/// Signed Euclidean distance between sphere and box surfaces
///
/// `q_k` is the signed overshoot along axis `k`. Outside the box the
/// distance is the norm of the positive overshoots; inside, it is the
/// largest (least negative) overshoot. Both terms are zero on the surface,
/// so the result is continuous across it.
#[inline(always)]
pub fn sphere_cuboid_l2<T: Lane>(c: &Cuboid<T>, x: T, y: T, z: T, r: T) -> T {
    let xs = x - c.x;
    let ys = y - c.y;
    let zs = z - c.z;

    let q1 = dot_3(c.axis_1_x, c.axis_1_y, c.axis_1_z, xs, ys, zs).abs() - c.axis_1_r;
    let q2 = dot_3(c.axis_2_x, c.axis_2_y, c.axis_2_z, xs, ys, zs).abs() - c.axis_2_r;
    let q3 = dot_3(c.axis_3_x, c.axis_3_y, c.axis_3_z, xs, ys, zs).abs() - c.axis_3_r;

    combine_overshoot(q1, q2, q3) - r
}

/// [`sphere_cuboid_l2`] taking a sphere
#[inline(always)]
pub fn sphere_cuboid_l2_sphere<T: Lane>(c: &Cuboid<T>, s: &Sphere<T>) -> T {
    sphere_cuboid_l2(c, s.x, s.y, s.z, s.r)
}

/// [`sphere_cuboid_l2`] for a cuboid whose third axis is global z
#[inline(always)]
pub fn sphere_z_aligned_cuboid_l2<T: Lane>(c: &Cuboid<T>, x: T, y: T, z: T, r: T) -> T {
    let xs = x - c.x;
    let ys = y - c.y;
    let zs = z - c.z;

    let q1 = dot_2(c.axis_1_x, c.axis_1_y, xs, ys).abs() - c.axis_1_r;
    let q2 = dot_2(c.axis_2_x, c.axis_2_y, xs, ys).abs() - c.axis_2_r;
    let q3 = zs.abs() - c.axis_3_r;

    combine_overshoot(q1, q2, q3) - r
}

/// [`sphere_z_aligned_cuboid_l2`] taking a sphere
#[inline(always)]
pub fn sphere_z_aligned_cuboid_l2_sphere<T: Lane>(c: &Cuboid<T>, s: &Sphere<T>) -> T {
    sphere_z_aligned_cuboid_l2(c, s.x, s.y, s.z, s.r)
}

/// Point-to-box signed distance from per-axis overshoots
#[inline(always)]
fn combine_overshoot<T: Lane>(q1: T, q2: T, q3: T) -> T {
    let a1 = q1.max(T::ZERO);
    let a2 = q2.max(T::ZERO);
    let a3 = q3.max(T::ZERO);
    let outside = dot_3(a1, a2, a3, a1, a2, a3).sqrt();

    let max_q = q1.max(q2).max(q3);
    let inside = -((-max_q).max(T::ZERO));

    outside + inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{FloatVector, RAKE};
    use approx::assert_relative_eq;
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn unit_box() -> Cuboid<f32> {
        Cuboid::axis_aligned(Vec3::ZERO, Vec3::splat(0.5))
    }

    fn random_sphere(rng: &mut StdRng) -> Sphere<f32> {
        Sphere::new(
            Vec3::new(
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
            ),
            rng.gen_range(0.01..0.5),
        )
    }

    #[test]
    fn test_l2_outside_face() {
        let s = Sphere::new(Vec3::new(2.0, 0.0, 0.0), 0.25);
        assert_relative_eq!(sphere_cuboid_l2_sphere(&unit_box(), &s), 1.25, epsilon = 1e-6);
    }

    #[test]
    fn test_l2_outside_corner() {
        let s = Sphere::new(Vec3::splat(1.5), 0.0);
        let expected = 3.0f32.sqrt();
        assert_relative_eq!(sphere_cuboid_l2_sphere(&unit_box(), &s), expected, epsilon = 1e-5);
    }

    #[test]
    fn test_l2_inside_is_negative_depth() {
        // 0.2 from the nearest face, radius 0.1 -> -0.3
        let s = Sphere::new(Vec3::new(0.3, 0.0, 0.0), 0.1);
        assert_relative_eq!(sphere_cuboid_l2_sphere(&unit_box(), &s), -0.3, epsilon = 1e-6);
    }

    #[test]
    fn test_l2_centered_on_face() {
        let s = Sphere::new(Vec3::new(0.5, 0.1, -0.2), 0.0);
        assert!(sphere_cuboid_l2_sphere(&unit_box(), &s).abs() < 1e-6);
    }

    #[test]
    fn test_l2_continuous_across_face() {
        let c = unit_box();
        let r = 0.1;
        let mut prev = sphere_cuboid_l2(&c, 0.0, 0.0, 0.0, r);
        for i in 1..=200 {
            let x = i as f32 * 0.005;
            let d = sphere_cuboid_l2(&c, x, 0.0, 0.0, r);
            assert!((d - (x - 0.6)).abs() < 1e-5, "x={} d={}", x, d);
            assert!((d - prev).abs() <= 0.005 + 1e-5);
            prev = d;
        }
        // Contact exactly when the radius equals the distance to the face
        assert!(sphere_cuboid_l2(&c, 0.6, 0.0, 0.0, r).abs() < 1e-6);
    }

    #[test]
    fn test_squared_form() {
        let c = unit_box();
        // Overshoot 1.5 along x -> 2.25 - 0.25
        assert_relative_eq!(sphere_cuboid(&c, 2.0, 0.0, 0.0, 0.25), 2.0, epsilon = 1e-6);
        // Any interior center reports -r^2
        assert_relative_eq!(sphere_cuboid(&c, 0.1, 0.2, 0.0, 0.04), -0.04, epsilon = 1e-7);
    }

    #[test]
    fn test_squared_and_l2_agree_in_sign() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let c = Cuboid::from_euler(
                Vec3::new(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5), 0.0),
                Vec3::new(
                    rng.gen_range(-3.0..3.0),
                    rng.gen_range(-3.0..3.0),
                    rng.gen_range(-3.0..3.0),
                ),
                Vec3::new(
                    rng.gen_range(0.1..0.8),
                    rng.gen_range(0.1..0.8),
                    rng.gen_range(0.1..0.8),
                ),
            );
            let s = random_sphere(&mut rng);
            let l2 = sphere_cuboid_l2_sphere(&c, &s);
            let sq = sphere_cuboid_sphere(&c, &s);
            // Skip grazing contacts where rounding decides the sign
            if l2.abs() < 1e-4 {
                continue;
            }
            assert_eq!(l2 > 0.0, sq > 0.0, "l2={} sq={} for {:?}", l2, sq, s);
        }
    }

    #[test]
    fn test_z_aligned_matches_general() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2000 {
            let c = Cuboid::z_rotated(
                Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                ),
                rng.gen_range(-3.2..3.2),
                Vec3::new(
                    rng.gen_range(0.05..0.6),
                    rng.gen_range(0.05..0.6),
                    rng.gen_range(0.05..0.6),
                ),
            );
            let s = random_sphere(&mut rng);

            let general = sphere_cuboid_l2_sphere(&c, &s);
            let special = sphere_z_aligned_cuboid_l2_sphere(&c, &s);
            assert!((general - special).abs() < 1e-5, "{} vs {}", general, special);

            let general_sq = sphere_cuboid_sphere(&c, &s);
            let special_sq = sphere_z_aligned_cuboid_sphere(&c, &s);
            assert!((general_sq - special_sq).abs() < 1e-4, "{} vs {}", general_sq, special_sq);
        }
    }

    #[test]
    fn test_lane_wide_matches_scalar() {
        let mut rng = StdRng::seed_from_u64(3);
        let c = Cuboid::from_euler(
            Vec3::new(0.2, -0.1, 0.3),
            Vec3::new(0.4, 0.9, -0.2),
            Vec3::new(0.3, 0.5, 0.2),
        );
        let cv = c.broadcast();

        let spheres: Vec<Sphere<f32>> = (0..RAKE).map(|_| random_sphere(&mut rng)).collect();
        let lane = |f: fn(&Sphere<f32>) -> f32| {
            let mut v = [0.0f32; RAKE];
            for (k, s) in spheres.iter().enumerate() {
                v[k] = f(s);
            }
            FloatVector::new(v)
        };
        let sv = Sphere::from_lanes(lane(|s| s.x), lane(|s| s.y), lane(|s| s.z), lane(|s| s.r));

        let l2 = sphere_cuboid_l2_sphere(&cv, &sv).to_array();
        let sq = sphere_cuboid_sphere(&cv, &sv).to_array();
        for (k, s) in spheres.iter().enumerate() {
            assert!((l2[k] - sphere_cuboid_l2_sphere(&c, s)).abs() < 1e-6);
            assert!((sq[k] - sphere_cuboid_sphere(&c, s)).abs() < 1e-6);
        }
    }
}
