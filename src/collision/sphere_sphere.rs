//! Sphere vs. sphere distances

use crate::shapes::Sphere;
use crate::simd::{dot_3, Lane};

/// Squared center distance minus squared radius sum (sign-only proxy)
#[inline(always)]
pub fn sphere_sphere_sql2<T: Lane>(a: &Sphere<T>, x: T, y: T, z: T, r: T) -> T {
    let xs = x - a.x;
    let ys = y - a.y;
    let zs = z - a.z;
    let rs = a.r + r;
    dot_3(xs, ys, zs, xs, ys, zs) - rs * rs
}

/// Signed distance between two sphere surfaces
#[inline(always)]
pub fn sphere_sphere_l2<T: Lane>(a: &Sphere<T>, x: T, y: T, z: T, r: T) -> T {
    let xs = x - a.x;
    let ys = y - a.y;
    let zs = z - a.z;
    dot_3(xs, ys, zs, xs, ys, zs).sqrt() - a.r - r
}

/// [`sphere_sphere_l2`] taking two spheres
#[inline(always)]
pub fn sphere_sphere_l2_sphere<T: Lane>(a: &Sphere<T>, b: &Sphere<T>) -> T {
    sphere_sphere_l2(a, b.x, b.y, b.z, b.r)
}
