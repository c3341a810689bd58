//! Fixed-geometry stand-in robots
//!
//! Simple kinematic models implementing [`Robot`](crate::robot::Robot),
//! used to exercise the solver and benchmarks without a real robot model.

mod floating_sphere;
mod planar_arm;

pub use floating_sphere::FloatingSphere;
pub use planar_arm::PlanarArm;
