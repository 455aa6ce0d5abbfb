//! Lumen - CPU Path Tracing
//!
//! A Monte Carlo path tracer for spheres with diffuse, metallic and
//! dielectric materials. Scenes are built by adding primitives to a
//! [`HittableList`]; a [`Camera`] renders them in parallel and hands every
//! finished pixel to a caller-supplied sink.
//!
//! ```no_run
//! use std::sync::Arc;
//! use lumen_renderer::{Camera, Color, HittableList, Lambertian, Sphere, Vec3};
//!
//! let mut world = HittableList::new();
//! let ground = Arc::new(Lambertian::new(Color::rgb(0.5, 0.5, 0.5)));
//! world.add(Box::new(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, ground)));
//!
//! let mut camera = Camera::new().with_quality(16, 8);
//! let image = camera.render_to_image(&world)?;
//! # Ok::<(), lumen_renderer::RenderError>(())
//! ```

mod camera;
mod error;
mod hittable;
mod material;
mod partition;
mod random;
mod renderer;
mod scene;
mod sphere;

pub use camera::Camera;
pub use error::{RenderError, RenderResult, SceneError, SceneResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use partition::partition_rows;
pub use random::{worker_rngs, RenderRng};
pub use renderer::{
    color_to_rgba, ray_color, render_pixel, sky_gradient, ImageBuffer, RenderMode, RenderStats,
};
pub use scene::{MaterialDescription, SceneDescription, SphereDescription};
pub use sphere::Sphere;

/// Re-export common math types from lumen_math
pub use lumen_math::{Color, Interval, Point3, Ray, Rgba8, Vec3, VecExt};
