//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use lumen_math::{Interval, Point3, Ray};

/// A sphere primitive.
///
/// The material is shared through an `Arc` so many spheres can reuse one
/// material instance.
pub struct Sphere {
    center: Point3,
    radius: f32,
    /// Report normals pointing toward the center instead of away from it.
    invert_normal: bool,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// A negative radius is accepted as shorthand for a hollow sphere: the
    /// magnitude becomes the radius and normals are inverted, so a glass
    /// sphere with a smaller negative-radius sphere inside it reads as a
    /// bubble. This is intentional; prefer [`Sphere::hollow`] in new code.
    pub fn new(center: Point3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.abs(),
            invert_normal: radius < 0.0,
            material,
        }
    }

    /// Create a sphere whose normals point inward.
    pub fn hollow(center: Point3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            invert_normal: true,
            ..Self::new(center, radius.abs(), material)
        }
    }

    /// Get the sphere's center.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Get the sphere's radius (never negative).
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether normals point toward the center.
    pub fn is_hollow(&self) -> bool {
        self.invert_normal
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-b - sqrtd) / (2.0 * a);
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / (2.0 * a);
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let mut outward_normal = (p - self.center) / self.radius;
        if self.invert_normal {
            outward_normal = -outward_normal;
        }

        Some(HitRecord::new(
            ray,
            p,
            root,
            outward_normal,
            self.material.as_ref(),
        ))
    }
}
