//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use lumen_math::{Interval, Point3, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Returned by value from [`Hittable::hit`]; each trace step owns its own
/// record, so nothing is shared between recursive calls or threads.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Point3,
    /// Unit surface normal, always pointing against the incoming ray
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record from a unit outward normal.
    ///
    /// The stored normal is flipped if needed so it opposes `ray`.
    pub fn new(
        ray: &Ray,
        p: Point3,
        t: f32,
        outward_normal: Vec3,
        material: &'a dyn Material,
    ) -> Self {
        let mut rec = Self {
            p,
            normal: outward_normal,
            material,
            t,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        // Normal always points against the ray
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
///
/// Scenes are read concurrently by every render worker, hence `Send + Sync`.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object with t inside `ray_t` (exclusive).
    ///
    /// Returns the nearest such hit, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// A list of hittable objects.
///
/// Intersection is a linear scan in insertion order.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if let Some(rec) = object.hit(ray, interval) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Lambertian, Sphere};
    use std::sync::Arc;

    fn gray() -> Arc<Lambertian> {
        Arc::new(Lambertian::new(Color::rgb(0.5, 0.5, 0.5)))
    }

    fn forward_ray() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_set_face_normal_front() {
        let material = Lambertian::new(Color::WHITE);
        let rec = HitRecord::new(&forward_ray(), Vec3::ZERO, 1.0, Vec3::Z, &material);

        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_set_face_normal_back() {
        let material = Lambertian::new(Color::WHITE);
        let rec = HitRecord::new(&forward_ray(), Vec3::ZERO, 1.0, Vec3::NEG_Z, &material);

        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
        assert!(rec.normal.dot(forward_ray().direction()) < 0.0);
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        assert!(world.is_empty());
        assert!(world.hit(&forward_ray(), Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_closest_hit_wins() {
        // Far sphere first so insertion order can't be what picks the winner
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 0.5, gray())));
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray())));

        let rec = world
            .hit(&forward_ray(), Interval::new(0.001, f32::INFINITY))
            .expect("ray should hit");

        assert!((rec.t - 0.5).abs() < 1e-5);
        assert!((rec.p.z + 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_closest_hit_overlapping_spheres() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray())));
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.2), 0.5, gray())));

        let rec = world
            .hit(&forward_ray(), Interval::new(0.001, f32::INFINITY))
            .expect("ray should hit");

        // Second sphere's front surface is at z = -0.7, the first at -0.5
        assert!((rec.t - 0.5).abs() < 1e-5);
        assert!(rec.front_face);
    }

    #[test]
    fn test_respects_interval_upper_bound() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.5, gray())));

        assert!(world.hit(&forward_ray(), Interval::new(0.001, 4.0)).is_none());
        assert!(world.hit(&forward_ray(), Interval::new(0.001, 5.0)).is_some());
    }

    #[test]
    fn test_clear() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray())));
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 0.5, gray())));
        assert_eq!(world.len(), 2);

        world.clear();
        assert!(world.is_empty());
        assert!(world.hit(&forward_ray(), Interval::UNIVERSE).is_none());
    }
}
