// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod color;
mod interval;
mod ray;
mod vector;

pub use color::{Color, Rgba8};
pub use interval::Interval;
pub use ray::Ray;
pub use vector::{Point3, VecExt};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a - b, Vec3::new(-3.0, -3.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_vec3_dot_cross_length() {
        let a = Vec3::new(3.0, 4.0, 0.0);
        let b = Vec3::new(5.0, 12.0, 13.0);

        assert_eq!(a.dot(b), 63.0);
        assert_eq!(a.cross(b), Vec3::new(52.0, -39.0, 16.0));
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.length_squared(), 25.0);
        assert!(a.normalize().almost_eq(Vec3::new(0.6, 0.8, 0.0), 1e-6));
    }

    #[test]
    fn test_point3_is_vec3() {
        let p: Point3 = Point3::new(1.0, 0.0, 0.0);
        let v: Vec3 = p;
        assert_eq!(p, v);
    }
}
