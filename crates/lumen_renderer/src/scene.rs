//! JSON scene descriptions.
//!
//! A scene file holds a camera block, a table of named materials and a list
//! of spheres that reference those materials by name:
//!
//! ```json
//! {
//!   "camera": { "image_width": 400, "samples_per_pixel": 50 },
//!   "materials": {
//!     "ground": { "type": "lambertian", "albedo": [0.8, 0.8, 0.0] },
//!     "glass": { "type": "dielectric", "ior": 1.5 }
//!   },
//!   "spheres": [
//!     { "center": [0.0, -100.5, -1.0], "radius": 100.0, "material": "ground" },
//!     { "center": [0.0, 0.0, -1.0], "radius": 0.5, "material": "glass" }
//!   ]
//! }
//! ```
//!
//! Every camera field is optional and falls back to [`Camera::new`].

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use crate::{
    Camera, Dielectric, HittableList, Lambertian, Material, Metal, SceneError, SceneResult,
    Sphere,
};
use lumen_math::{Color, Point3};
use serde::{Deserialize, Serialize};

/// A complete scene: camera settings plus geometry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub camera: Camera,
    pub materials: BTreeMap<String, MaterialDescription>,
    pub spheres: Vec<SphereDescription>,
}

/// A material entry, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDescription {
    Lambertian {
        albedo: [f32; 3],
    },
    Metal {
        albedo: [f32; 3],
        #[serde(default)]
        fuzz: f32,
        /// Absorb fuzzed reflections that point into the surface
        #[serde(default)]
        reject_inward: bool,
    },
    Dielectric {
        ior: f32,
    },
}

/// A sphere entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: Point3,
    pub radius: f32,
    /// Inward-facing normals
    #[serde(default)]
    pub hollow: bool,
    /// Key into the scene's material table
    pub material: String,
}

impl MaterialDescription {
    fn validate(&self, name: &str) -> SceneResult<()> {
        let invalid = |reason: String| SceneError::InvalidMaterial {
            name: name.to_string(),
            reason,
        };

        match *self {
            MaterialDescription::Lambertian { albedo } | MaterialDescription::Metal { albedo, .. }
                if albedo.iter().any(|c| !c.is_finite() || *c < 0.0) =>
            {
                Err(invalid(format!("albedo must be finite and non-negative, got {albedo:?}")))
            }
            MaterialDescription::Metal { fuzz, .. } if !(0.0..=1.0).contains(&fuzz) => {
                Err(invalid(format!("fuzz must be in [0, 1], got {fuzz}")))
            }
            MaterialDescription::Dielectric { ior } if !(ior.is_finite() && ior > 0.0) => {
                Err(invalid(format!("ior must be positive and finite, got {ior}")))
            }
            _ => Ok(()),
        }
    }

    /// Build the material this entry describes.
    pub fn build(&self) -> Arc<dyn Material> {
        match *self {
            MaterialDescription::Lambertian { albedo } => {
                Arc::new(Lambertian::new(albedo_color(albedo)))
            }
            MaterialDescription::Metal {
                albedo,
                fuzz,
                reject_inward,
            } => Arc::new(Metal::new(albedo_color(albedo), fuzz).with_inward_rejection(reject_inward)),
            MaterialDescription::Dielectric { ior } => Arc::new(Dielectric::new(ior)),
        }
    }
}

fn albedo_color([r, g, b]: [f32; 3]) -> Color {
    Color::rgb(r, g, b)
}

impl SceneDescription {
    /// Parse a scene from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        log::info!("Loading scene from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the scene back to pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the description and build a ready-to-render camera and world.
    ///
    /// Spheres sharing a material name share one material instance.
    pub fn build(&self) -> SceneResult<(Camera, HittableList)> {
        let mut camera = self.camera.clone();
        camera.initialize()?;

        let mut materials: HashMap<&str, Arc<dyn Material>> = HashMap::new();
        for (name, description) in &self.materials {
            description.validate(name)?;
            materials.insert(name.as_str(), description.build());
        }

        let mut world = HittableList::new();
        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite() {
                return Err(SceneError::InvalidSphere {
                    index,
                    reason: format!("center must be finite, got {}", sphere.center),
                });
            }
            if !(sphere.radius.is_finite() && sphere.radius != 0.0) {
                return Err(SceneError::InvalidSphere {
                    index,
                    reason: format!("radius must be finite and non-zero, got {}", sphere.radius),
                });
            }

            let material = materials
                .get(sphere.material.as_str())
                .cloned()
                .ok_or_else(|| SceneError::UnknownMaterial {
                    index,
                    material: sphere.material.clone(),
                })?;

            let primitive = if sphere.hollow {
                Sphere::hollow(sphere.center, sphere.radius, material)
            } else {
                Sphere::new(sphere.center, sphere.radius, material)
            };
            world.add(Box::new(primitive));
        }

        log::info!(
            "Built scene: {} spheres, {} materials",
            world.len(),
            materials.len()
        );

        Ok((camera, world))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hittable, RenderError};
    use lumen_math::{Interval, Ray, Vec3};

    const THREE_SPHERES: &str = include_str!("../scenes/three_spheres.json");

    #[test]
    fn test_parse_bundled_scene() {
        let scene = SceneDescription::from_json_str(THREE_SPHERES).unwrap();

        assert_eq!(scene.camera.image_width, 400);
        assert_eq!(scene.materials.len(), 4);
        assert_eq!(scene.spheres.len(), 5);
        assert_eq!(
            scene.materials["left"],
            MaterialDescription::Dielectric { ior: 1.5 }
        );
        assert!(scene.spheres.iter().any(|s| s.hollow));

        let (camera, world) = scene.build().unwrap();
        assert_eq!(camera.image_height(), 225);
        assert_eq!(world.len(), 5);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let scene = SceneDescription::from_json_str(
            r#"{
                "materials": { "m": { "type": "metal", "albedo": [0.5, 0.5, 0.5] } },
                "spheres": [{ "center": [0, 0, -1], "radius": 0.5, "material": "m" }]
            }"#,
        )
        .unwrap();

        assert_eq!(scene.camera.image_width, 640);
        assert_eq!(
            scene.materials["m"],
            MaterialDescription::Metal {
                albedo: [0.5, 0.5, 0.5],
                fuzz: 0.0,
                reject_inward: false,
            }
        );
        assert!(!scene.spheres[0].hollow);
    }

    #[test]
    fn test_empty_document_is_default_scene() {
        let scene = SceneDescription::from_json_str("{}").unwrap();
        let (camera, world) = scene.build().unwrap();

        assert_eq!(camera.image_width, 640);
        assert!(world.is_empty());
    }

    #[test]
    fn test_built_world_is_hittable() {
        let scene = SceneDescription::from_json_str(
            r#"{
                "materials": { "red": { "type": "lambertian", "albedo": [1, 0, 0] } },
                "spheres": [{ "center": [0, 0, -1], "radius": 0.5, "material": "red" }]
            }"#,
        )
        .unwrap();
        let (_, world) = scene.build().unwrap();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = world
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .expect("should hit");
        assert!((rec.t - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_material() {
        let scene = SceneDescription::from_json_str(
            r#"{ "spheres": [{ "center": [0, 0, -1], "radius": 0.5, "material": "nope" }] }"#,
        )
        .unwrap();

        match scene.build() {
            Err(SceneError::UnknownMaterial { index, material }) => {
                assert_eq!(index, 0);
                assert_eq!(material, "nope");
            }
            Err(other) => panic!("expected UnknownMaterial, got {other:?}"),
            Ok(_) => panic!("expected UnknownMaterial, got a scene"),
        }
    }

    #[test]
    fn test_invalid_materials() {
        for json in [
            r#"{ "type": "metal", "albedo": [1, 1, 1], "fuzz": 1.5 }"#,
            r#"{ "type": "dielectric", "ior": 0.0 }"#,
            r#"{ "type": "lambertian", "albedo": [1, -0.5, 1] }"#,
        ] {
            let mut scene = SceneDescription::default();
            scene
                .materials
                .insert("bad".to_string(), serde_json::from_str(json).unwrap());

            assert!(
                matches!(scene.build(), Err(SceneError::InvalidMaterial { .. })),
                "{json}"
            );
        }
    }

    #[test]
    fn test_invalid_sphere_radius() {
        let scene = SceneDescription::from_json_str(
            r#"{
                "materials": { "m": { "type": "dielectric", "ior": 1.5 } },
                "spheres": [{ "center": [0, 0, -1], "radius": 0.0, "material": "m" }]
            }"#,
        )
        .unwrap();

        assert!(matches!(
            scene.build(),
            Err(SceneError::InvalidSphere { index: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_camera() {
        let scene =
            SceneDescription::from_json_str(r#"{ "camera": { "samples_per_pixel": 0 } }"#).unwrap();

        assert!(matches!(
            scene.build(),
            Err(SceneError::Camera(RenderError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn test_unknown_material_type_is_parse_error() {
        let result = SceneDescription::from_json_str(
            r#"{ "materials": { "m": { "type": "emissive", "color": [1, 1, 1] } } }"#,
        );
        assert!(matches!(result, Err(SceneError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SceneDescription::from_path("/definitely/not/a/scene.json");
        assert!(matches!(result, Err(SceneError::Io(_))));
    }

    #[test]
    fn test_json_round_trip_keeps_camera() {
        let scene = SceneDescription::from_json_str(THREE_SPHERES).unwrap();
        let reparsed = SceneDescription::from_json_str(&scene.to_json_string().unwrap()).unwrap();

        assert_eq!(reparsed.camera.look_from, scene.camera.look_from);
        assert_eq!(reparsed.camera.mode, scene.camera.mode);
        assert_eq!(reparsed.spheres, scene.spheres);
    }
}
