//! Camera for ray generation.

use crate::random::{random_in_unit_disk, sample_square};
use crate::{RenderError, RenderMode, RenderResult};
use lumen_math::{Point3, Ray, Vec3, VecExt};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Camera configuration plus the projection state derived from it.
///
/// Set the public fields (or use the `with_*` builders), then call
/// [`Camera::render`]. Rendering re-runs [`Camera::initialize`] first, so
/// the derived state always matches the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    // Image settings
    /// Rendered image width in pixels
    pub image_width: u32,
    /// Width over height; the image height is derived from this
    pub aspect_ratio: f32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,

    // Camera positioning
    pub look_from: Point3,
    pub look_at: Point3,
    pub vup: Vec3,

    // Lens settings
    pub vfov: f32,          // Vertical field of view in degrees
    pub defocus_angle: f32, // Variation angle of rays through each pixel
    pub focus_dist: f32,    // Distance from camera to plane of perfect focus

    // Render settings
    /// Master seed for the per-worker random streams
    pub seed: u64,
    /// Worker count; `None` uses the available hardware parallelism
    pub threads: Option<usize>,
    pub mode: RenderMode,

    // Cached computed values (set by initialize())
    #[serde(skip)]
    image_height: u32,
    #[serde(skip)]
    center: Point3,
    #[serde(skip)]
    pixel00_loc: Point3,
    #[serde(skip)]
    pixel_delta_u: Vec3,
    #[serde(skip)]
    pixel_delta_v: Vec3,
    #[serde(skip)]
    u: Vec3,
    #[serde(skip)]
    v: Vec3,
    #[serde(skip)]
    w: Vec3,
    #[serde(skip)]
    defocus_disk_u: Vec3,
    #[serde(skip)]
    defocus_disk_v: Vec3,
    #[serde(skip)]
    samples_scale: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    ///
    /// 640x360 (16:9), 10 samples, depth 10, 90° vertical FOV, looking
    /// down -Z from the origin, no defocus blur.
    pub fn new() -> Self {
        Self {
            image_width: 640,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 10,
            max_depth: 10,
            look_from: Point3::new(0.0, 0.0, 0.0),
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 90.0,
            defocus_angle: 0.0,
            focus_dist: 1.0,
            seed: 0,
            threads: None,
            mode: RenderMode::PathTraced,
            // Cached values (initialized to defaults)
            image_height: 360,
            center: Point3::ZERO,
            pixel00_loc: Point3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            defocus_disk_u: Vec3::ZERO,
            defocus_disk_v: Vec3::ZERO,
            samples_scale: 0.1,
        }
    }

    /// Set image width and aspect ratio.
    pub fn with_resolution(mut self, width: u32, aspect_ratio: f32) -> Self {
        self.image_width = width;
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples;
        self.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, defocus_angle: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Set the master random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Pin the number of render workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Image height derived from width and aspect ratio, at least 1.
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f32 / self.aspect_ratio) as u32).max(1)
    }

    /// Check the configuration for values that can't produce an image.
    pub fn validate(&self) -> RenderResult<()> {
        if self.image_width == 0 {
            return Err(invalid("image_width must be at least 1"));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(invalid(format!(
                "aspect_ratio must be positive and finite, got {}",
                self.aspect_ratio
            )));
        }
        let height = self.image_width as f32 / self.aspect_ratio;
        if !(height < u32::MAX as f32)
            || self.image_width as u64 * self.image_height() as u64 > MAX_PIXELS
        {
            return Err(invalid(format!(
                "{}x{} image is too large",
                self.image_width, height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(invalid("samples_per_pixel must be at least 1"));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(invalid(format!("vfov must be in (0, 180), got {}", self.vfov)));
        }
        if !(self.focus_dist.is_finite() && self.focus_dist > 0.0) {
            return Err(invalid(format!(
                "focus_dist must be positive and finite, got {}",
                self.focus_dist
            )));
        }
        if !(self.defocus_angle >= 0.0 && self.defocus_angle < 180.0) {
            return Err(invalid(format!(
                "defocus_angle must be in [0, 180), got {}",
                self.defocus_angle
            )));
        }
        if self.threads == Some(0) {
            return Err(invalid("threads must be at least 1"));
        }

        if !(self.look_from.is_finite() && self.look_at.is_finite() && self.vup.is_finite()) {
            return Err(invalid("look_from, look_at and vup must be finite"));
        }

        let view = self.look_from - self.look_at;
        if view.near_zero() {
            return Err(invalid("look_from and look_at must differ"));
        }
        if self.vup.cross(view).near_zero() {
            return Err(invalid("vup must not be parallel to the view direction"));
        }

        Ok(())
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) -> RenderResult<()> {
        self.validate()?;

        self.image_height = self.image_height();
        self.samples_scale = 1.0 / self.samples_per_pixel as f32;
        self.center = self.look_from;

        // Calculate viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width =
            viewport_height * (self.image_width as f32 / self.image_height as f32);

        // Calculate camera basis vectors
        self.w = (self.look_from - self.look_at).unit();
        self.u = self.vup.cross(self.w).unit();
        self.v = self.w.cross(self.u);

        // Calculate viewport vectors
        let viewport_u = viewport_width * self.u;
        let viewport_v = -viewport_height * self.v;

        // Calculate pixel delta vectors
        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        // Calculate upper left pixel location
        let viewport_upper_left =
            self.center - self.focus_dist * self.w - viewport_u / 2.0 - viewport_v / 2.0;

        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        // Calculate defocus disk basis vectors
        let defocus_radius = self.focus_dist * (self.defocus_angle / 2.0).to_radians().tan();
        self.defocus_disk_u = self.u * defocus_radius;
        self.defocus_disk_v = self.v * defocus_radius;

        Ok(())
    }

    /// Generate a ray for pixel (i, j) with random sampling.
    ///
    /// The target is jittered within the pixel for anti-aliasing; the
    /// origin is sampled on the defocus disk when `defocus_angle > 0`.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);

        let pixel_sample = self.pixel00_loc
            + ((i as f32) + offset.x) * self.pixel_delta_u
            + ((j as f32) + offset.y) * self.pixel_delta_v;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Point3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }

    /// Get the samples scale factor (1 / samples_per_pixel).
    pub fn samples_scale(&self) -> f32 {
        self.samples_scale
    }

    /// Number of render workers for this configuration.
    ///
    /// Never more than the number of rows, never less than one.
    pub fn thread_count(&self) -> usize {
        let requested = self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        });
        requested.clamp(1, self.image_height().max(1) as usize)
    }

    /// World position of the center of pixel (i, j). Valid after `initialize`.
    pub fn pixel_center(&self, i: u32, j: u32) -> Point3 {
        self.pixel00_loc + (i as f32) * self.pixel_delta_u + (j as f32) * self.pixel_delta_v
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest image, in pixels, a render will allocate for.
const MAX_PIXELS: u64 = u32::MAX as u64;

fn invalid(reason: impl Into<String>) -> RenderError {
    RenderError::InvalidConfig(reason.into())
}
