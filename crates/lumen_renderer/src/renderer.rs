//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Gamma correction
//! - Anti-aliasing via multi-sampling
//! - Row-parallel rendering on a per-render rayon pool

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::partition::partition_rows;
use crate::random::worker_rngs;
use crate::{Camera, Color, Hittable, Ray, RenderResult};
use lumen_math::{Interval, Rgba8, Vec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// How a camera ray is turned into a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Full path tracing through the materials
    #[default]
    PathTraced,
    /// Shade hits by their surface normal, mapped from [-1, 1] to [0, 1]
    Normals,
}

/// Summary of a finished render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub width: u32,
    pub height: u32,
    /// Number of workers that rendered rows
    pub threads: usize,
    pub samples_per_pixel: u32,
    pub elapsed: Duration,
}

impl RenderStats {
    /// Total camera rays traced.
    pub fn total_samples(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.samples_per_pixel as u64
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and accumulating color.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    mode: RenderMode,
    rng: &mut dyn RngCore,
) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::BLACK;
    }

    let Some(rec) = world.hit(ray, Interval::new(0.001, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    match mode {
        RenderMode::Normals => Color::from(0.5 * (rec.normal + Vec3::ONE)),
        RenderMode::PathTraced => match rec.material.scatter(ray, &rec, rng) {
            Some(result) => {
                result.attenuation * ray_color(&result.scattered, world, depth - 1, mode, rng)
            }
            // Absorbed
            None => Color::BLACK,
        },
    }
}

/// Compute sky gradient background.
///
/// White at the horizon and below, blending to light blue straight up.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize_or_zero();
    let a = 0.5 * (unit_direction.y + 1.0);
    Color::WHITE.mix(Color::rgb(0.5, 0.7, 1.0), a)
}

/// Convert an averaged linear color to an opaque 8-bit pixel.
///
/// Gamma-corrects, clamps to [0, 1] and quantizes. Alpha is always 255.
pub fn color_to_rgba(color: Color) -> Rgba8 {
    Color { a: 1.0, ..color }.to_gamma().to_rgba8()
}

/// Render a single pixel with multi-sampling.
///
/// Returns the average of `samples_per_pixel` traced samples. The camera
/// must already be initialized.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel {
        // Camera.get_ray already adds random offset for anti-aliasing
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, camera.max_depth, camera.mode, rng);
    }

    // Average the samples
    pixel_color * camera.samples_scale()
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgba8>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::default(); width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgba8 {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Rgba8) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Raw RGBA bytes, row-major, four per pixel (for display or saving).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Camera {
    /// Render `world`, handing each finished pixel to `sink`.
    ///
    /// Re-initializes the camera, partitions the rows across a thread pool
    /// built for this call and blocks until every worker is done. `sink`
    /// is called exactly once per pixel, from worker threads, in row-major
    /// order within each worker's band of rows.
    pub fn render<F>(&mut self, world: &dyn Hittable, sink: F) -> RenderResult<RenderStats>
    where
        F: Fn(u32, u32, Rgba8) + Sync,
    {
        self.initialize()?;

        let width = self.image_width;
        let height = self.image_height();
        let ranges = partition_rows(height, self.thread_count());
        let rngs = worker_rngs(self.seed, ranges.len());
        let threads = ranges.len();

        log::info!(
            "Rendering {}x{} at {} spp, depth {}, on {} threads",
            width,
            height,
            self.samples_per_pixel,
            self.max_depth,
            threads
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("lumen-render-{i}"))
            .build()?;

        let start = Instant::now();
        let camera = &*self;
        let sink = &sink;

        pool.scope(|s| {
            for (worker, (rows, mut rng)) in ranges.into_iter().zip(rngs).enumerate() {
                s.spawn(move |_| {
                    log::debug!("Worker {} rendering rows {}..{}", worker, rows.start, rows.end);

                    for y in rows {
                        for x in 0..width {
                            let color = render_pixel(camera, world, x, y, &mut rng);
                            sink(x, y, color_to_rgba(color));
                        }
                    }
                });
            }
        });

        let elapsed = start.elapsed();
        log::info!("Render complete in {:.2?}", elapsed);

        Ok(RenderStats {
            width,
            height,
            threads,
            samples_per_pixel: self.samples_per_pixel,
            elapsed,
        })
    }

    /// Render `world` into a new [`ImageBuffer`].
    pub fn render_to_image(&mut self, world: &dyn Hittable) -> RenderResult<ImageBuffer> {
        // Reject before allocating the buffer
        self.validate()?;
        let image = Mutex::new(ImageBuffer::new(self.image_width, self.image_height()));

        self.render(world, |x, y, color| {
            image
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .set(x, y, color);
        })?;

        Ok(image.into_inner().unwrap_or_else(PoisonError::into_inner))
    }
}
