//! Random sampling for ray generation and scattering.
//!
//! Every sampling function takes the generator explicitly. Workers each own
//! a [`RenderRng`] stream, so nothing here touches shared or thread-local
//! state.

use lumen_math::Vec3;
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Generator used by render workers.
///
/// xoshiro256++ supports `jump()`, which advances the state by 2^128 steps
/// and gives each worker a non-overlapping stream from a single seed.
pub type RenderRng = Xoshiro256PlusPlus;

/// Derive one independent generator per worker from a master seed.
///
/// Worker `i` receives the master stream jumped `i` times, so the result
/// depends only on `seed` and the worker index.
pub fn worker_rngs(seed: u64, count: usize) -> Vec<RenderRng> {
    let mut master = RenderRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let worker = master.clone();
            master.jump();
            worker
        })
        .collect()
}

/// Uniform `f32` in [0, 1).
#[inline]
pub(crate) fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform `f32` in [min, max).
#[inline]
pub(crate) fn gen_range_f32(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Sample a random point in the unit square [-0.5, 0.5] x [-0.5, 0.5].
pub(crate) fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng) - 0.5, gen_f32(rng) - 0.5, 0.0)
}

/// Sample a random point in the unit disk on the z = 0 plane.
pub(crate) fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_range_f32(rng, -1.0, 1.0),
            gen_range_f32(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Sample a random point inside the unit ball.
pub(crate) fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_range_f32(rng, -1.0, 1.0),
            gen_range_f32(rng, -1.0, 1.0),
            gen_range_f32(rng, -1.0, 1.0),
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generate a random unit vector on the unit sphere.
pub(crate) fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    // Use rejection sampling for uniform distribution on sphere
    loop {
        let v = random_in_unit_sphere(rng);
        let len_sq = v.length_squared();
        // Tiny samples would blow up when normalized
        if len_sq > 1e-6 {
            return v / len_sq.sqrt();
        }
    }
}
