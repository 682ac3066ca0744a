use bevy::math::DVec2;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Half-width of the range each octave offset axis is drawn from.
pub const OFFSET_RANGE: f64 = 100_000.0;

/// Per-octave sample translations for one field generation.
///
/// Each octave gets an independent random shift so the summed layers do not
/// line up. The table depends only on the seed, the octave count and the
/// caller's offset, never on grid traversal order.
#[derive(Clone, Debug, PartialEq)]
pub struct OctaveOffsets {
    offsets: Vec<DVec2>,
}

impl OctaveOffsets {
    pub fn generate(seed: i32, octaves: u32, offset: DVec2) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed as i64 as u64);

        let offsets = (0..octaves)
            .map(|_| {
                let x = rng.gen_range(-OFFSET_RANGE..=OFFSET_RANGE);
                let y = rng.gen_range(-OFFSET_RANGE..=OFFSET_RANGE);
                DVec2::new(x, y) + offset
            })
            .collect();

        Self { offsets }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn as_slice(&self) -> &[DVec2] {
        &self.offsets
    }
}
