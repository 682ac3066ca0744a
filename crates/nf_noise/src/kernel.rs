use nf_core::{NoiseFunction, NoiseKernel};
use noise::core::worley::ReturnType;
use noise::{NoiseFn, Perlin, Simplex, Worley};

/// Seed used to build every kernel's permutation table.
/// Field variation comes from the octave offset table, not from this seed.
pub const KERNEL_SEED: u32 = 0;

/// One of the three coherent noise kernels, selected by [`NoiseFunction`].
pub enum Kernel {
    Perlin(Perlin),
    /// Worley noise reporting the distance to the nearest feature point.
    Cellular(Worley),
    Simplex(Simplex),
}

impl Kernel {
    pub fn new(function: NoiseFunction) -> Self {
        match function {
            NoiseFunction::Perlin => Self::Perlin(Perlin::new(KERNEL_SEED)),
            NoiseFunction::Cellular => Self::Cellular(
                Worley::new(KERNEL_SEED).set_return_type(ReturnType::Distance),
            ),
            NoiseFunction::Simplex => Self::Simplex(Simplex::new(KERNEL_SEED)),
        }
    }

    pub fn function(&self) -> NoiseFunction {
        match self {
            Self::Perlin(_) => NoiseFunction::Perlin,
            Self::Cellular(_) => NoiseFunction::Cellular,
            Self::Simplex(_) => NoiseFunction::Simplex,
        }
    }
}

impl NoiseKernel for Kernel {
    fn sample(&self, x: f64, y: f64) -> f64 {
        match self {
            Self::Perlin(noise) => noise.get([x, y]),
            Self::Cellular(noise) => noise.get([x, y]),
            Self::Simplex(noise) => noise.get([x, y]),
        }
    }

    fn name(&self) -> &'static str {
        self.function().name()
    }
}
