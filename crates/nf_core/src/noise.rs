/// Trait for coherent noise kernels sampled once per octave.
///
/// Implementations are pure functions of the input coordinate: the same
/// point always yields the same value, and nearby points yield nearby values.
/// The trait is object-safe so kernels can be swapped behind `&dyn NoiseKernel`.
/// No `Send`/`Sync` bound: parallel callers build one kernel per worker.
pub trait NoiseKernel {
    /// Sample the kernel at the given 2D coordinate.
    ///
    /// # Returns
    /// A scalar in a kernel-specific range, typically close to [-1.0, 1.0].
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Returns the name of this kernel for debugging.
    fn name(&self) -> &'static str {
        "NoiseKernel"
    }
}
