use num_traits::float::FloatCore;

/// Element-wise EMA over a fixed number of channels.
///
/// Every channel shares the same gain. RAM cost: N * size_of::<T>() bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorEma<T, const N: usize> {
    previous: [T; N],
}

impl<T: FloatCore, const N: usize> VectorEma<T, N> {
    pub const fn new(initial: [T; N]) -> Self {
        Self { previous: initial }
    }

    /// Apply EMA to each channel and return the updated outputs.
    pub fn apply(&mut self, input: &[T; N], alpha: T) -> &[T; N] {
        let retain = T::one() - alpha;
        for (out, &sample) in self.previous.iter_mut().zip(input) {
            *out = alpha * sample + retain * *out;
        }
        &self.previous
    }

    pub fn values(&self) -> &[T; N] {
        &self.previous
    }

    pub fn reset(&mut self, values: [T; N]) {
        self.previous = values;
    }
}
