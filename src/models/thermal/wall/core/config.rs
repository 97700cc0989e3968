/// Configuration for the wall heat transfer models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallModelConfig {
    /// Wall number below which the Bessel ratio is evaluated by its series
    /// expansion `2/N² + 1/4 - N²/96` instead of `I0(N) / (N I1(N))`.
    pub small_wall_number: f64,
}

impl Default for WallModelConfig {
    fn default() -> Self {
        Self {
            small_wall_number: 1e-3,
        }
    }
}
