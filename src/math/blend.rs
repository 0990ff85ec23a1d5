/// Convert a percentage in [0, 100] to a blend factor in [0, 1].
/// Out-of-range inputs are clamped before dividing.
pub fn blend_factor(percentage: f32) -> f32 {
    percentage.clamp(0.0, 100.0) / 100.0
}
