/// Threshold policy deciding whether an (r, g, b) triple belongs to the
/// teal shadow artifact left on product photos.
///
/// Two hand-tuned heuristics exist for the same shadow and they do NOT
/// agree on all inputs (e.g. (100, 180, 180) is shadow under `Broad` but
/// not under `Narrow`). They are kept as distinct named policies instead
/// of being merged; a run picks one explicitly through its config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowPolicy {
    /// Wide teal band: green and blue both high and close to each other,
    /// red clearly below green.
    Broad,
    /// Tight band around the measured shadow color, roughly
    /// rgb(112, 228, 223): low red, very high green and blue.
    Narrow,
}

impl ShadowPolicy {
    /// True when the pixel color should be treated as shadow background.
    ///
    /// Total over all channel values, no side effects.
    #[inline]
    pub fn is_shadow(&self, r: u8, g: u8, b: u8) -> bool {
        match self {
            // g > 140 guards the g - 20 subtraction below
            Self::Broad => g > 140 && b > 140 && g.abs_diff(b) < 40 && r < g - 20,
            Self::Narrow => r < 140 && g > 200 && b > 200,
        }
    }
}
