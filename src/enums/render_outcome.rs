/// What a renderer ended up showing in its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered(usize),
    Empty,
    /// The fetch failed and the region shows its static error or zero values.
    Degraded,
}

impl RenderOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded)
    }
}
