quantity!(Years, "yr");

impl Years {
    pub fn round_to_tenths(self) -> Self {
        Self(super::round_to_tenths(self.0))
    }
}
