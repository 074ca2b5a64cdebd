/// Two-state grip decision produced by the binary filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GripState {
    #[default]
    Closed,
    Open,
}

impl GripState {
    pub const fn is_open(self) -> bool {
        matches!(self, GripState::Open)
    }
}

/// Actuator encoding: closed = 0, open = 1.
impl From<GripState> for u8 {
    fn from(state: GripState) -> Self {
        match state {
            GripState::Closed => 0,
            GripState::Open => 1,
        }
    }
}

impl core::fmt::Display for GripState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GripState::Closed => write!(f, "closed"),
            GripState::Open => write!(f, "open"),
        }
    }
}
