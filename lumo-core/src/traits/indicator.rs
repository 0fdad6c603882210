//! Discrete indicator output collaborator trait

/// The two controllable indicator outputs on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorId {
    /// Green channel of the RGB indicator
    Green,
    /// Blue channel of the RGB indicator
    Blue,
}

impl IndicatorId {
    /// Human-readable name used in status lines
    pub fn label(self) -> &'static str {
        match self {
            IndicatorId::Green => "Green LED",
            IndicatorId::Blue => "Blue LED",
        }
    }
}

/// Trait for driving the discrete indicator outputs
///
/// One call per validated press event; driving a pin cannot fail.
pub trait IndicatorOutput {
    /// Drive the given indicator to the given level
    fn set(&mut self, id: IndicatorId, on: bool);
}
