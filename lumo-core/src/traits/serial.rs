//! Serial transport collaborator trait

/// Trait for the serial transport the dispatcher polls
///
/// Both operations are zero-wait: a disconnected link or an empty
/// receive buffer is "no event this tick", never an error.
pub trait SerialLink {
    /// Whether a connection is currently established
    fn is_connected(&self) -> bool;

    /// Take the next received byte, if one is already available
    fn try_read_byte(&mut self) -> Option<u8>;
}
