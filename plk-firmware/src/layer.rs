/// Number of layers a [LayerState] can track.
pub const MAX_LAYERS: u8 = 32;

/// Which layers are currently enabled, one bit per layer.
///
/// The base layer (0) does not need its bit set; keymap resolution always falls back to it. The
/// state is a plain value so callers can snapshot it with a copy and restore it later.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    /// Base layer only; the state after boot.
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub fn is_on(&self, layer: u8) -> bool {
        layer < MAX_LAYERS && self.0 & (1 << layer) != 0
    }

    /// Enable `layer`. Returns true if the state changed.
    pub fn on(&mut self, layer: u8) -> bool {
        if layer >= MAX_LAYERS {
            crate::warn!("layer out of range {}", layer);
            return false;
        }
        let old = self.0;
        self.0 |= 1 << layer;
        old != self.0
    }

    /// Disable `layer`; disabling an already disabled layer is a no-op. Returns true if the state
    /// changed.
    pub fn off(&mut self, layer: u8) -> bool {
        if layer >= MAX_LAYERS {
            crate::warn!("layer out of range {}", layer);
            return false;
        }
        let old = self.0;
        self.0 &= !(1 << layer);
        old != self.0
    }

    /// The highest enabled layer, or 0 when only the base layer is active.
    pub fn highest(&self) -> u8 {
        match self.0 {
            0 => 0,
            bits => (u32::BITS - 1 - bits.leading_zeros()) as u8,
        }
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod test;
