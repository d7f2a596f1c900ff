use plk_common::keycodes::key_range;

use crate::layer::LayerState;

/// An immutable `LAYERS x ROWS x COLS` table of keycodes, fixed at compile time.
#[derive(Debug)]
pub struct Keymap<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    [[[u16; COLS]; ROWS]; LAYERS],
);

/// One layer of a [Keymap].
#[derive(Debug, Clone, Copy)]
pub struct Layer<'l, const ROWS: usize, const COLS: usize>(&'l [[u16; COLS]; ROWS]);

impl<const ROWS: usize, const COLS: usize> Layer<'_, ROWS, COLS> {
    pub fn get(&self, row: usize, column: usize) -> u16 {
        self.0
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(key_range::NO)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u16; COLS]> {
        self.0.iter()
    }
}

impl<const ROWS: usize, const COLS: usize, const LAYERS: usize> Keymap<ROWS, COLS, LAYERS> {
    pub const fn new(layers: [[[u16; COLS]; ROWS]; LAYERS]) -> Self {
        Self(layers)
    }

    pub const fn layer_count(&self) -> usize {
        LAYERS
    }

    pub fn get_layer(&self, layer: u8) -> Option<Layer<'_, ROWS, COLS>> {
        self.0.get(layer as usize).map(Layer)
    }

    pub fn code_at(&self, layer: u8, row: usize, column: usize) -> u16 {
        self.get_layer(layer)
            .map(|l| l.get(row, column))
            .unwrap_or(key_range::NO)
    }

    /// Resolve the keycode for a position: scan the enabled layers from the highest down and take
    /// the first entry that is not transparent, finishing with the base layer. A transparent base
    /// entry resolves to `NO`.
    pub fn find_code(&self, layers: &LayerState, row: usize, column: usize) -> u16 {
        self.find_code_and_layer(layers, row, column).0
    }

    /// Like [Self::find_code] but also returns the layer the keycode came from.
    pub fn find_code_and_layer(&self, layers: &LayerState, row: usize, column: usize) -> (u16, u8) {
        for layer in (1..LAYERS.min(u8::MAX as usize) as u8).rev() {
            if layers.is_on(layer) {
                let code = self.code_at(layer, row, column);
                if code != key_range::TRANSPARENT {
                    return (code, layer);
                }
            }
        }
        match self.code_at(0, row, column) {
            key_range::TRANSPARENT => {
                crate::warn!("transparent base entry at {},{}", row, column);
                (key_range::NO, 0)
            }
            code => (code, 0),
        }
    }

    /// Positions on the base layer that are transparent. A valid keymap has none.
    pub fn transparent_base_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.first().into_iter().flat_map(|layer| {
            layer.iter().enumerate().flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, code)| **code == key_range::TRANSPARENT)
                    .map(move |(c, _)| (r, c))
            })
        })
    }

    /// Every `(layer, row, column, code)` in the table.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize, usize, u16)> + '_ {
        self.0.iter().enumerate().flat_map(|(l, layer)| {
            layer.iter().enumerate().flat_map(move |(r, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(c, code)| (l as u8, r, c, *code))
            })
        })
    }
}

/// Build one layer of a 4x12 Planck grid from 48 keycodes in row-major order, like QMK's
/// `LAYOUT_planck_grid`.
#[macro_export]
macro_rules! layout_planck_grid {
    (
        $k00:expr, $k01:expr, $k02:expr, $k03:expr, $k04:expr, $k05:expr,
        $k06:expr, $k07:expr, $k08:expr, $k09:expr, $k0a:expr, $k0b:expr,
        $k10:expr, $k11:expr, $k12:expr, $k13:expr, $k14:expr, $k15:expr,
        $k16:expr, $k17:expr, $k18:expr, $k19:expr, $k1a:expr, $k1b:expr,
        $k20:expr, $k21:expr, $k22:expr, $k23:expr, $k24:expr, $k25:expr,
        $k26:expr, $k27:expr, $k28:expr, $k29:expr, $k2a:expr, $k2b:expr,
        $k30:expr, $k31:expr, $k32:expr, $k33:expr, $k34:expr, $k35:expr,
        $k36:expr, $k37:expr, $k38:expr, $k39:expr, $k3a:expr, $k3b:expr $(,)?
    ) => {
        [
            [$k00, $k01, $k02, $k03, $k04, $k05, $k06, $k07, $k08, $k09, $k0a, $k0b],
            [$k10, $k11, $k12, $k13, $k14, $k15, $k16, $k17, $k18, $k19, $k1a, $k1b],
            [$k20, $k21, $k22, $k23, $k24, $k25, $k26, $k27, $k28, $k29, $k2a, $k2b],
            [$k30, $k31, $k32, $k33, $k34, $k35, $k36, $k37, $k38, $k39, $k3a, $k3b],
        ]
    };
}

#[cfg(test)]
#[path = "keymap_test.rs"]
mod test;
