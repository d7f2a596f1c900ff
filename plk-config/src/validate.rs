//! Consistency checks for a [KeymapDef] that the type system cannot catch.

use std::fmt;

use plk_common::keycodes::{tap_dance_index, user_index};
use plk_firmware::{dispatch::Action, keymaps::KeymapDef, layer::MAX_LAYERS};

use crate::keycodes::key_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// Base layer entries must resolve to something.
    TransparentBase { row: usize, column: usize },
    /// An action refers to a layer the keymap does not have.
    ActionLayer { keycode: u16, layer: u8 },
    /// A tap-dance slot refers to a layer the keymap does not have.
    TapDanceLayer { index: usize, layer: u8 },
    /// A `TD(n)` key with no slot `n`.
    MissingTapDance {
        layer: u8,
        row: usize,
        column: usize,
        index: u8,
    },
    DuplicateAction(u16),
    /// The dispatcher binary searches its table.
    UnsortedActions(u16),
    /// A user keycode that is neither named nor handled by an action.
    UnknownUserKeycode {
        layer: u8,
        row: usize,
        column: usize,
        code: u16,
    },
    TooManyLayers(usize),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::TransparentBase { row, column } => {
                write!(f, "base layer is transparent at {row},{column}")
            }
            Problem::ActionLayer { keycode, layer } => write!(
                f,
                "action for {} uses unknown layer {layer}",
                key_name(*keycode)
            ),
            Problem::TapDanceLayer { index, layer } => {
                write!(f, "tap dance {index} uses unknown layer {layer}")
            }
            Problem::MissingTapDance {
                layer,
                row,
                column,
                index,
            } => write!(
                f,
                "TD({index}) at layer {layer} {row},{column} has no tap dance"
            ),
            Problem::DuplicateAction(code) => {
                write!(f, "more than one action for {}", key_name(*code))
            }
            Problem::UnsortedActions(code) => {
                write!(f, "action table is not sorted at {}", key_name(*code))
            }
            Problem::UnknownUserKeycode {
                layer,
                row,
                column,
                code,
            } => write!(
                f,
                "unknown keycode {} at layer {layer} {row},{column}",
                key_name(*code)
            ),
            Problem::TooManyLayers(n) => {
                write!(f, "{n} layers; at most {MAX_LAYERS} are supported")
            }
        }
    }
}

pub fn validate<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    def: &KeymapDef<ROWS, COLS, LAYERS>,
) -> Vec<Problem> {
    let mut problems = Vec::new();
    let layer_count = def.keymap.layer_count();
    let layer_ok = |layer: u8| (layer as usize) < layer_count;

    if layer_count > MAX_LAYERS as usize {
        problems.push(Problem::TooManyLayers(layer_count));
    }

    problems.extend(
        def.keymap
            .transparent_base_positions()
            .map(|(row, column)| Problem::TransparentBase { row, column }),
    );

    for w in def.actions.windows(2) {
        match w[0].0.cmp(&w[1].0) {
            std::cmp::Ordering::Equal => problems.push(Problem::DuplicateAction(w[1].0)),
            std::cmp::Ordering::Greater => problems.push(Problem::UnsortedActions(w[1].0)),
            std::cmp::Ordering::Less => {}
        }
    }

    for (keycode, action) in def.actions {
        let layers = match *action {
            Action::Momentary { layer, clears } => [Some(layer), clears],
            Action::Latch { layer } => [Some(layer), None],
            Action::Literal(_) => [None, None],
        };
        for layer in layers.into_iter().flatten() {
            if !layer_ok(layer) {
                problems.push(Problem::ActionLayer {
                    keycode: *keycode,
                    layer,
                });
            }
        }
    }

    for (index, dance) in def.tap_dances.iter().enumerate() {
        for layer in [dance.hold, dance.toggle] {
            if !layer_ok(layer) {
                problems.push(Problem::TapDanceLayer { index, layer });
            }
        }
    }

    for (layer, row, column, code) in def.keymap.iter() {
        if let Some(index) = tap_dance_index(code) {
            if index as usize >= def.tap_dances.len() {
                problems.push(Problem::MissingTapDance {
                    layer,
                    row,
                    column,
                    index,
                });
            }
        } else if user_index(code).is_some()
            && def.custom_keycode_name(code).is_none()
            && !def.actions.iter().any(|(c, _)| *c == code)
        {
            problems.push(Problem::UnknownUserKeycode {
                layer,
                row,
                column,
                code,
            });
        }
    }

    if problems.is_empty() {
        log::debug!("keymap {} is valid", def.name);
    }
    problems
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod test;
