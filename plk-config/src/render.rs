//! Box diagrams of keymap layers, drawn the way QMK keymaps document their layers in comments.

use std::fmt::Write;

use plk_common::keycodes::{key_range, us_ascii};
use plk_firmware::keymaps::KeymapDef;

use crate::keycodes::key_name;

const CELL_WIDTH: usize = 5;

/// The text shown for `code`: custom keycodes by their keymap name, punctuation as the character
/// it types, `NO` as `/////` and transparent as blank.
pub fn label<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    def: &KeymapDef<ROWS, COLS, LAYERS>,
    code: u16,
) -> String {
    match code {
        key_range::NO => "/////".into(),
        key_range::TRANSPARENT => String::new(),
        _ => {
            if let Some(name) = def.custom_keycode_name(code) {
                return name.into();
            }
            match us_ascii(code) {
                Some(c) if c.is_ascii_punctuation() => c.to_string(),
                _ => key_name(code),
            }
        }
    }
}

fn cell(label: &str) -> String {
    let label: String = label.chars().take(CELL_WIDTH).collect();
    if label.chars().count() == 1 {
        format!("{label:^CELL_WIDTH$}")
    } else {
        format!("{label:<CELL_WIDTH$}")
    }
}

pub fn render_layer<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    def: &KeymapDef<ROWS, COLS, LAYERS>,
    layer: u8,
) -> Option<String> {
    let grid = def.keymap.get_layer(layer)?;
    let width = COLS * (CELL_WIDTH + 1) - 1;
    let divider = vec!["-".repeat(CELL_WIDTH); COLS].join("+");

    let mut out = String::new();
    let _ = writeln!(out, ",{}.", "-".repeat(width));
    for (i, row) in grid.rows().enumerate() {
        if i > 0 {
            let _ = writeln!(out, "|{divider}|");
        }
        let cells: Vec<String> = row.iter().map(|code| cell(&label(def, *code))).collect();
        let _ = writeln!(out, "|{}|", cells.join("|"));
    }
    let _ = writeln!(out, "`{}'", "-".repeat(width));
    Some(out)
}

/// Every layer, each headed by its name.
pub fn render_keymap<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    def: &KeymapDef<ROWS, COLS, LAYERS>,
) -> String {
    let mut out = String::new();
    for (i, name) in def.layer_names.iter().enumerate() {
        if let Some(diagram) = render_layer(def, i as u8) {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{name}");
            out.push_str(&diagram);
        }
    }
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod test;
