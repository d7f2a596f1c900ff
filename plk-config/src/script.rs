//! Simulation scripts: one command per line, `#` starts a comment.
//!
//! ```text
//! down 3 4            # press row 3 column 4 (alias: hold)
//! tap 1 1             # press and release
//! up 3 4              # (alias: release)
//! dance 0 finish 2    # tap-dance slot 0 finished after two taps
//! dance 0 finish 1 held
//! dance 0 reset
//! clear               # back to the boot state
//! ```

use std::ops::Range;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use plk_firmware::{
    keyboard::{Event, Keyboard, Report, ReportChannel, ScanKey},
    keymaps::KeymapDef,
    tap_dance::TapDanceState,
};

use crate::{keycodes::key_name, ConfigError};

const REPORT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Down { row: u8, column: u8 },
    Up { row: u8, column: u8 },
    Tap { row: u8, column: u8 },
    DanceFinished { index: u8, count: u8, held: bool },
    DanceReset { index: u8 },
    Clear,
}

impl Command {
    pub fn events(&self) -> Vec<Event> {
        let key = |row, column, is_down| Event::Key(ScanKey::new(row, column, is_down));
        match *self {
            Command::Down { row, column } => vec![key(row, column, true)],
            Command::Up { row, column } => vec![key(row, column, false)],
            Command::Tap { row, column } => vec![key(row, column, true), key(row, column, false)],
            Command::DanceFinished { index, count, held } => vec![Event::DanceFinished {
                index,
                state: TapDanceState::new(count, held),
            }],
            Command::DanceReset { index } => vec![Event::DanceReset { index }],
            Command::Clear => vec![Event::ClearAll],
        }
    }
}

/// A parsed command and the bytes of the script it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub command: Command,
    pub span: Range<usize>,
}

struct Line<'s> {
    tokens: std::vec::IntoIter<(&'s str, Range<usize>)>,
    last: Range<usize>,
}

impl<'s> Line<'s> {
    fn new(text: &'s str, start: usize) -> Self {
        let mut tokens = Vec::new();
        let mut word_start = None;
        for (i, c) in text.char_indices().chain([(text.len(), ' ')]) {
            if c.is_whitespace() {
                if let Some(s) = word_start.take() {
                    tokens.push((&text[s..i], start + s..start + i));
                }
            } else if word_start.is_none() {
                word_start = Some(i);
            }
        }
        Self {
            tokens: tokens.into_iter(),
            last: start..start,
        }
    }

    fn optional_word(&mut self) -> Option<&'s str> {
        let (word, span) = self.tokens.next()?;
        self.last = span;
        Some(word)
    }

    fn word(&mut self, what: &str) -> Result<&'s str, ConfigError> {
        self.optional_word()
            .ok_or_else(|| ConfigError::new(format!("missing {what}"), self.last.clone()))
    }

    fn number(&mut self, what: &str) -> Result<u8, ConfigError> {
        let word = self.word(what)?;
        word.parse()
            .map_err(|_| ConfigError::new(format!("invalid {what} {word:?}"), self.last.clone()))
    }

    fn unexpected(&self, word: &str) -> ConfigError {
        ConfigError::new(format!("unexpected {word:?}"), self.last.clone())
    }

    fn finish(&mut self) -> Result<(), ConfigError> {
        match self.optional_word() {
            Some(word) => Err(self.unexpected(word)),
            None => Ok(()),
        }
    }
}

fn parse_command(line: &mut Line<'_>, name: &str) -> Result<Command, ConfigError> {
    let command = match name.to_ascii_lowercase().as_str() {
        "down" | "hold" => Command::Down {
            row: line.number("row")?,
            column: line.number("column")?,
        },
        "up" | "release" => Command::Up {
            row: line.number("row")?,
            column: line.number("column")?,
        },
        "tap" => Command::Tap {
            row: line.number("row")?,
            column: line.number("column")?,
        },
        "dance" => {
            let index = line.number("tap dance index")?;
            match line.word("finish or reset")?.to_ascii_lowercase().as_str() {
                "finish" => {
                    let count = line.number("tap count")?;
                    let held = match line.optional_word() {
                        None => false,
                        Some(word) if word.eq_ignore_ascii_case("held") => true,
                        Some(word) => return Err(line.unexpected(word)),
                    };
                    Command::DanceFinished { index, count, held }
                }
                "reset" => Command::DanceReset { index },
                word => {
                    return Err(ConfigError::new(
                        format!("expected finish or reset, not {word:?}"),
                        line.last.clone(),
                    ))
                }
            }
        }
        "clear" => Command::Clear,
        _ => {
            return Err(ConfigError::new(
                format!("unknown command {name:?}"),
                line.last.clone(),
            ))
        }
    };
    line.finish()?;
    Ok(command)
}

pub fn parse(src: &str) -> Result<Vec<Step>, ConfigError> {
    let mut steps = Vec::new();
    let mut offset = 0;
    for raw in src.split_inclusive('\n') {
        let start = offset;
        offset += raw.len();
        let text = raw.split_once('#').map_or(raw, |(code, _)| code);
        let mut line = Line::new(text, start);
        let Some(name) = line.optional_word() else {
            continue;
        };
        let begin = line.last.start;
        let command = parse_command(&mut line, name)?;
        steps.push(Step {
            command,
            span: begin..line.last.end,
        });
    }
    log::debug!("parsed {} script steps", steps.len());
    Ok(steps)
}

/// One report and the step that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub step: usize,
    pub report: Report,
}

fn check<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    def: &KeymapDef<ROWS, COLS, LAYERS>,
    step: &Step,
) -> Result<(), ConfigError> {
    match step.command {
        Command::Down { row, column } | Command::Up { row, column } | Command::Tap { row, column }
            if row as usize >= ROWS || column as usize >= COLS =>
        {
            Err(ConfigError::new(
                format!("{row},{column} is outside the {ROWS}x{COLS} keymap"),
                step.span.clone(),
            ))
        }
        Command::DanceFinished { index, .. } | Command::DanceReset { index }
            if index as usize >= def.tap_dances.len() =>
        {
            Err(ConfigError::new(
                format!("keymap {} has no tap dance {index}", def.name),
                step.span.clone(),
            ))
        }
        _ => Ok(()),
    }
}

/// Run `steps` through a fresh [Keyboard] for `def`, calling `on_step` with the index of each
/// step and the reports it produced. Every step is checked against the keymap before any is run.
pub fn simulate_with<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    def: &'static KeymapDef<ROWS, COLS, LAYERS>,
    steps: &[Step],
    mut on_step: impl FnMut(usize, &[Report]),
) -> Result<(), ConfigError> {
    for step in steps {
        check(def, step)?;
    }

    let reports = ReportChannel::<NoopRawMutex, REPORT_BUFFER_SIZE>::default();
    let mut keyboard = Keyboard::new(def, &reports);
    let mut produced = Vec::new();

    for (i, step) in steps.iter().enumerate() {
        for event in step.command.events() {
            log::debug!("step {i}: {event:?}");
            keyboard.handle(event);
            while let Some(report) = reports.try_receive() {
                produced.push(report);
            }
        }
        on_step(i, &produced);
        produced.clear();
    }
    Ok(())
}

pub fn simulate<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    def: &'static KeymapDef<ROWS, COLS, LAYERS>,
    steps: &[Step],
) -> Result<Vec<Outcome>, ConfigError> {
    let mut outcomes = Vec::new();
    simulate_with(def, steps, |step, reports| {
        outcomes.extend(reports.iter().map(|&report| Outcome { step, report }));
    })?;
    Ok(outcomes)
}

/// A one line description of a report, using the keymap's layer names.
pub fn describe<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    def: &KeymapDef<ROWS, COLS, LAYERS>,
    report: &Report,
) -> String {
    match *report {
        Report::Key(code, pressed) => format!(
            "{} {}",
            if pressed { "press" } else { "release" },
            def.custom_keycode_name(code)
                .map(String::from)
                .unwrap_or_else(|| key_name(code))
        ),
        Report::Char(c) => format!("type {c:?}"),
        Report::TapDance(index, pressed) => {
            format!("tap-dance {index} {}", if pressed { "down" } else { "up" })
        }
        Report::Layers(0) => format!("layers {}", def.layer_name(0).unwrap_or("0")),
        Report::Layers(bits) => {
            let names: Vec<String> = (0..u32::BITS as u8)
                .filter(|l| bits & (1 << l) != 0)
                .map(|l| match def.layer_name(l) {
                    Some(name) => name.to_string(),
                    None => l.to_string(),
                })
                .collect();
            format!("layers {}", names.join("+"))
        }
        Report::Clear => "clear".into(),
    }
}

#[cfg(test)]
#[path = "script_test.rs"]
mod test;
