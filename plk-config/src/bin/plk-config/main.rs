use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use plk_common::keycodes::key_range;
use plk_config::{
    keycodes::{self, CodeType},
    pretty_parse,
    render::{render_keymap, render_layer},
    script::{self, describe},
    validate::validate,
};
use plk_firmware::{
    firmware_functions,
    keymaps::{self, PlanckKeymap},
};
use std::{
    fs,
    path::{Path, PathBuf},
    process,
    sync::atomic::{AtomicBool, Ordering},
};

use anyhow::{anyhow, Result};

/// Inspect, check and try out the PLK Planck keymaps
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log what the keymap is doing
    #[clap(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List keycode names
    KeycodesList(ListKeycodesArgs),
    /// List the keymaps and their layers
    Keymaps,
    /// Draw the layers of a keymap
    Show(ShowArgs),
    /// Check keymaps for unreachable or dangling keys
    Validate(ValidateArgs),
    /// Run a script of key presses through a keymap and print what it reports
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct ListKeycodesArgs {
    /// Include the keycode hex value
    #[clap(long, short)]
    long: bool,

    /// Sort results by keycode; Defaults to sorting by name
    #[clap(long, short)]
    sort_by_keycode: bool,

    /// Limit to keycode type
    #[clap(long, short)]
    code_type: Option<CodeType>,

    /// Only list key names than contains pattern (case insensitive) if pattern starts with 0x then
    /// key names matching the key code will be shown.
    #[clap()]
    pattern: Option<String>,
}

#[derive(Args)]
struct ShowArgs {
    /// keymap name
    keymap: String,

    /// layer name or number; Defaults to every layer
    layer: Option<String>,
}

#[derive(Args)]
struct ValidateArgs {
    /// keymap name; Defaults to every keymap
    keymap: Option<String>,
}

#[derive(Args)]
struct SimulateArgs {
    /// keymap name
    keymap: String,

    /// script of key events
    file: PathBuf,
}

static BOOTLOADER_REQUESTED: AtomicBool = AtomicBool::new(false);

fn request_bootloader() {
    BOOTLOADER_REQUESTED.store(true, Ordering::Relaxed);
}

static BOOTLOADER_HOOK: fn() = request_bootloader;

fn find_keymap(name: &str) -> Result<&'static PlanckKeymap> {
    keymaps::find(name).ok_or_else(|| {
        let names: Vec<&str> = keymaps::ALL.iter().map(|k| k.name).collect();
        anyhow!("Unknown keymap \"{name}\"; expected one of {}", names.join(", "))
    })
}

fn list_keymaps() -> Result<()> {
    for def in keymaps::ALL {
        println!("{}: {}", def.name, def.layer_names.join(", "));
    }
    Ok(())
}

fn show(args: &ShowArgs) -> Result<()> {
    let def = find_keymap(&args.keymap)?;
    let Some(layer) = &args.layer else {
        print!("{}", render_keymap(def));
        return Ok(());
    };
    let id = match layer.parse::<u8>() {
        Ok(n) => n,
        Err(_) => def
            .layer_id(layer)
            .ok_or_else(|| anyhow!("Unknown layer \"{layer}\" in {}", def.name))?,
    };
    let diagram =
        render_layer(def, id).ok_or_else(|| anyhow!("{} has no layer {id}", def.name))?;
    print!("{diagram}");
    Ok(())
}

fn validate_keymaps(args: &ValidateArgs) -> Result<()> {
    let defs = match &args.keymap {
        Some(name) => vec![find_keymap(name)?],
        None => keymaps::ALL.to_vec(),
    };
    let mut failed = 0;
    for def in defs {
        let problems = validate(def);
        if problems.is_empty() {
            println!("{}: ok", def.name);
        } else {
            failed += 1;
            for p in problems {
                println!("{}: {p}", def.name);
            }
        }
    }
    if failed == 0 {
        Ok(())
    } else {
        Err(anyhow!("{failed} invalid keymap(s)"))
    }
}

fn script_error(file: &Path, err: &str) -> anyhow::Error {
    anyhow!(
        "Failed to read \"{}\"!\n    {}",
        file.to_str().unwrap_or("<unknown>"),
        err
    )
}

fn simulate(args: &SimulateArgs) -> Result<Vec<String>> {
    let def = find_keymap(&args.keymap)?;
    let file = &args.file;
    let src = fs::read_to_string(file).map_err(|err| script_error(file, &err.to_string()))?;
    let steps = pretty_parse(file, &src).map_err(|_| anyhow!(""))?;

    let mut lines = Vec::new();
    firmware_functions::handle_reset_to_bootloader(Some(&BOOTLOADER_HOOK));
    let result = script::simulate_with(def, &steps, |i, reports| {
        lines.push(src[steps[i].span.clone()].to_string());
        for report in reports {
            lines.push(format!("    {}", describe(def, report)));
        }
        if BOOTLOADER_REQUESTED.swap(false, Ordering::Relaxed) {
            lines.push("    jump to bootloader".into());
            firmware_functions::handle_reset_to_bootloader(Some(&BOOTLOADER_HOOK));
        }
    });
    firmware_functions::handle_reset_to_bootloader(None);
    result.map_err(|err| {
        err.eprint(file, &src);
        anyhow!("")
    })?;
    Ok(lines)
}

fn list_keycodes(args: &ListKeycodesArgs) -> Result<()> {
    let iter = keycodes::keycodes_iter().filter(|d| match args.code_type {
        Some(t) => CodeType::of(d.code) == t,
        None => true,
    });
    let mut codes = if let Some(pattern) = &args.pattern {
        let pattern = pattern.to_lowercase();
        if let Some(hex) = pattern.strip_prefix("0x") {
            let pattern = u16::from_str_radix(hex, 16)?;
            iter.filter(|p| p.code == pattern).collect::<Vec<_>>()
        } else {
            let pattern = pattern.as_str();
            iter.filter(|p| p.name.to_lowercase().contains(pattern))
                .collect::<Vec<_>>()
        }
    } else {
        iter.collect::<Vec<_>>()
    };
    if args.sort_by_keycode {
        codes.sort_by(|a, b| match a.code.cmp(&b.code) {
            std::cmp::Ordering::Equal => a.name.cmp(b.name),
            i => i,
        });
    } else {
        codes.sort_by_key(|k| k.name);
    }
    if args.long {
        let mut prev_code = key_range::NO;
        let mut names = vec![];
        if args.sort_by_keycode {
            for d in codes {
                if prev_code != d.code {
                    if !names.is_empty() {
                        long_print(prev_code, &names.join(", "));
                        names = vec![];
                    }
                    prev_code = d.code
                }
                names.push(d.name);
            }
            if !names.is_empty() {
                long_print(prev_code, &names.join(", "));
            }
        } else {
            for d in codes {
                long_print(d.code, d.name);
            }
        }
    } else {
        for d in codes {
            println!("{}", d.name);
        }
    }
    Ok(())
}

fn long_print(code: u16, name: &str) {
    println!("{code:04X}: {name}");
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let result = run(&cli);

    if let Err(message) = result {
        let message = message.to_string();
        if !message.is_empty() {
            eprintln!("{message}");
        }
        process::exit(1);
    };
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::KeycodesList(args) => list_keycodes(args),
        Commands::Keymaps => list_keymaps(),
        Commands::Show(args) => show(args),
        Commands::Validate(args) => validate_keymaps(args),
        Commands::Simulate(args) => {
            for line in simulate(args)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    fn script(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write script");
        file
    }

    #[test]
    fn validate_cmd() {
        validate_keymaps(&ValidateArgs { keymap: None }).expect("to be valid");
        validate_keymaps(&ValidateArgs {
            keymap: Some("otownend".into()),
        })
        .expect("to be valid");
        assert!(validate_keymaps(&ValidateArgs {
            keymap: Some("dvorak".into()),
        })
        .is_err());
    }

    #[test]
    fn show_cmd() {
        let args = |layer: Option<&str>| ShowArgs {
            keymap: "owetow".into(),
            layer: layer.map(String::from),
        };
        show(&args(None)).expect("all layers");
        show(&args(Some("symb"))).expect("by name");
        show(&args(Some("4"))).expect("by number");
        assert!(show(&args(Some("5"))).is_err());
        assert!(show(&args(Some("nav"))).is_err());
    }

    #[test]
    fn simulate_cmd() {
        let file = script("down 3 4 # SYMB\ntap 1 1\nup 3 4\ntap 3 3\n# FUNC BOOTLOADER\ndown 3 3\ntap 0 0\n");
        let lines = simulate(&SimulateArgs {
            keymap: "owetow".into(),
            file: file.path().to_path_buf(),
        })
        .expect("simulate");

        assert_eq!(
            lines,
            [
                "down 3 4",
                "    layers SYMB",
                "tap 1 1",
                "    type '!'",
                "up 3 4",
                "    layers QWERTY",
                "tap 3 3",
                "    layers FUNC",
                "    layers QWERTY",
                "down 3 3",
                "    layers FUNC",
                "tap 0 0",
                "    jump to bootloader",
            ]
        );
    }

    #[test]
    fn simulate_bad_script() {
        let file = script("tap 1\n");
        assert!(simulate(&SimulateArgs {
            keymap: "owetow".into(),
            file: file.path().to_path_buf(),
        })
        .is_err());

        assert!(simulate(&SimulateArgs {
            keymap: "owetow".into(),
            file: PathBuf::from("/no/such/script"),
        })
        .is_err());
    }
}
