use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use chipbox_presets::{
    stock_catalog, version_display_name, EditorSettings, Preset, PresetCatalog, PresetHandle,
    RELEASE_NOTES_URL,
};
use chipbox_synth::InstrumentType;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_ref())?;
    let found = match cli.command {
        Commands::List(args) => list(&catalog, args)?,
        Commands::Resolve { handle } => resolve(&catalog, handle, cli.json)?,
        Commands::Find { name } => lookup(&catalog, catalog.resolve_by_name(&name), cli.json)?,
        Commands::Midi { program } => {
            lookup(&catalog, catalog.resolve_by_midi_program(program), cli.json)?
        }
        Commands::Instrument { instrument } => {
            let preset = catalog.instrument_to_preset(instrument);
            if let Some(preset) = preset {
                print_preset(None, preset, cli.json)?;
            }
            preset.is_some()
        }
        Commands::Export { out } => export(&catalog, out)?,
        Commands::Settings(args) => settings(args, cli.settings)?,
    };
    Ok(if found {
        ExitCode::SUCCESS
    } else {
        println!("no matching preset");
        ExitCode::FAILURE
    })
}

#[derive(Parser)]
#[command(author, version, about = "Inspect the ChipBox preset catalog")]
struct Cli {
    /// Load categories from a JSON catalog instead of the built-in presets.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Override the editor settings file location. Defaults to the user config directory.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Print presets as JSON.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List presets with their handles.
    List(ListArgs),
    /// Show the preset stored under a handle.
    Resolve { handle: u32 },
    /// Find the handle of a preset by exact name.
    Find { name: String },
    /// Find the General MIDI preset for a program number.
    Midi { program: u8 },
    /// Show the blank preset for an instrument type.
    Instrument {
        #[arg(value_parser = parse_instrument)]
        instrument: InstrumentType,
    },
    /// Write the catalog as JSON.
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Read or change editor settings.
    Settings(SettingsArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Only list presets of this category.
    #[arg(long)]
    category: Option<String>,
}

#[derive(Args)]
struct SettingsArgs {
    #[command(subcommand)]
    action: SettingsAction,
}

#[derive(Subcommand)]
enum SettingsAction {
    Show,
    /// Toggle the song details alert.
    DetailsAlert {
        #[arg(value_enum)]
        state: Toggle,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

fn parse_instrument(value: &str) -> Result<InstrumentType, String> {
    value.parse().map_err(|err| format!("{err}"))
}

fn load_catalog(path: Option<&PathBuf>) -> Result<PresetCatalog> {
    let Some(path) = path else {
        return Ok(stock_catalog().clone());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    PresetCatalog::from_json(&raw)
        .with_context(|| format!("{} is not a valid preset catalog", path.display()))
}

#[derive(Serialize)]
struct PresetView<'a> {
    handle: Option<PresetHandle>,
    #[serde(flatten)]
    preset: &'a Preset,
}

fn print_preset(handle: Option<PresetHandle>, preset: &Preset, json: bool) -> Result<()> {
    if json {
        let view = PresetView { handle, preset };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    match handle {
        Some(handle) => {
            let (category, index) = handle.decode();
            println!("{handle:>6}  [{category}:{index}]  {}", preset.name);
        }
        None => println!("{}", preset.name),
    }
    if let Some(ty) = preset.instrument_type() {
        println!("        type: {ty}");
    }
    if let Some(program) = preset.midi_program {
        let gm = if preset.general_midi { " (general MIDI)" } else { "" };
        println!("        midi program: {program}{gm}");
    }
    Ok(())
}

fn list(catalog: &PresetCatalog, args: ListArgs) -> Result<bool> {
    if let Some(name) = &args.category {
        if catalog.category_by_name(name).is_none() {
            bail!("unknown category '{name}'");
        }
    }
    let mut current = None;
    for (handle, category, preset) in catalog.entries() {
        if args.category.as_deref().is_some_and(|name| name != category.name) {
            continue;
        }
        if current != Some(category.name.as_str()) {
            println!("{}", category.name);
            current = Some(category.name.as_str());
        }
        println!("  {handle:>6}  {}", preset.name);
    }
    Ok(true)
}

fn resolve(catalog: &PresetCatalog, raw: u32, json: bool) -> Result<bool> {
    let handle = PresetHandle::from_raw(raw);
    let Some(preset) = catalog.resolve(handle) else {
        return Ok(false);
    };
    print_preset(Some(handle), preset, json)?;
    Ok(true)
}

fn lookup(catalog: &PresetCatalog, handle: Option<PresetHandle>, json: bool) -> Result<bool> {
    match handle.and_then(|handle| catalog.resolve(handle).map(|preset| (handle, preset))) {
        Some((handle, preset)) => {
            print_preset(Some(handle), preset, json)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn export(catalog: &PresetCatalog, out: Option<PathBuf>) -> Result<bool> {
    let json = catalog.to_json_pretty()?;
    match out {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "exported preset catalog");
        }
        None => println!("{json}"),
    }
    Ok(true)
}

fn settings(args: SettingsArgs, path: Option<PathBuf>) -> Result<bool> {
    let mut settings = match &path {
        Some(path) => EditorSettings::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => EditorSettings::load(),
    };
    match args.action {
        SettingsAction::Show => {
            println!("{}", version_display_name());
            println!("release notes: {RELEASE_NOTES_URL}");
            println!("{}", serde_json::to_string_pretty(&settings)?);
            return Ok(true);
        }
        SettingsAction::DetailsAlert { state } => {
            settings.show_song_details_alert = matches!(state, Toggle::On);
        }
    }
    match path {
        Some(path) => settings
            .save_to(&path)
            .with_context(|| format!("failed to save settings to {}", path.display()))?,
        None => settings.save(),
    }
    Ok(true)
}
