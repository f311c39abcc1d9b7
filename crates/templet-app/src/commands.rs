//! Command execution over template files.

use crate::cli::{Cli, Command};
use anyhow::{Context, Result, bail};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use templet_core::{
    Arrangement, Editor, EditorConfig, FileMediaLoader, FileStore, ObjectKind, Orientation,
    PersistedTemplate, ScalingStyle, TemplateStore,
};

/// Read a template JSON file.
pub fn read_template(path: &Path) -> Result<PersistedTemplate> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    PersistedTemplate::from_json(&json).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write a template JSON file.
pub fn write_template(path: &Path, template: &PersistedTemplate) -> Result<()> {
    let json = template.to_json()?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Saved template to {}", path.display());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => Ok(EditorConfig::load(path)?),
        None => Ok(EditorConfig::default()),
    }
}

/// Open `path` in a fresh editor. Returns the editor and the template name.
fn open(config: &EditorConfig, path: &Path) -> Result<(Editor, String)> {
    let template = read_template(path)?;
    let mut editor = Editor::new(config)?;
    editor.load_template(&template)?;
    Ok((editor, template.name))
}

/// One line per object, back to front, in editor coordinates.
pub fn describe(editor: &Editor, name: &str) -> String {
    let surface = editor.surface();
    let mut out = format!(
        "{} ({:?}, {}x{})\n",
        name,
        editor.orientation(),
        surface.width,
        surface.height
    );
    for (index, object) in editor.document.objects().iter().enumerate() {
        let bounds = object.geometry.bounds();
        let arrangement = object.arrangement.map_or("-", Arrangement::as_str);
        let style = object.scaling_style.map_or("-", ScalingStyle::as_str);
        let _ = writeln!(
            out,
            "{:>3} {:<7} {:<13} {:<5} ({:.1}, {:.1}) {:.1}x{:.1}",
            index,
            object.kind.name(),
            arrangement,
            style,
            bounds.x0,
            bounds.y0,
            bounds.width(),
            bounds.height()
        );
    }
    out
}

/// Run a parsed command line. Returns the text to print.
pub fn run(cli: Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::New {
            file,
            name,
            orientation,
        } => {
            let template = PersistedTemplate::new(name, orientation);
            write_template(&file, &template)?;
            Ok(format!("Created {}\n", file.display()))
        }
        Command::Inspect { file } => {
            let (editor, name) = open(&config, &file)?;
            Ok(describe(&editor, &name))
        }
        Command::Relayout {
            file,
            object,
            arrangement,
            style,
            orientation,
            output,
        } => relayout(
            &config,
            &file,
            Relayout {
                object,
                arrangement,
                style,
                orientation,
            },
            output.as_deref(),
        ),
        Command::AddImage { file, image } => {
            let (mut editor, name) = open(&config, &file)?;
            let source = image.to_string_lossy().into_owned();
            let loader = FileMediaLoader::new(PathBuf::from("."));
            pollster::block_on(editor.insert_media(ObjectKind::image(source), &loader))?;
            write_template(&file, &editor.to_template(&name))?;
            Ok(describe(&editor, &name))
        }
        Command::Store { file, id } => {
            let (editor, name) = open(&config, &file)?;
            let id = match id {
                Some(id) => id,
                None => file
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .with_context(|| format!("No file name in {}", file.display()))?,
            };
            let store = FileStore::from_config(&config)?;
            pollster::block_on(editor.save(&store, &id, &name))?;
            Ok(format!("Stored '{}' as {} in {}\n", name, id, store.base_path().display()))
        }
        Command::Export { id, file } => {
            let store = FileStore::from_config(&config)?;
            let mut editor = Editor::new(&config)?;
            let name = pollster::block_on(editor.open(&store, &id))?;
            write_template(&file, &editor.to_template(&name))?;
            Ok(describe(&editor, &name))
        }
        Command::List => {
            let store = FileStore::from_config(&config)?;
            let mut ids = pollster::block_on(store.list())?;
            ids.sort();
            Ok(ids.into_iter().map(|id| id + "\n").collect())
        }
        Command::AddText { file, text } => {
            let (mut editor, name) = open(&config, &file)?;
            editor.add_text(text.as_deref())?;
            write_template(&file, &editor.to_template(&name))?;
            Ok(describe(&editor, &name))
        }
    }
}

struct Relayout {
    object: Option<usize>,
    arrangement: Option<Arrangement>,
    style: Option<ScalingStyle>,
    orientation: Option<Orientation>,
}

fn relayout(config: &EditorConfig, file: &Path, change: Relayout, output: Option<&Path>) -> Result<String> {
    let (mut editor, name) = open(config, file)?;

    if let Some(orientation) = change.orientation {
        editor.set_orientation(orientation)?;
    }

    if change.arrangement.is_some() || change.style.is_some() {
        let Some(index) = change.object else {
            bail!("--object is required with --arrangement or --style");
        };
        let Some(id) = editor.document.objects().get(index).map(|o| o.id()) else {
            bail!("No object at index {} ({} objects)", index, editor.document.len());
        };
        if let Some(arrangement) = change.arrangement {
            editor.set_arrangement(id, arrangement)?;
        }
        if let Some(style) = change.style {
            editor.set_scaling_style(id, style)?;
        }
    }

    write_template(output.unwrap_or(file), &editor.to_template(&name))?;
    Ok(describe(&editor, &name))
}
