use crate::commands::inspect::print_outline;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use funnel_editor::{encode_elements, load_elements, save_elements, EditorAction, EditorSession};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Action script (JSON array of editor actions)
    pub script: PathBuf,

    /// Saved page to load before replaying
    #[arg(short, long)]
    pub page: Option<PathBuf>,

    /// Load the page in live mode
    #[arg(long)]
    pub live: bool,

    /// Config file (defaults to funnel.config.json in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the resulting elements to this file
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn replay(args: ReplayArgs, cwd: &str) -> Result<()> {
    let config = Config::resolve(cwd, args.config.as_deref())?;

    let actions = read_script(&args.script)?;

    println!("▶️  {} {}", "Replaying".green().bold(), args.script.display());
    println!("   Actions: {}", actions.len());
    println!();

    let mut session = EditorSession::with_config("cli", config.editor.clone());

    if let Some(page) = &args.page {
        let elements = load_elements(page)
            .with_context(|| format!("Failed to load page {}", page.display()))?;
        println!("   {} Loaded {}", "✓".green(), page.display());
        session.dispatch(EditorAction::LoadData {
            elements: Some(elements),
            with_live: args.live,
        });
    } else if args.live {
        session.dispatch(EditorAction::LoadData {
            elements: None,
            with_live: true,
        });
    }

    for (i, action) in actions.into_iter().enumerate() {
        let marker = if action.records_history() {
            "●".blue()
        } else {
            "○".dimmed()
        };
        println!("   {:>3} {} {}", i + 1, marker, action.name());
        session.dispatch(action);
    }

    let editor = session.editor();
    let history = session.history();

    println!();
    println!(
        "   History: {} {} (index {})",
        history.len(),
        if history.len() == 1 { "entry" } else { "entries" },
        history.current_index()
    );
    println!("   Device:  {}", editor.device);
    println!(
        "   Modes:   preview={} live={}",
        editor.preview_mode, editor.live_mode
    );
    if !editor.funnel_page_id.is_empty() {
        println!("   Page:    {}", editor.funnel_page_id);
    }
    println!();

    print_outline(&editor.elements, editor.selected_id());

    if let Some(out) = &args.out {
        if config.pretty {
            save_elements(out, &editor.elements)?;
        } else {
            fs::write(out, encode_elements(&editor.elements)?)?;
        }
        println!();
        println!("   {} Wrote {}", "✓".green(), out.display());
    }

    Ok(())
}

fn read_script(path: &Path) -> Result<Vec<EditorAction>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let actions = serde_json::from_str(&source)
        .with_context(|| format!("Invalid action script {}", path.display()))?;
    Ok(actions)
}
