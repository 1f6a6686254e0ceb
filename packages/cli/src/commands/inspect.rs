use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use funnel_editor::{load_elements, tree, Element};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Saved page (JSON array of elements)
    pub page: PathBuf,
}

pub fn inspect(args: InspectArgs, _cwd: &str) -> Result<()> {
    println!("🔍 {} {}", "Inspecting".green().bold(), args.page.display());
    println!();

    let elements = load_elements(&args.page)
        .with_context(|| format!("Failed to load {}", args.page.display()))?;

    print_outline(&elements, None);
    println!();

    let stats = PageStats::collect(&elements);
    println!("   Nodes:      {}", stats.nodes);
    println!("   Depth:      {}", stats.depth);
    println!("   Containers: {}", stats.containers);
    println!("   Leaves:     {}", stats.leaves);
    for (kind, count) in &stats.by_kind {
        println!("     {:<12} {}", kind, count);
    }

    println!();
    println!("   {} Tree is valid", "✓".green());

    Ok(())
}

/// Print one line per node, indented by depth
pub fn print_outline(elements: &[Element], selected: Option<&str>) {
    for (node, depth) in tree::descendants(elements) {
        let kind = node.kind.map(|k| k.as_str()).unwrap_or("null");
        let line = format!(
            "{}{} {} {}",
            "  ".repeat(depth + 1),
            kind.cyan(),
            node.id.bright_white(),
            format!("({})", node.name).dimmed()
        );

        if selected == Some(node.id.as_str()) {
            println!("{} {}", line, "◀ selected".green());
        } else {
            println!("{}", line);
        }
    }
}

/// Shape summary of a page tree
#[derive(Debug, Default, PartialEq)]
pub struct PageStats {
    pub nodes: usize,
    pub depth: usize,
    pub containers: usize,
    pub leaves: usize,
    pub by_kind: BTreeMap<&'static str, usize>,
}

impl PageStats {
    pub fn collect(elements: &[Element]) -> Self {
        let mut stats = PageStats {
            depth: tree::depth(elements),
            ..PageStats::default()
        };

        for (node, _) in tree::descendants(elements) {
            stats.nodes += 1;
            if node.is_container() {
                stats.containers += 1;
            } else {
                stats.leaves += 1;
            }
            let kind = node.kind.map(|k| k.as_str()).unwrap_or("null");
            *stats.by_kind.entry(kind).or_insert(0) += 1;
        }

        stats
    }
}
