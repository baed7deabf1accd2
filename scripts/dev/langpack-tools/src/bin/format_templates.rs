use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Parser;
use langpack_catalog::{lookup, translations_for, TRANSLATED_PACKS, TRANSLATED_TEMPLATE_KEYS};
use langpack_resources::{
    language_pack_base, load_document, write_document, ResourceDocument, StringEntry, TEMPLATE_FILE,
};

#[derive(Debug, Parser)]
#[command(
    name = "format-templates",
    about = "Rewrites translated packs' template files in canonical form, filling known translations",
    version
)]
struct Args {
    /// 專案根目錄；預設為目前目錄。 / Project checkout root (defaults to the current directory).
    #[arg(value_name = "DIR", default_value = ".")]
    root: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("format-templates error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let base = language_pack_base(&args.root);
    if !base.is_dir() {
        bail!("language pack directory not found: {}", base.display());
    }

    let mut updated = 0usize;
    for code in TRANSLATED_PACKS {
        let dir = base.join(format!("values-{code}"));
        if !dir.is_dir() {
            eprintln!("Warning: directory not found: {}", dir.display());
            continue;
        }
        if format_pack(&dir, code) {
            updated += 1;
        }
    }
    println!("Formatted {updated} language pack(s)");
    Ok(())
}

/// 重寫單一語言包的範本檔。 / Rewrites one pack's template file: keeps the `TPL_`
/// entries, appends the translated templates the pack is still missing, and
/// normalises the formatting.
fn format_pack(dir: &Path, code: &str) -> bool {
    println!("Processing {code}...");
    let template_path = dir.join(TEMPLATE_FILE);
    let existing = match load_document(&template_path) {
        Ok(Some(document)) => document,
        Ok(None) => {
            println!(" - skipped: no {TEMPLATE_FILE}");
            return false;
        }
        Err(err) => {
            eprintln!(" - Warning: {err}; pack skipped");
            return false;
        }
    };

    let mut formatted = ResourceDocument::new();
    for entry in existing.iter() {
        if entry.name.starts_with("TPL_") {
            formatted.push(entry.clone());
        }
    }
    if formatted.is_empty() {
        println!(" - skipped: no templates found");
        return false;
    }
    println!(" - {} existing template(s)", formatted.len());

    let translations = translations_for(code);
    for name in TRANSLATED_TEMPLATE_KEYS {
        if formatted.contains(name) {
            continue;
        }
        if let Some(text) = lookup(translations, name) {
            formatted.push(StringEntry::new(name, text));
            println!(" - filled {name} from the built-in translation");
        }
    }

    if let Err(err) = write_document(&template_path, &formatted) {
        eprintln!(" - Warning: {err}");
        return false;
    }
    println!(
        " - formatted {TEMPLATE_FILE} ({} template(s))",
        formatted.len()
    );
    true
}
