use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use langpack_catalog::{categorize, CategorySchema};
use langpack_resources::{
    language_pack_base, language_packs, load_document, write_document, LanguagePack, STRINGS_FILE,
};

#[derive(Debug, Parser)]
#[command(
    name = "split-language-packs",
    about = "Splits each language pack's monolithic strings.xml into categorized files",
    version
)]
struct Args {
    /// 專案根目錄；預設為目前目錄。 / Project checkout root (defaults to the current directory).
    #[arg(value_name = "DIR", default_value = ".")]
    root: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("split-language-packs error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let base = language_pack_base(&args.root);
    if !base.is_dir() {
        bail!("language pack directory not found: {}", base.display());
    }

    let packs = language_packs(&base).context("enumerate language packs")?;
    if packs.is_empty() {
        println!("No language packs found under {}", base.display());
        return Ok(());
    }
    println!("Found {} language pack(s) under {}", packs.len(), base.display());

    let schema = CategorySchema::builtin();
    let mut split_count = 0usize;
    for pack in &packs {
        if split_pack(pack, &schema) {
            split_count += 1;
        }
    }
    println!("Split {split_count} of {} language pack(s)", packs.len());
    Ok(())
}

/// 分割單一語言包；任何失敗僅影響該語言包。 / Splits one pack; failures stay local to it
/// so the rest of the batch keeps going.
fn split_pack(pack: &LanguagePack, schema: &CategorySchema) -> bool {
    println!("Processing {}...", pack.code);
    let strings_path = pack.dir.join(STRINGS_FILE);
    let document = match load_document(&strings_path) {
        Ok(Some(document)) => document,
        Ok(None) => {
            println!(" - skipped: no {STRINGS_FILE}");
            return false;
        }
        Err(err) => {
            eprintln!(" - Warning: {err}; pack skipped");
            return false;
        }
    };
    if document.is_empty() {
        println!(" - skipped: no strings found");
        return false;
    }
    println!(" - {} string(s) loaded", document.len());

    let partition = categorize(&document, schema);
    for file in &partition.files {
        let output = pack.dir.join(file.file_name);
        if let Err(err) = write_document(&output, &file.document) {
            eprintln!(" - Warning: {err}; remaining categories skipped");
            return false;
        }
        println!(
            " - wrote {} ({} string(s))",
            file.file_name,
            file.document.len()
        );
    }
    if !partition.uncategorized.is_empty() {
        eprintln!(
            " - Warning: {} uncategorized string(s):",
            partition.uncategorized.len()
        );
        for name in &partition.uncategorized {
            eprintln!("     · {name}");
        }
    }
    true
}
