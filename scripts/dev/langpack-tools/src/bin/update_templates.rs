use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use langpack_catalog::{
    placeholder_names, reconcile, translations_for, Reconciliation, REQUIRED_TEMPLATES,
};
use langpack_resources::{
    language_pack_base, language_packs, load_document, reference_template_path, write_document,
    ResourceDocument, TEMPLATE_FILE,
};

#[derive(Debug, Parser)]
#[command(
    name = "update-templates",
    about = "Backfills missing message templates in every language pack",
    version
)]
struct Args {
    /// 專案根目錄；預設為目前目錄。 / Project checkout root (defaults to the current directory).
    #[arg(value_name = "DIR", default_value = ".")]
    root: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("update-templates error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let reference_path = reference_template_path(&args.root);
    let reference = match load_document(&reference_path) {
        Ok(Some(document)) if !document.is_empty() => document,
        Ok(_) => bail!(
            "reference template file not found or empty: {}",
            reference_path.display()
        ),
        Err(err) => return Err(err).context("load reference templates"),
    };
    println!(
        "Loaded {} reference template(s) from {}",
        reference.len(),
        reference_path.display()
    );
    println!("Required templates: {}", REQUIRED_TEMPLATES.join(", "));

    let base = language_pack_base(&args.root);
    if !base.is_dir() {
        bail!("language pack directory not found: {}", base.display());
    }
    let packs = language_packs(&base).context("enumerate language packs")?;
    if packs.is_empty() {
        println!("No language packs found under {}", base.display());
        return Ok(());
    }
    println!("Found {} language pack(s)", packs.len());

    let mut updated = 0usize;
    let mut pending = 0usize;
    for pack in &packs {
        println!("Checking {}...", pack.code);
        let template_path = pack.dir.join(TEMPLATE_FILE);
        let existing = match load_document(&template_path) {
            Ok(Some(document)) => document,
            Ok(None) => ResourceDocument::new(),
            Err(err) => {
                // A present-but-unparseable file is never recreated from the
                // reference; that would overwrite whatever translations it holds.
                eprintln!(" - Warning: {err}; pack skipped");
                continue;
            }
        };

        let outcome = reconcile(
            &existing,
            &reference,
            &REQUIRED_TEMPLATES,
            translations_for(&pack.code),
        )
        .context("reconcile templates")?;
        let Some(outcome) = outcome else {
            println!(" - all templates present ({})", existing.len());
            continue;
        };

        warn_placeholder_mismatches(&outcome, &reference);
        if let Err(err) = write_document(&template_path, &outcome.document) {
            eprintln!(" - Warning: {err}");
            continue;
        }
        if existing.is_empty() {
            println!(
                " - created {TEMPLATE_FILE} with {} template(s)",
                outcome.added.len()
            );
        } else {
            println!(
                " - added {} missing template(s): {}",
                outcome.added.len(),
                outcome.added.join(", ")
            );
        }
        updated += 1;
        pending += outcome
            .added
            .iter()
            .filter(|name| {
                outcome
                    .document
                    .get(name)
                    .is_some_and(|entry| entry.comment.is_some())
            })
            .count();
    }

    println!("Update complete; {updated} language pack(s) updated");
    if pending > 0 {
        println!("Note: {pending} added template(s) still carry reference-language text;");
        println!("look for '<!-- TODO: Translate ... -->' markers in the updated files.");
    }
    Ok(())
}

/// 檢查新加入譯文的佔位符是否與參考一致。 / Warns when an appended entry's placeholder
/// tokens differ from the reference text's for the same key.
fn warn_placeholder_mismatches(outcome: &Reconciliation, reference: &ResourceDocument) {
    for name in &outcome.added {
        let Some(entry) = outcome.document.get(name) else {
            continue;
        };
        let Some(reference_entry) = reference.get(name) else {
            continue;
        };
        let found = placeholder_names(&entry.value);
        let expected = placeholder_names(&reference_entry.value);
        if found != expected {
            eprintln!(
                " - Warning: {name} placeholders [{}] differ from reference [{}]",
                joined(&found),
                joined(&expected)
            );
        }
    }
}

fn joined(names: &std::collections::BTreeSet<String>) -> String {
    names
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
