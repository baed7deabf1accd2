use langpack_resources::{ResourceDocument, StringEntry};
use thiserror::Error;

use crate::translations;

/// 所有語言包的範本檔都必須包含的鍵，依此順序補齊。 / The template keys every language pack
/// must carry; missing ones are appended in this order.
pub const REQUIRED_TEMPLATES: [&str; 11] = [
    "TPL_received_sms",
    "TPL_received_mms",
    "TPL_send_sms",
    "TPL_missed_call",
    "TPL_notification",
    "TPL_send_USSD",
    "TPL_system_message",
    "TPL_battery",
    "TPL_receiving_call",
    "TPL_send_sms_chat",
    "TPL_send_USSD_chat",
];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("reference template catalogue is empty; nothing to backfill from")]
    EmptyReference,
}

/// 對帳結果：更新後的文件與新加入的鍵。 / A reconciliation result: the updated document
/// plus the keys that were appended, in required order.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub document: ResourceDocument,
    pub added: Vec<String>,
}

/// 新增項目待翻譯時所附的註解。 / The annotation attached to an appended entry that
/// still needs translation.
pub fn pending_marker(name: &str) -> String {
    format!("TODO: Translate {name}")
}

/// 比對既有範本與參考範本，補齊缺少的必要鍵。 / Reconciles a pack's template file against
/// the source-language reference.
///
/// Returns `Ok(None)` when nothing is missing, so callers skip the write and
/// leave the file untouched. When the pack has no template file at all
/// (`existing` empty), a fresh document is built from the reference text with
/// every entry flagged for translation. Otherwise missing keys are appended in
/// required order, preferring the pack's built-in translation over the
/// reference text; reference-text fallbacks carry the pending marker. Entries
/// already present are never modified or reordered.
pub fn reconcile(
    existing: &ResourceDocument,
    reference: &ResourceDocument,
    required: &[&str],
    translations: &[(&str, &str)],
) -> Result<Option<Reconciliation>, TemplateError> {
    if reference.is_empty() {
        return Err(TemplateError::EmptyReference);
    }

    if existing.is_empty() {
        let mut document = ResourceDocument::new();
        let mut added = Vec::new();
        for name in required {
            if let Some(entry) = reference.get(name) {
                document.push(
                    StringEntry::new(*name, entry.value.clone())
                        .with_comment(pending_marker(name)),
                );
                added.push((*name).to_string());
            }
        }
        if added.is_empty() {
            return Ok(None);
        }
        return Ok(Some(Reconciliation { document, added }));
    }

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !existing.contains(name))
        .collect();
    if missing.is_empty() {
        return Ok(None);
    }

    let mut document = existing.clone();
    let mut added = Vec::new();
    for name in missing {
        if let Some(text) = translations::lookup(translations, name) {
            document.push(StringEntry::new(name, text));
            added.push(name.to_string());
        } else if let Some(entry) = reference.get(name) {
            document.push(
                StringEntry::new(name, entry.value.clone()).with_comment(pending_marker(name)),
            );
            added.push(name.to_string());
        }
        // A required key absent from both the reference and the translation
        // table has no text to backfill; it stays missing.
    }
    if added.is_empty() {
        return Ok(None);
    }
    Ok(Some(Reconciliation { document, added }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(entries: &[(&str, &str)]) -> ResourceDocument {
        let mut document = ResourceDocument::new();
        for (name, value) in entries {
            document.push(StringEntry::new(*name, *value));
        }
        document
    }

    #[test]
    fn fresh_creation_copies_reference_and_flags_everything() {
        let existing = ResourceDocument::new();
        let reference = document(&[("a", "X"), ("b", "Y")]);
        let outcome = reconcile(&existing, &reference, &["a", "b"], &[])
            .expect("reconcile")
            .expect("update needed");
        assert_eq!(outcome.added, ["a", "b"]);
        assert_eq!(outcome.document.len(), 2);
        for entry in outcome.document.iter() {
            assert_eq!(entry.comment.as_deref(), Some(pending_marker(&entry.name).as_str()));
        }
        assert_eq!(outcome.document.get("a").map(|e| e.value.as_str()), Some("X"));
        assert_eq!(outcome.document.get("b").map(|e| e.value.as_str()), Some("Y"));
    }

    #[test]
    fn translation_wins_over_reference_text() {
        let existing = document(&[("a", "Z")]);
        let reference = document(&[("a", "X"), ("b", "Y")]);
        let outcome = reconcile(&existing, &reference, &["a", "b"], &[("b", "W")])
            .expect("reconcile")
            .expect("update needed");
        assert_eq!(outcome.added, ["b"]);
        assert_eq!(outcome.document.get("a").map(|e| e.value.as_str()), Some("Z"));
        let appended = outcome.document.get("b").expect("appended");
        assert_eq!(appended.value, "W");
        assert_eq!(appended.comment, None);
    }

    #[test]
    fn reference_fallback_is_marked_pending() {
        let existing = document(&[("a", "Z")]);
        let reference = document(&[("a", "X"), ("b", "Y")]);
        let outcome = reconcile(&existing, &reference, &["a", "b"], &[])
            .expect("reconcile")
            .expect("update needed");
        let appended = outcome.document.get("b").expect("appended");
        assert_eq!(appended.value, "Y");
        assert_eq!(appended.comment.as_deref(), Some("TODO: Translate b"));
    }

    #[test]
    fn existing_entries_are_never_touched() {
        let existing = document(&[("b", "local"), ("a", "also local")]);
        let reference = document(&[("a", "X"), ("b", "Y"), ("c", "Z")]);
        let outcome = reconcile(&existing, &reference, &["a", "b", "c"], &[])
            .expect("reconcile")
            .expect("update needed");
        let keys: Vec<&str> = outcome.document.keys().collect();
        assert_eq!(keys, ["b", "a", "c"], "original order kept, additions appended");
        assert_eq!(outcome.document.get("b").map(|e| e.value.as_str()), Some("local"));
        assert_eq!(outcome.document.get("a").map(|e| e.value.as_str()), Some("also local"));
        assert_eq!(outcome.added, ["c"]);
    }

    #[test]
    fn nothing_missing_means_no_update() {
        let existing = document(&[("a", "Z"), ("b", "W"), ("extra", "kept")]);
        let reference = document(&[("a", "X"), ("b", "Y")]);
        let outcome = reconcile(&existing, &reference, &["a", "b"], &[]).expect("reconcile");
        assert!(outcome.is_none());
    }

    #[test]
    fn additions_follow_required_order() {
        let existing = document(&[("middle", "kept")]);
        let reference = document(&[("third", "3"), ("first", "1"), ("second", "2")]);
        let outcome = reconcile(
            &existing,
            &reference,
            &["first", "second", "third"],
            &[],
        )
        .expect("reconcile")
        .expect("update needed");
        assert_eq!(outcome.added, ["first", "second", "third"]);
    }

    #[test]
    fn empty_reference_is_fatal() {
        let existing = document(&[("a", "Z")]);
        let reference = ResourceDocument::new();
        let err = reconcile(&existing, &reference, &["a", "b"], &[]).expect_err("must fail");
        assert!(matches!(err, TemplateError::EmptyReference));
    }

    #[test]
    fn key_missing_everywhere_stays_missing() {
        let existing = document(&[("a", "Z")]);
        let reference = document(&[("a", "X")]);
        let outcome = reconcile(&existing, &reference, &["a", "ghost"], &[]).expect("reconcile");
        assert!(outcome.is_none());
    }
}
