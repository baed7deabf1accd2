pub mod categories;
pub mod placeholders;
pub mod templates;
pub mod translations;

pub use categories::{categorize, Categorized, CategorizedFile, Category, CategorySchema};
pub use placeholders::placeholder_names;
pub use templates::{pending_marker, reconcile, Reconciliation, TemplateError, REQUIRED_TEMPLATES};
pub use translations::{
    lookup, translations_for, TranslationTable, TRANSLATED_PACKS, TRANSLATED_TEMPLATE_KEYS,
};
