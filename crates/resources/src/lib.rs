pub mod document;
pub mod xml;

pub use document::{
    language_pack_base, language_packs, reference_template_path, LanguagePack, ResourceDocument,
    StringEntry, STRINGS_FILE, TEMPLATE_FILE,
};
pub use xml::{document_to_xml, load_document, parse_document, write_document, ResourceError};
