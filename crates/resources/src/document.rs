use std::fs;
use std::path::{Path, PathBuf};

use crate::xml::ResourceError;

/// 語言包主資源檔的檔名。 / File name of a pack's main resource file.
pub const STRINGS_FILE: &str = "strings.xml";

/// 語言包範本檔的檔名。 / File name of a pack's template file.
pub const TEMPLATE_FILE: &str = "template.xml";

/// 單一 `<string>` 資源項目。 / A single `<string>` resource element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    pub name: String,
    /// Unescaped text body; placeholder tokens such as `{{Message}}` are kept verbatim.
    pub value: String,
    /// Attributes other than `name`, in document order (e.g. `translatable`).
    pub attrs: Vec<(String, String)>,
    /// Annotation emitted as an XML comment on the line before the element.
    pub comment: Option<String>,
}

impl StringEntry {
    /// 建立不含額外屬性與註解的項目。 / Creates an entry with no extra attributes or comment.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            attrs: Vec::new(),
            comment: None,
        }
    }

    /// 附加寫出時置於項目前一行的註解。 / Attaches the comment written on the preceding line.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// 依插入順序保存資源項目的有序映射。 / Insertion-ordered mapping of resource entries, indexed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDocument {
    entries: Vec<StringEntry>,
}

impl ResourceDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 依名稱取得項目。 / Returns the entry with the given name, if present.
    pub fn get(&self, name: &str) -> Option<&StringEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// 加入項目；名稱重複時以新值取代原位置的舊值。 / Appends an entry; a duplicate name replaces the
    /// earlier entry in place (last write wins).
    pub fn push(&mut self, entry: StringEntry) {
        if let Some(position) = self
            .entries
            .iter()
            .position(|existing| existing.name == entry.name)
        {
            self.entries[position] = entry;
        } else {
            self.entries.push(entry);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StringEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

/// 一個語言包目錄及其語言代碼。 / One language-pack directory with its language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePack {
    pub code: String,
    pub dir: PathBuf,
}

/// 語言包在專案內的根目錄。 / Base directory holding the language packs inside a checkout.
pub fn language_pack_base(root: &Path) -> PathBuf {
    root.join("app").join("language_pack")
}

/// 來源語言範本檔在專案內的路徑。 / Path of the source-language template catalogue.
pub fn reference_template_path(root: &Path) -> PathBuf {
    root.join("app")
        .join("src")
        .join("main")
        .join("res")
        .join("values")
        .join(TEMPLATE_FILE)
}

/// 列舉 `values-*` 語言包目錄，依目錄名排序。 / Enumerates the `values-*` pack directories,
/// sorted by directory name.
pub fn language_packs(base: &Path) -> Result<Vec<LanguagePack>, ResourceError> {
    let entries =
        fs::read_dir(base).map_err(|err| ResourceError::ReadDir(base.to_path_buf(), err))?;
    let mut packs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| ResourceError::ReadDir(base.to_path_buf(), err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if let Some(code) = name.strip_prefix("values-") {
            packs.push(LanguagePack {
                code: code.to_string(),
                dir: path,
            });
        }
    }
    packs.sort_by(|a, b| a.dir.cmp(&b.dir));
    Ok(packs)
}
