use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use quick_xml::escape::{partial_escape, unescape};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;

use crate::document::{ResourceDocument, StringEntry};

const ROOT_ELEMENT: &str = "resources";
const STRING_ELEMENT: &[u8] = b"string";

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to enumerate language packs in {0}: {1}")]
    ReadDir(PathBuf, io::Error),
    #[error("failed to read resource file {0}: {1}")]
    ReadFile(PathBuf, io::Error),
    #[error("failed to write resource file {0}: {1}")]
    WriteFile(PathBuf, io::Error),
    #[error("malformed XML in {0}: {1}")]
    Parse(PathBuf, quick_xml::Error),
    #[error("{0}: missing <resources> root element")]
    MissingRoot(PathBuf),
    #[error("{0}: root element must be <resources>, found <{1}>")]
    UnexpectedRoot(PathBuf, String),
    #[error("{0}: <string> element without a name attribute")]
    MissingName(PathBuf),
    #[error("{0}: markup inside <string name=\"{1}\"> is not supported")]
    NestedMarkup(PathBuf, String),
    #[error("failed to serialise resource document: {0}")]
    Serialise(#[from] quick_xml::Error),
}

/// 讀取並剖析資源檔；檔案不存在時回傳 `None`。 / Loads and parses a resource file,
/// returning `None` when the file does not exist. Malformed content is a typed
/// error, so callers can tell an absent file from a corrupt one.
pub fn load_document(path: &Path) -> Result<Option<ResourceDocument>, ResourceError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(ResourceError::ReadFile(path.to_path_buf(), err)),
    };
    parse_document(&contents, path).map(Some)
}

/// 剖析 strings.xml 格式的文件內容。 / Parses document content in the strings.xml dialect.
/// `origin` is only used to label errors.
pub fn parse_document(xml: &str, origin: &Path) -> Result<ResourceDocument, ResourceError> {
    let mut reader = Reader::from_str(xml);
    let mut document = ResourceDocument::new();
    let mut pending_comment: Option<String> = None;
    let mut saw_root = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|err| ResourceError::Parse(origin.to_path_buf(), err))?;
        match event {
            Event::Start(start) => {
                if !saw_root {
                    expect_root(&start, origin)?;
                    saw_root = true;
                    pending_comment = None;
                } else if start.name().as_ref() == STRING_ELEMENT {
                    let entry =
                        parse_string_element(&mut reader, &start, pending_comment.take(), origin)?;
                    document.push(entry);
                } else {
                    // Other resource kinds (plurals, string-array) pass through these tools untouched.
                    reader
                        .read_to_end(start.name())
                        .map_err(|err| ResourceError::Parse(origin.to_path_buf(), err))?;
                    pending_comment = None;
                }
            }
            Event::Empty(start) => {
                if !saw_root {
                    expect_root(&start, origin)?;
                    saw_root = true;
                } else if start.name().as_ref() == STRING_ELEMENT {
                    let (name, attrs) = read_attributes(&start, &reader, origin)?;
                    document.push(StringEntry {
                        name,
                        value: String::new(),
                        attrs,
                        comment: pending_comment.take(),
                    });
                } else {
                    pending_comment = None;
                }
            }
            Event::Comment(text) => {
                let text = reader
                    .decoder()
                    .decode(&text)
                    .map_err(|err| ResourceError::Parse(origin.to_path_buf(), err))?;
                pending_comment = Some(text.trim().to_string());
            }
            Event::End(_) | Event::Text(_) | Event::CData(_) => {}
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(ResourceError::MissingRoot(origin.to_path_buf()));
    }
    Ok(document)
}

fn expect_root(start: &BytesStart<'_>, origin: &Path) -> Result<(), ResourceError> {
    if start.name().as_ref() != ROOT_ELEMENT.as_bytes() {
        let found = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        return Err(ResourceError::UnexpectedRoot(origin.to_path_buf(), found));
    }
    Ok(())
}

fn parse_string_element<'a>(
    reader: &mut Reader<&'a [u8]>,
    start: &BytesStart<'a>,
    comment: Option<String>,
    origin: &Path,
) -> Result<StringEntry, ResourceError> {
    let (name, attrs) = read_attributes(start, reader, origin)?;
    let mut value = String::new();
    loop {
        let event = reader
            .read_event()
            .map_err(|err| ResourceError::Parse(origin.to_path_buf(), err))?;
        match event {
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|err| ResourceError::Parse(origin.to_path_buf(), err))?;
                value.push_str(&text);
            }
            Event::CData(data) => {
                let text = reader
                    .decoder()
                    .decode(&data)
                    .map_err(|err| ResourceError::Parse(origin.to_path_buf(), err))?;
                value.push_str(&text);
            }
            Event::Start(_) | Event::Empty(_) => {
                return Err(ResourceError::NestedMarkup(origin.to_path_buf(), name));
            }
            Event::End(end) if end.name().as_ref() == STRING_ELEMENT => break,
            Event::Comment(_) | Event::End(_) => {}
            Event::Eof => {
                return Err(ResourceError::Parse(
                    origin.to_path_buf(),
                    quick_xml::Error::UnexpectedEof("string".to_string()),
                ));
            }
            _ => {}
        }
    }
    Ok(StringEntry {
        name,
        value,
        attrs,
        comment,
    })
}

fn read_attributes(
    start: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
    origin: &Path,
) -> Result<(String, Vec<(String, String)>), ResourceError> {
    let mut name = None;
    let mut attrs = Vec::new();
    for attribute in start.attributes() {
        let attribute =
            attribute.map_err(|err| ResourceError::Parse(origin.to_path_buf(), err.into()))?;
        let key = reader
            .decoder()
            .decode(attribute.key.as_ref())
            .map_err(|err| ResourceError::Parse(origin.to_path_buf(), err))?
            .into_owned();
        let raw = reader
            .decoder()
            .decode(&attribute.value)
            .map_err(|err| ResourceError::Parse(origin.to_path_buf(), err))?;
        let value = unescape(&raw)
            .map_err(|err| ResourceError::Parse(origin.to_path_buf(), err.into()))?
            .into_owned();
        if key == "name" {
            name = Some(value);
        } else {
            attrs.push((key, value));
        }
    }
    let name = name.ok_or_else(|| ResourceError::MissingName(origin.to_path_buf()))?;
    Ok((name, attrs))
}

/// 將文件序列化為標準格式的字串。 / Serialises a document to the canonical file format:
/// declaration header, `<resources>` root, four-space indent, one element per
/// line, trailing newline. Only `&`, `<` and `>` are escaped in text bodies.
pub fn document_to_xml(document: &ResourceDocument) -> Result<String, ResourceError> {
    let bytes = render(document)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 將文件整檔寫入磁碟，必要時建立上層目錄。 / Rewrites the whole file on disk, creating
/// parent directories as needed.
pub fn write_document(path: &Path, document: &ResourceDocument) -> Result<(), ResourceError> {
    let bytes = render(document)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| ResourceError::WriteFile(path.to_path_buf(), err))?;
    }
    fs::write(path, bytes).map_err(|err| ResourceError::WriteFile(path.to_path_buf(), err))
}

fn render(document: &ResourceDocument) -> Result<Vec<u8>, quick_xml::Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
    for entry in document.iter() {
        if let Some(comment) = &entry.comment {
            let text = format!(" {comment} ");
            writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?;
        }
        let mut element = BytesStart::new("string");
        element.push_attribute(("name", entry.name.as_str()));
        for (key, value) in &entry.attrs {
            element.push_attribute((key.as_str(), value.as_str()));
        }
        writer.write_event(Event::Start(element))?;
        writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(
            entry.value.as_str(),
        ))))?;
        writer.write_event(Event::End(BytesEnd::new("string")))?;
    }
    writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}
