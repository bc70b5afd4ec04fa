//! DOCX package detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// DOCX package information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxFormat {
    /// Path of the main document part inside the package (e.g., "word/document.xml")
    pub main_part: String,
    /// Whether the package has a style sheet next to the main part
    pub has_styles: bool,
    /// Whether the package has core properties (`docProps/core.xml`)
    pub has_core_properties: bool,
}

impl DocxFormat {
    /// Folder holding the main part, with a trailing slash (e.g., "word/").
    pub fn part_dir(&self) -> &str {
        match self.main_part.rfind('/') {
            Some(idx) => &self.main_part[..=idx],
            None => "",
        }
    }

    /// Path of the style sheet part.
    pub fn styles_part(&self) -> String {
        format!("{}styles.xml", self.part_dir())
    }
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DOCX ({})", self.main_part)
    }
}

/// ZIP local file header magic bytes: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Package relationships part.
const PACKAGE_RELS: &str = "_rels/.rels";

/// Fallback location of the main document part.
const DEFAULT_MAIN_PART: &str = "word/document.xml";

/// Core properties part.
pub(crate) const CORE_PROPERTIES_PART: &str = "docProps/core.xml";

const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Detect a DOCX package from a file path.
///
/// # Example
/// ```no_run
/// use undocx::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.docx").unwrap();
/// println!("Main part: {}", format.main_part);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocxFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 4];
    if file.read_exact(&mut header).is_err() || !is_zip_bytes(&header) {
        return Err(Error::UnknownFormat);
    }
    file.rewind()?;
    let mut archive = ZipArchive::new(file)?;
    inspect_archive(&mut archive)
}

/// Detect a DOCX package from its complete bytes.
///
/// # Returns
/// * `Ok(DocxFormat)` if the data is a ZIP package with a main document part
/// * `Err(Error::UnknownFormat)` if the data is not a ZIP archive
/// * `Err(Error::MissingPart)` if the archive has no main document part
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocxFormat> {
    if !is_zip_bytes(data) {
        return Err(Error::UnknownFormat);
    }
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    inspect_archive(&mut archive)
}

/// Inspect an opened archive and locate its parts.
pub(crate) fn inspect_archive<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<DocxFormat> {
    let main_part = match read_part(archive, PACKAGE_RELS)? {
        Some(rels) => main_part_from_rels(&rels).unwrap_or_else(|| {
            log::debug!("No officeDocument relationship, using {}", DEFAULT_MAIN_PART);
            DEFAULT_MAIN_PART.to_string()
        }),
        None => DEFAULT_MAIN_PART.to_string(),
    };

    if archive.index_for_name(&main_part).is_none() {
        return Err(Error::MissingPart(main_part));
    }

    let mut format = DocxFormat {
        main_part,
        has_styles: false,
        has_core_properties: archive.index_for_name(CORE_PROPERTIES_PART).is_some(),
    };
    format.has_styles = archive.index_for_name(&format.styles_part()).is_some();

    Ok(format)
}

/// Read a package part as UTF-8 text, `None` if the part does not exist.
pub(crate) fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(Some(content))
}

/// Find the target of the officeDocument relationship in `_rels/.rels`.
fn main_part_from_rels(xml: &str) -> Option<String> {
    let doc = roxmltree::Document::parse(xml).ok()?;
    doc.descendants()
        .filter(|n| {
            n.tag_name().name() == "Relationship"
                && n.tag_name().namespace() == Some(RELATIONSHIPS_NS)
        })
        .find(|n| {
            n.attribute("Type")
                .is_some_and(|t| t.ends_with("/officeDocument"))
        })
        .and_then(|n| n.attribute("Target"))
        .map(|target| target.trim_start_matches('/').to_string())
}

/// Check if a file is a readable DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes start with a ZIP local file header.
pub fn is_zip_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="/content/main.xml"/>
</Relationships>"#;

    #[test]
    fn test_main_part_from_rels() {
        assert_eq!(main_part_from_rels(RELS).as_deref(), Some("content/main.xml"));
        assert_eq!(main_part_from_rels("<Relationships/>"), None);
        assert_eq!(main_part_from_rels("not xml"), None);
    }

    #[test]
    fn test_part_dir() {
        let format = DocxFormat {
            main_part: "content/main.xml".to_string(),
            has_styles: false,
            has_core_properties: false,
        };
        assert_eq!(format.part_dir(), "content/");
        assert_eq!(format.styles_part(), "content/styles.xml");
    }

    #[test]
    fn test_detect_invalid_format() {
        let result = detect_format_from_bytes(b"%PDF-1.7\n");
        assert!(matches!(result, Err(Error::UnknownFormat)));

        let result = detect_format_from_bytes(b"");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_is_zip_bytes() {
        assert!(is_zip_bytes(b"PK\x03\x04rest"));
        assert!(!is_zip_bytes(b"PK"));
        assert!(!is_zip_bytes(b"Not a zip"));
    }
}
