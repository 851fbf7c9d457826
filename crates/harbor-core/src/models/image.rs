/// An image selected by the user, or the re-encoded output of the compressor.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    /// MIME type, e.g. `image/png`.
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub last_modified: jiff::Timestamp,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
            last_modified: jiff::Timestamp::now(),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Extension used for the canonical storage path.
    ///
    /// The file name's last `.` segment, lowercased. Segments that aren't plain
    /// ASCII alphanumerics fall back to the MIME subtype, with `jpeg` shortened
    /// to `jpg`, and finally to `bin`.
    pub fn extension(&self) -> String {
        if let Some((stem, ext)) = self.name.rsplit_once('.')
            && !stem.is_empty()
            && is_plain_extension(ext)
        {
            return ext.to_ascii_lowercase();
        }
        match self.content_type.split_once('/') {
            Some((_, "jpeg")) => "jpg".to_string(),
            Some((_, subtype)) if is_plain_extension(subtype) => subtype.to_ascii_lowercase(),
            _ => "bin".to_string(),
        }
    }
}

fn is_plain_extension(ext: &str) -> bool {
    !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric())
}
