use std::{
    fs::File,
    io::{self, Cursor, Read, Write},
    path::Path,
};

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

pub const MIME_ZIP: &str = "application/zip";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot read '{name}': {source}")]
    Read {
        name: String,

        #[source]
        source: io::Error,
    },

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("IO error while building ZIP: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub filename: String,
    pub contents: Vec<u8>,
}

/// Ordered set of files that travels as one base64 encoded ZIP archive.
///
/// Contents are captured when a file is added, never re-read later.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocalFileReference {
    files: Vec<LocalFile>,
}

impl LocalFileReference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the whole file now and stores it under its base name.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let file = File::open(path).map_err(|source| Error::Read {
            name: path.to_string_lossy().into_owned(),
            source,
        })?;
        self.add_reader(filename, file)
    }

    pub fn add_reader(&mut self, filename: impl Into<String>, mut r: impl Read) -> Result<(), Error> {
        let filename = filename.into();
        let mut contents = Vec::new();
        r.read_to_end(&mut contents).map_err(|source| Error::Read {
            name: filename.clone(),
            source,
        })?;
        self.files.push(LocalFile { filename, contents });
        Ok(())
    }

    pub fn add_string(&mut self, filename: impl Into<String>, body: impl Into<String>) {
        self.files.push(LocalFile {
            filename: filename.into(),
            contents: body.into().into_bytes(),
        });
    }

    pub fn with_string(mut self, filename: impl Into<String>, body: impl Into<String>) -> Self {
        self.add_string(filename, body);
        self
    }

    pub fn files(&self) -> &[LocalFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn to_zip(&self) -> Result<Vec<u8>, Error> {
        let mut w = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for f in &self.files {
            w.start_file(f.filename.as_str(), zip::write::FileOptions::default())?;
            w.write_all(&f.contents)?;
        }
        Ok(w.finish()?.into_inner())
    }

    pub fn from_zip(bytes: &[u8]) -> Result<Self, Error> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let mut files = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            // the header's size is server supplied, so it is not used for pre-allocation
            let mut contents = Vec::new();
            entry.read_to_end(&mut contents)?;
            files.push(LocalFile {
                filename: entry.name().to_owned(),
                contents,
            });
        }
        Ok(Self { files })
    }

    pub fn to_base64(&self) -> Result<String, Error> {
        Ok(base64::encode(self.to_zip()?))
    }

    pub fn from_base64(s: &str) -> Result<Self, Error> {
        Self::from_zip(&base64::decode(s)?)
    }
}

impl Serialize for LocalFileReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = self.to_base64().map_err(ser::Error::custom)?;
        serializer.serialize_str(&encoded)
    }
}

impl<'de> Deserialize<'de> for LocalFileReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s).map_err(de::Error::custom)
    }
}

/// File reference as attached to submissions and other API objects.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mime: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub width: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<LocalFileReference>,
}

impl FileReference {
    pub fn zip(files: LocalFileReference) -> Self {
        Self {
            mime: MIME_ZIP.to_owned(),
            data: Some(files),
            ..Default::default()
        }
    }
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}
