//! Object database
//!
//! Reading is abstracted behind [`ObjectStore`] so that history traversal can
//! run against the loose objects of a real repository ([`Database`]) or
//! against an in-memory map ([`MemoryStore`]).

use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::HistoryError;
use bytes::Bytes;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read access to content-addressed objects
pub trait ObjectStore {
    /// Load the decompressed bytes of an object
    ///
    /// Fails with [`HistoryError::ObjectNotFound`] when the store has no such
    /// object.
    fn load(&self, object_id: &ObjectId) -> Result<Bytes, HistoryError>;

    fn load_commit(&self, object_id: &ObjectId) -> Result<CommitRecord, HistoryError> {
        let raw = self.load(object_id)?;
        CommitRecord::decode(object_id.clone(), &raw)
    }
}

/// Loose object storage under `.git/objects`
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: read objects from packfiles once `objects/pack` support is needed
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    fn read_object(&self, object_id: &ObjectId, object_path: PathBuf) -> Result<Bytes, HistoryError> {
        tracing::trace!(path = %object_path.display(), "reading object");

        if !object_path.is_file() {
            return Err(HistoryError::ObjectNotFound {
                oid: object_id.clone(),
                path: object_path,
            });
        }

        let object_content = std::fs::read(&object_path)?;
        let object_content = Self::decompress(object_id, object_content.into())?;

        // a truncated zlib stream still inflates to a prefix of the object,
        // so compare against the size declared in the header
        if let Some((_, declared_size, content)) = ObjectType::split_header(&object_content)
            && content.len() != declared_size
        {
            return Err(HistoryError::CorruptObject {
                oid: object_id.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!(
                        "header declares {declared_size} bytes, found {}",
                        content.len()
                    ),
                ),
            });
        }

        Ok(object_content)
    }

    fn decompress(object_id: &ObjectId, data: Bytes) -> Result<Bytes, HistoryError> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .map_err(|source| HistoryError::CorruptObject {
                oid: object_id.clone(),
                source,
            })?;

        Ok(decompressed_content.into())
    }
}

impl ObjectStore for Database {
    fn load(&self, object_id: &ObjectId) -> Result<Bytes, HistoryError> {
        self.read_object(object_id, self.object_path(object_id))
    }
}

/// Objects kept in memory, already decompressed
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    objects: HashMap<ObjectId, Bytes>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object_id: ObjectId, content: impl Into<Bytes>) {
        self.objects.insert(object_id, content.into());
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectStore for MemoryStore {
    fn load(&self, object_id: &ObjectId) -> Result<Bytes, HistoryError> {
        self.objects
            .get(object_id)
            .cloned()
            .ok_or_else(|| HistoryError::ObjectNotFound {
                oid: object_id.clone(),
                path: object_id.to_path(),
            })
    }
}
