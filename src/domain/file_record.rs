use uuid::Uuid;

/// An uploaded file's metadata and byte content, held in memory for the
/// duration of one request. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub id: FileId,
    pub filename: String,
    pub declared_mime: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(Uuid);

impl FileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl FileRecord {
    pub fn new(filename: String, declared_mime: String, content: Vec<u8>) -> Self {
        Self {
            id: FileId::new(),
            filename,
            declared_mime,
            content,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }
}
