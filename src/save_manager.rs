//! Persistence for run history and progression.
//!
//! Records are stored in a checksummed binary format:
//! - Version magic (8 bytes)
//! - Data length (4 bytes)
//! - bincode payload (variable length)
//! - SHA256 checksum over the three fields above (32 bytes)

use crate::core::SAVE_VERSION_MAGIC;
use crate::error::SaveError;
use crate::progression::ProgressionState;
use crate::session::History;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

const HISTORY_FILE: &str = "history.dat";
const PROGRESSION_FILE: &str = "progression.dat";

/// Durable storage for the two persisted records. Loading a record that was
/// never saved yields its default.
pub trait ProgressStore {
    fn load_history(&self) -> Result<History, SaveError>;
    fn save_history(&mut self, history: &History) -> Result<(), SaveError>;
    fn load_progression(&self) -> Result<ProgressionState, SaveError>;
    fn save_progression(&mut self, state: &ProgressionState) -> Result<(), SaveError>;
}

/// Serializes `value` into a framed, checksummed record.
pub fn encode_record<T: Serialize>(value: &T) -> Result<Vec<u8>, SaveError> {
    let data = bincode::serialize(value)?;
    let data_len = u32::try_from(data.len())
        .map_err(|_| SaveError::Serialization("record larger than 4 GiB".to_string()))?;

    // Compute checksum over version + length + data
    let mut hasher = Sha256::new();
    hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
    hasher.update(data_len.to_le_bytes());
    hasher.update(&data);
    let checksum = hasher.finalize();

    let mut bytes = Vec::with_capacity(8 + 4 + data.len() + 32);
    bytes.extend_from_slice(&SAVE_VERSION_MAGIC.to_le_bytes());
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.extend_from_slice(&data);
    bytes.extend_from_slice(&checksum);
    Ok(bytes)
}

/// Verifies and decodes a record produced by [`encode_record`].
pub fn decode_record<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SaveError> {
    let mut reader = bytes;

    // Read and verify version magic
    let mut version_bytes = [0u8; 8];
    reader.read_exact(&mut version_bytes)?;
    let version = u64::from_le_bytes(version_bytes);
    if version != SAVE_VERSION_MAGIC {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION_MAGIC,
            actual: version,
        });
    }

    let mut length_bytes = [0u8; 4];
    reader.read_exact(&mut length_bytes)?;
    let data_len = u32::from_le_bytes(length_bytes);
    if data_len as usize > reader.len() {
        return Err(SaveError::Serialization(format!(
            "record claims {} payload bytes, {} remain",
            data_len,
            reader.len()
        )));
    }

    let mut data = vec![0u8; data_len as usize];
    reader.read_exact(&mut data)?;

    let mut stored_checksum = [0u8; 32];
    reader.read_exact(&mut stored_checksum)?;

    let mut hasher = Sha256::new();
    hasher.update(version_bytes);
    hasher.update(length_bytes);
    hasher.update(&data);
    let computed_checksum = hasher.finalize();
    if stored_checksum != computed_checksum.as_slice() {
        return Err(SaveError::ChecksumMismatch);
    }

    Ok(bincode::deserialize(&data)?)
}

/// Stores records as files in the platform config directory.
pub struct SaveManager {
    dir: PathBuf,
}

impl SaveManager {
    /// Creates a new SaveManager instance
    ///
    /// Sets up the save directory at the appropriate location for the platform
    /// using the `directories` crate.
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs = ProjectDirs::from("", "", "mathdash").ok_or(SaveError::NoConfigDir)?;
        Self::with_dir(project_dirs.config_dir())
    }

    /// Uses `dir` for save files, creating it if needed.
    pub fn with_dir(dir: impl AsRef<Path>) -> Result<Self, SaveError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Creates a SaveManager for testing with a unique temporary directory
    #[cfg(test)]
    fn new_for_test() -> Result<Self, SaveError> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "mathdash-test-{}-{}",
            std::process::id(),
            test_id
        ));
        Self::with_dir(temp_dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn history_exists(&self) -> bool {
        self.dir.join(HISTORY_FILE).exists()
    }

    pub fn progression_exists(&self) -> bool {
        self.dir.join(PROGRESSION_FILE).exists()
    }

    fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<(), SaveError> {
        let path = self.dir.join(file);
        let bytes = encode_record(value)?;
        fs::write(&path, &bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "record saved");
        Ok(())
    }

    fn read<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T, SaveError> {
        let path = self.dir.join(file);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(e.into()),
        };
        let value = decode_record(&bytes)?;
        tracing::debug!(path = %path.display(), "record loaded");
        Ok(value)
    }
}

impl ProgressStore for SaveManager {
    fn load_history(&self) -> Result<History, SaveError> {
        self.read(HISTORY_FILE)
    }

    fn save_history(&mut self, history: &History) -> Result<(), SaveError> {
        self.write(HISTORY_FILE, history)
    }

    fn load_progression(&self) -> Result<ProgressionState, SaveError> {
        self.read(PROGRESSION_FILE)
    }

    fn save_progression(&mut self, state: &ProgressionState) -> Result<(), SaveError> {
        self.write(PROGRESSION_FILE, state)
    }
}

/// In-memory store holding the same framed bytes the file store writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    history: Option<Vec<u8>>,
    progression: Option<Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn load_history(&self) -> Result<History, SaveError> {
        self.history
            .as_deref()
            .map_or_else(|| Ok(History::default()), decode_record)
    }

    fn save_history(&mut self, history: &History) -> Result<(), SaveError> {
        self.history = Some(encode_record(history)?);
        Ok(())
    }

    fn load_progression(&self) -> Result<ProgressionState, SaveError> {
        self.progression
            .as_deref()
            .map_or_else(|| Ok(ProgressionState::default()), decode_record)
    }

    fn save_progression(&mut self, state: &ProgressionState) -> Result<(), SaveError> {
        self.progression = Some(encode_record(state)?);
        Ok(())
    }
}
