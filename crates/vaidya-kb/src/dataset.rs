//! CSV-backed knowledge base: load once at startup, query by name,
//! append-and-persist.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

use crate::record::{Aspect, DiseaseRecord};
use vaidya_common::{Result, VaidyaError};

/// Name column of the backing CSV.
pub const DISEASE_COLUMN: &str = "disease";

/// In-memory table of disease records, in file order.
///
/// Names are unique under case-insensitive comparison; the first row wins
/// when the backing data violates that. Reads are safe to share across
/// threads; `add_disease` assumes a single writer.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    records: Vec<DiseaseRecord>,
    source: PathBuf,
}

impl KnowledgeBase {
    /// Load the knowledge base from a CSV file.
    ///
    /// A missing or malformed file is not fatal: the error is logged and an
    /// empty knowledge base is returned, so every lookup reports no match.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_load(&path).await {
            Ok(kb) => {
                info!("Knowledge base ready: {} diseases from {:?}", kb.len(), path);
                kb
            }
            Err(e) => {
                warn!("Failed to load disease data from {:?}: {e:#}", path);
                Self {
                    records: Vec::new(),
                    source: path,
                }
            }
        }
    }

    async fn try_load(path: &Path) -> anyhow::Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {:?}", path))?;
        let mut reader = csv::Reader::from_reader(content.as_bytes());

        // Header names arrive with stray whitespace from hand-edited files.
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        let name_idx = headers
            .iter()
            .position(|h| h == DISEASE_COLUMN)
            .with_context(|| format!("Missing '{DISEASE_COLUMN}' column in {:?}", path))?;
        let aspect_columns: Vec<(Aspect, Option<usize>)> = Aspect::ALL
            .iter()
            .map(|a| (*a, headers.iter().position(|h| h == a.column())))
            .collect();

        let mut records: Vec<DiseaseRecord> = Vec::new();
        for row in reader.records() {
            let row = row?;
            let Some(name) = row.get(name_idx).map(str::trim).filter(|n| !n.is_empty()) else {
                continue;
            };
            if records.iter().any(|r| r.name.to_lowercase() == name.to_lowercase()) {
                warn!("Duplicate disease name {:?} in {:?}, keeping the first row", name, path);
                continue;
            }
            let mut record = DiseaseRecord::new(name);
            for (aspect, idx) in &aspect_columns {
                if let Some(text) = idx.and_then(|i| row.get(i)) {
                    record.set_aspect(*aspect, text);
                }
            }
            records.push(record);
        }

        Ok(Self {
            records,
            source: path.to_path_buf(),
        })
    }

    /// Build a knowledge base from already-materialized records.
    ///
    /// Useful for embedding and tests; `add_disease` persists to `source`
    /// on the next append.
    pub fn from_records(records: Vec<DiseaseRecord>, source: impl Into<PathBuf>) -> Self {
        Self {
            records,
            source: source.into(),
        }
    }

    /// Exact case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&DiseaseRecord> {
        let needle = name.trim().to_lowercase();
        self.records.iter().find(|r| r.name.to_lowercase() == needle)
    }

    /// All disease names, in file order.
    pub fn available_diseases(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Append a record and rewrite the full table to the source path.
    ///
    /// This is a full overwrite, not an incremental append. Callers must
    /// serialize writers externally.
    pub async fn add_disease(&mut self, record: DiseaseRecord) -> Result<()> {
        if self.get(&record.name).is_some() {
            return Err(VaidyaError::DuplicateDisease(record.name));
        }
        let name = record.name.clone();
        self.records.push(record);
        self.persist().await?;
        info!("Added disease {:?}; knowledge base now has {} entries", name, self.len());
        Ok(())
    }

    async fn persist(&self) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let mut header = vec![DISEASE_COLUMN];
        header.extend(Aspect::ALL.iter().map(|a| a.column()));
        writer.write_record(&header)?;
        for record in &self.records {
            let mut row = vec![record.name.as_str()];
            row.extend(Aspect::ALL.iter().map(|a| record.raw_aspect(*a).unwrap_or("")));
            writer.write_record(&row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {e}"))?;
        tokio::fs::write(&self.source, bytes).await?;
        Ok(())
    }
}
