use crate::actors::{StoreError, StoreHandle};
use crate::engine::EngineError;
use crate::models::{Transaction, TransactionRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{error, info, warn};

/// Outcome of one CSV import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows stored as transactions.
    pub imported: usize,
    /// Rows that parsed but failed transaction validation.
    pub rejected: usize,
    /// Rows that could not be parsed at all.
    pub malformed: usize
}

/// Streams transaction rows from a CSV file into a running store actor.
///
/// Parsing happens on a blocking task and hands records over a bounded channel,
/// so a large file never sits in memory as a whole.
pub struct CsvImporter {
    store: StoreHandle,
    backpressure: usize
}

impl CsvImporter {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            backpressure: 256
        }
    }

    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Imports every valid row of the file at `path`. Invalid rows are logged and skipped.
    ///
    /// # Errors
    /// Fails if the file cannot be opened or read, or if the store actor has stopped.
    pub async fn run(&self, path: &Path) -> Result<ImportReport, EngineError> {
        let (sender, mut receiver) = mpsc::channel::<TransactionRecord>(self.backpressure);
        let reader = self.spawn_csv_reader(path.to_path_buf(), sender);
        let mut report = ImportReport::default();

        while let Some(record) = receiver.recv().await {
            match Transaction::try_from(record) {
                Ok(transaction) => {
                    if !self.store.add(transaction) {
                        error!("Store actor stopped while importing [{}]", path.display());
                        return Err(StoreError::Unavailable.into())
                    }

                    report.imported += 1;
                }
                Err(error) => {
                    warn!("{error}");
                    report.rejected += 1;
                }
            }
        }

        report.malformed = reader.await??;

        info!("Imported [{}] transactions from [{}], skipped [{}]", report.imported, path.display(), report.rejected + report.malformed);

        Ok(report)
    }

    fn spawn_csv_reader(&self, path: PathBuf, sender: mpsc::Sender<TransactionRecord>) -> JoinHandle<Result<usize, csv::Error>> {
        spawn_blocking(move || {
            let file = File::open(&path)?;

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            let mut malformed = 0;

            for result in reader.deserialize::<TransactionRecord>() {
                match result {
                    Ok(record) => {
                        if sender.blocking_send(record).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        warn!("CSV deserialization error: {error}");
                        malformed += 1;
                    }
                }
            }

            Ok(malformed)
        })
    }
}
