use tokio::spawn;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::actors::StoreError;
use crate::models::Transaction;
use crate::storage::{Snapshot, Storage};

enum Command {
    Add(Transaction),
    Snapshot(oneshot::Sender<Snapshot>),
    Shutdown
}

/// Owns a store on its own task and applies commands strictly in arrival order.
///
/// Every mutation is applied in full before the next command is looked at, so a
/// snapshot can never observe a half-inserted collection.
pub struct StoreActor<S: Storage> {
    handle: StoreHandle,
    task: JoinHandle<S>
}

/// A cloneable sender side of a [`StoreActor`].
#[derive(Clone)]
pub struct StoreHandle {
    sender: mpsc::UnboundedSender<Command>
}

impl<S: Storage> StoreActor<S> {
    /// Spawns a new actor owning `storage`. Must be called from within a tokio runtime.
    pub fn spawn(mut storage: S) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel();

        let task = spawn(async move {
            while let Some(command) = receiver.recv().await {
                match command {
                    Command::Add(transaction) => {
                        debug!("Transaction [{}]:[{:?}] received by store actor", transaction.description(), transaction.transaction_type());
                        storage.add(transaction);
                    }
                    Command::Snapshot(reply) => {
                        if reply.send(storage.snapshot()).is_err() {
                            warn!("Snapshot requester went away before the reply was sent");
                        }
                    }
                    Command::Shutdown => break
                }
            }

            storage
        });

        Self {
            handle: StoreHandle { sender },
            task
        }
    }

    pub fn handle(&self) -> StoreHandle {
        self.handle.clone()
    }

    /// Stops the actor once every command queued ahead of this call has been
    /// applied, and hands the store back.
    pub async fn despawn(self) -> Result<S, StoreError> {
        if self.handle.sender.send(Command::Shutdown).is_err() {
            warn!("Store actor stopped before shutdown was requested");
        }

        Ok(self.task.await?)
    }
}

impl StoreHandle {
    /// Queues `transaction` for insertion. Returns `false` if the actor has stopped.
    pub fn add(&self, transaction: Transaction) -> bool {
        self.sender.send(Command::Add(transaction)).is_ok()
    }

    /// The store as of every command sent before this call.
    pub async fn snapshot(&self) -> Result<Snapshot, StoreError> {
        let (reply, response) = oneshot::channel();

        self.sender
            .send(Command::Snapshot(reply))
            .map_err(|_| StoreError::Unavailable)?;

        response.await.map_err(|_| StoreError::Unavailable)
    }

    pub fn is_running(&self) -> bool {
        !self.sender.is_closed()
    }
}
