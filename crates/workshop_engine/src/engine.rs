use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};

use crate::fetch::{FetchSettings, GraphqlPokemonFetcher, PokemonFetcher};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Fetch { request_id: RequestId, name: String },
}

/// Runs lookups on a background tokio runtime.
///
/// Requests are never cancelled; each one reports back exactly once, in
/// completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> io::Result<Self> {
        Self::with_fetcher(Arc::new(GraphqlPokemonFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PokemonFetcher>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            engine_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    /// Queues a lookup. Returns `false` when the engine thread is gone and
    /// nothing will ever settle this request.
    pub fn fetch(&self, request_id: RequestId, name: impl Into<String>) -> bool {
        let command = EngineCommand::Fetch {
            request_id,
            name: name.into(),
        };
        if self.cmd_tx.send(command).is_err() {
            engine_warn!("Engine stopped; dropping lookup {}", request_id);
            return false;
        }
        true
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn PokemonFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { request_id, name } => {
            let result = fetcher.fetch(&name).await;
            let _ = event_tx.send(EngineEvent::FetchSettled { request_id, result });
        }
    }
}
