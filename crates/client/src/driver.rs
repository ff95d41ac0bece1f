use crate::error::{ClientError, Result};
use crate::source::CatalogSource;
use dex_protocol::{parse_reference_id, ChainLink, SpeciesRecord};
use dex_session::{Command, Event, RequestId, Session, SessionState};
use std::sync::Arc;
use tokio::task::{self, JoinSet};

/// Runs a [`Session`] against a [`CatalogSource`].
///
/// Events are applied synchronously; the fetches they request run as tokio tasks in a
/// [`JoinSet`]. Completions are applied in arrival order, and the reducer drops the
/// ones that were superseded in the meantime. A fetch task that panics or is aborted
/// completes as [`Event::FetchFailed`] for its request.
pub struct SessionDriver<S: ?Sized> {
    source: Arc<S>,
    session: Session,
    state: SessionState,
    tasks: JoinSet<Event>,
    requests: Vec<(task::Id, RequestId)>,
}

impl<S: CatalogSource + ?Sized + 'static> SessionDriver<S> {
    pub fn new(source: Arc<S>, session: Session) -> Self {
        Self {
            source,
            session,
            state: SessionState::default(),
            tasks: JoinSet::new(),
            requests: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Number of spawned fetches whose completion has not been applied yet,
    /// superseded ones included.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Apply `event` and start the fetch it asks for, if any.
    pub fn dispatch(&mut self, event: Event) -> dex_session::Result<()> {
        let transition = self.session.reduce(&self.state, event)?;
        self.state = transition.state;
        if let Some(command) = transition.command {
            self.spawn(command);
        }
        Ok(())
    }

    fn spawn(&mut self, command: Command) {
        let source = Arc::clone(&self.source);
        let request = command.request();
        let handle = self
            .tasks
            .spawn(async move { execute(source.as_ref(), command).await });
        self.requests.push((handle.id(), request));
    }

    /// Wait for one fetch to finish and apply it. Returns `false` when nothing is in flight.
    pub async fn next_completion(&mut self) -> dex_session::Result<bool> {
        let Some(joined) = self.tasks.join_next().await else {
            return Ok(false);
        };
        let event = match joined {
            Ok(event) => {
                if let Some(request) = completion_request(&event) {
                    self.requests.retain(|(_, pending)| *pending != request);
                }
                event
            }
            Err(err) => {
                let Some(index) = self.requests.iter().position(|(id, _)| *id == err.id()) else {
                    log::warn!("Untracked fetch task ended abnormally: {err}");
                    return Ok(true);
                };
                let (_, request) = self.requests.swap_remove(index);
                log::warn!("Fetch task for {request} ended abnormally: {err}");
                Event::FetchFailed {
                    request,
                    message: err.to_string(),
                }
            }
        };
        self.dispatch(event)?;
        Ok(true)
    }

    /// Apply completions until no fetch is in flight.
    pub async fn settle(&mut self) -> dex_session::Result<()> {
        while self.next_completion().await? {}
        Ok(())
    }
}

fn completion_request(event: &Event) -> Option<RequestId> {
    match event {
        Event::PageFetched { request, .. }
        | Event::DetailFetched { request, .. }
        | Event::FetchFailed { request, .. } => Some(*request),
        _ => None,
    }
}

/// Perform one command against `source`, turning the outcome into a completion event.
pub async fn execute<S: CatalogSource + ?Sized>(source: &S, command: Command) -> Event {
    match command {
        Command::FetchPage {
            request, window, ..
        } => match source.fetch_listing(window).await {
            Ok(listing) => Event::PageFetched { request, listing },
            Err(err) => Event::FetchFailed {
                request,
                message: err.to_string(),
            },
        },
        Command::FetchDetail { request, entity_id } => match load_detail(source, entity_id).await {
            Ok((record, lineage)) => Event::DetailFetched {
                request,
                record,
                lineage,
            },
            Err(err) => Event::FetchFailed {
                request,
                message: err.to_string(),
            },
        },
    }
}

/// Species record followed by the lineage graph it links to.
pub async fn load_detail<S: CatalogSource + ?Sized>(
    source: &S,
    entity_id: u32,
) -> Result<(SpeciesRecord, Option<ChainLink>)> {
    let record = source.fetch_species(entity_id).await?;
    let lineage = match &record.evolution_chain {
        Some(link) => {
            let chain_id = parse_reference_id(&link.url)
                .ok_or(ClientError::MalformedChainReference(record.id))?;
            Some(source.fetch_evolution_chain(chain_id).await?.chain)
        }
        None => None,
    };
    Ok((record, lineage))
}
