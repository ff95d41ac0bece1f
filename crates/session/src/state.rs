use crate::assembler::{AssemblerConfig, DetailAssembler, DisplayEntity};
use crate::error::Result;
use crate::labels::Locale;
use dex_catalog::{
    step as step_page, CatalogPage, FetchWindow, PageDirection, PaginationController,
};
use dex_lineage::{
    EvolutionChain, EvolutionChainBuilder, NavigationState, NextAction, StepDirection,
};
use dex_protocol::{CatalogListing, ChainLink, SpeciesRecord};
use serde::Serialize;
use std::fmt;

/// Identity of one issued fetch. Completions carrying an older id are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Fetch the owner must perform on behalf of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchPage {
        request: RequestId,
        page_index: u32,
        window: FetchWindow,
    },
    FetchDetail {
        request: RequestId,
        entity_id: u32,
    },
}

impl Command {
    pub fn request(&self) -> RequestId {
        match self {
            Command::FetchPage { request, .. } | Command::FetchDetail { request, .. } => *request,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Jump to a page (initial load, retry after an error).
    PageRequested(u32),
    /// Previous/next page control.
    PageChanged(PageDirection),
    EntitySelected(u32),
    SelectionCleared,
    StepRequested(StepDirection),
    PageFetched {
        request: RequestId,
        listing: CatalogListing,
    },
    DetailFetched {
        request: RequestId,
        record: SpeciesRecord,
        /// Root of the lineage graph; `None` for species without a chain
        lineage: Option<ChainLink>,
    },
    FetchFailed {
        request: RequestId,
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListState {
    #[default]
    Idle,
    Loading {
        page_index: u32,
        request: RequestId,
    },
    Ready {
        page: CatalogPage,
    },
    Error {
        page_index: u32,
        message: String,
        cause: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub entity_id: u32,
    pub display: DisplayEntity,
    pub navigation: NavigationState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailState {
    #[default]
    Closed,
    Loading {
        entity_id: u32,
        request: RequestId,
    },
    Ready {
        view: Box<DetailView>,
    },
    Error {
        entity_id: u32,
        message: String,
        cause: String,
    },
}

/// Everything one browsing session knows. Replaced wholesale on every transition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub list: ListState,
    pub detail: DetailState,

    /// Bumped whenever the page changes; presentation scrolls to the top on change.
    pub viewport_epoch: u64,

    #[serde(skip)]
    last_request: u64,
}

impl SessionState {
    pub fn page(&self) -> Option<&CatalogPage> {
        match &self.list {
            ListState::Ready { page } => Some(page),
            _ => None,
        }
    }

    pub fn detail_view(&self) -> Option<&DetailView> {
        match &self.detail {
            DetailState::Ready { view } => Some(view),
            _ => None,
        }
    }

    /// Requests whose completion would currently be applied.
    pub fn pending_requests(&self) -> Vec<RequestId> {
        let mut pending = Vec::new();
        if let ListState::Loading { request, .. } = self.list {
            pending.push(request);
        }
        if let DetailState::Loading { request, .. } = self.detail {
            pending.push(request);
        }
        pending
    }

    pub fn is_loading(&self) -> bool {
        !self.pending_requests().is_empty()
    }

    fn issue_request(&mut self) -> RequestId {
        self.last_request += 1;
        RequestId(self.last_request)
    }
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub command: Option<Command>,
}

impl Transition {
    fn unchanged(state: &SessionState) -> Self {
        Self {
            state: state.clone(),
            command: None,
        }
    }
}

/// The session transition function plus the pure components it drives.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pagination: PaginationController,
    builder: EvolutionChainBuilder,
    assembler: DetailAssembler,
}

impl Session {
    pub fn new(pagination: PaginationController, assembler_config: AssemblerConfig) -> Self {
        Self {
            pagination,
            builder: EvolutionChainBuilder::new(),
            assembler: DetailAssembler::new(assembler_config),
        }
    }

    pub fn with_builder(mut self, builder: EvolutionChainBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    pub fn locale(&self) -> Locale {
        self.assembler.locale()
    }

    /// Apply `event` to `state`.
    ///
    /// Only caller misuse (a page index below 1) is returned as an error; fetch and
    /// data failures become `Error` states.
    pub fn reduce(&self, state: &SessionState, event: Event) -> Result<Transition> {
        match event {
            Event::PageRequested(page_index) => self.request_page(state, page_index),
            Event::PageChanged(direction) => {
                let Some(page) = state.page() else {
                    log::debug!("Ignoring page change while the list is not ready");
                    return Ok(Transition::unchanged(state));
                };
                let target = step_page(page.page_index, page.total_pages, direction);
                if target == page.page_index {
                    return Ok(Transition::unchanged(state));
                }
                self.request_page(state, target)
            }
            Event::EntitySelected(entity_id) => Ok(self.request_detail(state, entity_id)),
            Event::SelectionCleared => {
                let mut next = state.clone();
                next.detail = DetailState::Closed;
                Ok(Transition {
                    state: next,
                    command: None,
                })
            }
            Event::StepRequested(direction) => {
                let Some(view) = state.detail_view() else {
                    return Ok(Transition::unchanged(state));
                };
                match view.navigation.step(direction) {
                    NextAction::Blocked => Ok(Transition::unchanged(state)),
                    NextAction::NavigateTo(entity_id) => Ok(self.request_detail(state, entity_id)),
                }
            }
            Event::PageFetched { request, listing } => {
                Ok(self.apply_page(state, request, &listing))
            }
            Event::DetailFetched {
                request,
                record,
                lineage,
            } => Ok(self.apply_detail(state, request, &record, lineage.as_ref())),
            Event::FetchFailed { request, message } => {
                Ok(self.apply_failure(state, request, message))
            }
        }
    }

    fn request_page(&self, state: &SessionState, page_index: u32) -> Result<Transition> {
        let window = self.pagination.request_window(page_index)?;
        let mut next = state.clone();
        let request = next.issue_request();
        next.list = ListState::Loading {
            page_index,
            request,
        };
        next.detail = DetailState::Closed;
        next.viewport_epoch += 1;
        log::debug!("Requesting page {page_index} ({request}, offset={})", window.offset);

        Ok(Transition {
            state: next,
            command: Some(Command::FetchPage {
                request,
                page_index,
                window,
            }),
        })
    }

    fn request_detail(&self, state: &SessionState, entity_id: u32) -> Transition {
        let mut next = state.clone();
        let request = next.issue_request();
        next.detail = DetailState::Loading { entity_id, request };
        log::debug!("Requesting species #{entity_id} ({request})");

        Transition {
            state: next,
            command: Some(Command::FetchDetail { request, entity_id }),
        }
    }

    fn apply_page(
        &self,
        state: &SessionState,
        request: RequestId,
        listing: &CatalogListing,
    ) -> Transition {
        let page_index = match state.list {
            ListState::Loading {
                page_index,
                request: pending,
            } if pending == request => page_index,
            _ => {
                log::debug!("Discarding stale page response {request}");
                return Transition::unchanged(state);
            }
        };

        let mut next = state.clone();
        next.list = match CatalogPage::from_listing(listing, page_index, &self.pagination) {
            Ok(page) => ListState::Ready { page },
            Err(err) => {
                log::warn!("Rejected page {page_index}: {err}");
                ListState::Error {
                    page_index,
                    message: self.locale().list_fetch_failed().to_string(),
                    cause: err.to_string(),
                }
            }
        };
        Transition {
            state: next,
            command: None,
        }
    }

    fn apply_detail(
        &self,
        state: &SessionState,
        request: RequestId,
        record: &SpeciesRecord,
        lineage: Option<&ChainLink>,
    ) -> Transition {
        let entity_id = match state.detail {
            DetailState::Loading {
                entity_id,
                request: pending,
            } if pending == request => entity_id,
            _ => {
                log::debug!("Discarding stale detail response {request} (species #{})", record.id);
                return Transition::unchanged(state);
            }
        };

        let chain = match lineage.map(|root| self.builder.build(root)).transpose() {
            Ok(chain) => chain.unwrap_or_else(EvolutionChain::default),
            Err(err) => {
                log::warn!("Lineage of species #{entity_id} rejected: {err}");
                let mut next = state.clone();
                next.detail = DetailState::Error {
                    entity_id,
                    message: self.locale().detail_fetch_failed().to_string(),
                    cause: err.to_string(),
                };
                return Transition {
                    state: next,
                    command: None,
                };
            }
        };

        let navigation = NavigationState::new(chain, entity_id);
        let display = self.assembler.assemble(record, &navigation);
        let mut next = state.clone();
        next.detail = DetailState::Ready {
            view: Box::new(DetailView {
                entity_id,
                display,
                navigation,
            }),
        };
        Transition {
            state: next,
            command: None,
        }
    }

    fn apply_failure(&self, state: &SessionState, request: RequestId, cause: String) -> Transition {
        let mut next = state.clone();
        match state.list {
            ListState::Loading {
                page_index,
                request: pending,
            } if pending == request => {
                log::warn!("Page {page_index} fetch failed: {cause}");
                next.list = ListState::Error {
                    page_index,
                    message: self.locale().list_fetch_failed().to_string(),
                    cause,
                };
                return Transition {
                    state: next,
                    command: None,
                };
            }
            _ => {}
        }
        match state.detail {
            DetailState::Loading {
                entity_id,
                request: pending,
            } if pending == request => {
                log::warn!("Species #{entity_id} fetch failed: {cause}");
                next.detail = DetailState::Error {
                    entity_id,
                    message: self.locale().detail_fetch_failed().to_string(),
                    cause,
                };
                Transition {
                    state: next,
                    command: None,
                }
            }
            _ => {
                log::debug!("Discarding stale failure {request}: {cause}");
                Transition::unchanged(state)
            }
        }
    }
}
