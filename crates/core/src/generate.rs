//! Coordination for externally generated themes.
//!
//! Generation itself is an external collaborator: some long-running call
//! eventually produces a partial light/dark token pair. The coordinator
//! guarantees the session's single-writer rule across those async
//! boundaries: starting a new generation supersedes any in-flight one,
//! and a superseded result that arrives late is discarded, never applied.

use themeloom_tokens::ThemeStyles;

use crate::cancel::{CancellationSource, CancellationToken};
use crate::session::EditorSession;

/// What happened to a finished generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The result landed in the session.
    Applied,
    /// The result arrived after being superseded or cancelled and was
    /// silently dropped. Expected, not an error.
    Superseded,
}

/// Identifies one generation attempt. The external call carries this and
/// presents it back with its result.
#[derive(Debug)]
pub struct GenerationTicket {
    id: u64,
    token: CancellationToken,
}

impl GenerationTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The supersede handle; long-running collaborators may poll it to
    /// stop early.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

struct ActiveGeneration {
    id: u64,
    source: CancellationSource,
}

/// Single-writer gate for generation results.
#[derive(Default)]
pub struct GenerationCoordinator {
    active: Option<ActiveGeneration>,
    next_id: u64,
}

impl GenerationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a generation attempt, aborting any in-flight one.
    pub fn begin(&mut self) -> GenerationTicket {
        if let Some(prev) = self.active.take() {
            tracing::debug!(superseded = prev.id, "superseding in-flight generation");
            prev.source.cancel();
        }
        let id = self.next_id;
        self.next_id += 1;
        let source = CancellationSource::new();
        let token = source.token();
        self.active = Some(ActiveGeneration { id, source });
        GenerationTicket { id, token }
    }

    /// Abort the in-flight generation, if any. The session stays at its
    /// pre-generation value.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::debug!(generation = active.id, "generation cancelled");
            active.source.cancel();
        }
    }

    pub fn is_generating(&self) -> bool {
        self.active.is_some()
    }

    /// Deliver a finished result. Only the most recently issued ticket can
    /// commit; anything else is discarded.
    pub fn finish(
        &mut self,
        ticket: &GenerationTicket,
        session: &mut EditorSession,
        result: &ThemeStyles,
    ) -> GenerationOutcome {
        if ticket.token.is_cancelled() {
            tracing::debug!(generation = ticket.id, "discarding superseded generation result");
            return GenerationOutcome::Superseded;
        }
        if self.active.as_ref().is_some_and(|a| a.id == ticket.id) {
            self.active = None;
        }
        session.apply_generated(result);
        GenerationOutcome::Applied
    }
}
