//! The chat request pipeline: fetch both contexts, select one, generate.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    api_types::{ChatAnswer, Collaborator},
    error::ChatError,
    select::select_context,
    traits::{KnowledgeContextFetcher, ResponseGenerator, TicketContextFetcher},
};

/// Handles one chat query end to end.
///
/// Holds its collaborators behind trait objects; construct once, wrap in
/// `Arc`, and share across request tasks. No state is shared between calls.
///
/// # Example
/// ```no_run
/// # use std::sync::Arc;
/// # use contextor::{ChatPipeline, mock::{MockLlm, MockServiceNow, MockVectorDb}};
/// # #[tokio::main] async fn main() {
/// let pipeline = ChatPipeline::new(
///     Arc::new(MockServiceNow::default()),
///     Arc::new(MockVectorDb::default()),
///     Arc::new(MockLlm::default()),
/// );
/// let answer = pipeline.handle("There is an incident with the printer").await.unwrap();
/// assert_eq!(answer.context_source.to_string(), "ServiceNow");
/// # }
/// ```
#[derive(Clone)]
pub struct ChatPipeline {
    tickets: Arc<dyn TicketContextFetcher>,
    knowledge: Arc<dyn KnowledgeContextFetcher>,
    generator: Arc<dyn ResponseGenerator>,
}

impl ChatPipeline {
    pub fn new(
        tickets: Arc<dyn TicketContextFetcher>,
        knowledge: Arc<dyn KnowledgeContextFetcher>,
        generator: Arc<dyn ResponseGenerator>,
    ) -> Self {
        Self {
            tickets,
            knowledge,
            generator,
        }
    }

    /// Runs the pipeline for `query`.
    ///
    /// Steps are awaited strictly in order: ticket lookup, knowledge lookup
    /// (always performed, even when the ticket context will win), selection,
    /// generation.
    ///
    /// # Errors
    /// Returns [`ChatError::Collaborator`] naming the first collaborator that
    /// failed. Later steps are not attempted. Logging the failure is left to
    /// the caller.
    #[instrument(name = "chat_pipeline", skip_all)]
    pub async fn handle(&self, query: &str) -> Result<ChatAnswer, ChatError> {
        info!(%query, "received chat request");

        let ticket = self
            .tickets
            .fetch(query)
            .await
            .map_err(ChatError::at(Collaborator::TicketSystem))?;
        debug!(found = ticket.is_some(), "ticket lookup finished");

        let knowledge = self
            .knowledge
            .fetch(query)
            .await
            .map_err(ChatError::at(Collaborator::KnowledgeBase))?;
        debug!(chars = knowledge.len(), "knowledge lookup finished");

        let selected = select_context(ticket, knowledge);
        info!(context_source = %selected.source, "context selected");

        let response = self
            .generator
            .generate(query, &selected.text)
            .await
            .map_err(ChatError::at(Collaborator::LanguageModel))?;

        Ok(ChatAnswer {
            response,
            context_source: selected.source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::{api_types::ContextSource, error::CollaboratorError};

    type CallLog = Arc<Mutex<Vec<&'static str>>>;

    struct FakeTickets {
        log: CallLog,
        reply: Option<&'static str>,
        fail: bool,
    }

    #[async_trait]
    impl TicketContextFetcher for FakeTickets {
        async fn fetch(&self, _query: &str) -> Result<Option<String>, CollaboratorError> {
            self.log.lock().unwrap().push("tickets");
            if self.fail {
                return Err(CollaboratorError::Unavailable("ticket api down".into()));
            }
            Ok(self.reply.map(str::to_string))
        }
    }

    struct FakeKnowledge {
        log: CallLog,
        fail: bool,
    }

    #[async_trait]
    impl KnowledgeContextFetcher for FakeKnowledge {
        async fn fetch(&self, _query: &str) -> Result<String, CollaboratorError> {
            self.log.lock().unwrap().push("knowledge");
            if self.fail {
                return Err(CollaboratorError::Malformed("bad vector payload".into()));
            }
            Ok("kb: Doc ID: 789".into())
        }
    }

    struct EchoGenerator {
        log: CallLog,
        fail: bool,
    }

    #[async_trait]
    impl ResponseGenerator for EchoGenerator {
        async fn generate(&self, query: &str, context: &str) -> Result<String, CollaboratorError> {
            self.log.lock().unwrap().push("generate");
            if self.fail {
                return Err(CollaboratorError::Unavailable("model offline".into()));
            }
            Ok(format!("{query} | {context}"))
        }
    }

    #[derive(Default)]
    struct Setup {
        ticket_reply: Option<&'static str>,
        fail_tickets: bool,
        fail_knowledge: bool,
        fail_generate: bool,
    }

    fn pipeline(setup: Setup) -> (ChatPipeline, CallLog) {
        let log = CallLog::default();
        let p = ChatPipeline::new(
            Arc::new(FakeTickets {
                log: log.clone(),
                reply: setup.ticket_reply,
                fail: setup.fail_tickets,
            }),
            Arc::new(FakeKnowledge {
                log: log.clone(),
                fail: setup.fail_knowledge,
            }),
            Arc::new(EchoGenerator {
                log: log.clone(),
                fail: setup.fail_generate,
            }),
        );
        (p, log)
    }

    fn calls(log: &CallLog) -> Vec<&'static str> {
        log.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn ticket_context_grounds_answer() {
        let (p, log) = pipeline(Setup {
            ticket_reply: Some("INC12345"),
            ..Setup::default()
        });

        let answer = p.handle("printer incident").await.unwrap();

        assert_eq!(answer.context_source, ContextSource::ServiceNow);
        assert_eq!(answer.response, "printer incident | INC12345");
        // Knowledge lookup still runs even though its result is discarded.
        assert_eq!(calls(&log), ["tickets", "knowledge", "generate"]);
    }

    #[tokio::test]
    async fn knowledge_context_used_without_ticket() {
        let (p, log) = pipeline(Setup::default());

        let answer = p.handle("refund policy").await.unwrap();

        assert_eq!(answer.context_source, ContextSource::VectorDb);
        assert_eq!(answer.response, "refund policy | kb: Doc ID: 789");
        assert_eq!(calls(&log), ["tickets", "knowledge", "generate"]);
    }

    #[tokio::test]
    async fn ticket_failure_stops_pipeline() {
        let (p, log) = pipeline(Setup {
            fail_tickets: true,
            ..Setup::default()
        });

        let err = p.handle("anything").await.unwrap_err();

        assert_eq!(err.collaborator(), Collaborator::TicketSystem);
        assert_eq!(calls(&log), ["tickets"]);
    }

    #[tokio::test]
    async fn knowledge_failure_is_attributed() {
        let (p, log) = pipeline(Setup {
            ticket_reply: Some("INC12345"),
            fail_knowledge: true,
            ..Setup::default()
        });

        let err = p.handle("printer incident").await.unwrap_err();

        assert_eq!(err.collaborator(), Collaborator::KnowledgeBase);
        assert_eq!(calls(&log), ["tickets", "knowledge"]);
    }

    #[tokio::test]
    async fn generator_failure_is_attributed() {
        let (p, _log) = pipeline(Setup {
            fail_generate: true,
            ..Setup::default()
        });

        let err = p.handle("refund policy").await.unwrap_err();

        assert_eq!(err.collaborator(), Collaborator::LanguageModel);
        assert!(err.to_string().starts_with("language_model failed"));
    }

    #[tokio::test]
    async fn repeated_queries_are_stable() {
        let (p, _log) = pipeline(Setup::default());

        let first = p.handle("refund policy").await.unwrap();
        let second = p.handle("refund policy").await.unwrap();

        assert_eq!(first, second);
    }
}
