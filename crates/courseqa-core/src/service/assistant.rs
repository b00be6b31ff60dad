//! CourseAssistant - query entry point

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::error::{QueryError, QueryResult};
use crate::config::Settings;
use crate::generator::ResponseGenerator;
use crate::logging::Logger;
use crate::providers::create_provider;
use crate::session::SessionManager;
use crate::store::{CourseStore, StoreResult};
use crate::tools::{CourseOutlineTool, CourseSearchTool, ToolRegistry};
use crate::types::Source;

/// Prefix put in front of every user question sent to the model
pub const ANSWER_PREFIX: &str = "Answer this question about course materials: ";

/// Final answer plus the material it drew on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnswer {
    pub answer: String,
    pub sources: Vec<Source>,
}

/// Catalog summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseAnalytics {
    pub total_courses: usize,
    pub course_titles: Vec<String>,
}

/// Answers questions about the courses in a store
pub struct CourseAssistant {
    store: Arc<dyn CourseStore>,
    registry: ToolRegistry,
    generator: ResponseGenerator,
    sessions: SessionManager,
    /// Held for generate + drain so concurrent queries never mix sources
    query_lock: Mutex<()>,
    logger: Arc<dyn Logger>,
}

impl CourseAssistant {
    /// Wire an assistant with the search and outline tools registered
    pub fn new(
        store: Arc<dyn CourseStore>,
        generator: ResponseGenerator,
        sessions: SessionManager,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let registry = ToolRegistry::new(Arc::clone(&logger));
        registry.register(Arc::new(CourseSearchTool::new(Arc::clone(&store))));
        registry.register(Arc::new(CourseOutlineTool::new(Arc::clone(&store))));

        Self {
            store,
            registry,
            generator,
            sessions,
            query_lock: Mutex::new(()),
            logger,
        }
    }

    /// Build an assistant from settings, talking to the configured provider
    pub fn from_settings(
        settings: &Settings,
        store: Arc<dyn CourseStore>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let provider = create_provider(
            &settings.provider,
            settings.request_timeout_secs.map(Duration::from_secs),
            Arc::clone(&logger),
        );
        let generator = ResponseGenerator::new(provider, settings.model_config(), Arc::clone(&logger))
            .with_temperature(settings.temperature)
            .with_max_tokens(settings.max_tokens);

        Self::new(store, generator, SessionManager::new(settings.max_history), logger)
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Answer `query`, using and extending the session's history if one is given
    ///
    /// Session ids must come from `sessions().create_session()`.
    pub async fn query(&self, query: &str, session_id: Option<&str>) -> QueryResult<QueryAnswer> {
        if let Some(id) = session_id {
            if !self.sessions.has_session(id) {
                return Err(QueryError::UnknownSession(id.to_string()));
            }
        }

        let prompt = format!("{}{}", ANSWER_PREFIX, query);
        let history = session_id.and_then(|id| self.sessions.get_conversation_history(id));
        let tools = self.registry.get_schemas();

        let (answer, sources) = {
            let _guard = self.query_lock.lock().await;
            let answer = self
                .generator
                .generate_response(&prompt, history.as_deref(), &tools, Some(&self.registry))
                .await;
            // drain even on failure so the next query starts clean
            let sources = self.registry.collect_sources();
            self.registry.reset_sources();
            (answer?, sources)
        };

        crate::log_info!(
            self.logger,
            "[CourseAssistant] answered with {} source(s)",
            sources.len()
        );

        if let Some(id) = session_id {
            self.sessions.add_exchange(id, query, &answer);
        }

        Ok(QueryAnswer { answer, sources })
    }

    /// Number of courses and their titles
    pub async fn course_analytics(&self) -> StoreResult<CourseAnalytics> {
        let course_titles = self.store.course_titles().await?;
        Ok(CourseAnalytics {
            total_courses: course_titles.len(),
            course_titles,
        })
    }
}

impl std::fmt::Debug for CourseAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourseAssistant")
            .field("generator", &self.generator)
            .field("registry", &self.registry)
            .field("sessions", &self.sessions)
            .finish()
    }
}
