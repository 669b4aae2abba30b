use std::sync::Arc;

use crate::auth::{CredentialVerifier, SessionStore, StaticCredentials};
use crate::config::{AppConfig, SchoolInfo};
use crate::report::{DocumentRenderer, PdfReportRenderer};
use crate::roster::{self, Roster, SharedRoster};
use crate::web::views::Views;

/// Collaborators shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub school: Arc<SchoolInfo>,
    pub roster: SharedRoster,
    pub sessions: Arc<SessionStore>,
    pub credentials: Arc<dyn CredentialVerifier>,
    pub renderer: Arc<dyn DocumentRenderer>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(
        school: SchoolInfo,
        roster: SharedRoster,
        credentials: Arc<dyn CredentialVerifier>,
        renderer: Arc<dyn DocumentRenderer>,
    ) -> Self {
        Self {
            school: Arc::new(school),
            roster,
            sessions: Arc::new(SessionStore::new()),
            credentials,
            renderer,
            views: Arc::new(Views::new()),
        }
    }

    /// Empty roster, configured credentials and the PDF renderer.
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(
            SchoolInfo::from(cfg),
            roster::shared(Roster::new()),
            Arc::new(StaticCredentials::new(
                cfg.credentials.username.clone(),
                cfg.credentials.password.clone(),
            )),
            Arc::new(PdfReportRenderer::new()),
        )
    }
}
