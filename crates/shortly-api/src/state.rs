use std::sync::Arc;

use shortly_core::services::{AuthService, LinkService};
use shortly_infrastructure::{PgLinkRepository, PgSessionRepository, PgUserRepository};
use shortly_shared::AppConfig;

pub type SharedAuthService = Arc<AuthService<PgUserRepository, PgSessionRepository>>;
pub type SharedLinkService = Arc<LinkService<PgLinkRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub auth: SharedAuthService,
    pub links: SharedLinkService,
    pub config: AppConfig,
}
