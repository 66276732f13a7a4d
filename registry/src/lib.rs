use std::sync::Arc;

use adapter::clock::SystemClock;
use adapter::preference::FilePreferenceStore;
use adapter::repository::announcement::InMemoryAnnouncementRepository;
use adapter::repository::auth::StoredRoleAuthProvider;
use adapter::repository::ticket::InMemoryTicketRepository;
use kernel::clock::Clock;
use kernel::repository::announcement::AnnouncementRepository;
use kernel::repository::auth::AuthProvider;
use kernel::repository::preference::PreferenceStore;
use kernel::repository::ticket::TicketRepository;
use shared::config::AppConfig;
use shared::error::AppResult;

/// Built once at startup; every handler receives the same stores through it.
#[derive(Clone)]
pub struct AppRegistry {
    ticket_repository: Arc<dyn TicketRepository>,
    announcement_repository: Arc<dyn AnnouncementRepository>,
    auth_provider: Arc<dyn AuthProvider>,
}

impl AppRegistry {
    pub fn new(app_config: &AppConfig) -> AppResult<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let store: Arc<dyn PreferenceStore> =
            Arc::new(FilePreferenceStore::new(&app_config.session.store_path));
        Self::with_parts(clock, store)
    }

    pub fn with_parts(clock: Arc<dyn Clock>, store: Arc<dyn PreferenceStore>) -> AppResult<Self> {
        let ticket_repository = Arc::new(InMemoryTicketRepository::seeded(clock.clone())?);
        let announcement_repository = Arc::new(InMemoryAnnouncementRepository::new(clock));
        let auth_provider = Arc::new(StoredRoleAuthProvider::new(store));
        Ok(Self {
            ticket_repository,
            announcement_repository,
            auth_provider,
        })
    }

    pub fn ticket_repository(&self) -> Arc<dyn TicketRepository> {
        self.ticket_repository.clone()
    }

    pub fn announcement_repository(&self) -> Arc<dyn AnnouncementRepository> {
        self.announcement_repository.clone()
    }

    pub fn auth_provider(&self) -> Arc<dyn AuthProvider> {
        self.auth_provider.clone()
    }
}
