use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use kernel::{
    clock::Clock,
    model::{
        announcement::{event::CreateAnnouncement, Announcement, Audience},
        id::AnnouncementId,
    },
    repository::announcement::AnnouncementRepository,
};
use shared::error::AppResult;
use tokio::sync::RwLock;

pub struct InMemoryAnnouncementRepository {
    announcements: RwLock<Vec<Announcement>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryAnnouncementRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            announcements: RwLock::new(Vec::new()),
            clock,
        }
    }
}

#[async_trait]
impl AnnouncementRepository for InMemoryAnnouncementRepository {
    async fn create(&self, event: CreateAnnouncement) -> AppResult<AnnouncementId> {
        let announcement_id = AnnouncementId::new();
        let CreateAnnouncement {
            title,
            body,
            author,
            audience,
        } = event;
        self.announcements.write().await.insert(
            0,
            Announcement {
                announcement_id,
                title,
                body,
                author,
                audience,
                created_at: self.clock.now().with_timezone(&Utc),
            },
        );
        tracing::info!(%announcement_id, audience = %audience, "announcement published");
        Ok(announcement_id)
    }

    async fn find_visible(&self, include_owner_content: bool) -> AppResult<Vec<Announcement>> {
        Ok(self
            .announcements
            .read()
            .await
            .iter()
            .filter(|a| include_owner_content || a.audience == Audience::All)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;

    #[tokio::test]
    async fn owner_announcements_are_hidden_from_residents() -> anyhow::Result<()> {
        let repo = InMemoryAnnouncementRepository::new(Arc::new(SystemClock));
        repo.create(CreateAnnouncement::new(
            "Wasser abgestellt".into(),
            "Am Montag von 8 bis 12 Uhr.".into(),
            "Verwaltung".into(),
            Audience::All,
        ))
        .await?;
        let owners_only = repo
            .create(CreateAnnouncement::new(
                "Einladung Eigentümerversammlung".into(),
                "Die Versammlung findet am 12. Mai statt.".into(),
                "Beirat".into(),
                Audience::Owners,
            ))
            .await?;

        let everyone = repo.find_visible(true).await?;
        assert_eq!(everyone.len(), 2);
        assert_eq!(everyone[0].announcement_id, owners_only);

        let public = repo.find_visible(false).await?;
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].title, "Wasser abgestellt");
        Ok(())
    }
}
