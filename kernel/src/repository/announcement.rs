use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    announcement::{event::CreateAnnouncement, Announcement},
    id::AnnouncementId,
};

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn create(&self, event: CreateAnnouncement) -> AppResult<AnnouncementId>;
    // include_owner_content が false なら所有者向けのお知らせを除外する
    async fn find_visible(&self, include_owner_content: bool) -> AppResult<Vec<Announcement>>;
}
