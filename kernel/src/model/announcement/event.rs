use derive_new::new;

use super::Audience;

#[derive(Debug, new)]
pub struct CreateAnnouncement {
    pub title: String,
    pub body: String,
    pub author: String,
    pub audience: Audience,
}
