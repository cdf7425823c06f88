use crate::engine::social::InMemorySocialGraph;

pub use super::factories::{SocialGraphFactory, StatusUpdateFactory};

pub struct Factory;

impl Factory {
    pub fn status_update() -> StatusUpdateFactory {
        StatusUpdateFactory::new()
    }

    pub fn social_graph() -> SocialGraphFactory {
        SocialGraphFactory::new()
    }

    pub fn sample_graph() -> InMemorySocialGraph {
        SocialGraphFactory::sample()
    }
}
