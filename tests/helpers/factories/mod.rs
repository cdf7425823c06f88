pub mod social_graph_factory;
pub mod status_update_factory;

pub use social_graph_factory::SocialGraphFactory;
pub use status_update_factory::StatusUpdateFactory;
