pub mod activity_stream;
pub mod graph;
pub mod status_update;

pub use activity_stream::FriendsActivityStream;
pub use graph::{InMemorySocialGraph, Person, SocialGraph, StatusStream};
pub use status_update::StatusUpdate;
