use super::graph::{SocialGraph, StatusStream};
use super::status_update::StatusUpdate;
use crate::engine::errors::FeedError;
use crate::engine::merge::{KWayMergeIter, SortOrder, TimestampMerge, paginate};
use std::collections::HashSet;
use std::iter::FusedIterator;
use tracing::debug;

/// Time-ordered feed of every status update posted by a person's friends.
///
/// Each friend's updates form one sorted source; the feed is a lazy k-way
/// merge over them, so nothing is materialized up front. The person's own
/// updates are not part of the feed.
pub struct FriendsActivityStream<'g> {
    person: String,
    merge: TimestampMerge<StatusStream<'g>>,
}

impl<'g> FriendsActivityStream<'g> {
    /// Oldest update first.
    pub fn new<G>(graph: &'g G, person: &str) -> Result<Self, FeedError>
    where
        G: SocialGraph + ?Sized,
    {
        Self::with_order(graph, person, SortOrder::Ascending)
    }

    pub fn with_order<G>(graph: &'g G, person: &str, order: SortOrder) -> Result<Self, FeedError>
    where
        G: SocialGraph + ?Sized,
    {
        let friends = graph.friends(person)?;

        let mut seen = HashSet::new();
        let mut sources: Vec<StatusStream<'g>> = Vec::with_capacity(friends.len());
        for friend in friends {
            if friend == person || !seen.insert(friend.clone()) {
                continue;
            }
            sources.push(graph.status_updates(&friend, order)?);
        }

        let merge: TimestampMerge<StatusStream<'g>> = KWayMergeIter::by_timestamp(sources, order);

        debug!(
            target: "socnet_feed::feed",
            person = person,
            friends = merge.registered_sources(),
            active_friends = merge.active_sources(),
            "Opened friends activity stream"
        );

        Ok(Self {
            person: person.to_string(),
            merge,
        })
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn has_next(&self) -> bool {
        self.merge.has_next()
    }

    pub fn next_update(&mut self) -> Result<StatusUpdate, FeedError> {
        Ok(self.merge.next_item()?)
    }

    pub fn remove(&mut self) -> Result<(), FeedError> {
        Ok(self.merge.remove()?)
    }

    pub fn peek(&self) -> Option<&StatusUpdate> {
        self.merge.peek()
    }

    /// Friends that still have unread updates.
    pub fn active_friends(&self) -> usize {
        self.merge.active_sources()
    }

    pub fn order(&self) -> SortOrder {
        self.merge.order()
    }

    /// Consumes the next page of the feed.
    pub fn page(&mut self, offset: usize, limit: usize) -> Vec<StatusUpdate> {
        paginate(self.by_ref(), Some(offset), Some(limit))
    }
}

impl Iterator for FriendsActivityStream<'_> {
    type Item = StatusUpdate;

    fn next(&mut self) -> Option<StatusUpdate> {
        self.merge.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.merge.size_hint()
    }
}

impl FusedIterator for FriendsActivityStream<'_> {}
