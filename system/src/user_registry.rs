use crate::traits::Channel;
use crate::types::{Color, UserId, UserSummary};

pub struct Participant<C> {
    pub id: UserId,
    pub name: String,
    pub color: Color,
    pub channel: C,
}

impl<C> Participant<C> {
    pub fn new(id: UserId, name: String, color: Color, channel: C) -> Self {
        Self {
            id,
            name,
            color,
            channel,
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            color: self.color,
        }
    }
}

/// Connected participants, kept in join order.
pub struct UserRegistry<C> {
    participants: Vec<Participant<C>>,
}

impl<C: Channel> UserRegistry<C> {
    pub fn new() -> Self {
        Self {
            participants: Vec::new(),
        }
    }

    /// Panics if a participant with the same id is already registered;
    /// callers must hand out unique ids.
    pub fn add(&mut self, participant: Participant<C>) {
        assert!(
            !self.contains(&participant.id),
            "participant {} is already registered",
            participant.id
        );
        self.participants.push(participant);
    }

    pub fn remove(&mut self, id: &str) -> Option<Participant<C>> {
        self.participants
            .iter()
            .position(|p| p.id == id)
            .map(|pos| self.participants.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&Participant<C>> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Participant<C>> {
        self.participants.iter_mut().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn list_all(&self) -> Vec<UserSummary> {
        self.participants.iter().map(Participant::summary).collect()
    }

    /// Visits every participant whose channel is still open.
    pub fn for_each_live_channel<F>(&mut self, mut f: F)
    where
        F: FnMut(&UserId, &mut C),
    {
        for participant in self.participants.iter_mut() {
            if participant.channel.is_open() {
                f(&participant.id, &mut participant.channel);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl<C: Channel> Default for UserRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChannelClosed;
    use crate::traits::Frame;

    struct StubChannel {
        open: bool,
    }

    impl Channel for StubChannel {
        fn is_open(&self) -> bool {
            self.open
        }

        fn send(&mut self, _frame: Frame) -> Result<(), ChannelClosed> {
            Ok(())
        }
    }

    fn participant(id: &str, open: bool) -> Participant<StubChannel> {
        Participant::new(
            id.to_string(),
            format!("User{}", id),
            Color::rgb(1, 2, 3),
            StubChannel { open },
        )
    }

    #[test]
    fn it_lists_users_in_join_order() {
        let mut registry = UserRegistry::new();
        registry.add(participant("b", true));
        registry.add(participant("a", true));
        let ids: Vec<_> = registry.list_all().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn it_removes_idempotently() {
        let mut registry = UserRegistry::new();
        registry.add(participant("a", true));
        assert!(registry.remove("a").is_some());
        assert!(registry.remove("a").is_none());
        assert!(registry.get("a").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn it_refuses_duplicate_ids() {
        let mut registry = UserRegistry::new();
        registry.add(participant("a", true));
        registry.add(participant("a", true));
    }

    #[test]
    fn it_skips_closed_channels() {
        let mut registry = UserRegistry::new();
        registry.add(participant("a", true));
        registry.add(participant("b", false));
        registry.add(participant("c", true));
        let mut visited = Vec::new();
        registry.for_each_live_channel(|id, _| visited.push(id.clone()));
        assert_eq!(visited, vec!["a", "c"]);
    }
}
