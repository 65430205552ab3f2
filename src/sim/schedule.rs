//! Deferred transitions checked inside the tick loop
//!
//! There are no background timers. Each action has at most one pending entry;
//! scheduling it again replaces the old due time.

use serde::{Deserialize, Serialize};

/// Actions that fire at a later simulated time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduledAction {
    /// Return the player mood to normal after a level-up celebration
    RevertMood,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub due_ms: u64,
    pub action: ScheduledAction,
}

/// Pending events, ordered by due time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    events: Vec<ScheduledEvent>,
}

impl Schedule {
    /// Schedule `action` at `due_ms`, superseding any pending entry for it.
    /// Returns true if an entry was replaced.
    pub fn schedule(&mut self, action: ScheduledAction, due_ms: u64) -> bool {
        let superseded = self.cancel(action);
        let at = self.events.partition_point(|e| e.due_ms <= due_ms);
        self.events.insert(at, ScheduledEvent { due_ms, action });
        superseded
    }

    /// Remove the pending entry for `action`, if any
    pub fn cancel(&mut self, action: ScheduledAction) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.action != action);
        self.events.len() != before
    }

    /// Due time of the pending entry for `action`
    pub fn pending(&self, action: ScheduledAction) -> Option<u64> {
        self.events
            .iter()
            .find(|e| e.action == action)
            .map(|e| e.due_ms)
    }

    /// Pop every event due at or before `now_ms`, earliest first
    pub fn take_due(&mut self, now_ms: u64) -> Vec<ScheduledAction> {
        let split = self.events.partition_point(|e| e.due_ms <= now_ms);
        self.events.drain(..split).map(|e| e.action).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_when_due() {
        let mut schedule = Schedule::default();
        schedule.schedule(ScheduledAction::RevertMood, 2000);

        assert!(schedule.take_due(1950).is_empty());
        assert_eq!(schedule.take_due(2000), vec![ScheduledAction::RevertMood]);
        assert!(schedule.take_due(2050).is_empty());
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_reschedule_supersedes() {
        let mut schedule = Schedule::default();
        assert!(!schedule.schedule(ScheduledAction::RevertMood, 2000));
        assert!(schedule.schedule(ScheduledAction::RevertMood, 3500));

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.pending(ScheduledAction::RevertMood), Some(3500));
        assert!(schedule.take_due(2000).is_empty());
        assert_eq!(schedule.take_due(3500), vec![ScheduledAction::RevertMood]);
    }

    #[test]
    fn test_cancel() {
        let mut schedule = Schedule::default();
        schedule.schedule(ScheduledAction::RevertMood, 100);
        assert!(schedule.cancel(ScheduledAction::RevertMood));
        assert!(!schedule.cancel(ScheduledAction::RevertMood));
        assert_eq!(schedule.pending(ScheduledAction::RevertMood), None);
    }
}
