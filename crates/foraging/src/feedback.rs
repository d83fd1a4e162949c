//! Short-lived markers left at the dependent on each delivery. Purely
//! cosmetic: nothing in the reward or observation path reads them.

use physics::Vec3;

/// Simulated seconds a marker stays alive.
pub const FEEDBACK_LIFETIME: f32 = 4.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    DeliveredFood,
    Heart,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub position: Vec3,
    pub expires_at: f32,
}

#[derive(Clone, Debug, Default)]
pub struct FeedbackLog {
    items: Vec<Feedback>,
}

impl FeedbackLog {
    /// Record the markers for a delivery at `dependent`.
    pub fn record_delivery(&mut self, dependent: Vec3, now: f32) {
        let expires_at = now + FEEDBACK_LIFETIME;
        self.items.push(Feedback {
            kind: FeedbackKind::DeliveredFood,
            position: dependent,
            expires_at,
        });
        self.items.push(Feedback {
            kind: FeedbackKind::Heart,
            position: dependent + Vec3::UP,
            expires_at,
        });
    }

    /// Drop every marker whose lifetime has run out.
    pub fn expire(&mut self, now: f32) {
        self.items.retain(|f| f.expires_at > now);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn active(&self) -> &[Feedback] {
        &self.items
    }
}
