use physics::BodyHandle;

/// What the agent bumped into, resolved from a raw physics contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Food(BodyHandle),
    OtherAgent(BodyHandle),
    Dependent,
    /// Anything the arena does not track. Ignored.
    Unrecognized,
}
