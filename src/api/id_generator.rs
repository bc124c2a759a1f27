use uuid::Uuid;

/// Produces the unique identifiers assigned to recipes on creation.
/// Kept behind a trait so tests can swap in a deterministic generator.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

pub struct UuidGenerator {}

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
