use super::{EntityId, Position};

/// A star waiting in the level.
///
/// `collected` flips from false to true exactly once; the score tracker
/// consults it so repeated overlap events never count twice.
#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub id: EntityId,
    pub position: Position,
    collected: bool,
}

impl Collectible {
    pub fn new(id: EntityId, position: Position) -> Self {
        Self {
            id,
            position,
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Marks the collectible as taken. Returns `true` only on the first call.
    pub fn mark_collected(&mut self) -> bool {
        !std::mem::replace(&mut self.collected, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_collected_flips_once() {
        let mut star = Collectible::new(EntityId(3), Position::new(152.0, 0.0));
        assert!(!star.is_collected());
        assert!(star.mark_collected());
        assert!(!star.mark_collected());
        assert!(star.is_collected());
    }
}
