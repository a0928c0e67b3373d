use serde::{Deserialize, Serialize};

/// The top three places of a leaderboard. Slots are empty when fewer than three entries exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Podium<T> {
    pub first: Option<T>,
    pub second: Option<T>,
    pub third: Option<T>
}

impl<T: Clone> Podium<T> {
    pub fn from_leaderboard(leaderboard: &[T]) -> Podium<T> {
        Podium {
            first: leaderboard.first().cloned(),
            second: leaderboard.get(1).cloned(),
            third: leaderboard.get(2).cloned()
        }
    }
}

impl<T> Podium<T> {
    /// Slots in placement order, empty slots included.
    pub fn slots(&self) -> [Option<&T>; 3] {
        [self.first.as_ref(), self.second.as_ref(), self.third.as_ref()]
    }

    pub fn len(&self) -> usize {
        self.slots().iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }
}
