use serde_repr::{Deserialize_repr, Serialize_repr};
use strum_macros::EnumIter;

/// Overall ranking band, lowest first.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
#[repr(u8)]
pub enum Tier {
    Unranked = 0,
    Wooden = 1,
    Strong = 2,
    Elite = 3
}
