use serde::{Deserialize, Serialize};

use super::identifiers::MemberId;
use super::record::StoredRecord;
use super::types::MemberName;

/// A person who can be added to orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: MemberName,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

const fn active_by_default() -> bool {
    true
}

/// Fields of a member before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub name: MemberName,
    pub active: bool,
}

impl NewMember {
    /// Members always start out active
    pub fn new(name: MemberName) -> Self {
        Self { name, active: true }
    }
}

impl StoredRecord for Member {
    type Id = MemberId;
    type Draft = NewMember;

    const COLLECTION: &'static str = "members";

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name,
            active: draft.active,
        }
    }

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
