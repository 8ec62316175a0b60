//! Category, skill, and role fixture records plus their user join records.

use crate::store::Record;
use crate::types::{CategoryId, RecordId, RoleId, SkillId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}

impl Record for Category {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub title: String,
    pub description: Option<String>,
}

impl Record for Skill {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub ability: String,
    /// Grouping label ("technology", "creative", "support")
    pub kind: String,
}

impl Record for Role {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCategory {
    pub id: RecordId,
    pub user_id: UserId,
    pub category_id: CategoryId,
}

impl Record for UserCategory {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRole {
    pub id: RecordId,
    pub user_id: UserId,
    pub role_id: RoleId,
}

impl Record for UserRole {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSkill {
    pub id: RecordId,
    pub user_id: UserId,
    pub skill_id: SkillId,
}

impl Record for UserSkill {
    fn id(&self) -> RecordId {
        self.id
    }
}
