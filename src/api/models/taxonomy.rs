//! API request/response models for categories, skills, roles, and the
//! per-user join records.

use crate::store::models::taxonomy::{Category, Role, Skill, UserCategory, UserRole, UserSkill};
use crate::types::{CategoryId, RecordId, RoleId, SkillId, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkillResponse {
    pub id: SkillId,
    pub title: String,
    pub description: Option<String>,
}

impl From<Skill> for SkillResponse {
    fn from(s: Skill) -> Self {
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleResponse {
    pub id: RoleId,
    pub name: String,
    pub ability: String,
    pub kind: String,
}

impl From<Role> for RoleResponse {
    fn from(r: Role) -> Self {
        Self {
            id: r.id,
            name: r.name,
            ability: r.ability,
            kind: r.kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserCategoryResponse {
    pub id: RecordId,
    pub user_id: UserId,
    pub category_id: CategoryId,
}

impl From<UserCategory> for UserCategoryResponse {
    fn from(uc: UserCategory) -> Self {
        Self {
            id: uc.id,
            user_id: uc.user_id,
            category_id: uc.category_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserCategoryCreate {
    pub user_id: UserId,
    pub category_id: CategoryId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserRoleResponse {
    pub id: RecordId,
    pub user_id: UserId,
    pub role_id: RoleId,
}

impl From<UserRole> for UserRoleResponse {
    fn from(ur: UserRole) -> Self {
        Self {
            id: ur.id,
            user_id: ur.user_id,
            role_id: ur.role_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserRoleCreate {
    pub user_id: UserId,
    pub role_id: RoleId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserSkillResponse {
    pub id: RecordId,
    pub user_id: UserId,
    pub skill_id: SkillId,
}

impl From<UserSkill> for UserSkillResponse {
    fn from(us: UserSkill) -> Self {
        Self {
            id: us.id,
            user_id: us.user_id,
            skill_id: us.skill_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserSkillCreate {
    pub user_id: UserId,
    pub skill_id: SkillId,
}
