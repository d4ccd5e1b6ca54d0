use serde::{Deserialize, Serialize};

/// A named capability checked before post mutations.
///
/// The string forms (`add_post`, `change_post`, `delete_post`) are what the
/// session claims and the users table carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    AddPost,
    ChangePost,
    DeletePost,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::AddPost => "add_post",
            Permission::ChangePost => "change_post",
            Permission::DeletePost => "delete_post",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "add_post" => Some(Permission::AddPost),
            "change_post" => Some(Permission::ChangePost),
            "delete_post" => Some(Permission::DeletePost),
            _ => None,
        }
    }

    /// Parse a comma-separated permission list, skipping unknown names.
    pub fn parse_list(s: &str) -> Vec<Self> {
        s.split(',')
            .filter_map(|name| Permission::parse(name.trim()))
            .collect()
    }

    /// Serialize a permission list to the comma-separated column format.
    pub fn join_list(permissions: &[Self]) -> String {
        permissions
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
