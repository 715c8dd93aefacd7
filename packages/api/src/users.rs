//! Read access to the `users` table.

use store::rows::{UserRow, USERS};
use store::{Role, User};

use crate::backend::{decode_all, TableBackend};
use crate::error::Result;
use crate::query::Query;

#[derive(Clone, Debug)]
pub struct Users<B> {
    backend: B,
}

impl<B: TableBackend> Users<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn get_all(&self) -> Result<Vec<User>> {
        let rows = self
            .backend
            .select(USERS, &Query::new().order("name", true))
            .await
            .inspect_err(|e| tracing::error!("Failed to load users: {}", e))?;
        decode_all::<UserRow, _>(rows)
    }

    /// Users with the given role, sorted by name.
    pub async fn get_by_role(&self, role: Role) -> Result<Vec<User>> {
        let query = Query::new().eq("role", role.as_str()).order("name", true);
        let rows = self
            .backend
            .select(USERS, &query)
            .await
            .inspect_err(|e| tracing::error!("Failed to load {} users: {}", role.as_str(), e))?;
        decode_all::<UserRow, _>(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_by_role() {
        let backend = MemoryBackend::new();
        for (name, role) in [("Zé", "provider"), ("Bruno", "provider"), ("Clara", "client")] {
            backend
                .insert(USERS, json!({ "name": name, "email": format!("{name}@example.com"), "role": role }))
                .await
                .unwrap();
        }
        let users = Users::new(backend);

        let providers = users.get_by_role(Role::Provider).await.unwrap();
        let names: Vec<_> = providers.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Bruno", "Zé"]);
        assert_eq!(users.get_by_role(Role::Client).await.unwrap().len(), 1);
        assert!(users.get_by_role(Role::Agency).await.unwrap().is_empty());
        assert_eq!(users.get_all().await.unwrap().len(), 3);
    }
}
