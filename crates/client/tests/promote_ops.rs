//! Role-assignment operation tests against an in-memory backend.

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use async_trait::async_trait;
    use fireadmin_client::{assign_admin_role, AdminBackend, PromoteError, ADMIN_ROLE};
    use pretty_assertions::assert_eq;

    /// In-memory stand-in for the identity service and the realtime
    /// database. Records every call so tests can assert on call counts and
    /// on the exact node paths written.
    #[derive(Default)]
    struct MemoryBackend {
        accounts: HashMap<String, String>,
        state: Mutex<BackendState>,
        fail_lookup: Option<String>,
        fail_write: Option<String>,
    }

    #[derive(Default)]
    struct BackendState {
        lookups: usize,
        /// (node path, written value) per write attempt
        writes: Vec<(String, Vec<String>)>,
        /// stored role lists, keyed by uid
        roles: HashMap<String, Vec<String>>,
    }

    impl MemoryBackend {
        fn with_account(email: &str, uid: &str) -> Self {
            let mut backend = Self::default();
            backend.accounts.insert(email.to_string(), uid.to_string());
            backend
        }

        fn preset_roles(self, uid: &str, roles: &[&str]) -> Self {
            self.state.lock().unwrap().roles.insert(
                uid.to_string(),
                roles.iter().map(|r| r.to_string()).collect(),
            );
            self
        }
    }

    #[async_trait]
    impl AdminBackend for MemoryBackend {
        async fn resolve_user_id(&self, email: &str) -> anyhow::Result<String> {
            self.state.lock().unwrap().lookups += 1;

            if let Some(msg) = &self.fail_lookup {
                anyhow::bail!("{}", msg);
            }

            self.accounts
                .get(email)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no user record found for {}", email))
        }

        async fn set_roles(&self, uid: &str, roles: &[String]) -> anyhow::Result<()> {
            let mut state = self.state.lock().unwrap();
            state
                .writes
                .push((format!("users/{}/roles", uid), roles.to_vec()));

            if let Some(msg) = &self.fail_write {
                anyhow::bail!("{}", msg);
            }

            state.roles.insert(uid.to_string(), roles.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn grants_admin_and_reports_uid() -> anyhow::Result<()> {
        let backend = MemoryBackend::with_account("user@example.com", "abc123");

        let uid = assign_admin_role(&backend, "user@example.com").await?;
        assert_eq!(uid, "abc123");

        let state = backend.state.lock().unwrap();
        assert_eq!(state.lookups, 1);
        assert_eq!(
            state.writes,
            vec![(
                "users/abc123/roles".to_string(),
                vec![ADMIN_ROLE.to_string()]
            )]
        );
        assert_eq!(state.roles["abc123"], vec![ADMIN_ROLE.to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn failed_lookup_performs_no_write() {
        let backend = MemoryBackend {
            fail_lookup: Some("user not found".to_string()),
            ..Default::default()
        };

        let err = assign_admin_role(&backend, "ghost@example.com")
            .await
            .expect_err("lookup should fail");

        assert!(matches!(err, PromoteError::Lookup(_)));
        assert_eq!(err.to_string(), "user not found");

        let state = backend.state.lock().unwrap();
        assert_eq!(state.lookups, 1);
        assert!(state.writes.is_empty());
    }

    #[tokio::test]
    async fn unknown_account_surfaces_distinct_message() {
        let backend = MemoryBackend::with_account("user@example.com", "abc123");

        let err = assign_admin_role(&backend, "ghost@example.com")
            .await
            .expect_err("unknown account should fail the lookup");

        assert!(matches!(err, PromoteError::Lookup(_)));
        assert_eq!(err.to_string(), "no user record found for ghost@example.com");

        let state = backend.state.lock().unwrap();
        assert!(state.writes.is_empty());
    }

    #[tokio::test]
    async fn failed_write_is_terminal() {
        let mut backend = MemoryBackend::with_account("user@example.com", "abc123");
        backend.fail_write = Some("permission denied".to_string());

        let err = assign_admin_role(&backend, "user@example.com")
            .await
            .expect_err("write should fail");

        assert!(matches!(err, PromoteError::Write(_)));
        assert_eq!(err.to_string(), "permission denied");

        let state = backend.state.lock().unwrap();
        assert_eq!(state.lookups, 1);
        assert_eq!(state.writes.len(), 1);
        assert!(state.roles.is_empty());
    }

    #[tokio::test]
    async fn overwrites_existing_roles() -> anyhow::Result<()> {
        let backend = MemoryBackend::with_account("editor@example.com", "u1")
            .preset_roles("u1", &["editor", "admin"]);

        assign_admin_role(&backend, "editor@example.com").await?;

        let state = backend.state.lock().unwrap();
        assert_eq!(state.roles["u1"], vec![ADMIN_ROLE.to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn rerun_converges_on_same_state() -> anyhow::Result<()> {
        let backend = MemoryBackend::with_account("user@example.com", "abc123");

        for _ in 0..2 {
            assign_admin_role(&backend, "user@example.com").await?;

            let state = backend.state.lock().unwrap();
            assert_eq!(state.roles["abc123"], vec![ADMIN_ROLE.to_string()]);
        }

        let state = backend.state.lock().unwrap();
        assert_eq!(state.writes.len(), 2);
        Ok(())
    }
}
