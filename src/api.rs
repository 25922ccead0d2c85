use crate::{
    client::{GQLClient, QueryExecutor},
    config::Configs,
    errors::DeploifaiError,
    gql::queries::{get_user, DeploifaiUser, GetUser},
};

/// Entry point for typed calls against the Deploifai API.
///
/// Built once and never mutated, so a single handle can be shared between
/// tasks. Every operation refuses to run unless the handle is ready.
pub struct ApiClient<E = GQLClient> {
    executor: E,
    ready: bool,
}

impl ApiClient<GQLClient> {
    /// Points an HTTP executor at `<backend_url>/graphql`. Never fails and
    /// makes no network call; a bad URL surfaces from the first query.
    pub fn new(configs: &Configs) -> Self {
        let executor = GQLClient::new(configs.get_graphql_endpoint());
        tracing::debug!(endpoint = executor.endpoint(), "created api client");
        Self::with_executor(executor)
    }
}

impl<E: QueryExecutor> ApiClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self {
            executor,
            ready: true,
        }
    }

    #[cfg(test)]
    pub fn uninitialized(executor: E) -> Self {
        Self {
            executor,
            ready: false,
        }
    }

    /// Fetches the user the backend associates with this client.
    pub async fn get_user(&self) -> Result<DeploifaiUser, DeploifaiError> {
        if !self.ready {
            return Err(DeploifaiError::ClientNotInitialized);
        }

        let vars = get_user::Variables {};
        let user = self.executor.execute::<GetUser>(vars).await?.user;
        tracing::debug!(user = %user.id, "fetched current user");

        Ok(user)
    }
}
