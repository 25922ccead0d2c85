use async_trait::async_trait;
use graphql_client::GraphQLQuery;
use graphql_client::Response as GraphQLResponse;
use reqwest::{Client, StatusCode};

use crate::errors::DeploifaiError;

/// Executes a named GraphQL query and returns its decoded response data.
///
/// Implementations own their transport. Callers only see typed data or a
/// [`DeploifaiError`].
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute<Q>(&self, variables: Q::Variables) -> Result<Q::ResponseData, DeploifaiError>
    where
        Q: GraphQLQuery,
        Q::Variables: Send,
        Q::ResponseData: Send;
}

/// HTTP executor bound to a single GraphQL endpoint.
pub struct GQLClient {
    client: Client,
    endpoint: String,
}

impl GQLClient {
    /// Uses a default `reqwest` client: no timeouts, no TLS overrides.
    /// Nothing is sent and the endpoint is not parsed until the first query.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QueryExecutor for GQLClient {
    async fn execute<Q>(&self, variables: Q::Variables) -> Result<Q::ResponseData, DeploifaiError>
    where
        Q: GraphQLQuery,
        Q::Variables: Send,
        Q::ResponseData: Send,
    {
        post_graphql::<Q, _>(&self.client, self.endpoint.as_str(), variables).await
    }
}

pub async fn post_graphql<Q: GraphQLQuery, U: reqwest::IntoUrl>(
    client: &Client,
    url: U,
    variables: Q::Variables,
) -> Result<Q::ResponseData, DeploifaiError> {
    let body = Q::build_query(variables);
    tracing::debug!(operation = body.operation_name, "sending graphql query");

    let response = client.post(url).json(&body).send().await?;
    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        return Err(DeploifaiError::Ratelimited);
    }
    let response = response.error_for_status()?;

    let res: GraphQLResponse<Q::ResponseData> = response.json().await?;
    if let Some(errors) = res.errors.filter(|errors| !errors.is_empty()) {
        Err(DeploifaiError::GraphQLError(errors[0].message.clone()))
    } else if let Some(data) = res.data {
        Ok(data)
    } else {
        Err(DeploifaiError::MissingResponseData)
    }
}
