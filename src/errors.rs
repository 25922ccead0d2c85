use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeploifaiError {
    #[error("Client is not created")]
    ClientNotInitialized,

    #[error("Failed to get data from GraphQL response")]
    MissingResponseData,

    #[error("{0}")]
    GraphQLError(String),

    #[error("Failed to fetch: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Rate limited by the Deploifai API. Please try again later.")]
    Ratelimited,
}
