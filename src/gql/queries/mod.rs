use graphql_client::GraphQLQuery;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "src/gql/schema.graphql",
    query_path = "src/gql/queries/strings/GetUser.graphql",
    response_derives = "Debug, Serialize, Clone, PartialEq"
)]
pub struct GetUser;
pub type DeploifaiUser = get_user::GetUserUser;
