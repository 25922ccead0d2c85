// Rebuild when the GraphQL queries or schema change
fn main() {
    println!("cargo:rerun-if-changed=src/gql/queries/strings");
    println!("cargo:rerun-if-changed=src/gql/schema.graphql");
}
