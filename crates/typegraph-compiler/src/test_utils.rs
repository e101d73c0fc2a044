//! Test utilities and fixtures.

use crate::document::Document;
use crate::document::load::parse_document;
use crate::mappers::MapperTable;
use crate::schema::SchemaTypeGraph;
use crate::schema::load::parse_schema;

/// Schema shared by the selection and pipeline tests.
pub const FIXTURE_SCHEMA: &str = r#"
type Query {
  me: User!
  user(id: ID!): User
  users: [User!]!
  node(id: ID!): Node
  search(term: String!): [SearchResult!]!
}

type Mutation {
  rename(id: ID!, name: String!): User
}

interface Node {
  id: ID!
}

interface Authored {
  author: User!
}

type User implements Node {
  id: ID!
  name: String!
  email: String
  friends: [User]
  posts: [Post!]!
  role: Role!
}

type Post implements Node & Authored {
  id: ID!
  title: String!
  author: User!
  tags: [[String!]]
}

union SearchResult = User | Post

enum Role {
  ADMIN
  MEMBER
}

input UserFilter {
  role: Role
  limit: Int = 10
}
"#;

/// Parse SDL, panicking with the parser message on failure.
pub fn schema(sdl: &str) -> SchemaTypeGraph {
    match parse_schema(sdl) {
        Ok(schema) => schema,
        Err(err) => panic!("invalid test schema: {err}"),
    }
}

pub fn fixture_schema() -> SchemaTypeGraph {
    schema(FIXTURE_SCHEMA)
}

/// Parse an executable document, panicking on failure.
pub fn document(source: &str) -> Document {
    match parse_document(source) {
        Ok(document) => document,
        Err(err) => panic!("invalid test document: {err}"),
    }
}

/// Mapper table from `(type, mapper)` pairs.
pub fn mappers(pairs: &[(&str, &str)]) -> MapperTable {
    match MapperTable::from_raw(pairs.iter().copied(), None, None) {
        Ok(table) => table,
        Err(err) => panic!("invalid test mappers: {err}"),
    }
}
