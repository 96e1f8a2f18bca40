//! Resource handlers built on the client traits.
//!
//! Each handler maps the create, read, update and delete of one resource
//! onto client calls and turns failures into a [`Diagnostic`]. Handlers
//! borrow any [`GraphqlOperations`](crate::clients::GraphqlOperations)
//! implementation, so they run unchanged against
//! [`ApiClient`](crate::ApiClient) or a test double.
//!
//! - [`RoleResource`]: Roles, with permission reconciliation (see [`permissions`])
//! - [`SchemaResource`]: Custom log schemas
//! - [`UserResource`]: Console users, always assigned a role by name

mod diagnostic;
pub mod permissions;
mod role;
mod schema;
mod user;

pub use diagnostic::Diagnostic;
pub use role::{RoleModel, RoleResource};
pub use schema::{SchemaModel, SchemaResource};
pub use user::{UserModel, UserResource};
