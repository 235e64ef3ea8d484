//! Configuration model definitions

mod authz;

pub use authz::AuthzConfig;
