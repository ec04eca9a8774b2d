//! Error conversion glue between the domain value objects and the client.
//!
//! The domain layer must not depend on the client error type, so the
//! conversion lives here.

use crate::domain::types::TypeConstraintError;
use crate::errors::ClientError;

impl From<TypeConstraintError> for ClientError {
    fn from(val: TypeConstraintError) -> Self {
        ClientError::InvalidArgument(val.to_string())
    }
}
