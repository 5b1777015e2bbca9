use super::Resource;
use crate::utils::pagination::{Paginated, Pagination};
use async_trait::async_trait;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A write rejected by a storage constraint that maps onto a single field.
    Constraint {
        field: &'static str,
        code: &'static str,
        message: &'static str,
    },
    UnexpectedError,
}

impl Error {
    pub fn into_validation_errors(self) -> Option<ValidationErrors> {
        match self {
            Self::Constraint {
                field,
                code,
                message,
            } => Some(crate::utils::validation::field_error(field, code, message)),
            Self::UnexpectedError => None,
        }
    }
}

#[async_trait]
pub trait Repository<R: Resource>: Send + Sync {
    async fn find_many(&self, pagination: Pagination) -> Result<Paginated<R>>;

    async fn find_by_id(&self, id: String) -> Result<Option<R>>;

    async fn create(&self, payload: R::Payload) -> Result<R>;

    /// Returns `None` when no record has the given id.
    async fn update_by_id(&self, id: String, payload: R::Payload) -> Result<Option<R>>;

    /// Returns the deleted record, or `None` when no record has the given id.
    async fn delete_by_id(&self, id: String) -> Result<Option<R>>;

    async fn exists(&self, id: String) -> Result<bool> {
        self.find_by_id(id).await.map(|record| record.is_some())
    }
}

/// Maps a failed Postgres write onto a repository error, keeping unique and
/// foreign-key violations distinguishable.
pub fn from_sqlx_error(
    err: sqlx::Error,
    on_unique: Option<Error>,
    on_foreign_key: Option<Error>,
) -> Error {
    if let Some(database_error) = err.as_database_error() {
        if database_error.is_unique_violation() {
            if let Some(error) = on_unique {
                return error;
            }
        }
        if database_error.is_foreign_key_violation() {
            if let Some(error) = on_foreign_key {
                return error;
            }
        }
    }

    Error::UnexpectedError
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::{error::Error as StdError, fmt};

    #[derive(Debug)]
    struct PgError(ErrorKind);

    impl fmt::Display for PgError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    impl StdError for PgError {}

    impl DatabaseError for PgError {
        fn message(&self) -> &str {
            "constraint violated"
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.0 {
                ErrorKind::UniqueViolation => ErrorKind::UniqueViolation,
                ErrorKind::ForeignKeyViolation => ErrorKind::ForeignKeyViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn database_error(kind: ErrorKind) -> sqlx::Error {
        sqlx::Error::Database(Box::new(PgError(kind)))
    }

    fn taken() -> Option<Error> {
        Some(Error::Constraint {
            field: "username",
            code: "unique",
            message: "taken",
        })
    }

    fn dangling() -> Option<Error> {
        Some(Error::Constraint {
            field: "user",
            code: "does_not_exist",
            message: "missing",
        })
    }

    fn field_of(error: Error) -> Option<&'static str> {
        match error {
            Error::Constraint { field, .. } => Some(field),
            Error::UnexpectedError => None,
        }
    }

    #[test]
    fn constraint_violations_map_to_their_fields() {
        let unique = from_sqlx_error(database_error(ErrorKind::UniqueViolation), taken(), dangling());
        let foreign = from_sqlx_error(database_error(ErrorKind::ForeignKeyViolation), taken(), dangling());

        assert_eq!(field_of(unique), Some("username"));
        assert_eq!(field_of(foreign), Some("user"));
    }

    #[test]
    fn other_faults_are_unexpected() {
        assert_eq!(field_of(from_sqlx_error(sqlx::Error::PoolTimedOut, taken(), dangling())), None);
        assert_eq!(
            field_of(from_sqlx_error(database_error(ErrorKind::CheckViolation), taken(), dangling())),
            None
        );
        assert_eq!(
            field_of(from_sqlx_error(database_error(ErrorKind::UniqueViolation), None, dangling())),
            None
        );
    }

    #[test]
    fn constraints_fold_into_validation_errors() {
        let errors = taken().and_then(Error::into_validation_errors).unwrap();

        assert_eq!(errors.field_errors()["username"][0].code, "unique");
        assert!(Error::UnexpectedError.into_validation_errors().is_none());
    }
}
