/// Errors raised during translation.
///
/// Translation is pure and does not touch the database, so most failures are
/// authorization failures or collaborator errors surfaced through
/// [`Error::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The request can never be authorized, regardless of the data in the
    /// database. Raised before any query text is produced.
    #[error("Forbidden")]
    Forbidden,
    #[error("{0}")]
    Custom(String),
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}
