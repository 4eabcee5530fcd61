use super::Error;

/// Error when the schema data source fails.
///
/// This wraps connection and introspection failures reported by a
/// [`DataSource`](crate::DataSource) implementation. A data source failure
/// ends the load: no statements are generated from a partially read schema.
#[derive(Debug)]
pub(super) struct DataSourceError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DataSourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "data source failed: {}", self.inner)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a data source failure.
    ///
    /// Drivers convert their library errors (rusqlite, I/O, ...) through this.
    pub fn data_source(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::DataSource(DataSourceError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a data source failure.
    pub fn is_data_source(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::DataSource(_)))
    }
}
