/// State of data a page loads once on mount
///
/// One enum instead of separate loading/error/data signals, so the page can
/// only be in one state at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T> {
    /// Nothing requested yet
    Pending,

    /// Available
    Loaded(T),

    /// Failed with error message
    Error(String),
}

impl<T> DataState<T> {
    /// Returns the data if loaded, None otherwise
    pub fn data(&self) -> Option<&T> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if in error state, None otherwise
    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> Default for DataState<T> {
    fn default() -> Self {
        DataState::Pending
    }
}

/// Errors keep their full context chain (`{:#}`), so anyhow causes stay visible
impl<T, E: std::fmt::Display> From<Result<T, E>> for DataState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => DataState::Loaded(data),
            Err(err) => DataState::Error(format!("{:#}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_from_ok() {
        let state: DataState<u64> = Ok::<u64, String>(42).into();
        assert_eq!(state.data(), Some(&42));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_from_anyhow_keeps_context() {
        let result: anyhow::Result<u64> = "x".parse::<u64>().context("Invalid comments page data");
        let state: DataState<u64> = result.into();

        let msg = state.error().unwrap();
        assert!(msg.starts_with("Invalid comments page data: "));
        assert!(state.data().is_none());
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(DataState::<u64>::default(), DataState::Pending);
    }
}
