/// Type-state for data keyed to the connected wallet
///
/// Replaces the trio of "is connected", "is loading" and "maybe data" flags with a
/// single enum, so the page renders from one `match` and no ambiguous
/// combination (loading with stale data, data without a wallet) can exist.
///
/// # Examples
///
/// ```
/// let mut state = use_signal(|| DataState::Disconnected);
///
/// // Wallet connected, fetch issued:
/// state.set(DataState::Loading);
///
/// // Fetch resolved:
/// state.set(DataState::from(Some(profile)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T> {
    /// No wallet connected, nothing to fetch
    Disconnected,

    /// A fetch for the connected wallet is in flight
    Loading,

    /// The fetch completed without data (or failed)
    Empty,

    /// Data is available
    Loaded(T),
}

impl<T> DataState<T> {
    pub fn is_disconnected(&self) -> bool {
        matches!(self, DataState::Disconnected)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DataState::Empty)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, DataState::Loaded(_))
    }

    /// Returns the data if loaded, None otherwise
    pub fn data(&self) -> Option<&T> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> Default for DataState<T> {
    fn default() -> Self {
        DataState::Disconnected
    }
}

/// A finished fetch: `Some` becomes Loaded, `None` becomes Empty
impl<T> From<Option<T>> for DataState<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(data) => DataState::Loaded(data),
            None => DataState::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        let state: DataState<i32> = DataState::default();
        assert!(state.is_disconnected());

        let state: DataState<i32> = DataState::Loading;
        assert!(state.is_loading());
        assert_eq!(state.data(), None);

        let state: DataState<i32> = DataState::Empty;
        assert!(state.is_empty());

        let state = DataState::Loaded(42);
        assert!(state.is_loaded());
        assert_eq!(state.data(), Some(&42));
    }

    #[test]
    fn test_from_option() {
        let state: DataState<i32> = Some(7).into();
        assert_eq!(state, DataState::Loaded(7));

        let state: DataState<i32> = None.into();
        assert_eq!(state, DataState::Empty);
    }
}
