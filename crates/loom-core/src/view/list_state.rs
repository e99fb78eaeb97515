/// State of a screen showing a remote list.
///
/// `is_loading` covers only the initial fetch and `is_mutating` only an
/// in-flight create. `error_message` is the single visible error slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub is_mutating: bool,
}

impl<T> ListViewState<T> {
    /// A freshly mounted screen: nothing fetched yet, loading indicator on.
    pub fn mounting() -> Self {
        Self {
            items: Vec::new(),
            is_loading: true,
            error_message: None,
            is_mutating: false,
        }
    }

    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ListViewState<T> {
    fn default() -> Self {
        Self::mounting()
    }
}
