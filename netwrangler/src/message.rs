use netwrangler_common::{FetchError, OperationsSnapshot, SliceRecord};

/// Messages for the NetWrangler application.
#[derive(Debug, Clone)]
pub enum Message {
    /// An operations center fetch cycle finished.
    OperationsFetched(Result<OperationsSnapshot, FetchError>),

    /// A slice list fetch cycle finished.
    SlicesFetched(Result<Vec<SliceRecord>, FetchError>),

    /// User switched pages.
    ShowPage(Page),
}

/// A top-level dashboard page. Only the shown page polls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Operations,
    Slicing,
}

impl Page {
    /// All pages, in navigation order.
    pub const ALL: [Page; 2] = [Page::Operations, Page::Slicing];

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Operations => "Operations Center",
            Page::Slicing => "Network Slicing",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
