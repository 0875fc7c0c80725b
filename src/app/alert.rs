/// What sort of message box an [`Alert`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Information,
    Warning,
    Error,
    Confirmation,
}

/// A user-facing message produced by the controller. Front ends decide how
/// to render it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub header: Option<String>,
    pub content: String,
}

impl Alert {
    pub fn new(kind: AlertKind, title: impl Into<String>, content: impl Into<String>) -> Self {
        Alert {
            kind,
            title: title.into(),
            header: None,
            content: content.into(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}
