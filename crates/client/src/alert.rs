#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// A blocking message for the user, carrying the raw text from the server or transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Success, title: "Success".into(), message: message.into() }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Error, title: title.into(), message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == AlertKind::Error
    }
}
