/// How long a notification stays visible before it is hidden again.
pub const NOTIFICATION_HIDE_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn panel_class(&self) -> &'static str {
        match self {
            Severity::Error => "p-4 rounded-xl w-full max-w-md mb-6 bg-red-50 border border-red-200",
            Severity::Success => {
                "p-4 rounded-xl w-full max-w-md mb-6 bg-green-50 border border-green-200"
            }
            Severity::Info => "p-4 rounded-xl w-full max-w-md mb-6 bg-blue-50 border border-blue-200",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            Severity::Error => "font-medium text-center text-red-800",
            Severity::Success => "font-medium text-center text-green-800",
            Severity::Info => "font-medium text-center text-blue-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_styles() {
        assert!(Severity::Error.panel_class().contains("bg-red-50"));
        assert!(Severity::Success.panel_class().contains("bg-green-50"));
        assert!(Severity::Info.panel_class().contains("bg-blue-50"));

        assert!(Severity::Error.text_class().contains("text-red-800"));
        assert!(Severity::Success.text_class().contains("text-green-800"));
        assert!(Severity::Info.text_class().contains("text-blue-800"));
    }
}
