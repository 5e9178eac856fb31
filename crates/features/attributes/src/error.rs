use std::borrow::Cow;

/// A specialized [`Result`] for attribute-layer operations.
pub type Result<T> = std::result::Result<T, AttributeError>;

/// Error types specific to the attribute layer.
///
/// Configuration problems surface here once, at registration time. Invalid
/// attribute *input* is never an error: it degrades to a `None` canonical
/// value and stays inspectable through the raw slot.
#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    /// Malformed or conflicting enumeration configuration.
    #[error("Enumeration config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Access through an attribute no definition was registered for.
    #[error("Unknown attribute{}: {message}", format_context(.context))]
    UnknownAttribute { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal attribute error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to any [`Result`] carrying an [`AttributeError`].
pub trait AttributeErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> AttributeErrorExt<T> for Result<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|mut error| {
            match &mut error {
                AttributeError::Config { context: slot, .. }
                | AttributeError::UnknownAttribute { context: slot, .. }
                | AttributeError::Internal { context: slot, .. } => *slot = Some(context.into()),
            }
            error
        })
    }
}

impl From<&'static str> for AttributeError {
    fn from(message: &'static str) -> Self {
        Self::Internal { message: message.into(), context: None }
    }
}

impl From<String> for AttributeError {
    fn from(message: String) -> Self {
        Self::Internal { message: message.into(), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
