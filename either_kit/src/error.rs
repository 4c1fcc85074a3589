/// A required function argument was not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing required argument `{argument}`")]
pub struct InvalidArgument {
    argument: &'static str,
}

impl InvalidArgument {
    pub(crate) fn missing(argument: &'static str) -> Self {
        Self { argument }
    }

    /// Name of the parameter that was `None`.
    pub fn argument(&self) -> &'static str {
        self.argument
    }
}
