use crate::domain::AppError;

/// Answer validator: returns the accepted value or the reason to ask again.
pub type Validator<'a> = dyn Fn(&str) -> Result<String, AppError> + 'a;

/// Port for synchronous question/answer input.
pub trait Prompter {
    /// Ask a free-text question. `Ok(None)` when the user cancelled.
    fn ask(&self, prompt: &str) -> Result<Option<String>, AppError>;

    /// Ask until `validate` accepts the answer. `Ok(None)` when the user cancelled.
    fn ask_validated(
        &self,
        prompt: &str,
        validate: &Validator<'_>,
    ) -> Result<Option<String>, AppError>;
}
