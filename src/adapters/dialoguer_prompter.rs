use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::{Prompter, Validator};

/// Terminal prompts via `dialoguer`. Invalid answers are reported inline and asked again.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, prompt: &str) -> Result<Option<String>, AppError> {
        let answer = Input::<String>::new().with_prompt(prompt).interact_text();
        cancelled_as_none(answer)
    }

    fn ask_validated(
        &self,
        prompt: &str,
        validate: &Validator<'_>,
    ) -> Result<Option<String>, AppError> {
        let mut accepted: Option<String> = None;
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| -> Result<(), String> {
                let value = validate(input.as_str()).map_err(|err| err.to_string())?;
                accepted = Some(value);
                Ok(())
            })
            .interact_text();

        Ok(cancelled_as_none(answer)?.map(|raw| accepted.unwrap_or(raw)))
    }
}

fn cancelled_as_none(answer: Result<String, DialoguerError>) -> Result<Option<String>, AppError> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(err.to_string())),
    }
}
