use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{Prompter, Validator};

/// Prompter answering from a script. `None` entries simulate the user cancelling.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Option<String>>>,
    pub prompts: Mutex<Vec<String>>,
    /// Validator messages for rejected answers, in order.
    pub rejections: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[Option<&str>]) -> Self {
        let answers = answers.iter().map(|a| a.map(str::to_string)).collect();
        Self { answers: Mutex::new(answers), ..Self::default() }
    }

    fn next_answer(&self, prompt: &str) -> Result<Option<String>, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{prompt}'")))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, prompt: &str) -> Result<Option<String>, AppError> {
        self.next_answer(prompt)
    }

    fn ask_validated(
        &self,
        prompt: &str,
        validate: &Validator<'_>,
    ) -> Result<Option<String>, AppError> {
        loop {
            let Some(answer) = self.next_answer(prompt)? else {
                return Ok(None);
            };
            match validate(answer.as_str()) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.rejections.lock().unwrap().push(err.to_string()),
            }
        }
    }
}
