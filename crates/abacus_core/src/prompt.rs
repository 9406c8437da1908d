//! Prompt construction for tutor-style generation.

use abacus_error::{GeminiError, GeminiErrorKind};

/// Combine the system instruction and a student question into a single
/// prompt, ending with the cue that invites the tutor's continuation.
///
/// # Errors
///
/// Returns [`GeminiErrorKind::EmptyQuestion`] when the question is empty.
///
/// # Examples
///
/// ```
/// use abacus_core::build_prompt;
///
/// let prompt = build_prompt("You are a math tutor.", "What is 7*8?").unwrap();
/// assert_eq!(prompt, "System: You are a math tutor.\n\nStudent: What is 7*8?\n\nTutor:");
/// ```
pub fn build_prompt(system_prompt: &str, question: &str) -> Result<String, GeminiError> {
    if question.is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::EmptyQuestion));
    }

    Ok(format!(
        "System: {}\n\nStudent: {}\n\nTutor:",
        system_prompt, question
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_instruction_and_question_verbatim() {
        let system = "You are a helpful, patient math tutor.";
        let question = "What is the derivative of x^2?";

        let prompt = build_prompt(system, question).expect("Valid prompt");

        assert!(prompt.contains(system));
        assert!(prompt.contains(question));
        assert!(prompt.ends_with("Tutor:"));
    }

    #[test]
    fn empty_question_is_rejected() {
        let result = build_prompt("You are a math tutor.", "");

        let err = result.expect_err("empty question must fail");
        assert_eq!(err.kind, GeminiErrorKind::EmptyQuestion);
    }
}
