//! Instruction templates for each assist action.
//!
//! Every action maps to exactly one prompt string. Missing payload fields
//! are substituted as empty strings; input validation happens in
//! [`crate::ai::service`] before the prompt is built.

use super::types::{Action, AssistRequest, Tone};

const SUMMARIZE_PROMPT: &str = "Summarize the following note in 3 concise bullet points. \
Return only the bullet points, with no introduction or commentary.";

const IMPROVE_PROMPT: &str = "Rewrite the following note in a {tone} tone. \
Return a single improved version of at most two short paragraphs. \
Do not add headings, do not offer multiple options, and preserve the original meaning.";

const TAGS_PROMPT: &str = "Suggest exactly 5 short tags for the following note. \
Return them as a comma-separated list, without the # symbol and without any other text.";

const GENERATE_PROMPT: &str = "Write a single concise note draft based on the request below. \
Do not add headings and do not offer alternative options.";

const ASK_PROMPT: &str = "Answer the question using only the notes provided below. \
If any notes are relevant, list their titles with a short reason for each. \
If no relevant notes are found, say that no relevant notes were found.";

/// Build the instruction string for `request.action`.
pub fn build_prompt(request: &AssistRequest) -> String {
    let content = request.content.as_deref().unwrap_or_default();

    match request.action {
        Action::Summarize => format!("{}\n\nNote:\n{}", SUMMARIZE_PROMPT, content),
        Action::Improve => {
            let tone = request.tone.unwrap_or_default();
            format!("{}\n\nNote:\n{}", improve_instruction(tone), content)
        }
        Action::Tags => format!("{}\n\nNote:\n{}", TAGS_PROMPT, content),
        Action::Generate => {
            let prompt = request.prompt.as_deref().unwrap_or_default();
            format!("{}\n\nRequest:\n{}", GENERATE_PROMPT, prompt)
        }
        Action::Ask => {
            let question = request.question.as_deref().unwrap_or_default();
            let notes = request.notes_context.as_deref().unwrap_or_default();
            format!(
                "{}\n\nQuestion:\n{}\n\nNotes:\n{}",
                ASK_PROMPT, question, notes
            )
        }
    }
}

fn improve_instruction(tone: Tone) -> String {
    IMPROVE_PROMPT.replace("{tone}", tone.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_asks_for_three_bullets() {
        let req = AssistRequest::new(Action::Summarize).with_content("Met with Dana about Q3.");
        let prompt = build_prompt(&req);

        assert!(prompt.contains("3 concise bullet points"));
        assert!(prompt.contains("no introduction or commentary"));
        assert!(prompt.ends_with("Met with Dana about Q3."));
    }

    #[test]
    fn improve_defaults_to_professional_tone() {
        let req = AssistRequest::new(Action::Improve).with_content("gonna ship it tmrw");
        let prompt = build_prompt(&req);

        assert!(prompt.contains("in a professional tone"));
        assert!(prompt.contains("at most two short paragraphs"));
        assert!(prompt.contains("Do not add headings"));
        assert!(prompt.contains("preserve the original meaning"));
    }

    #[test]
    fn improve_uses_requested_tone() {
        let req = AssistRequest::new(Action::Improve)
            .with_content("Quarterly report attached.")
            .with_tone(Tone::Casual);

        assert!(build_prompt(&req).contains("in a casual tone"));
    }

    #[test]
    fn tags_asks_for_five_comma_separated() {
        let prompt = build_prompt(&AssistRequest::new(Action::Tags).with_content("Sourdough notes"));

        assert!(prompt.contains("exactly 5 short tags"));
        assert!(prompt.contains("comma-separated list"));
        assert!(prompt.contains("without the # symbol"));
    }

    #[test]
    fn generate_embeds_prompt_field() {
        let req = AssistRequest::new(Action::Generate).with_prompt("packing list for a ski trip");
        let prompt = build_prompt(&req);

        assert!(prompt.contains("single concise note draft"));
        assert!(prompt.contains("alternative options"));
        assert!(prompt.ends_with("packing list for a ski trip"));
    }

    #[test]
    fn ask_includes_question_and_context() {
        let req = AssistRequest::new(Action::Ask)
            .with_question("When is the dentist?")
            .with_notes_context("Title: Health\nDentist on May 4");
        let prompt = build_prompt(&req);

        assert!(prompt.contains("list their titles with a short reason"));
        assert!(prompt.contains("no relevant notes were found"));
        assert!(prompt.contains("Question:\nWhen is the dentist?"));
        assert!(prompt.contains("Notes:\nTitle: Health\nDentist on May 4"));
    }

    #[test]
    fn missing_fields_become_empty() {
        let prompt = build_prompt(&AssistRequest::new(Action::Summarize));
        assert!(prompt.ends_with("Note:\n"));

        let prompt = build_prompt(&AssistRequest::new(Action::Generate));
        assert!(prompt.ends_with("Request:\n"));
    }
}
