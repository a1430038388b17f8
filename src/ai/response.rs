//! Post-processing of provider responses.

use super::error::AiError;
use super::types::GenerateContentResponse;

/// Extract the first candidate's first text part, trimmed.
pub fn extract_text(response: &GenerateContentResponse) -> Result<String, AiError> {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| content.parts.first())
        .and_then(|part| part.text.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
        .ok_or(AiError::EmptyResult)
}

/// Split model output into tag names.
///
/// Pieces are separated by commas or newlines. Leading `#` runs and
/// surrounding whitespace are stripped and empty pieces dropped. Order and
/// duplicates are kept as the model returned them.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(|c| c == ',' || c == '\n')
        .map(|piece| piece.trim().trim_start_matches('#').trim())
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
