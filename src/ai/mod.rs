//! AI assist pipeline: prompt building, model dispatch, response handling.

pub mod dispatcher;
pub mod error;
pub mod prompt;
pub mod response;
pub mod service;
pub mod types;

pub use dispatcher::{ModelCandidates, ModelDispatcher, DEFAULT_MODELS};
pub use error::AiError;
pub use prompt::build_prompt;
pub use response::{extract_text, parse_tags};
pub use service::AssistService;
pub use types::{Action, AssistRequest, AssistResponse, Tone};
