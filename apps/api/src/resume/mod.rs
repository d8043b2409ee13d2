//! Resume parsing: turns an uploaded resume into a partial application
//! record the web form can be pre-filled with.

pub mod extract;
pub mod handlers;
pub mod prompts;

use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::CompletionService;

use self::extract::{extract_text, Upload};
use self::prompts::RESUME_PARSE_SYSTEM;

/// Extracts the upload's text and asks the completion service for the form
/// fields it can find. Called once; a failed or non-object reply is an error.
pub async fn parse_resume(
    completion: &dyn CompletionService,
    upload: Upload,
    upload_dir: &Path,
) -> Result<Map<String, Value>, AppError> {
    let text = extract_text(upload, upload_dir).await?;
    info!("Extracted {} characters of resume text", text.chars().count());

    let fields = completion.complete_json(RESUME_PARSE_SYSTEM, &text).await?;
    info!("Resume parsed into {} fields", fields.len());
    Ok(fields)
}

#[cfg(test)]
pub mod stub {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{Map, Value};

    use crate::llm_client::{parse_json_object, CompletionService, LlmError};

    /// Replies with a fixed text and records the inputs it was given.
    pub struct StubCompletion {
        reply: String,
        pub inputs: Mutex<Vec<String>>,
    }

    impl StubCompletion {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                inputs: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionService for StubCompletion {
        async fn complete_json(
            &self,
            _system: &str,
            input: &str,
        ) -> Result<Map<String, Value>, LlmError> {
            self.inputs.lock().unwrap().push(input.to_string());
            parse_json_object(&self.reply)
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::stub::StubCompletion;
    use super::*;

    fn text_upload(text: &str) -> Upload {
        Upload {
            file_name: Some("resume.txt".to_string()),
            content_type: Some("text/plain".to_string()),
            bytes: Bytes::copy_from_slice(text.as_bytes()),
        }
    }

    #[tokio::test]
    async fn test_parse_resume_returns_object_fields() {
        let dir = tempfile::tempdir().unwrap();
        let completion =
            StubCompletion::replying("```json\n{\"firstNameEn\": \"Anan\", \"age\": \"29\"}\n```");

        let fields = parse_resume(&completion, text_upload("Anan, 29"), dir.path())
            .await
            .unwrap();

        assert_eq!(fields.get("firstNameEn"), Some(&Value::from("Anan")));
        assert_eq!(completion.inputs.lock().unwrap().as_slice(), ["Anan, 29"]);
    }

    #[tokio::test]
    async fn test_parse_resume_rejects_non_object_reply() {
        let dir = tempfile::tempdir().unwrap();
        let completion = StubCompletion::replying("[\"not\", \"an object\"]");

        let result = parse_resume(&completion, text_upload("x"), dir.path()).await;

        assert!(matches!(result, Err(AppError::Completion(_))));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }
}
