/**
 * Generative Suggestion Adapter
 *
 * Calls the Gemini generateContent endpoint with a fixed smart-keyboard
 * instruction and parses the strict JSON contract out of the model's
 * free-form text output.
 *
 * Model output is untrusted: the JSON may arrive fenced or wrapped in
 * prose, and the shape may be wrong. One full retry is allowed for any
 * failure except quota exhaustion; terminal failures surface as
 * `GenerativeError` for the orchestrator to recover.
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::suggest::extract::{extract_json_object, strip_code_fences};
use crate::shared::keyboard::SuggestionResponse;

const SYSTEM_PROMPT: &str = "\
You are a Smart Keyboard AI Engine.

Your job is to assist users while typing in real time.

Tasks:
1. Analyze the COMPLETE input sentence provided by the user.
2. If the grammar of the COMPLETE sentence is incorrect, return the FULL corrected sentence in \"corrected_text\".
3. If the grammar is already correct, return the EXACT same sentence in \"corrected_text\".
4. CRITICAL: Do NOT truncate or shorten the sentence. Maintain all words and original meaning.
5. Predict exactly 3 context-aware next words that would follow the corrected sentence.

Language Rules:
- Detect English, Hindi, or Marathi.
- Preserve the detected language.

Performance Rules:
- Fast response suitable for keyboard typing.
- No creativity, no explanations, no chat-style responses.";

/// Failures internal to the generative call chain
#[derive(Debug, Error)]
pub enum GenerativeError {
    /// Upstream quota exhausted (HTTP 429); never retried
    #[error("model quota exhausted")]
    Quota,
    #[error("model api returned status {0}")]
    Status(u16),
    #[error("model returned no candidates")]
    Empty,
    #[error("model output was not valid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model output failed validation")]
    Invalid,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

/// Generative model suggestion backend
pub struct GenerativeAdapter {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GenerativeAdapter {
    pub fn new(http: reqwest::Client, base_url: String, model: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            model,
            api_key,
        }
    }

    /// Ask the model for suggestions, retrying once on anything but a
    /// quota failure.
    ///
    /// The retry is a full re-invocation (prompt build, call, parse),
    /// not a re-parse of the previous output.
    pub async fn complete(&self, text: &str) -> Result<SuggestionResponse, GenerativeError> {
        match self.attempt(text).await {
            Ok(response) => Ok(response),
            Err(GenerativeError::Quota) => Err(GenerativeError::Quota),
            Err(first) => {
                tracing::warn!("model call failed, retrying once: {}", first);
                self.attempt(text).await
            }
        }
    }

    async fn attempt(&self, text: &str) -> Result<SuggestionResponse, GenerativeError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: user_prompt(text),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status == 429 {
            return Err(GenerativeError::Quota);
        }
        if !(200..300).contains(&status) {
            return Err(GenerativeError::Status(status));
        }

        let body: GenerateContentResponse = response.json().await?;
        let raw = body
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or(GenerativeError::Empty)?;

        parse_model_output(raw, text)
    }
}

/// Parse and validate the model's raw text into the response contract.
fn parse_model_output(raw: &str, input: &str) -> Result<SuggestionResponse, GenerativeError> {
    let json = extract_json_object(raw).unwrap_or_else(|| strip_code_fences(raw));
    let mut parsed: SuggestionResponse = serde_json::from_str(json)?;

    if parsed.corrected_text.trim().is_empty() {
        return Err(GenerativeError::Invalid);
    }

    // The echo of the input is part of the contract; don't trust the
    // model to reproduce it exactly.
    parsed.original_text = input.to_string();
    Ok(parsed)
}

fn user_prompt(text: &str) -> String {
    format!(
        r#"User is typing the following text in a keyboard:

"{text}"

Return ONLY valid JSON in the following format:
{{
  "original_text": "{text}",
  "corrected_text": "THE FULL CORRECTED SENTENCE",
  "suggestions": ["word1", "word2", "word3"],
  "language": "detected language"
}}"#
    )
}
