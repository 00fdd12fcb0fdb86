//! Deterministic stand-in for a real model.
//!
//! Recognizes the three prompt shapes of a script run and answers each with
//! something structurally valid: a JSON array of themes, a JSON array of
//! outline points, or a paragraph of first-person prose. Anything else gets
//! a plain "OK".

use async_trait::async_trait;
use regex::Regex;
use scribe_core::{GenerateRequest, GenerateResponse};
use scribe_error::{ModelError, ModelErrorKind, ScribeResult};
use scribe_interface::ScribeDriver;
use tracing::debug;

const THEME_ANGLES: [&str; 5] = [
    "is really a story about power and who gets to keep it",
    "reveals how ordinary people adapt when their world shifts beneath them",
    "shows that the myths we tell matter as much as the facts",
    "is a mirror for anxieties we still carry today",
    "proves that endings are usually slower and quieter than we imagine",
];

const OUTLINE_BEATS: [&str; 6] = [
    "Why this subject grabbed me in the first place",
    "The context most people skip over",
    "The turning point that changes everything",
    "What the usual telling gets wrong",
    "The human cost underneath the big picture",
    "What it leaves me thinking about now",
];

/// Offline driver producing canned but well-formed answers.
#[derive(Debug, Clone)]
pub struct OfflineClient {
    themes: Regex,
    outline: Regex,
    draft_point: Regex,
    topic: Regex,
    theme: Regex,
}

impl Default for OfflineClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OfflineClient {
    /// Create the offline driver.
    pub fn new() -> Self {
        Self {
            themes: Regex::new(r"Return exactly (\d+) concise theme").expect("Valid themes regex"),
            outline: Regex::new(r"(\d+)-part outline").expect("Valid outline regex"),
            draft_point: Regex::new(r#"(?m)^\s*\*\*"(.*)"\*\*\s*$"#).expect("Valid draft regex"),
            topic: Regex::new(r#"(?m)(?:^\s*Topic: (.+?)\s*$|The overall topic is "(.+?)"\.)"#)
                .expect("Valid topic regex"),
            theme: Regex::new(r#"(?m)(?:^\s*Theme: (.+?)\s*$|The central theme is "(.+?)"\.)"#)
                .expect("Valid theme regex"),
        }
    }

    fn capture(re: &Regex, prompt: &str) -> Option<String> {
        re.captures(prompt).and_then(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .next()
                .map(|m| m.as_str().to_string())
        })
    }

    fn count(re: &Regex, prompt: &str) -> Option<usize> {
        Self::capture(re, prompt).and_then(|n| n.parse().ok())
    }

    fn themes_for(topic: &str, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("{} {}.", topic, THEME_ANGLES[i % THEME_ANGLES.len()]))
            .collect()
    }

    fn outline_for(theme: &str, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| match i {
                0 => format!("Introduction: {}", theme.trim_end_matches('.')),
                i if i + 1 == count && count > 1 => "Conclusion: where this leaves us".to_string(),
                i => format!("{} (part {})", OUTLINE_BEATS[i % OUTLINE_BEATS.len()], i + 1),
            })
            .collect()
    }

    fn prose_for(topic: &str, point: &str, first: bool) -> String {
        let opening = if first {
            format!("I want to start with a confession: {} has followed me around for years.", topic)
        } else {
            "Which brings me to the next piece of this puzzle.".to_string()
        };
        format!(
            "{} When I think about {}, what strikes me is how much of it still feels unresolved. \
             I keep returning to this idea: {}. It feels to me as though the obvious reading \
             misses the quieter, more personal truth underneath, and that is the thread I want \
             to pull on here.",
            opening,
            topic,
            point.trim_end_matches('.')
        )
    }

    fn respond(&self, prompt: &str) -> Result<String, ModelError> {
        let topic = Self::capture(&self.topic, prompt).unwrap_or_else(|| "this subject".to_string());

        if let Some(count) = Self::count(&self.themes, prompt) {
            debug!(count, "Offline driver answering brainstorm prompt");
            return Self::json(&Self::themes_for(&topic, count));
        }

        if let Some(count) = Self::count(&self.outline, prompt) {
            let theme = Self::capture(&self.theme, prompt).unwrap_or_else(|| topic.clone());
            debug!(count, "Offline driver answering outline prompt");
            return Self::json(&Self::outline_for(&theme, count));
        }

        if let Some(point) = Self::capture(&self.draft_point, prompt) {
            let first = prompt.contains("very first section");
            debug!(first, "Offline driver answering draft prompt");
            return Ok(Self::prose_for(&topic, &point, first));
        }

        Ok("OK".to_string())
    }

    fn json(items: &[String]) -> Result<String, ModelError> {
        serde_json::to_string(items)
            .map_err(|e| ModelError::new(ModelErrorKind::Unavailable(e.to_string())))
    }
}

#[async_trait]
impl ScribeDriver for OfflineClient {
    async fn generate(&self, req: &GenerateRequest) -> ScribeResult<GenerateResponse> {
        let text = self.respond(&req.prompt_text())?;
        Ok(GenerateResponse::from_text(text))
    }

    fn provider_name(&self) -> &'static str {
        "offline"
    }

    fn model_name(&self) -> &str {
        "offline-fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brainstorm_prompt_gets_json_themes() {
        let client = OfflineClient::new();
        let text = client
            .respond("Topic: The Roman Empire\nReturn exactly 5 concise theme sentences as JSON.")
            .unwrap();
        let themes: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(themes.len(), 5);
        assert!(themes.iter().all(|t| t.starts_with("The Roman Empire")));
    }

    #[test]
    fn outline_prompt_honors_count() {
        let client = OfflineClient::new();
        let text = client
            .respond("Create a detailed, 3-part outline for a video essay.\nTopic: Tea\nTheme: Tea is power.")
            .unwrap();
        let outline: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(outline.len(), 3);
        assert!(outline[0].contains("Tea is power"));
    }

    #[test]
    fn draft_prompt_mentions_point() {
        let client = OfflineClient::new();
        let prompt = "The overall topic is \"Tea\".\nThis is the very first section.\n**\"Why tea matters\"**\n";
        let text = client.respond(prompt).unwrap();
        assert!(text.contains("Why tea matters"));
        assert!(text.starts_with("I want to start"));
    }

    #[test]
    fn anything_else_is_ok() {
        assert_eq!(OfflineClient::new().respond("Reply with OK").unwrap(), "OK");
    }
}
