//! Prompt text for each pipeline step.
//!
//! Prompts are plain functions of their inputs so the same arguments always
//! produce the same prompt.

use scribe_core::Topic;

/// Number of themes requested from the brainstorm step.
pub const THEME_COUNT: usize = 5;

/// Brainstorm prompt asking for [`THEME_COUNT`] themes as a JSON array.
pub fn brainstorm_prompt(topic: &Topic) -> String {
    format!(
        "You are assisting with a video essay.\n\
         Topic: {topic}\n\
         Return exactly {THEME_COUNT} concise theme sentences as a strict JSON array of strings.\n\
         Example: [\"Theme 1.\", \"Theme 2.\", \"Theme 3.\", \"Theme 4.\", \"Theme 5.\"]\n\
         Do not include any commentary outside the JSON."
    )
}

/// Outline prompt for an already clamped section count.
pub fn outline_prompt(topic: &Topic, theme: &str, sections: u32) -> String {
    format!(
        "Create a detailed, {sections}-part outline for a video essay.\n\
         Topic: {topic}\n\
         Theme: {theme}\n\
         Return a strict JSON array of strings with exactly {sections} entries, one per section, in order.\n\
         No commentary outside the JSON."
    )
}

/// Everything the drafting prompt is built from.
#[derive(Debug, Clone, Copy)]
pub struct DraftPrompt<'a> {
    /// Essay topic
    pub topic: &'a Topic,
    /// Chosen theme
    pub theme: &'a str,
    /// The outline entry this section covers
    pub outline_point: &'a str,
    /// Script text drafted so far, empty for the opening section
    pub prior_text: &'a str,
    /// Advisory length
    pub target_words: u32,
}

impl DraftPrompt<'_> {
    /// Render the drafting prompt.
    ///
    /// Prior text is embedded verbatim between context markers.
    pub fn render(&self) -> String {
        let context = if self.prior_text.trim().is_empty() {
            "This is the very first section of the script. It should serve as a powerful \
             introduction to the entire video essay."
                .to_string()
        } else {
            format!(
                "Here is the script that has been written so far, for context.\n\
                 Do NOT repeat or restate information from this context unless it is absolutely necessary for transition.\n\
                 --- CONTEXT START ---\n\
                 {}\n\
                 --- CONTEXT END ---",
                self.prior_text
            )
        };

        format!(
            "You are a thoughtful and reflective writer, creating a script for my personal YouTube video essay.\n\
             Write from a first-person perspective, using \"I\". Explore my personal feelings, thoughts, and interpretations of the material.\n\
             For example, use phrases like \"I was struck by...\", \"What I find fascinating is...\", or \"It feels to me as though...\".\n\
             \n\
             The overall topic is \"{topic}\".\n\
             The central theme is \"{theme}\".\n\
             \n\
             {context}\n\
             \n\
             Your current task is to write the next section of the script. This section must focus *exclusively* on the following point from our outline:\n\
             **\"{point}\"**\n\
             \n\
             Write this section in an engaging, personal, and sophisticated style from my perspective. It should be approximately {words} words long.\n\
             Do not write a title or a heading like \"Section 2\". Just write the body of the script for this section.\n\
             Ensure a smooth, natural transition from the previous content into this new section.\n\
             Make it feel like my personal reflection and analysis, not a generic academic essay.",
            topic = self.topic,
            theme = self.theme,
            context = context,
            point = self.outline_point,
            words = self.target_words,
        )
    }
}
