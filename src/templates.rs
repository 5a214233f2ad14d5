//! Prompt templates keyed by the `promptType` field of a generation request.

const MODEL: &str = "llama-3.3-70b-versatile";

const CONTEXT_INSTRUCTION: &str = "Ensure the rewritten text fits seamlessly into the original context \
but do not include the context in the answer, maintaining proper capitalization, punctuation, \
font style, and other stylistic elements. DO NOT ADD EMOJIS!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    Tweet,
    Headline,
    Grammar,
    Seo,
    General
}

impl PromptType {

    /// Resolves a wire tag. Unknown or missing tags fall back to `General`.
    pub fn from_tag(tag: Option<&str>) -> Self {

        match tag {
            Some("tweet") => PromptType::Tweet,
            Some("headline") => PromptType::Headline,
            Some("grammar") => PromptType::Grammar,
            Some("seo") => PromptType::Seo,
            _ => PromptType::General
        }

    }

    pub fn as_str(self) -> &'static str {

        match self {
            PromptType::Tweet => "tweet",
            PromptType::Headline => "headline",
            PromptType::Grammar => "grammar",
            PromptType::Seo => "seo",
            PromptType::General => "general"
        }

    }

}

/// Whether a template places the caller's surrounding context in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMode {
    Include,
    Ignore
}

#[derive(Debug, PartialEq)]
pub struct PromptTemplate {
    pub kind: PromptType,
    pub system_role: &'static str,
    pub prompt_prefix: &'static str,
    pub model: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub context: ContextMode
}

static TWEET: PromptTemplate = PromptTemplate {
    kind: PromptType::Tweet,
    system_role: "You are a social media copywriter who turns text into short, engaging posts.",
    prompt_prefix: "Convert the following text into a compelling Twitter post (280 characters or less, add relevant hashtags).",
    model: MODEL,
    temperature: 0.8,
    max_tokens: 150,
    context: ContextMode::Include
};

static HEADLINE: PromptTemplate = PromptTemplate {
    kind: PromptType::Headline,
    system_role: "You are an experienced editor who writes clear, compelling headlines.",
    prompt_prefix: "Suggest compelling titles or headlines based on the full text.",
    model: MODEL,
    temperature: 0.7,
    max_tokens: 120,
    context: ContextMode::Include
};

static GRAMMAR: PromptTemplate = PromptTemplate {
    kind: PromptType::Grammar,
    system_role: "You are a meticulous copy editor who fixes errors without changing the author's voice.",
    prompt_prefix: "Correct the grammar, spelling, and punctuation in this text while maintaining its original meaning and tone.",
    model: MODEL,
    temperature: 0.2,
    max_tokens: 1024,
    context: ContextMode::Include
};

static SEO: PromptTemplate = PromptTemplate {
    kind: PromptType::Seo,
    system_role: "You are an SEO analyst who reviews web content for search visibility.",
    prompt_prefix: "Analyze the following text for SEO. Suggest primary and secondary keywords, a meta description under 160 characters, and concrete improvements to headings and wording.",
    model: MODEL,
    temperature: 0.4,
    max_tokens: 800,
    context: ContextMode::Ignore
};

static GENERAL: PromptTemplate = PromptTemplate {
    kind: PromptType::General,
    system_role: "You are a helpful assistant that rewrites text while maintaining context and style.",
    prompt_prefix: "Improve and enhance the following text.",
    model: MODEL,
    temperature: 0.7,
    max_tokens: 1024,
    context: ContextMode::Include
};

impl PromptTemplate {

    pub fn for_type(prompt_type: PromptType) -> &'static PromptTemplate {

        match prompt_type {
            PromptType::Tweet => &TWEET,
            PromptType::Headline => &HEADLINE,
            PromptType::Grammar => &GRAMMAR,
            PromptType::Seo => &SEO,
            PromptType::General => &GENERAL
        }

    }

    /// Tag lookup in one step. Unknown or missing tags resolve to the general template.
    pub fn for_tag(tag: Option<&str>) -> &'static PromptTemplate {

        Self::for_type(PromptType::from_tag(tag))

    }

    /// Assembles the user message. Text and context are passed through verbatim.
    pub fn build_prompt(&self, text: &str, context: &str) -> String {

        match self.context {
            ContextMode::Include => format!(
                "{}\n\nText: \"{}\"\n\nContext: \"{}\"\n\n{}",
                self.prompt_prefix, text, context, CONTEXT_INSTRUCTION
            ),
            ContextMode::Ignore => format!("{}\n\nText: \"{}\"", self.prompt_prefix, text)
        }

    }

}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_known_tags_resolve() {

        assert_eq!(PromptType::from_tag(Some("tweet")), PromptType::Tweet);
        assert_eq!(PromptType::from_tag(Some("headline")), PromptType::Headline);
        assert_eq!(PromptType::from_tag(Some("grammar")), PromptType::Grammar);
        assert_eq!(PromptType::from_tag(Some("seo")), PromptType::Seo);

    }

    #[test]
    fn test_unknown_or_missing_tag_is_general() {

        assert_eq!(PromptType::from_tag(None), PromptType::General);
        assert_eq!(PromptType::from_tag(Some("")), PromptType::General);
        assert_eq!(PromptType::from_tag(Some("limerick")), PromptType::General);
        assert_eq!(PromptType::from_tag(Some("Tweet")), PromptType::General);

        let first = PromptTemplate::for_type(PromptType::from_tag(Some("limerick")));
        let second = PromptTemplate::for_type(PromptType::from_tag(None));
        assert!(std::ptr::eq(first, second), "Fallback should always be the same template");

    }

    #[test]
    fn test_template_parameters() {

        let expected = [
            (
                PromptType::Tweet,
                "You are a social media copywriter who turns text into short, engaging posts.",
                0.8, 150, ContextMode::Include
            ),
            (
                PromptType::Headline,
                "You are an experienced editor who writes clear, compelling headlines.",
                0.7, 120, ContextMode::Include
            ),
            (
                PromptType::Grammar,
                "You are a meticulous copy editor who fixes errors without changing the author's voice.",
                0.2, 1024, ContextMode::Include
            ),
            (
                PromptType::Seo,
                "You are an SEO analyst who reviews web content for search visibility.",
                0.4, 800, ContextMode::Ignore
            ),
            (
                PromptType::General,
                "You are a helpful assistant that rewrites text while maintaining context and style.",
                0.7, 1024, ContextMode::Include
            )
        ];

        for (prompt_type, system_role, temperature, max_tokens, context) in expected {
            let template = PromptTemplate::for_type(prompt_type);
            assert_eq!(template.kind, prompt_type);
            assert_eq!(template.system_role, system_role, "{:?}", prompt_type);
            assert_eq!(template.model, "llama-3.3-70b-versatile");
            assert_eq!(template.temperature, temperature, "{:?}", prompt_type);
            assert_eq!(template.max_tokens, max_tokens, "{:?}", prompt_type);
            assert_eq!(template.context, context, "{:?}", prompt_type);
        }

    }

    #[test]
    fn test_for_tag_matches_for_type() {

        assert_eq!(PromptTemplate::for_tag(Some("seo")).kind, PromptType::Seo);
        assert!(std::ptr::eq(
            PromptTemplate::for_tag(Some("unknown")),
            PromptTemplate::for_type(PromptType::General)
        ));

    }

    #[test]
    fn test_system_roles_are_distinct() {

        let types = [
            PromptType::Tweet,
            PromptType::Headline,
            PromptType::Grammar,
            PromptType::Seo,
            PromptType::General
        ];

        for a in types {
            for b in types {
                if a != b {
                    assert_ne!(
                        PromptTemplate::for_type(a).system_role,
                        PromptTemplate::for_type(b).system_role
                    );
                }
            }
        }

    }

    #[test]
    fn test_grammar_prompt_quotes_text_and_context() {

        let prompt = PromptTemplate::for_type(PromptType::Grammar)
            .build_prompt("teh cat sat", "A short story.");

        assert!(prompt.starts_with("Correct the grammar, spelling, and punctuation"));
        assert!(prompt.contains("\"teh cat sat\""));
        assert!(prompt.contains("Context: \"A short story.\""));
        assert!(prompt.contains("DO NOT ADD EMOJIS!"));

    }

    #[test]
    fn test_seo_prompt_ignores_context() {

        let prompt = PromptTemplate::for_type(PromptType::Seo)
            .build_prompt("Rust is a systems language.", "ignored surroundings");

        assert!(prompt.contains("\"Rust is a systems language.\""));
        assert!(!prompt.contains("Context:"));
        assert!(!prompt.contains("ignored surroundings"));

    }

    #[test]
    fn test_text_is_not_truncated() {

        let text = "word ".repeat(10_000);
        let prompt = PromptTemplate::for_type(PromptType::General).build_prompt(&text, "");
        assert!(prompt.contains(&text));

    }

}
