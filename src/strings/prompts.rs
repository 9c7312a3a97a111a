use crate::strings::templates;

/// A builder for rendering prompts with context.
pub struct PromptRenderer<'a> {
    template: &'a str,
    replacements: Vec<(&'a str, String)>,
}

impl<'a> PromptRenderer<'a> {
    pub fn new(template: &'a str) -> Self {
        Self {
            template,
            replacements: Vec::new(),
        }
    }

    pub fn set(mut self, key: &'a str, value: impl Into<String>) -> Self {
        self.replacements.push((key, value.into()));
        self
    }

    pub fn render(self) -> String {
        let mut result = self.template.to_string();
        for (key, value) in self.replacements {
            result = result.replace(key, &value);
        }

        // Only the template itself is checked; user text may legitimately contain braces.
        if let Some(start) = self.template.find("{{")
            && let Some(end) = self.template[start..].find("}}")
        {
            let placeholder = &self.template[start..start + end + 2];
            if result.contains(placeholder) {
                tracing::error!(
                    "[PROMPT RENDER ERROR] Unreplaced placeholder found in output: {}",
                    placeholder
                );
            }
        }

        result
    }
}

/// Prompt asking for a two-sentence personality summary of the given messages.
pub fn analyze_prompt(messages: &str) -> String {
    PromptRenderer::new(templates::ANALYZE_TEMPLATE)
        .set("{{MESSAGES}}", messages)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_renderer_basic() {
        let renderer = PromptRenderer::new("Hello {{NAME}}").set("{{NAME}}", "World");
        assert_eq!(renderer.render(), "Hello World");
    }

    #[test]
    fn test_prompt_renderer_partial_replace() {
        let renderer = PromptRenderer::new("{{A}} and {{B}}").set("{{A}}", "Apple");
        // {{B}} remains
        assert_eq!(renderer.render(), "Apple and {{B}}");
    }

    #[test]
    fn test_analyze_prompt_embeds_messages() {
        let prompt = analyze_prompt("first\nsecond");
        assert!(prompt.contains("personality in 2 sentences"));
        assert!(prompt.ends_with("first\nsecond\n"));
        assert!(!prompt.contains("{{MESSAGES}}"));
    }
}
