use crate::generation::GenerationRequest;

pub const SYSTEM_INSTRUCTION: &str = "You are a code reviewer AI. Provide feedback on the code \
quality, identify bugs, suggest improvements, and explain best practices. Focus on readability, \
efficiency, and maintainability.";

/// Pairs the fixed reviewer instruction with the caller's prompt.
pub fn review_request(model: &str, prompt: &str) -> GenerationRequest {
    GenerationRequest {
        model: model.to_string(),
        system_instruction: Some(SYSTEM_INSTRUCTION.to_string()),
        prompt: prompt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_forwarded_verbatim() {
        let request = review_request("gemini-2.5-flash", "  let x = 1;\n");
        assert_eq!(request.model, "gemini-2.5-flash");
        assert_eq!(request.prompt, "  let x = 1;\n");
        assert_eq!(request.system_instruction.as_deref(), Some(SYSTEM_INSTRUCTION));
    }
}
