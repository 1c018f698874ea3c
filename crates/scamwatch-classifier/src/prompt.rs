//! The fixed scam-analysis prompt.

pub(crate) const SYSTEM_PROMPT: &str =
    "You are a scam detection expert. Analyze text for scam indicators and respond in JSON format.";

/// Build the user prompt embedding the candidate text verbatim.
pub(crate) fn build_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following text and determine if it shows signs of being a scam.
Consider common scam indicators like:
- Urgency or pressure tactics
- Requests for sensitive information
- Unrealistic promises or rewards
- Poor grammar or spelling
- Suspicious links or contacts

Text to analyze: "{text}"

Provide your analysis in the following JSON format:
{{
    "is_scam": true/false,
    "confidence": 0-100,
    "indicators": ["list", "of", "suspicious", "elements"],
    "explanation": "Brief explanation of classification"
}}"#
    )
}
