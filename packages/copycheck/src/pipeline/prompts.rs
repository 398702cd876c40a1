//! LLM prompts for compliance review.
//!
//! One fixed system instruction and one analysis template. The reference
//! text and the submitted copy are spliced into the template verbatim; the
//! model is asked for a markdown report.

/// System instruction for the compliance reviewer persona.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a chief compliance officer reviewing marketing copy against a regulatory reference database.

Comparison rules:
1. Wording or reasoning similar to an entry in the reference database is extremely high risk.
2. Scrutinize any claim of therapeutic effect, exaggeration, or guarantee.
"#;

/// Template for the analysis request.
pub const ANALYSIS_PROMPT: &str = r#"Analyze the following copy for compliance.

### 1. Reference standards (from the compliance database):
{reference}

### 2. Copy under review:
{copy}

---
Output a markdown report with:
1. **Risk rating**
2. **Violation hotspots and explanation** (cite which reference entry is violated)
3. **Revision suggestions**
"#;

/// Format the analysis prompt from reference text and submitted copy.
pub fn format_analysis_prompt(reference: &str, copy: &str) -> String {
    ANALYSIS_PROMPT
        .replace("{reference}", reference)
        .replace("{copy}", copy)
}
