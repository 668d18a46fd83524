//! Prompt templates for product discovery.
//!
//! Section labels and numbering are part of the contract: exported reports are
//! read by people who expect these exact headings back from the model.

use super::{CaseStudyCompany, Framework};

/// System instruction sent with every completion.
pub const SYSTEM_PROMPT: &str = "You are an expert product strategist with experience from top business schools.
        Analyze the provided product idea or customer problem using various frameworks.
        Provide clear, actionable insights and maintain a professional tone.";

/// Builds the prompt for `framework` around the combined idea and answers text.
pub fn framework_prompt(framework: Framework, user_input: &str) -> String {
    match framework {
        Framework::Jtbd => jtbd_prompt(user_input),
        Framework::ValueProposition => value_proposition_prompt(user_input),
        Framework::OpportunitySolution => opportunity_tree_prompt(user_input),
        Framework::FourFit => four_fit_prompt(user_input),
    }
}

pub fn jtbd_prompt(user_input: &str) -> String {
    format!(
        r#"
You are a product strategist trained in the Jobs to Be Done (JTBD) framework.

Here is the user input describing a problem or product idea:
"""
{user_input}
"""

Please:
1. Identify the functional, emotional, and social jobs the user is trying to get done
2. Break down the job into: 
   - Main Job
   - Related Jobs
   - Emotional Jobs
3. Identify the struggling moments (where the user fails)
4. Present your answer in clear bullet points under each section
"#
    )
}

pub fn value_proposition_prompt(user_input: &str) -> String {
    format!(
        r#"
You are an expert in using the Value Proposition Canvas to guide product discovery.

Based on this product idea or customer problem:
"""
{user_input}
"""

Please complete both sides of the canvas:
- Customer Profile:
  - Customer Jobs
  - Pains
  - Gains
- Value Map:
  - Products and Services
  - Pain Relievers
  - Gain Creators

Structure the output as clearly labeled sections with short bullet points under each.
"#
    )
}

pub fn opportunity_tree_prompt(user_input: &str) -> String {
    format!(
        r#"
You are using the Opportunity Solution Tree framework created by Teresa Torres.

For this product idea or user problem:
"""
{user_input}
"""

Do the following:
1. Define the clear product outcome or goal
2. List opportunities (user needs, pain points)
3. Brainstorm possible solutions (not full features, just ideas)
4. Suggest 1–2 experiments or small tests to validate the biggest assumptions

Present your answer in the format:
- Outcome:
- Opportunities:
- Solutions:
- Tests:
"#
    )
}

pub fn four_fit_prompt(user_input: &str) -> String {
    format!(
        r#"
Act as a product strategist evaluating an idea using the 4-Fit Model.

Given this user input:
"""
{user_input}
"""

Analyze it using these four fits:
1. Problem-Solution Fit
2. Product-Market Fit
3. Channel Fit
4. Revenue Model Fit

For each one:
- Assess the current status (Validated / Unclear / Risky)
- Explain why
- Suggest next steps or validation methods

Use bullet points and clear section headings.
"#
    )
}

/// Asks for 5-7 numbered follow-up questions about the idea.
pub fn follow_up_questions_prompt(product_idea: &str) -> String {
    format!(
        "Based on this product idea: {product_idea}
        Generate 5-7 follow-up questions that will help deepen understanding of:
        1. User pain points
        2. Current solutions
        3. Target segment
        4. Unmet needs
        Format as a numbered list."
    )
}

/// Three-section comparison of the idea against `company`.
pub fn case_study_prompt(product_idea: &str, company: CaseStudyCompany, answers_json: &str) -> String {
    let company = company.name();
    format!(
        r#"Compare the following product idea to {company}:

Product Idea:
{product_idea}

Additional Context:
{answers_json}

Please provide a detailed analysis in the following structure:

1. {company}'s Product Strategy
   - Core value proposition
   - Key customer segments
   - Main competitive advantages

2. Strategic Comparison
   - Similarities in customer jobs and value proposition
   - Key differences in approach and positioning
   - Market overlap and potential competition

3. Strategic Lessons
   - What can be learned from {company}'s approach
   - Potential pitfalls to avoid
   - Opportunities for differentiation

Format the response with clear section headers and bullet points for easy reading."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_prompts_embed_input_between_triple_quotes() {
        for framework in Framework::ALL {
            let prompt = framework_prompt(framework, "A budgeting app");
            assert!(
                prompt.contains("\"\"\"\nA budgeting app\n\"\"\""),
                "{} prompt does not quote the input",
                framework
            );
        }
    }

    #[test]
    fn jtbd_prompt_has_required_sections() {
        let prompt = jtbd_prompt("idea");
        assert!(prompt.contains("Jobs to Be Done (JTBD) framework"));
        assert!(prompt.contains("   - Main Job\n   - Related Jobs\n   - Emotional Jobs"));
        assert!(prompt.contains("3. Identify the struggling moments (where the user fails)"));
    }

    #[test]
    fn value_proposition_prompt_covers_both_sides_of_the_canvas() {
        let prompt = value_proposition_prompt("idea");
        assert!(prompt.contains("- Customer Profile:\n  - Customer Jobs\n  - Pains\n  - Gains"));
        assert!(prompt.contains(
            "- Value Map:\n  - Products and Services\n  - Pain Relievers\n  - Gain Creators"
        ));
    }

    #[test]
    fn opportunity_tree_prompt_requests_fixed_format() {
        let prompt = opportunity_tree_prompt("idea");
        assert!(prompt.contains("Teresa Torres"));
        assert!(prompt.contains("- Outcome:\n- Opportunities:\n- Solutions:\n- Tests:"));
    }

    #[test]
    fn four_fit_prompt_lists_the_four_fits() {
        let prompt = four_fit_prompt("idea");
        assert!(prompt.contains(
            "1. Problem-Solution Fit\n2. Product-Market Fit\n3. Channel Fit\n4. Revenue Model Fit"
        ));
        assert!(prompt.contains("(Validated / Unclear / Risky)"));
    }

    #[test]
    fn follow_up_prompt_names_the_four_topics() {
        let prompt = follow_up_questions_prompt("Pet sitting marketplace");
        assert!(prompt.starts_with("Based on this product idea: Pet sitting marketplace"));
        for topic in ["User pain points", "Current solutions", "Target segment", "Unmet needs"] {
            assert!(prompt.contains(topic));
        }
        assert!(prompt.contains("5-7 follow-up questions"));
        assert!(prompt.ends_with("Format as a numbered list."));
    }

    #[test]
    fn case_study_prompt_names_company_in_three_slots() {
        let prompt = case_study_prompt("idea", CaseStudyCompany::Figma, "{}");
        assert_eq!(prompt.matches("Figma").count(), 3);
        assert!(prompt.starts_with("Compare the following product idea to Figma:"));
        assert!(prompt.contains("1. Figma's Product Strategy"));
        assert!(prompt.contains("2. Strategic Comparison"));
        assert!(prompt.contains("3. Strategic Lessons\n   - What can be learned from Figma's approach"));
        assert!(prompt.contains("Additional Context:\n{}"));
    }
}
