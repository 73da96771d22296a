// src/prompt/builder.rs

use crate::services::types::FeedbackRequest;

/// Fixed persona instruction sent as the system turn of every completion call.
pub const SYSTEM_PROMPT: &str = "You are an experienced teacher helping to improve, \
revise, and rewrite other teachers' report card feedback. Please improve the feedback \
according to the instructions provided.";

/// Builds the user-turn instruction for a request. Pure and deterministic:
/// the same request always yields byte-identical prompt text.
///
/// A non-empty `custom_prompt` fully replaces the standard guidelines.
pub fn build_prompt(request: &FeedbackRequest) -> String {
    match request.custom_prompt() {
        Some(custom) => build_custom_prompt(&request.original_feedback, custom),
        None => build_standard_prompt(request),
    }
}

/// Two labeled segments (original feedback and custom instruction, both
/// verbatim) plus the instruction to apply them. No standard guidelines.
fn build_custom_prompt(original_feedback: &str, custom_prompt: &str) -> String {
    format!(
        "Original feedback: {original_feedback}\n\n\
         Custom instructions: {custom_prompt}\n\n\
         Please improve the feedback according to the custom instructions provided."
    )
}

fn build_standard_prompt(request: &FeedbackRequest) -> String {
    let mut prompt = String::new();

    // 1. Header + original feedback, verbatim
    prompt.push_str("Please improve this report card feedback:\n\n");
    prompt.push_str(&format!(
        "Original feedback: {}\n\n",
        request.original_feedback
    ));

    // 2. Fixed style guidelines, identical across calls
    prompt.push_str("Improvement guidelines:\n");
    prompt.push_str(
        "- Read the original feedback and use a similar writing style in your improved feedback.\n",
    );
    prompt.push_str(
        "- The improved feedback should still sound like the person who wrote the original feedback.\n",
    );
    prompt.push_str("- Favor smaller adjustments as opposed to full rewrites.\n");
    prompt.push_str("- Avoid sophisticated vocabulary and jargon in your improved feedback.\n\n");

    // 3. Length and tone directives
    prompt.push_str("Consider the following when improving the original feedback:\n");
    prompt.push_str(&format!(
        "- Length: {}. Do not make the sentences too long. Be concise.\n",
        request.length().guideline()
    ));
    prompt.push_str(&format!("- Tone: {}", request.tone()));

    // 4. Optional context lines. "other" and "general" are the frontend's
    // "unspecified" sentinels and suppress their lines.
    if let Some(subject) = request
        .subject
        .as_deref()
        .filter(|s| !s.is_empty() && *s != "other")
    {
        prompt.push_str(&format!(
            "\n- Subject context: {}",
            title_case(&subject.replace('_', " "))
        ));
    }

    if let Some(grade_level) = request
        .grade_level
        .as_deref()
        .filter(|g| !g.is_empty() && *g != "general")
    {
        prompt.push_str(&format!("\n- Grade level: {}", title_case(grade_level)));
    }

    // 5. Focus areas: recognized tags only, input order preserved
    if let Some(areas) = &request.focus_areas {
        let selected: Vec<&str> = areas
            .iter()
            .filter_map(|area| focus_area_description(area))
            .collect();
        if !selected.is_empty() {
            prompt.push_str(&format!(
                "\n- Focus particularly on: {}",
                selected.join(", ")
            ));
        }
    }

    prompt.push_str("\n\nProvide only the improved feedback text, no additional commentary.");
    prompt
}

/// Fixed tag → directive table. Unrecognized tags are dropped silently.
fn focus_area_description(area: &str) -> Option<&'static str> {
    match area {
        "strengths" => Some("Highlight specific strengths and accomplishments"),
        "improvements" => Some("Identify clear areas for improvement with actionable suggestions"),
        "examples" => Some("Include specific examples of work or behavior"),
        "next_steps" => Some("Provide concrete next steps or learning goals"),
        "behavior" => Some("Address behavior, attitude, and classroom conduct"),
        "participation" => Some("Comment on class participation and engagement"),
        "growth" => Some("Emphasize progress and growth over time"),
        "effort" => Some("Acknowledge effort, work habits, and persistence"),
        _ => None,
    }
}

/// Capitalizes the first letter after every non-alphabetic character and
/// lowercases the rest, so hyphenated values like "elementary-school" become
/// "Elementary-School".
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(original_feedback: &str) -> FeedbackRequest {
        FeedbackRequest {
            original_feedback: original_feedback.to_string(),
            subject: None,
            grade_level: None,
            tone: None,
            length: None,
            custom_prompt: None,
            focus_areas: None,
        }
    }

    #[test]
    fn test_standard_prompt_contains_original_feedback_verbatim() {
        let req = request("Sam did ok this term, but could try harder in maths.");
        let prompt = build_prompt(&req);
        assert!(prompt.contains("Sam did ok this term, but could try harder in maths."));
    }

    #[test]
    fn test_length_directives() {
        let mut req = request("Good job.");

        req.length = Some("short".to_string());
        assert!(build_prompt(&req).contains("1-2 sentences"));

        req.length = Some("medium".to_string());
        assert!(build_prompt(&req).contains("3-4 sentences"));

        req.length = Some("long".to_string());
        assert!(build_prompt(&req).contains("5+ sentences"));
    }

    #[test]
    fn test_subject_sentinel_suppresses_line() {
        let mut req = request("Good job.");
        req.subject = Some("other".to_string());
        assert!(!build_prompt(&req).contains("Subject context"));

        req.subject = Some("social_studies".to_string());
        let prompt = build_prompt(&req);
        assert!(prompt.contains("- Subject context: Social Studies"));
        assert_eq!(prompt.matches("Subject context").count(), 1);
    }

    #[test]
    fn test_grade_level_sentinel_suppresses_line() {
        let mut req = request("Good job.");
        req.grade_level = Some("general".to_string());
        assert!(!build_prompt(&req).contains("Grade level"));

        req.grade_level = Some("kindergarten".to_string());
        let prompt = build_prompt(&req);
        assert!(prompt.contains("- Grade level: Kindergarten"));
        assert_eq!(prompt.matches("Grade level").count(), 1);
    }

    #[test]
    fn test_hyphenated_grade_level_capitalizes_both_words() {
        let mut req = request("Good job.");
        req.grade_level = Some("elementary-school".to_string());
        assert!(build_prompt(&req).contains("- Grade level: Elementary-School"));

        req.grade_level = Some("middle-school".to_string());
        assert!(build_prompt(&req).contains("- Grade level: Middle-School"));
    }

    #[test]
    fn test_focus_areas_drop_unrecognized_and_preserve_order() {
        let mut req = request("Good job.");
        req.focus_areas = Some(vec![
            "strengths".to_string(),
            "bogus".to_string(),
            "effort".to_string(),
        ]);
        let prompt = build_prompt(&req);
        assert!(prompt.contains(
            "- Focus particularly on: Highlight specific strengths and accomplishments, \
             Acknowledge effort, work habits, and persistence"
        ));
        assert!(!prompt.contains("bogus"));
    }

    #[test]
    fn test_all_unrecognized_focus_areas_omit_line() {
        let mut req = request("Good job.");
        req.focus_areas = Some(vec!["bogus".to_string(), "nonsense".to_string()]);
        assert!(!build_prompt(&req).contains("Focus particularly on"));
    }

    #[test]
    fn test_custom_prompt_replaces_standard_guidelines() {
        let mut req = request("Good job this term.");
        req.tone = Some("warm".to_string());
        req.length = Some("long".to_string());
        req.subject = Some("math".to_string());
        req.focus_areas = Some(vec!["strengths".to_string()]);
        req.custom_prompt = Some("Make it rhyme.".to_string());

        let prompt = build_prompt(&req);
        assert!(prompt.contains("Original feedback: Good job this term."));
        assert!(prompt.contains("Custom instructions: Make it rhyme."));
        assert!(!prompt.contains("Improvement guidelines"));
        assert!(!prompt.contains("Length:"));
        assert!(!prompt.contains("Tone:"));
        assert!(!prompt.contains("Subject context"));
        assert!(!prompt.contains("Focus particularly on"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let mut req = request("Good job this term.");
        req.subject = Some("science".to_string());
        req.focus_areas = Some(vec!["growth".to_string(), "effort".to_string()]);
        assert_eq!(build_prompt(&req), build_prompt(&req));
    }

    #[test]
    fn test_short_encouraging_scenario() {
        let mut req = request("Good job this term.");
        req.tone = Some("encouraging".to_string());
        req.length = Some("short".to_string());

        let prompt = build_prompt(&req);
        assert!(prompt.contains("Good job this term."));
        assert!(prompt.contains("1-2 sentences"));
        assert!(prompt.contains("encouraging"));
        assert!(
            prompt.ends_with("Provide only the improved feedback text, no additional commentary.")
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("social studies"), "Social Studies");
        assert_eq!(title_case("KINDERGARTEN"), "Kindergarten");
        assert_eq!(title_case("elementary-school"), "Elementary-School");
        assert_eq!(title_case("high-SCHOOL"), "High-School");
        assert_eq!(title_case(""), "");
    }
}
