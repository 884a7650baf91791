// Prompt templates for the résumé summarizer.

use std::sync::LazyLock;

use regex::Regex;

static PDF_EXTENSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\.pdf$").unwrap());
static RESUME_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)resume").unwrap());

pub const RESUME_SUMMARY_PROMPT: &str = "\
You are a professional resume analyzer. Please analyze the following resume and provide a clean, \
well-structured summary without using markdown formatting, asterisks, or bullet points.

{name_hint}

Format your response as follows:

PROFESSIONAL SUMMARY:
[Write a 2-3 sentence overview of the candidate]

KEY SKILLS:
[List the main technical and soft skills in a flowing paragraph]

EXPERIENCE HIGHLIGHTS:
[Summarize the work experience in 2-3 sentences, mentioning key roles and achievements]

EDUCATION:
[Mention the educational background briefly]

CAREER LEVEL:
[Indicate if they are entry-level, mid-level, senior, or expert based on experience]

Please write in a professional, clean format without any special characters, markdown, or formatting symbols.

Resume to analyze:
{resume_text}
";

/// Guesses a candidate name from an upload filename, e.g.
/// `jane_doe-resume.pdf` → `jane doe`. Empty when nothing is left.
pub fn candidate_name_hint(filename: &str) -> String {
    let spaced = filename.replace(['_', '-'], " ");
    let without_ext = PDF_EXTENSION.replace(&spaced, "");
    RESUME_WORD.replace(&without_ext, "").trim().to_string()
}

pub fn build_summary_prompt(resume_text: &str, filename: &str) -> String {
    let name = candidate_name_hint(filename);
    let name_hint = if name.is_empty() {
        String::new()
    } else {
        format!("Note: The candidate's name appears to be: {name}")
    };
    RESUME_SUMMARY_PROMPT
        .replace("{name_hint}", &name_hint)
        .replace("{resume_text}", resume_text)
}
