//! Prompt construction.

use crate::store::ScoredSegment;

/// Build the user turn for a question and the segments retrieved for it.
pub fn build_prompt(question: &str, segments: &[ScoredSegment]) -> String {
    let information = segments
        .iter()
        .map(|s| s.segment.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Answer the following question to the best of your ability: {}\n\n\
         Base your answer on the following information:\n{}",
        question, information
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use docbot_core::{Document, DocumentFormat, TextSegment};

    fn scored(text: &str) -> ScoredSegment {
        let doc = Document::new("doc.txt", DocumentFormat::Text, text).unwrap();
        ScoredSegment {
            segment: TextSegment::new(&doc, 0, text),
            score: 0.9,
        }
    }

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt(
            "What is Spring Boot?",
            &[scored("Spring Boot makes apps."), scored("It embeds Tomcat.")],
        );

        assert_eq!(
            prompt,
            "Answer the following question to the best of your ability: What is Spring Boot?\n\n\
             Base your answer on the following information:\n\
             Spring Boot makes apps.\n\nIt embeds Tomcat."
        );
    }

    #[test]
    fn test_build_prompt_without_information() {
        let prompt = build_prompt("Anything?", &[]);
        assert!(prompt.ends_with("Base your answer on the following information:\n"));
    }
}
