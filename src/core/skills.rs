/// Known skill and technology keywords, in declaration order
///
/// Extraction reports matches in this order, not in text order.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "javascript",
    "python",
    "java",
    "typescript",
    "c++",
    "c#",
    "php",
    "ruby",
    "go",
    "rust",
    "swift",
    "kotlin",
    // Web technologies
    "react",
    "vue",
    "angular",
    "node.js",
    "express",
    "next.js",
    "nuxt",
    "svelte",
    "html",
    "css",
    "sass",
    "tailwind",
    // Databases
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "sqlite",
    "firebase",
    "supabase",
    // Cloud & devops
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "github actions",
    // Design
    "figma",
    "sketch",
    "adobe",
    "photoshop",
    "illustrator",
    "ui/ux",
    "design",
    "prototyping",
    // Data & AI
    "machine learning",
    "data science",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    // Mobile
    "react native",
    "flutter",
    "ios",
    "android",
    "mobile development",
    // Other
    "git",
    "agile",
    "scrum",
    "project management",
    "leadership",
    "communication",
];

/// Extract known skills from free text by case-insensitive containment
///
/// Returns the matching vocabulary terms in vocabulary order. Empty or
/// unmatched input produces an empty list.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();

    SKILL_VOCABULARY
        .iter()
        .filter(|skill| text_lower.contains(*skill))
        .map(|skill| skill.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_skills_basic() {
        let found = extract_skills("I love React and Python");
        assert_eq!(found, vec!["python", "react"]);
    }

    #[test]
    fn test_extract_skills_case_insensitive() {
        let found = extract_skills("DOCKER and KuberNetes experience required");
        assert_eq!(found, vec!["docker", "kubernetes"]);
    }

    #[test]
    fn test_extract_skills_multi_word_terms() {
        let found = extract_skills("CI via GitHub Actions, models in machine learning");
        assert!(found.contains(&"github actions".to_string()));
        assert!(found.contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_extract_skills_substring_containment() {
        // "javascript" also contains "java"; containment matching reports both
        let found = extract_skills("we write javascript");
        assert_eq!(found, vec!["javascript", "java"]);
    }

    #[test]
    fn test_extract_skills_empty_text() {
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_extract_skills_no_matches() {
        assert!(extract_skills("gardening and carpentry").is_empty());
    }

    #[test]
    fn test_extract_skills_vocabulary_order() {
        // "rust" is declared before "react" despite appearing later in the text
        let found = extract_skills("react on the frontend, rust on the backend");
        assert_eq!(found, vec!["rust", "react"]);
    }
}
