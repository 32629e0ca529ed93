use crate::entities::{document::NewDocument, project::NewProject};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=Project";

/// Seed rows skip request validation, so they must already satisfy it.
fn project(title: &str, description: &str, category: &str, technologies: &[&str]) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        link: Some("https://example.com".to_string()),
        github: Some("https://github.com".to_string()),
    }
}

fn document(title: &str, description: &str, doc_type: &str, category: &str, size: &str) -> NewDocument {
    NewDocument {
        title: title.to_string(),
        description: description.to_string(),
        doc_type: doc_type.to_string(),
        category: category.to_string(),
        file_url: "#".to_string(),
        size: size.to_string(),
    }
}

/// Sample rows for a fresh in-memory store.
pub fn sample_projects() -> Vec<NewProject> {
    vec![
        project(
            "Storefront",
            "Online shop with checkout, stock tracking and a sales dashboard.",
            "Web",
            &["React", "Node.js", "PostgreSQL"],
        ),
        project(
            "Support Chatbot",
            "Conversational assistant that triages support tickets.",
            "AI",
            &["Python", "FastAPI", "WebSocket"],
        ),
        project(
            "Metrics Board",
            "Live charts over product analytics with configurable widgets.",
            "Design",
            &["TypeScript", "D3.js"],
        ),
        project(
            "Workout Log",
            "Cross-platform app for planning workouts and tracking progress.",
            "Mobile",
            &["React Native", "Firebase"],
        ),
    ]
}

pub fn sample_documents() -> Vec<NewDocument> {
    vec![
        document(
            "Frontend Patterns Handbook",
            "Component patterns and performance notes for large frontends.",
            "PDF",
            "Guide",
            "2.4 MB",
        ),
        document(
            "API Documentation Template",
            "Starter template for documenting HTTP APIs with examples.",
            "DOC",
            "Template",
            "850 KB",
        ),
        document(
            "Resume",
            "Current resume with experience and skills.",
            "PDF",
            "Career",
            "320 KB",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::non_blank;

    #[test]
    fn sample_rows_have_no_blank_required_fields() {
        for p in sample_projects() {
            for value in [&p.title, &p.description, &p.category, &p.image] {
                assert!(non_blank(value).is_ok(), "blank field in project {:?}", p.title);
            }
        }
        for d in sample_documents() {
            for value in [&d.title, &d.description, &d.doc_type, &d.category, &d.file_url, &d.size] {
                assert!(non_blank(value).is_ok(), "blank field in document {:?}", d.title);
            }
        }
    }
}
