use serde::{Deserialize, Serialize};

/// A starting document offered from the editor's template panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub category: String,
    pub content: String,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            content: content.into(),
        }
    }
}

/// The stock templates bundled with the document editor.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "Blank Document",
            "Basic",
            "<h1>New Document</h1><p>Start writing here...</p>",
        ),
        Template::new(
            "Business Letter",
            "Business",
            "<p>[Your Name]<br>[Your Address]</p>\
             <p>[Date]</p>\
             <p>[Recipient Name]<br>[Company Name]</p>\
             <p>Dear [Recipient Name],</p>\
             <p>I am writing to...</p>\
             <p>Sincerely,<br>[Your Name]</p>",
        ),
        Template::new(
            "Resume",
            "Professional",
            "<h1>[Your Name]</h1>\
             <p>[Your Title] | [Email] | [Phone] | [Location]</p>\
             <h2>Professional Summary</h2><p>Brief overview of your experience...</p>\
             <h2>Work Experience</h2><h3>[Job Title] - [Company Name]</h3>\
             <h2>Education</h2><h3>[Degree] - [University Name]</h3>\
             <h2>Skills</h2><p>List your key skills here...</p>",
        ),
        Template::new(
            "Meeting Minutes",
            "Business",
            "<h1>Meeting Minutes</h1>\
             <p><strong>Date:</strong> [Meeting Date]</p>\
             <p><strong>Attendees:</strong> [List of Attendees]</p>\
             <h2>Agenda Items</h2><ol><li>Agenda item 1</li></ol>\
             <h2>Action Items</h2><p>[Action item] - [Person] - [Date]</p>\
             <h2>Next Meeting</h2><p>[Next Meeting Date]</p>",
        ),
    ]
}
