use serde::{Deserialize, Serialize};

/// One portfolio entry. The whole catalog is literal data compiled into the
/// binary; display order is declaration order.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub link: String,
}

impl Project {
    fn new(title: &str, description: &str, image: &str, technologies: &[&str], link: &str) -> Self {
        Self {
            title: String::from(title),
            description: String::from(description),
            image: String::from(image),
            technologies: technologies.iter().map(|t| String::from(*t)).collect(),
            link: String::from(link),
        }
    }
}

/// The featured projects, in the order they appear in the gallery.
// The "#" links are placeholders until the projects have public homes.
pub fn showcase() -> Vec<Project> {
    vec![
        Project::new(
            "E-Commerce Platform",
            "A full-featured online store with cart functionality and secure payments",
            "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=800",
            &["React", "Node.js", "Stripe", "MongoDB"],
            "#",
        ),
        Project::new(
            "Task Management App",
            "Collaborative project management tool with real-time updates",
            "https://images.unsplash.com/photo-1507238691740-187a5b1d37b8?auto=format&fit=crop&q=80&w=800",
            &["React", "Firebase", "Material-UI"],
            "#",
        ),
        Project::new(
            "Social Media Dashboard",
            "Analytics and management platform for social media accounts",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=800",
            &["React", "TypeScript", "Chart.js"],
            "#",
        ),
    ]
}
