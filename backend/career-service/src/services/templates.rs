//! Learning-path and resource templates keyed by career category.
//!
//! Pure data lookups; categories without a template get the generic one.
use std::collections::HashMap;

use crate::models::{CareerCategory, CareerResources, Course, LearningPath, LearningStage};

#[derive(Debug, Clone)]
struct FocusOverride {
    foundation: &'static str,
    specialization: &'static str,
}

#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    focus: HashMap<CareerCategory, FocusOverride>,
    resources: HashMap<CareerCategory, CareerResources>,
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

impl TemplateLibrary {
    pub fn standard() -> Self {
        let focus = HashMap::from([
            (
                CareerCategory::Technology,
                FocusOverride {
                    foundation: "Programming fundamentals, algorithms, and tools",
                    specialization: "Specialized frameworks, systems design, and advanced concepts",
                },
            ),
            (
                CareerCategory::Creative,
                FocusOverride {
                    foundation: "Design principles, creative tools, and fundamental techniques",
                    specialization: "Advanced creative skills, portfolio development, and specialization",
                },
            ),
            (
                CareerCategory::Healthcare,
                FocusOverride {
                    foundation: "Medical fundamentals, terminology, and basic procedures",
                    specialization: "Specialized medical knowledge, clinical skills, and certifications",
                },
            ),
            (
                CareerCategory::Business,
                FocusOverride {
                    foundation: "Business fundamentals, analytics, and communication skills",
                    specialization: "Strategic planning, advanced analytics, and leadership development",
                },
            ),
        ]);

        let resources = HashMap::from([
            (
                CareerCategory::Technology,
                CareerResources {
                    courses: vec![
                        course("Tech Foundations", "Coursera", "https://coursera.org"),
                        course("Specialized Technical Training", "Udemy", "https://udemy.com"),
                    ],
                    books: Vec::new(),
                    tools: strings(&["Git", "VS Code", "Relevant programming languages", "Cloud platforms"]),
                    communities: strings(&["GitHub", "Stack Overflow", "Tech Meetups", "Dev Communities"]),
                    certifications: strings(&[
                        "Relevant technology certifications",
                        "Cloud certifications",
                        "Security certifications",
                    ]),
                },
            ),
            (
                CareerCategory::Creative,
                CareerResources {
                    courses: vec![
                        course("Creative Fundamentals", "Skillshare", "https://skillshare.com"),
                        course("Advanced Design Techniques", "Domestika", "https://domestika.org"),
                    ],
                    books: Vec::new(),
                    tools: strings(&[
                        "Adobe Creative Suite",
                        "Figma",
                        "Creative software",
                        "Portfolio platforms",
                    ]),
                    communities: strings(&["Dribbble", "Behance", "Creative forums", "Design communities"]),
                    certifications: Vec::new(),
                },
            ),
            (
                CareerCategory::Healthcare,
                CareerResources {
                    courses: vec![
                        course("Healthcare Basics", "edX", "https://edx.org"),
                        course("Medical Specialization", "University Programs", "#"),
                    ],
                    books: Vec::new(),
                    tools: strings(&[
                        "Medical software",
                        "Diagnostic tools",
                        "Patient management systems",
                    ]),
                    communities: strings(&[
                        "Professional associations",
                        "Medical forums",
                        "Healthcare networks",
                    ]),
                    certifications: strings(&[
                        "State licenses",
                        "Specialty certifications",
                        "CPR/BLS certification",
                    ]),
                },
            ),
        ]);

        Self { focus, resources }
    }

    /// Three-stage path, with stage focus tailored to the category
    pub fn learning_path(&self, category: CareerCategory) -> LearningPath {
        let focus = self.focus.get(&category);

        LearningPath {
            foundation: stage(
                "3-6 months",
                focus
                    .map(|f| f.foundation)
                    .unwrap_or("Core fundamentals and prerequisite knowledge"),
                &[
                    "Complete foundational courses",
                    "Build basic projects",
                    "Join relevant communities",
                ],
            ),
            specialization: stage(
                "6-12 months",
                focus
                    .map(|f| f.specialization)
                    .unwrap_or("Advanced skills and practical applications"),
                &[
                    "Complete specialized training",
                    "Build portfolio projects",
                    "Gain certifications",
                ],
            ),
            professional: stage(
                "12+ months",
                "Real-world experience and career development",
                &[
                    "Internships or entry-level positions",
                    "Networking",
                    "Continuous learning",
                ],
            ),
        }
    }

    pub fn resources(&self, category: CareerCategory) -> CareerResources {
        self.resources.get(&category).cloned().unwrap_or_default()
    }
}

fn stage(duration: &str, focus: &str, milestones: &[&str]) -> LearningStage {
    LearningStage {
        duration: duration.to_string(),
        focus: focus.to_string(),
        milestones: strings(milestones),
    }
}

fn course(name: &str, platform: &str, url: &str) -> Course {
    Course {
        name: name.to_string(),
        platform: platform.to_string(),
        url: url.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
