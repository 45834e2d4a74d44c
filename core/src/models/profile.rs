use serde::{Deserialize, Serialize};

/// Employee profile as the profile endpoint returns it: employee record
/// columns joined with the profile row, so keys stay snake_case and unset
/// columns arrive as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub employee_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub project_summary: Option<String>,
    #[serde(default)]
    pub work_experience: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Option<EducationRecord>,
    #[serde(default)]
    pub resume_path: Option<String>,
}

impl EmployeeProfile {
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();
        format!("{first} {last}").trim().to_string()
    }

    pub fn has_resume(&self) -> bool {
        filled(&self.resume_path)
    }

    /// Walks the profile checklist the dashboard shows: four free-text
    /// fields plus skills, education and an uploaded resume.
    pub fn completion(&self) -> ProfileCompletion {
        ProfileCompletion {
            items: vec![
                CompletionItem {
                    label: "mobile number",
                    done: filled(&self.mobile_number),
                },
                CompletionItem {
                    label: "department",
                    done: filled(&self.department),
                },
                CompletionItem {
                    label: "project summary",
                    done: filled(&self.project_summary),
                },
                CompletionItem {
                    label: "work experience",
                    done: filled(&self.work_experience),
                },
                CompletionItem {
                    label: "skills",
                    done: !self.skills.is_empty(),
                },
                CompletionItem {
                    label: "education",
                    done: self.education.is_some(),
                },
                CompletionItem {
                    label: "resume",
                    done: self.has_resume(),
                },
            ],
        }
    }
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: &'static str,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCompletion {
    items: Vec<CompletionItem>,
}

impl ProfileCompletion {
    pub fn items(&self) -> &[CompletionItem] {
        &self.items
    }

    pub fn completed(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Completion percentage rounded to the nearest whole number.
    pub fn percent(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        ((self.completed() * 100) as f64 / self.total() as f64).round() as u8
    }
}

/// Schooling and degree details, stored as one flat object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub x_school: String,
    pub x_board: String,
    pub x_percentage: String,
    pub x_year_of_passing: String,
    pub xii_school: String,
    pub xii_board: String,
    pub xii_percentage: String,
    pub xii_year_of_passing: String,
    pub college_name: String,
    pub degree: String,
    pub major: String,
    pub college_percentage: String,
    pub college_year_of_passing: String,
}

/// Body for the profile update endpoint; only these four fields are
/// editable there.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub mobile_number: String,
    pub department: String,
    pub project_summary: String,
    pub work_experience: String,
}
