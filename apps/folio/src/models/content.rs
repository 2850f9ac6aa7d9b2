use serde::{Deserialize, Serialize};

// Missing keys decode to empty values; only malformed JSON or a wrong shape
// is an error.

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralInfo {
    /// Full name: surname, name, patronymic.
    #[serde(rename = "SNP")]
    pub snp: String,
    pub position: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummaryParagraph {
    pub paragraph: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Education {
    #[serde(rename = "type")]
    pub kind: String,
    pub organisation: String,
    pub grad: String,
    pub start: String,
    pub end: String,
    pub department: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Contacts {
    pub phone: String,
    pub telegram: String,
    pub email: String,
    pub github_link: String,
    pub city: String,
    pub country: String,
    pub relocation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Language {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
    pub description: String,
    pub stack: String,
    pub comment: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Workplace {
    pub organisation: String,
    pub position: String,
    pub start: String,
    pub end: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkExperiences {
    pub seniority: String,
    pub workplaces: Vec<Workplace>,
}

/// Everything a page template can see. Built once at startup and shared
/// read-only between requests.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PageContent {
    pub general_info: GeneralInfo,
    pub summary: Vec<SummaryParagraph>,
    pub educations: Vec<Education>,
    pub contacts: Contacts,
    pub languages: Vec<Language>,
    pub work_experiences: WorkExperiences,
    pub skills: Vec<Skill>,
    pub portrait_path: String,
}

impl PageContent {
    pub fn project_count(&self) -> usize {
        self.work_experiences
            .workplaces
            .iter()
            .map(|w| w.projects.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_info_uses_snp_key() {
        let info: GeneralInfo =
            serde_json::from_str(r#"{"SNP": "Ivanov Ivan Ivanovich", "position": "Backend Engineer"}"#)
                .unwrap();
        assert_eq!(info.snp, "Ivanov Ivan Ivanovich");
        assert_eq!(info.position, "Backend Engineer");
    }

    #[test]
    fn test_project_comment_defaults_to_empty() {
        let project: Project =
            serde_json::from_str(r#"{"description": "Billing service", "stack": "Go, Postgres"}"#)
                .unwrap();
        assert!(project.comment.is_empty());
    }

    #[test]
    fn test_education_missing_key_defaults_to_empty() {
        let raw = r#"{"type": "Bachelor", "organisation": "MSU", "grad": "BSc", "start": "2010", "end": "2014"}"#;
        let education: Education = serde_json::from_str(raw).unwrap();
        assert_eq!(education.organisation, "MSU");
        assert!(education.department.is_empty());
    }

    #[test]
    fn test_workplace_without_projects_has_none() {
        let workplace: Workplace =
            serde_json::from_str(r#"{"organisation": "Acme", "position": "Intern"}"#).unwrap();
        assert!(workplace.projects.is_empty());
        assert!(workplace.start.is_empty());
    }

    #[test]
    fn test_wrong_field_type_is_still_an_error() {
        let result: Result<Skill, _> = serde_json::from_str(r#"{"name": ["Go"], "level": "expert"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_project_count_spans_workplaces() {
        let project = Project {
            description: "CRM".to_string(),
            stack: "Rust".to_string(),
            comment: String::new(),
        };
        let workplace = Workplace {
            organisation: "Acme".to_string(),
            position: "Engineer".to_string(),
            start: "2019".to_string(),
            end: "2021".to_string(),
            projects: vec![project.clone(), project],
        };
        let content = PageContent {
            work_experiences: WorkExperiences {
                seniority: "Senior".to_string(),
                workplaces: vec![workplace.clone(), workplace],
            },
            ..Default::default()
        };
        assert_eq!(content.project_count(), 4);
    }
}
