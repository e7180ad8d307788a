//! Core types shared across UserSearch: search criteria, endpoint and column
//! schemas, user records, projected result sets, and form outcomes.

use serde_json::{Map, Value};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Column schemas
// ---------------------------------------------------------------------------

/// One displayed column: the server field it reads and the header it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

const fn col(key: &'static str, label: &'static str) -> Column {
    Column { key, label }
}

pub const BY_ID_COLUMNS: &[Column] = &[
    col("UserID", "UserID"),
    col("Name", "Name"),
    col("Occupation", "Occupation"),
    col("Location", "Location"),
    col("Age", "Age"),
    col("Bio", "Bio"),
    col("Industry", "Industry"),
    col("NUCollege", "NUCollege"),
];

pub const BY_INDUSTRY_COLUMNS: &[Column] = &[
    col("UserID", "UserID"),
    col("Name", "Name"),
    col("Bio", "Bio"),
    col("IndustryName", "IndustryName"),
    col("NUCollege", "NUCollege"),
];

pub const BY_SKILLS_COLUMNS: &[Column] = &[
    col("UserID", "UserID"),
    col("Name", "Name"),
    col("Bio", "Bio"),
    col("Occupation", "Occupation"),
    col("CompanyName", "CompanyName"),
    col("SoftSkills", "SoftSkills"),
    col("TechnicalSkills", "TechnicalSkills"),
];

pub const BY_YEAR_COLUMNS: &[Column] = &[
    col("UserID", "UserID"),
    col("Name", "Name"),
    col("Bio", "Bio"),
    col("IndustryName", "IndustryName"),
    col("NUCollege", "NUCollege"),
];

pub const SUCCESS_MESSAGE: &str = "Successfully fetched data from the API.";
pub const NO_DATA_MESSAGE: &str = "No user data available.";
pub const NO_DATA_FOR_YEAR_MESSAGE: &str = "No user data available for the specified year.";

// ---------------------------------------------------------------------------
// Search criteria
// ---------------------------------------------------------------------------

/// Raw values collected by one form submission, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriteria {
    ById { user_id: i64 },
    ByIndustry { industry: String },
    BySkills { soft_skills: String, tech_skills: String },
    ByYear { year: String },
    ViewProfile { user_id: i64 },
}

/// What a validated submission asks the panel to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Lookup(Lookup),
    ViewProfile { user_id: i64 },
}

impl SearchCriteria {
    /// Check required fields are present. Text is checked for emptiness only
    /// and passed on exactly as entered.
    pub fn validate(&self) -> Result<Submission, ValidationError> {
        match self {
            SearchCriteria::ById { user_id } => {
                if *user_id == 0 {
                    return Err(ValidationError::MissingUserId);
                }
                Ok(Submission::Lookup(Lookup::ById { user_id: *user_id }))
            }
            SearchCriteria::ByIndustry { industry } => {
                let industry = required(industry).ok_or(ValidationError::MissingIndustry)?;
                Ok(Submission::Lookup(Lookup::ByIndustry { industry }))
            }
            SearchCriteria::BySkills { soft_skills, tech_skills } => {
                match (required(soft_skills), required(tech_skills)) {
                    (Some(soft_skills), Some(tech_skills)) => {
                        Ok(Submission::Lookup(Lookup::BySkills { soft_skills, tech_skills }))
                    }
                    _ => Err(ValidationError::MissingSkills),
                }
            }
            SearchCriteria::ByYear { year } => {
                let year = required(year).ok_or(ValidationError::MissingYear)?;
                Ok(Submission::Lookup(Lookup::ByYear { year }))
            }
            SearchCriteria::ViewProfile { user_id } => {
                if *user_id == 0 {
                    return Err(ValidationError::MissingUserId);
                }
                Ok(Submission::ViewProfile { user_id: *user_id })
            }
        }
    }
}

fn required(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Lookups (validated, table-producing requests)
// ---------------------------------------------------------------------------

/// A validated lookup, bound to one endpoint and one column schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    ById { user_id: i64 },
    ByIndustry { industry: String },
    BySkills { soft_skills: String, tech_skills: String },
    ByYear { year: String },
}

impl Lookup {
    /// Request path relative to the API base address.
    pub fn path(&self) -> String {
        match self {
            Lookup::ById { user_id } => format!("/aa/users/view/{user_id}"),
            Lookup::ByIndustry { .. } => "/aa/users/by-industry".to_string(),
            Lookup::BySkills { .. } => "/aa/users/by-skills".to_string(),
            Lookup::ByYear { .. } => "/aaa/student/by-year".to_string(),
        }
    }

    /// JSON body sent with the GET, if the endpoint takes one.
    pub fn body(&self) -> Option<Value> {
        match self {
            Lookup::ById { .. } => None,
            Lookup::ByIndustry { industry } => Some(serde_json::json!({ "industry": industry })),
            Lookup::BySkills { soft_skills, tech_skills } => Some(serde_json::json!({
                "soft_skills": soft_skills,
                "tech_skills": tech_skills,
            })),
            Lookup::ByYear { year } => Some(serde_json::json!({ "year": year })),
        }
    }

    pub fn columns(&self) -> &'static [Column] {
        match self {
            Lookup::ById { .. } => BY_ID_COLUMNS,
            Lookup::ByIndustry { .. } => BY_INDUSTRY_COLUMNS,
            Lookup::BySkills { .. } => BY_SKILLS_COLUMNS,
            Lookup::ByYear { .. } => BY_YEAR_COLUMNS,
        }
    }

    /// Line shown while the search runs, for the forms that announce themselves.
    pub fn progress_note(&self) -> Option<String> {
        match self {
            Lookup::ByIndustry { industry } => {
                Some(format!("searching for users in industry: '{industry}'"))
            }
            Lookup::ByYear { year } => Some(format!("Searching for users in year: '{year}'")),
            _ => None,
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Lookup::ByYear { .. } => NO_DATA_FOR_YEAR_MESSAGE,
            _ => NO_DATA_MESSAGE,
        }
    }

    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Lookup::ById { .. } => "by_id",
            Lookup::ByIndustry { .. } => "by_industry",
            Lookup::BySkills { .. } => "by_skills",
            Lookup::ByYear { .. } => "by_year",
        }
    }
}

// ---------------------------------------------------------------------------
// Records and result sets
// ---------------------------------------------------------------------------

/// One user row exactly as the server returned it. Field sets vary per endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserRecord(pub Map<String, Value>);

impl UserRecord {
    /// Values for `columns` in order; missing fields become `null`.
    pub fn project(&self, columns: &[Column]) -> Vec<Value> {
        columns
            .iter()
            .map(|c| self.0.get(c.key).cloned().unwrap_or(Value::Null))
            .collect()
    }
}

/// Rows projected onto a fixed column list, in server response order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub columns: &'static [Column],
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn project(columns: &'static [Column], records: &[UserRecord]) -> Self {
        Self {
            columns,
            rows: records.iter().map(|r| r.project(columns)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of the named column in the given row.
    pub fn cell(&self, row: usize, label: &str) -> Option<&Value> {
        let idx = self.columns.iter().position(|c| c.label == label)?;
        self.rows.get(row)?.get(idx)
    }

    /// Rows as JSON objects keyed by column label, keys in column order.
    pub fn to_json(&self) -> Value {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let obj: Map<String, Value> = self
                    .columns
                    .iter()
                    .zip(row)
                    .map(|(c, v)| (c.label.to_string(), v.clone()))
                    .collect();
                Value::Object(obj)
            })
            .collect();
        Value::Array(rows)
    }
}

/// Parse a response body into records. The body must be a JSON array of objects.
pub fn parse_records(body: Value) -> Result<Vec<UserRecord>, String> {
    let items = match body {
        Value::Array(items) => items,
        other => return Err(format!("expected a JSON array, got {}", json_kind(&other))),
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(UserRecord(map)),
            other => Err(format!("record {i} is {}, not an object", json_kind(&other))),
        })
        .collect()
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Form outcomes
// ---------------------------------------------------------------------------

/// What a form displays after one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// A required field was missing; no request was made.
    Invalid(String),
    /// Rows came back; show the success line and the table.
    Found { message: String, results: ResultSet },
    /// The call succeeded with zero rows.
    Empty(String),
    /// Transport, status, or decode failure.
    Failed(String),
    /// Profile selection recorded and navigation requested. `profile` holds
    /// the rows returned by the existence check.
    Opened { user_id: i64, profile: ResultSet },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> UserRecord {
        match v {
            Value::Object(m) => UserRecord(m),
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_validate_rejects_zero_ids() {
        assert_eq!(
            SearchCriteria::ById { user_id: 0 }.validate(),
            Err(ValidationError::MissingUserId)
        );
        assert_eq!(
            SearchCriteria::ViewProfile { user_id: 0 }.validate(),
            Err(ValidationError::MissingUserId)
        );
    }

    #[test]
    fn test_validate_accepts_negative_id() {
        let sub = SearchCriteria::ById { user_id: -3 }.validate().unwrap();
        assert_eq!(sub, Submission::Lookup(Lookup::ById { user_id: -3 }));
    }

    #[test]
    fn test_validate_keeps_text_as_entered() {
        let sub = SearchCriteria::ByIndustry { industry: "  Finance \n".into() }
            .validate()
            .unwrap();
        assert_eq!(
            sub,
            Submission::Lookup(Lookup::ByIndustry { industry: "  Finance \n".into() })
        );

        // Whitespace is still input; only an empty field is missing.
        let sub = SearchCriteria::ByYear { year: "   ".into() }.validate().unwrap();
        assert_eq!(sub, Submission::Lookup(Lookup::ByYear { year: "   ".into() }));
        assert_eq!(
            SearchCriteria::ByYear { year: String::new() }.validate(),
            Err(ValidationError::MissingYear)
        );
    }

    #[test]
    fn test_validate_skills_needs_both() {
        let only_soft = SearchCriteria::BySkills {
            soft_skills: "teamwork".into(),
            tech_skills: String::new(),
        };
        assert_eq!(only_soft.validate(), Err(ValidationError::MissingSkills));

        let only_tech = SearchCriteria::BySkills {
            soft_skills: String::new(),
            tech_skills: "rust".into(),
        };
        assert_eq!(only_tech.validate(), Err(ValidationError::MissingSkills));
    }

    #[test]
    fn test_lookup_paths_and_bodies() {
        assert_eq!(Lookup::ById { user_id: 7 }.path(), "/aa/users/view/7");
        assert!(Lookup::ById { user_id: 7 }.body().is_none());

        let skills = Lookup::BySkills { soft_skills: "a".into(), tech_skills: "b".into() };
        assert_eq!(skills.path(), "/aa/users/by-skills");
        assert_eq!(skills.body(), Some(json!({ "soft_skills": "a", "tech_skills": "b" })));

        let year = Lookup::ByYear { year: "2025".into() };
        assert_eq!(year.path(), "/aaa/student/by-year");
        assert_eq!(year.body(), Some(json!({ "year": "2025" })));
        assert_eq!(year.empty_message(), NO_DATA_FOR_YEAR_MESSAGE);
    }

    #[test]
    fn test_progress_notes() {
        let industry = Lookup::ByIndustry { industry: "Tech".into() };
        assert_eq!(
            industry.progress_note().as_deref(),
            Some("searching for users in industry: 'Tech'")
        );
        assert!(Lookup::ById { user_id: 1 }.progress_note().is_none());
    }

    #[test]
    fn test_project_fills_missing_and_drops_extra() {
        let r = record(json!({ "UserID": 1, "Name": "Ada", "Secret": "x" }));
        let row = r.project(BY_INDUSTRY_COLUMNS);
        assert_eq!(row.len(), BY_INDUSTRY_COLUMNS.len());
        assert_eq!(row[0], json!(1));
        assert_eq!(row[1], json!("Ada"));
        assert_eq!(row[2], Value::Null);
        assert!(!row.contains(&json!("x")));
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        assert!(parse_records(json!({ "UserID": 1 })).is_err());
        assert!(parse_records(json!([1, 2])).is_err());
        assert_eq!(parse_records(json!([])).unwrap().len(), 0);
    }

    #[test]
    fn test_result_set_to_json_keeps_order() {
        let records = vec![
            record(json!({ "UserID": 2, "Name": "B" })),
            record(json!({ "UserID": 1, "Name": "A" })),
        ];
        let rs = ResultSet::project(BY_YEAR_COLUMNS, &records);
        let out = rs.to_json();
        assert_eq!(out[0]["UserID"], json!(2));
        assert_eq!(out[1]["Name"], json!("A"));
        assert_eq!(rs.cell(1, "UserID"), Some(&json!(1)));
        assert_eq!(rs.cell(0, "Nope"), None);
    }
}
