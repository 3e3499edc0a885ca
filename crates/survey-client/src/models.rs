//! Entities exchanged with the survey backend
//!
//! Decoding is lenient: scalar fields missing from a payload take their
//! default and related entities are optional, since list endpoints do not
//! always preload relations. The backend sends a relation it did not load
//! as a zero valued object (`"id": 0`, empty role), which decodes as `None`.
//! Timestamps are kept as the server's RFC 3339 strings.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Answers surveys
    #[default]
    Student,
    /// Owns subjects and creates surveys
    Professor,
    /// Manages semesters, subjects and enrollments
    Admin,
    /// Empty or unrecognised role string
    #[serde(rename = "", other)]
    Unknown,
}

impl Role {
    /// Name on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Professor => "professor",
            Role::Admin => "admin",
            Role::Unknown => "",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "professor" => Ok(Role::Professor),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Kind of answer a question expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Net promoter score, 0 to 10
    Nps,
    /// Free text answer
    #[default]
    FreeText,
    /// Star rating
    Rating,
    /// One of the question's options
    MultipleChoice,
    /// Empty or unrecognised type string
    #[serde(rename = "", other)]
    Unknown,
}

impl QuestionType {
    /// Name on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Nps => "nps",
            QuestionType::FreeText => "free_text",
            QuestionType::Rating => "rating",
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::Unknown => "",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "nps" => Ok(QuestionType::Nps),
            "free_text" => Ok(QuestionType::FreeText),
            "rating" => Ok(QuestionType::Rating),
            "multiple_choice" => Ok(QuestionType::MultipleChoice),
            _ => Err(format!("Unknown question type: {}", s)),
        }
    }
}

/// User profile
///
/// This is also the document cached in the session's `user` key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User id
    pub id: u64,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email, unique per account
    pub email: String,
    /// Granted role
    pub role: Role,
    /// Role asked for at registration
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub requested_role: Option<Role>,
    /// Creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Course
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    /// Subject id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Unique course code
    pub code: String,
    /// Description
    pub description: String,
    /// Owning professor
    pub professor_id: u64,
    /// Owning professor, when preloaded
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "preloaded")]
    pub professor: Option<User>,
    /// Creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Academic period, e.g. "2024.1"
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Semester {
    /// Semester id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Year
    pub year: i32,
    /// Period within the year, 1 or 2
    pub period: i32,
    /// First day
    pub start_date: String,
    /// Last day
    pub end_date: String,
    /// Only one semester is active at a time
    pub is_active: bool,
    /// Creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Student enrolled in a subject for a semester
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Enrollment {
    /// Enrollment id
    pub id: u64,
    /// Student
    pub student_id: u64,
    /// Student, when preloaded
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "preloaded")]
    pub student: Option<User>,
    /// Subject
    pub subject_id: u64,
    /// Subject, when preloaded
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "preloaded")]
    pub subject: Option<Subject>,
    /// Semester
    pub semester_id: u64,
    /// Semester, when preloaded
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "preloaded")]
    pub semester: Option<Semester>,
    /// Creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Feedback form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Survey {
    /// Survey id
    pub id: u64,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Subject the survey is about
    pub subject_id: u64,
    /// Subject, when preloaded
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "preloaded")]
    pub subject: Option<Subject>,
    /// Semester the survey runs in
    pub semester_id: u64,
    /// Semester, when preloaded
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "preloaded")]
    pub semester: Option<Semester>,
    /// Author
    pub professor_id: u64,
    /// Author, when preloaded
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "preloaded")]
    pub professor: Option<User>,
    /// Accepting answers
    pub is_active: bool,
    /// Opening time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_date: Option<String>,
    /// Closing time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<String>,
    /// Questions in display order
    #[serde(deserialize_with = "null_as_default")]
    pub questions: Vec<Question>,
    /// Creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// One question of a survey
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    /// Question id
    pub id: u64,
    /// Owning survey
    pub survey_id: u64,
    /// Answer kind
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Prompt
    pub text: String,
    /// Must be answered
    pub required: bool,
    /// Position in the survey
    pub order: i32,
    /// JSON encoded option list for multiple choice questions
    pub options: String,
}

impl Question {
    /// Decoded multiple choice options
    ///
    /// Returns an empty list when no options are set or they are not a JSON
    /// array of strings.
    pub fn option_list(&self) -> Vec<String> {
        serde_json::from_str(&self.options).unwrap_or_default()
    }
}

/// A student's answer to one question
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyResponse {
    /// Response id
    pub id: u64,
    /// Survey
    pub survey_id: u64,
    /// Survey, when preloaded
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "preloaded")]
    pub survey: Option<Survey>,
    /// Answering student
    pub student_id: u64,
    /// Answering student, when preloaded
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "preloaded")]
    pub student: Option<User>,
    /// Question
    pub question_id: u64,
    /// Question, when preloaded
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "preloaded")]
    pub question: Option<Question>,
    /// Answer text
    pub answer: String,
    /// Submission time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

/// Related entity, or `None` when the server sent null or a zero valued one
fn preloaded<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match value.get("id").and_then(Value::as_u64) {
        Some(id) if id != 0 => serde_json::from_value(value)
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

/// Treats null and `""` as unset
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        value => serde_json::from_value(value)
            .map(Some)
            .map_err(de::Error::custom),
    }
}

/// Nil slices arrive as null
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Answer of `POST /login`
///
/// Servers either wrap the profile together with a token or return the bare
/// profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoginResponse {
    /// `{"token": "...", "user": {...}}`
    Session {
        /// Auth token
        token: String,
        /// Logged in user
        user: User,
    },
    /// Bare user profile
    Profile(User),
}

impl LoginResponse {
    /// Logged in user
    pub fn user(&self) -> &User {
        match self {
            LoginResponse::Session { user, .. } => user,
            LoginResponse::Profile(user) => user,
        }
    }

    /// Auth token, when the server issued one
    pub fn token(&self) -> Option<&str> {
        match self {
            LoginResponse::Session { token, .. } => Some(token),
            LoginResponse::Profile(_) => None,
        }
    }
}

/// Body of `POST /register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email
    pub email: String,
    /// Password
    pub password: String,
    /// Role; the server defaults to student
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Body of `POST /student/responses`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewResponse {
    /// Survey being answered
    pub survey_id: u64,
    /// Question being answered
    pub question_id: u64,
    /// Answer text
    pub answer: String,
}

/// Body of `POST /professor/surveys`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSurvey {
    /// Title
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Subject
    pub subject_id: u64,
    /// Semester; the server picks the active one when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester_id: Option<u64>,
    /// Opening time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_date: Option<String>,
    /// Closing time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<String>,
}

/// Body of `POST /professor/surveys/{id}/questions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    /// Answer kind
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Prompt
    pub text: String,
    /// Must be answered
    #[serde(default)]
    pub required: bool,
    /// Position in the survey
    pub order: i32,
    /// JSON encoded option list for multiple choice questions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
}

/// Body of `POST /admin/semesters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSemester {
    /// Display name
    pub name: String,
    /// Year
    pub year: i32,
    /// Period within the year
    pub period: i32,
    /// First day
    pub start_date: String,
    /// Last day
    pub end_date: String,
}

/// Body of `POST /admin/subjects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubject {
    /// Display name
    pub name: String,
    /// Unique course code
    pub code: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Owning professor
    pub professor_id: u64,
}

/// Body of `POST /admin/enrollments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnrollment {
    /// Student
    pub student_id: u64,
    /// Subject
    pub subject_id: u64,
    /// Semester
    pub semester_id: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_subject_decodes_partial_payload() {
        let subjects: Vec<Subject> =
            serde_json::from_value(json!([{"id": 1, "name": "Math"}])).expect("decodes");
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].id, 1);
        assert_eq!(subjects[0].name, "Math");
        assert!(subjects[0].professor.is_none());
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_value(Role::Professor).expect("ser"), json!("professor"));
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert!("dean".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_blank_and_unknown_enums_decode() {
        let user: User = serde_json::from_value(json!({
            "id": 4,
            "role": "",
            "requested_role": ""
        }))
        .expect("decodes");
        assert_eq!(user.role, Role::Unknown);
        assert_eq!(user.requested_role, None);

        let user: User = serde_json::from_value(json!({"id": 4, "role": "dean"})).expect("decodes");
        assert_eq!(user.role, Role::Unknown);

        let question: Question =
            serde_json::from_value(json!({"id": 2, "type": "likert"})).expect("decodes");
        assert_eq!(question.question_type, QuestionType::Unknown);

        assert_eq!(serde_json::to_value(Role::Unknown).expect("ser"), json!(""));
    }

    #[test]
    fn test_zero_valued_relations_are_absent() {
        let survey: Survey = serde_json::from_value(json!({
            "id": 9,
            "title": "Midterm feedback",
            "subject_id": 1,
            "subject": {"id": 1, "name": "Math", "professor": {"id": 0, "role": ""}},
            "semester_id": 2,
            "semester": {"id": 0, "name": "", "start_date": "0001-01-01T00:00:00Z"},
            "professor_id": 3,
            "professor": {"id": 0, "role": "", "requested_role": ""},
            "questions": null
        }))
        .expect("decodes");

        let subject = survey.subject.expect("preloaded subject");
        assert_eq!(subject.name, "Math");
        assert!(subject.professor.is_none());
        assert!(survey.semester.is_none());
        assert!(survey.professor.is_none());
        assert!(survey.questions.is_empty());

        let response: SurveyResponse = serde_json::from_value(json!({
            "id": 1,
            "survey_id": 9,
            "survey": null,
            "question_id": 2,
            "question": {"id": 0, "type": ""},
            "answer": "8"
        }))
        .expect("decodes");
        assert!(response.survey.is_none());
        assert!(response.question.is_none());
    }

    #[test]
    fn test_question_type_wire_names() {
        let question: Question = serde_json::from_value(json!({
            "id": 3,
            "survey_id": 1,
            "type": "multiple_choice",
            "text": "Favourite topic?",
            "options": "[\"graphs\",\"trees\"]"
        }))
        .expect("decodes");

        assert_eq!(question.question_type, QuestionType::MultipleChoice);
        assert_eq!(question.option_list(), vec!["graphs", "trees"]);
        assert_eq!("free-text".parse::<QuestionType>(), Ok(QuestionType::FreeText));
    }

    #[test]
    fn test_login_response_shapes() {
        let wrapped: LoginResponse = serde_json::from_value(json!({
            "token": "jwt",
            "user": {"id": 5, "email": "a@b.com", "role": "admin"}
        }))
        .expect("decodes");
        assert_eq!(wrapped.token(), Some("jwt"));
        assert_eq!(wrapped.user().id, 5);
        assert_eq!(wrapped.user().role, Role::Admin);

        let bare: LoginResponse = serde_json::from_value(json!({
            "id": 6,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "role": "student"
        }))
        .expect("decodes");
        assert_eq!(bare.token(), None);
        assert_eq!(bare.user().full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_register_request_omits_missing_role() {
        let request = RegisterRequest {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "secret".to_string(),
            role: None,
        };
        let value = serde_json::to_value(&request).expect("ser");
        assert!(value.get("role").is_none());
    }
}
