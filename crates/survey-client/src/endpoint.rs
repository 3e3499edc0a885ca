//! Route table of the survey backend

use std::fmt;

use survey_http_client::Method;

/// One backend route: a verb and a path
///
/// Ids are interpolated verbatim, without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `POST /login`
    Login,
    /// `POST /register`
    Register,
    /// `GET /student/subjects`
    StudentSubjects,
    /// `GET /student/surveys`
    StudentSurveys,
    /// `GET /student/surveys/{id}`
    StudentSurvey(String),
    /// `POST /student/responses`
    SubmitResponse,
    /// `GET /student/responses`
    StudentResponses,
    /// `GET /professor/subjects`
    ProfessorSubjects,
    /// `GET /professor/surveys`
    ProfessorSurveys,
    /// `POST /professor/surveys`
    CreateSurvey,
    /// `POST /professor/surveys/{id}/questions`
    AddQuestion(String),
    /// `GET /professor/responses`
    ProfessorResponses,
    /// `GET /professor/surveys/{id}/responses`
    SurveyResponses(String),
    /// `POST /admin/semesters`
    CreateSemester,
    /// `GET /admin/semesters`
    Semesters,
    /// `PUT /admin/semesters/{id}/activate`
    ActivateSemester(String),
    /// `POST /admin/subjects`
    CreateSubject,
    /// `GET /admin/subjects`
    Subjects,
    /// `POST /admin/enrollments`
    CreateEnrollment,
    /// `GET /admin/enrollments`
    Enrollments,
    /// `GET /admin/responses`
    AllResponses,
    /// `GET /admin/users`
    Users,
}

impl Endpoint {
    /// HTTP verb
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Login
            | Endpoint::Register
            | Endpoint::SubmitResponse
            | Endpoint::CreateSurvey
            | Endpoint::AddQuestion(_)
            | Endpoint::CreateSemester
            | Endpoint::CreateSubject
            | Endpoint::CreateEnrollment => Method::Post,
            Endpoint::ActivateSemester(_) => Method::Put,
            Endpoint::StudentSubjects
            | Endpoint::StudentSurveys
            | Endpoint::StudentSurvey(_)
            | Endpoint::StudentResponses
            | Endpoint::ProfessorSubjects
            | Endpoint::ProfessorSurveys
            | Endpoint::ProfessorResponses
            | Endpoint::SurveyResponses(_)
            | Endpoint::Semesters
            | Endpoint::Subjects
            | Endpoint::Enrollments
            | Endpoint::AllResponses
            | Endpoint::Users => Method::Get,
        }
    }

    /// Path appended to the base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/login".to_string(),
            Endpoint::Register => "/register".to_string(),
            Endpoint::StudentSubjects => "/student/subjects".to_string(),
            Endpoint::StudentSurveys => "/student/surveys".to_string(),
            Endpoint::StudentSurvey(id) => format!("/student/surveys/{id}"),
            Endpoint::SubmitResponse | Endpoint::StudentResponses => {
                "/student/responses".to_string()
            }
            Endpoint::ProfessorSubjects => "/professor/subjects".to_string(),
            Endpoint::ProfessorSurveys | Endpoint::CreateSurvey => {
                "/professor/surveys".to_string()
            }
            Endpoint::AddQuestion(id) => format!("/professor/surveys/{id}/questions"),
            Endpoint::ProfessorResponses => "/professor/responses".to_string(),
            Endpoint::SurveyResponses(id) => format!("/professor/surveys/{id}/responses"),
            Endpoint::CreateSemester | Endpoint::Semesters => "/admin/semesters".to_string(),
            Endpoint::ActivateSemester(id) => format!("/admin/semesters/{id}/activate"),
            Endpoint::CreateSubject | Endpoint::Subjects => "/admin/subjects".to_string(),
            Endpoint::CreateEnrollment | Endpoint::Enrollments => {
                "/admin/enrollments".to_string()
            }
            Endpoint::AllResponses => "/admin/responses".to_string(),
            Endpoint::Users => "/admin/users".to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        let cases = [
            (Endpoint::Login, "POST /login"),
            (Endpoint::Register, "POST /register"),
            (Endpoint::StudentSubjects, "GET /student/subjects"),
            (Endpoint::StudentSurveys, "GET /student/surveys"),
            (Endpoint::StudentSurvey("4".into()), "GET /student/surveys/4"),
            (Endpoint::SubmitResponse, "POST /student/responses"),
            (Endpoint::StudentResponses, "GET /student/responses"),
            (Endpoint::ProfessorSubjects, "GET /professor/subjects"),
            (Endpoint::ProfessorSurveys, "GET /professor/surveys"),
            (Endpoint::CreateSurvey, "POST /professor/surveys"),
            (
                Endpoint::AddQuestion("4".into()),
                "POST /professor/surveys/4/questions",
            ),
            (Endpoint::ProfessorResponses, "GET /professor/responses"),
            (
                Endpoint::SurveyResponses("4".into()),
                "GET /professor/surveys/4/responses",
            ),
            (Endpoint::CreateSemester, "POST /admin/semesters"),
            (Endpoint::Semesters, "GET /admin/semesters"),
            (
                Endpoint::ActivateSemester("2".into()),
                "PUT /admin/semesters/2/activate",
            ),
            (Endpoint::CreateSubject, "POST /admin/subjects"),
            (Endpoint::Subjects, "GET /admin/subjects"),
            (Endpoint::CreateEnrollment, "POST /admin/enrollments"),
            (Endpoint::Enrollments, "GET /admin/enrollments"),
            (Endpoint::AllResponses, "GET /admin/responses"),
            (Endpoint::Users, "GET /admin/users"),
        ];

        for (endpoint, expected) in cases {
            assert_eq!(endpoint.to_string(), expected);
        }
    }

    #[test]
    fn test_ids_are_not_escaped() {
        let endpoint = Endpoint::StudentSurvey("a/b?c".to_string());
        assert_eq!(endpoint.path(), "/student/surveys/a/b?c");
    }
}
