use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::models::{
    Enrollment, NewEnrollment, NewSemester, NewSubject, Semester, Subject, SurveyResponse, User,
};
use crate::response::ApiResponse;

impl ApiClient {
    /// `POST /admin/semesters`
    pub async fn create_semester(&self, semester: &NewSemester) -> ApiResponse<Semester> {
        self.call_with(Endpoint::CreateSemester, semester).await
    }

    /// `GET /admin/semesters`
    pub async fn get_semesters(&self) -> ApiResponse<Vec<Semester>> {
        self.call(Endpoint::Semesters).await
    }

    /// `PUT /admin/semesters/{id}/activate`
    ///
    /// Sent without a body; the answer is returned undecoded.
    pub async fn activate_semester(&self, semester_id: &str) -> ApiResponse<Value> {
        self.call(Endpoint::ActivateSemester(semester_id.to_string())).await
    }

    /// `POST /admin/subjects`
    pub async fn create_subject(&self, subject: &NewSubject) -> ApiResponse<Subject> {
        self.call_with(Endpoint::CreateSubject, subject).await
    }

    /// `GET /admin/subjects`
    pub async fn get_subjects(&self) -> ApiResponse<Vec<Subject>> {
        self.call(Endpoint::Subjects).await
    }

    /// `POST /admin/enrollments`
    pub async fn create_enrollment(&self, enrollment: &NewEnrollment) -> ApiResponse<Enrollment> {
        self.call_with(Endpoint::CreateEnrollment, enrollment).await
    }

    /// `GET /admin/enrollments`
    pub async fn get_enrollments(&self) -> ApiResponse<Vec<Enrollment>> {
        self.call(Endpoint::Enrollments).await
    }

    /// `GET /admin/responses`
    pub async fn get_all_responses(&self) -> ApiResponse<Vec<SurveyResponse>> {
        self.call(Endpoint::AllResponses).await
    }

    /// `GET /admin/users`
    pub async fn get_all_users(&self) -> ApiResponse<Vec<User>> {
        self.call(Endpoint::Users).await
    }
}
