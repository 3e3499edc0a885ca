use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::models::{NewResponse, Subject, Survey, SurveyResponse};
use crate::response::ApiResponse;

impl ApiClient {
    /// `GET /student/subjects`
    pub async fn get_student_subjects(&self) -> ApiResponse<Vec<Subject>> {
        self.call(Endpoint::StudentSubjects).await
    }

    /// `GET /student/surveys`
    pub async fn get_student_surveys(&self) -> ApiResponse<Vec<Survey>> {
        self.call(Endpoint::StudentSurveys).await
    }

    /// `GET /student/surveys/{id}`
    pub async fn get_survey_by_id(&self, survey_id: &str) -> ApiResponse<Survey> {
        self.call(Endpoint::StudentSurvey(survey_id.to_string())).await
    }

    /// `POST /student/responses`
    ///
    /// The answer body differs between backend versions, so it is returned
    /// undecoded.
    pub async fn submit_response(&self, response: &NewResponse) -> ApiResponse<Value> {
        self.call_with(Endpoint::SubmitResponse, response).await
    }

    /// `GET /student/responses`
    pub async fn get_student_responses(&self) -> ApiResponse<Vec<SurveyResponse>> {
        self.call(Endpoint::StudentResponses).await
    }
}
