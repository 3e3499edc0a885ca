use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::models::{NewQuestion, NewSurvey, Question, Subject, Survey, SurveyResponse};
use crate::response::ApiResponse;

impl ApiClient {
    /// `GET /professor/subjects`
    pub async fn get_professor_subjects(&self) -> ApiResponse<Vec<Subject>> {
        self.call(Endpoint::ProfessorSubjects).await
    }

    /// `GET /professor/surveys`
    pub async fn get_professor_surveys(&self) -> ApiResponse<Vec<Survey>> {
        self.call(Endpoint::ProfessorSurveys).await
    }

    /// `POST /professor/surveys`
    pub async fn create_survey(&self, survey: &NewSurvey) -> ApiResponse<Survey> {
        self.call_with(Endpoint::CreateSurvey, survey).await
    }

    /// `POST /professor/surveys/{id}/questions`
    pub async fn add_question_to_survey(
        &self,
        survey_id: &str,
        question: &NewQuestion,
    ) -> ApiResponse<Question> {
        self.call_with(Endpoint::AddQuestion(survey_id.to_string()), question).await
    }

    /// `GET /professor/responses`
    pub async fn get_professor_responses(&self) -> ApiResponse<Vec<SurveyResponse>> {
        self.call(Endpoint::ProfessorResponses).await
    }

    /// `GET /professor/surveys/{id}/responses`
    pub async fn get_survey_responses(&self, survey_id: &str) -> ApiResponse<Vec<SurveyResponse>> {
        self.call(Endpoint::SurveyResponses(survey_id.to_string())).await
    }
}
