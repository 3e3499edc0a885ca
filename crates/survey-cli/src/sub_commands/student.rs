use anyhow::Result;
use clap::{Args, Subcommand};
use survey_client::models::NewResponse;
use survey_client::ApiClient;

use crate::utils::print_response;

#[derive(Args)]
pub struct StudentSubCommand {
    #[command(subcommand)]
    command: StudentCommand,
}

#[derive(Subcommand)]
enum StudentCommand {
    /// Subjects the student is enrolled in
    Subjects,
    /// Surveys open to the student
    Surveys,
    /// One survey with its questions
    Survey {
        /// Survey id
        survey_id: String,
    },
    /// Answer a question
    Answer {
        /// Survey id
        #[arg(long)]
        survey_id: u64,
        /// Question id
        #[arg(long)]
        question_id: u64,
        /// Answer text
        answer: String,
    },
    /// Answers already submitted
    Responses,
}

pub async fn student(client: &ApiClient, sub_command_args: &StudentSubCommand) -> Result<()> {
    match &sub_command_args.command {
        StudentCommand::Subjects => print_response(client.get_student_subjects().await),
        StudentCommand::Surveys => print_response(client.get_student_surveys().await),
        StudentCommand::Survey { survey_id } => {
            print_response(client.get_survey_by_id(survey_id).await)
        }
        StudentCommand::Answer {
            survey_id,
            question_id,
            answer,
        } => {
            let response = NewResponse {
                survey_id: *survey_id,
                question_id: *question_id,
                answer: answer.clone(),
            };

            print_response(client.submit_response(&response).await)
        }
        StudentCommand::Responses => print_response(client.get_student_responses().await),
    }
}
