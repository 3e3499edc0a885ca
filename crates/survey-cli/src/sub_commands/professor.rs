use anyhow::Result;
use clap::{Args, Subcommand};
use survey_client::models::{NewQuestion, NewSurvey, QuestionType};
use survey_client::ApiClient;

use crate::utils::print_response;

#[derive(Args)]
pub struct ProfessorSubCommand {
    #[command(subcommand)]
    command: ProfessorCommand,
}

#[derive(Subcommand)]
enum ProfessorCommand {
    /// Subjects taught by the professor
    Subjects,
    /// Surveys created by the professor
    Surveys,
    /// Create a survey
    CreateSurvey {
        /// Title
        #[arg(long)]
        title: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
        /// Subject the survey is about
        #[arg(long)]
        subject_id: u64,
        /// Semester, defaults to the active one
        #[arg(long)]
        semester_id: Option<u64>,
        /// Opening time (RFC 3339)
        #[arg(long)]
        open_date: Option<String>,
        /// Closing time (RFC 3339)
        #[arg(long)]
        close_date: Option<String>,
    },
    /// Add a question to a survey
    AddQuestion {
        /// Survey id
        survey_id: String,
        /// Question type (nps, free_text, rating or multiple_choice)
        #[arg(long = "type")]
        question_type: QuestionType,
        /// Prompt
        #[arg(long)]
        text: String,
        /// Answer is mandatory
        #[arg(long)]
        required: bool,
        /// Position in the survey
        #[arg(long, default_value_t = 0)]
        order: i32,
        /// Choice for multiple choice questions, repeat for each one
        #[arg(long = "option")]
        options: Vec<String>,
    },
    /// Responses to the professor's surveys, or to one survey
    Responses {
        /// Only this survey
        #[arg(long)]
        survey_id: Option<String>,
    },
}

pub async fn professor(client: &ApiClient, sub_command_args: &ProfessorSubCommand) -> Result<()> {
    match &sub_command_args.command {
        ProfessorCommand::Subjects => print_response(client.get_professor_subjects().await),
        ProfessorCommand::Surveys => print_response(client.get_professor_surveys().await),
        ProfessorCommand::CreateSurvey {
            title,
            description,
            subject_id,
            semester_id,
            open_date,
            close_date,
        } => {
            let survey = NewSurvey {
                title: title.clone(),
                description: description.clone(),
                subject_id: *subject_id,
                semester_id: *semester_id,
                open_date: open_date.clone(),
                close_date: close_date.clone(),
            };

            print_response(client.create_survey(&survey).await)
        }
        ProfessorCommand::AddQuestion {
            survey_id,
            question_type,
            text,
            required,
            order,
            options,
        } => {
            let options = if options.is_empty() {
                None
            } else {
                Some(serde_json::to_string(options)?)
            };

            let question = NewQuestion {
                question_type: *question_type,
                text: text.clone(),
                required: *required,
                order: *order,
                options,
            };

            print_response(client.add_question_to_survey(survey_id, &question).await)
        }
        ProfessorCommand::Responses { survey_id } => match survey_id {
            Some(survey_id) => print_response(client.get_survey_responses(survey_id).await),
            None => print_response(client.get_professor_responses().await),
        },
    }
}
