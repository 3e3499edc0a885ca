use anyhow::Result;
use clap::{Args, Subcommand};
use survey_client::models::{NewEnrollment, NewSemester, NewSubject};
use survey_client::ApiClient;

use crate::utils::print_response;

#[derive(Args)]
pub struct AdminSubCommand {
    #[command(subcommand)]
    command: AdminCommand,
}

#[derive(Subcommand)]
enum AdminCommand {
    /// Create a semester
    CreateSemester {
        /// Display name, e.g. 2024.1
        #[arg(long)]
        name: String,
        /// Year
        #[arg(long)]
        year: i32,
        /// Period within the year
        #[arg(long)]
        period: i32,
        /// First day (RFC 3339)
        #[arg(long)]
        start_date: String,
        /// Last day (RFC 3339)
        #[arg(long)]
        end_date: String,
    },
    /// List semesters
    Semesters,
    /// Make a semester the active one
    ActivateSemester {
        /// Semester id
        semester_id: String,
    },
    /// Create a subject
    CreateSubject {
        /// Display name
        #[arg(long)]
        name: String,
        /// Unique course code
        #[arg(long)]
        code: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
        /// Owning professor
        #[arg(long)]
        professor_id: u64,
    },
    /// List subjects
    Subjects,
    /// Enroll a student in a subject for a semester
    Enroll {
        /// Student id
        #[arg(long)]
        student_id: u64,
        /// Subject id
        #[arg(long)]
        subject_id: u64,
        /// Semester id
        #[arg(long)]
        semester_id: u64,
    },
    /// List enrollments
    Enrollments,
    /// Every submitted response
    Responses,
    /// Every user
    Users,
}

pub async fn admin(client: &ApiClient, sub_command_args: &AdminSubCommand) -> Result<()> {
    match &sub_command_args.command {
        AdminCommand::CreateSemester {
            name,
            year,
            period,
            start_date,
            end_date,
        } => {
            let semester = NewSemester {
                name: name.clone(),
                year: *year,
                period: *period,
                start_date: start_date.clone(),
                end_date: end_date.clone(),
            };

            print_response(client.create_semester(&semester).await)
        }
        AdminCommand::Semesters => print_response(client.get_semesters().await),
        AdminCommand::ActivateSemester { semester_id } => {
            print_response(client.activate_semester(semester_id).await)
        }
        AdminCommand::CreateSubject {
            name,
            code,
            description,
            professor_id,
        } => {
            let subject = NewSubject {
                name: name.clone(),
                code: code.clone(),
                description: description.clone(),
                professor_id: *professor_id,
            };

            print_response(client.create_subject(&subject).await)
        }
        AdminCommand::Subjects => print_response(client.get_subjects().await),
        AdminCommand::Enroll {
            student_id,
            subject_id,
            semester_id,
        } => {
            let enrollment = NewEnrollment {
                student_id: *student_id,
                subject_id: *subject_id,
                semester_id: *semester_id,
            };

            print_response(client.create_enrollment(&enrollment).await)
        }
        AdminCommand::Enrollments => print_response(client.get_enrollments().await),
        AdminCommand::Responses => print_response(client.get_all_responses().await),
        AdminCommand::Users => print_response(client.get_all_users().await),
    }
}
