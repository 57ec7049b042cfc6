//! `campus assignments ...`

use std::path::{Path, PathBuf};

use anyhow::Result;
use campus_academic::model::{Assignment, UploadFile};
use campus_academic::request::{
    FetchAssignmentReq, FetchAssignmentsReq, GradeSubmissionReq, SubmitAssignmentReq,
};
use campus_academic::{AssignmentsState, Session};
use tracing::info;

use super::{Output, cell, check, print_json};

fn print_table(assignments: &[Assignment]) {
    println!("{:12} {:10} {:36} {:12} {:20}", "ID", "COURSE", "TITLE", "STATUS", "DUE");
    for a in assignments {
        println!(
            "{:12} {:10} {:36} {:12} {:20}",
            cell(&a.id, 12),
            cell(&a.course_id, 10),
            cell(&a.title, 36),
            format!("{:?}", a.status),
            a.due_date,
        );
    }
}

pub async fn list(session: &Session, course: Option<String>, output: Output) -> Result<()> {
    session
        .emit(FetchAssignmentsReq::PATH, FetchAssignmentsReq { course_id: course })
        .await;
    let state = session.slice::<AssignmentsState>();
    check(&state.status)?;
    match output {
        Output::Json => print_json(&state.assignments)?,
        Output::Table if state.assignments.is_empty() => println!("No assignments."),
        Output::Table => print_table(&state.assignments),
    }
    Ok(())
}

pub async fn get(session: &Session, id: &str, output: Output) -> Result<()> {
    session
        .emit(FetchAssignmentReq::PATH, FetchAssignmentReq { assignment_id: id.to_string() })
        .await;
    let state = session.slice::<AssignmentsState>();
    check(&state.status)?;
    let Some(a) = &state.current_assignment else {
        anyhow::bail!("Assignment {} not found.", id);
    };
    match output {
        Output::Json => print_json(a)?,
        Output::Table => {
            println!("{} ({:?})", a.title, a.kind);
            println!("  Due:      {}", a.due_date);
            println!("  Points:   {} (weight {})", a.total_points, a.weight);
            println!("  Accepts:  {:?}", a.submission_type);
            for file in &a.attachments {
                println!("  File:     {} ({} bytes)", file.file_name, file.file_size);
            }
            if !a.description.is_empty() {
                println!();
                println!("{}", a.description);
            }
        }
    }
    Ok(())
}

fn read_upload(path: &Path) -> Result<UploadFile> {
    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(UploadFile::new(name, bytes))
}

pub async fn submit(
    session: &Session,
    id: &str,
    files: Vec<PathBuf>,
    comment: Option<String>,
    output: Output,
) -> Result<()> {
    let files = files.iter().map(|p| read_upload(p)).collect::<Result<Vec<_>>>()?;
    info!(assignment = id, files = files.len(), "submitting");
    session
        .emit(
            SubmitAssignmentReq::PATH,
            SubmitAssignmentReq {
                assignment_id: id.to_string(),
                files,
                comment,
            },
        )
        .await;
    let state = session.slice::<AssignmentsState>();
    check(&state.status)?;
    match (output, state.submissions.last()) {
        (Output::Json, Some(s)) => print_json(s)?,
        (_, Some(s)) => println!("Submission {} recorded ({:?}).", s.id, s.status),
        (_, None) => println!("Submitted."),
    }
    Ok(())
}

pub async fn grade(
    session: &Session,
    submission: &str,
    grade: f64,
    feedback: String,
    output: Output,
) -> Result<()> {
    session
        .emit(
            GradeSubmissionReq::PATH,
            GradeSubmissionReq {
                submission_id: submission.to_string(),
                grade,
                feedback,
            },
        )
        .await;
    let state = session.slice::<AssignmentsState>();
    check(&state.status)?;
    match (output, state.grades.last()) {
        (Output::Json, Some(g)) => print_json(g)?,
        _ => println!("Submission {} graded {}.", submission, grade),
    }
    Ok(())
}
