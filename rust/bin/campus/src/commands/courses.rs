//! `campus courses ...`

use anyhow::Result;
use campus_academic::{CoursesState, Session};
use campus_academic::model::{Course, ProgressPatch};
use campus_academic::request::{EnrollReq, FetchCourseReq, FetchCoursesReq, UpdateProgressReq};

use super::{Output, cell, check, print_json};

fn print_table(courses: &[Course]) {
    println!("{:10} {:36} {:24} {:8} {:8}", "CODE", "TITLE", "TEACHER", "CREDITS", "SEATS");
    for c in courses {
        println!(
            "{:10} {:36} {:24} {:8} {:8}",
            cell(&c.code, 10),
            cell(&c.title, 36),
            cell(&c.teacher.full_name(), 24),
            c.credits,
            format!("{}/{}", c.enrolled_students, c.max_students),
        );
    }
}

pub async fn list(session: &Session, output: Output) -> Result<()> {
    session.emit(FetchCoursesReq::PATH, FetchCoursesReq).await;
    let state = session.slice::<CoursesState>();
    check(&state.status)?;
    match output {
        Output::Json => print_json(&state.courses)?,
        Output::Table if state.courses.is_empty() => println!("No courses."),
        Output::Table => print_table(&state.courses),
    }
    Ok(())
}

pub async fn get(session: &Session, id: &str, output: Output) -> Result<()> {
    session
        .emit(FetchCourseReq::PATH, FetchCourseReq { course_id: id.to_string() })
        .await;
    let state = session.slice::<CoursesState>();
    check(&state.status)?;
    let Some(course) = &state.current_course else {
        anyhow::bail!("Course {} not found.", id);
    };
    match output {
        Output::Json => print_json(course)?,
        Output::Table => {
            println!("{} {}", course.code, course.title);
            println!("  Teacher:  {}", course.teacher.full_name());
            println!("  Dates:    {} to {}", course.start_date, course.end_date);
            println!("  Credits:  {}", course.credits);
            for slot in &course.schedule {
                println!(
                    "  Day {}:    {}-{} ({})",
                    slot.day_of_week, slot.start_time, slot.end_time, slot.room
                );
            }
            if !course.description.is_empty() {
                println!();
                println!("{}", course.description);
            }
        }
    }
    Ok(())
}

pub async fn enroll(session: &Session, id: &str) -> Result<()> {
    session.emit(EnrollReq::PATH, EnrollReq { course_id: id.to_string() }).await;
    let state = session.slice::<CoursesState>();
    check(&state.status)?;
    println!("Enrolled in {}.", id);
    Ok(())
}

pub async fn progress(
    session: &Session,
    id: &str,
    percent: Option<f64>,
    modules: Vec<String>,
    output: Output,
) -> Result<()> {
    let progress = ProgressPatch {
        course_id: Some(id.to_string()),
        progress: percent,
        completed_modules: (!modules.is_empty()).then_some(modules),
        ..Default::default()
    };
    session.emit(UpdateProgressReq::PATH, UpdateProgressReq { progress }).await;
    let state = session.slice::<CoursesState>();
    check(&state.status)?;
    let Some(current) = state.progress.iter().find(|p| p.course_id == id) else {
        anyhow::bail!("Server returned no progress for {}.", id);
    };
    match output {
        Output::Json => print_json(current)?,
        Output::Table => println!(
            "{}: {:.0}% ({} modules done)",
            id,
            current.progress,
            current.completed_modules.len()
        ),
    }
    Ok(())
}
