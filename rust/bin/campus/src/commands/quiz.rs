//! `campus quiz ...`

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::Result;
use campus_academic::model::{AttemptPatch, QuestionType, Quiz, QuizDraft, QuizQuestion};
use campus_academic::request::{
    CreateQuizReq, FetchQuizReq, FetchQuizzesReq, FetchStatisticsReq, StartAttemptReq,
    SubmitAttemptReq,
};
use campus_academic::{AnswerSheet, Countdown, QuizAction, QuizState, Session};
use tracing::info;

use super::{Output, cell, check, print_json};

fn print_table(quizzes: &[Quiz]) {
    println!("{:12} {:10} {:36} {:10} {:8}", "ID", "COURSE", "TITLE", "STATUS", "MINUTES");
    for q in quizzes {
        println!(
            "{:12} {:10} {:36} {:10} {:8}",
            cell(&q.id, 12),
            cell(&q.course_id, 10),
            cell(&q.title, 36),
            format!("{:?}", q.status),
            q.time_limit,
        );
    }
}

pub async fn list(session: &Session, course: Option<String>, output: Output) -> Result<()> {
    session.emit(FetchQuizzesReq::PATH, FetchQuizzesReq { course_id: course }).await;
    let state = session.slice::<QuizState>();
    check(&state.status)?;
    match output {
        Output::Json => print_json(&state.quizzes)?,
        Output::Table if state.quizzes.is_empty() => println!("No quizzes."),
        Output::Table => print_table(&state.quizzes),
    }
    Ok(())
}

async fn fetch_quiz(session: &Session, id: &str) -> Result<Quiz> {
    session.emit(FetchQuizReq::PATH, FetchQuizReq { quiz_id: id.to_string() }).await;
    let state = session.slice::<QuizState>();
    check(&state.status)?;
    state
        .current_quiz
        .clone()
        .ok_or_else(|| anyhow::anyhow!("Quiz {} not found.", id))
}

pub async fn get(session: &Session, id: &str, output: Output) -> Result<()> {
    let quiz = fetch_quiz(session, id).await?;
    if output == Output::Json {
        return print_json(&quiz);
    }
    let flagged = session.prefs().flagged(&quiz.id)?;
    println!("{} ({} questions, {} min)", quiz.title, quiz.questions.len(), quiz.time_limit);
    println!("  Open:     {} to {}", quiz.start_date, quiz.end_date);
    println!("  Passing:  {}/{}", quiz.passing_score, quiz.total_points);
    for (i, q) in quiz.questions.iter().enumerate() {
        let mark = if flagged.contains(&i) { "*" } else { " " };
        println!("{} {:>3}. [{:?}] {}", mark, i + 1, q.kind, q.question);
    }
    Ok(())
}

pub async fn create(session: &Session, json_body: &str, output: Output) -> Result<()> {
    let draft: QuizDraft =
        serde_json::from_str(json_body).map_err(|e| anyhow::anyhow!("Invalid JSON: {}", e))?;
    session.emit(CreateQuizReq::PATH, CreateQuizReq { draft }).await;
    let state = session.slice::<QuizState>();
    check(&state.status)?;
    match (output, state.quizzes.last()) {
        (Output::Json, Some(q)) => print_json(q)?,
        (_, Some(q)) => println!("Quiz {} created.", q.id),
        (_, None) => println!("Quiz created."),
    }
    Ok(())
}

pub async fn statistics(session: &Session, id: &str, output: Output) -> Result<()> {
    session
        .emit(FetchStatisticsReq::PATH, FetchStatisticsReq { quiz_id: id.to_string() })
        .await;
    let state = session.slice::<QuizState>();
    check(&state.status)?;
    let Some(stats) = &state.statistics else {
        anyhow::bail!("No statistics for quiz {}.", id);
    };
    match output {
        Output::Json => print_json(stats)?,
        Output::Table => {
            println!("Attempts:  {}", stats.total_attempts);
            println!("Average:   {:.1} (median {:.1})", stats.average_score, stats.median_score);
            println!("Range:     {:.1} to {:.1}", stats.lowest_score, stats.highest_score);
            println!("Passing:   {:.0}%", stats.passing_rate);
            println!("{:12} {:>8} {:>8}", "QUESTION", "CORRECT", "POINTS");
            for q in &stats.question_stats {
                println!(
                    "{:12} {:>7.0}% {:>8.1}",
                    cell(&q.question_id, 12),
                    q.correct_answer_rate,
                    q.average_points
                );
            }
        }
    }
    Ok(())
}

/// What the student typed for one question.
#[derive(Debug, PartialEq)]
enum Reply {
    Skip,
    Flag,
    Options(Vec<String>),
    Text(String),
}

/// Options may be given by id or by 1-based position.
fn resolve_option(question: &QuizQuestion, token: &str) -> Option<String> {
    if let Some(option) = question.options.iter().find(|o| o.id == token) {
        return Some(option.id.clone());
    }
    let index: usize = token.parse().ok()?;
    question.options.get(index.checked_sub(1)?).map(|o| o.id.clone())
}

fn parse_reply(question: &QuizQuestion, input: &str) -> Result<Reply> {
    let input = input.trim();
    match input {
        "" => return Ok(Reply::Skip),
        "!" => return Ok(Reply::Flag),
        _ => {}
    }
    match question.kind {
        QuestionType::ShortAnswer | QuestionType::Matching | QuestionType::Unknown => {
            Ok(Reply::Text(input.to_string()))
        }
        QuestionType::SingleChoice | QuestionType::TrueFalse => resolve_option(question, input)
            .map(|id| Reply::Options(vec![id]))
            .ok_or_else(|| anyhow::anyhow!("unknown option '{}'", input)),
        QuestionType::MultipleChoice => input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| {
                resolve_option(question, t)
                    .ok_or_else(|| anyhow::anyhow!("unknown option '{}'", t))
            })
            .collect::<Result<Vec<_>>>()
            .map(Reply::Options),
    }
}

fn prompt(text: &str) -> Result<String> {
    print!("{}", text);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Interactive attempt: one prompt per question, then submit.
pub async fn take(session: &Session, id: &str, output: Output) -> Result<()> {
    let quiz = fetch_quiz(session, id).await?;
    session.emit(StartAttemptReq::PATH, StartAttemptReq { quiz_id: quiz.id.clone() }).await;
    let state = session.slice::<QuizState>();
    check(&state.status)?;
    let Some(attempt) = state.current_attempt.clone() else {
        anyhow::bail!("Server did not start an attempt.");
    };
    info!(quiz = %quiz.id, attempt = %attempt.id, "attempt started");

    let total = quiz.questions.len();
    let mut sheet = AnswerSheet::new();
    let mut countdown = (quiz.time_limit > 0).then(|| Countdown::from_minutes(quiz.time_limit));
    let started = Instant::now();
    let mut ticked = 0;

    println!("{} ({} questions). Empty line skips, '!' flags for review.", quiz.title, total);
    'questions: for (i, question) in quiz.questions.iter().enumerate() {
        loop {
            let elapsed = started.elapsed().as_secs();
            if let Some(countdown) = countdown.as_mut() {
                while ticked < elapsed {
                    ticked += 1;
                    if countdown.tick() {
                        println!("Time is up.");
                    }
                }
                if countdown.expired() {
                    break 'questions;
                }
            }

            let flagged = session.prefs().flagged(&quiz.id)?.contains(&i);
            let remaining = countdown.map(|c| format!(" [{}]", c.display())).unwrap_or_default();
            println!();
            let mark = if flagged { " *" } else { "" };
            println!("{}/{}{}{} {}", i + 1, total, remaining, mark, question.question);
            for (n, option) in question.options.iter().enumerate() {
                println!("   {}) {}", n + 1, option.text);
            }

            match parse_reply(question, &prompt("> ")?) {
                Ok(Reply::Skip) => break,
                Ok(Reply::Flag) => {
                    let on = session.prefs().toggle_flag(&quiz.id, i)?;
                    println!("{}", if on { "Flagged." } else { "Unflagged." });
                }
                Ok(Reply::Options(ids)) => {
                    sheet.set(&question.id, ids);
                    break;
                }
                Ok(Reply::Text(text)) => {
                    sheet.write(&question.id, &text);
                    break;
                }
                Err(e) => println!("{}", e),
            }
        }

        session.dispatch::<QuizState>(QuizAction::UpdateCurrentAttempt(AttemptPatch {
            answers: Some(sheet.to_answers()),
            time_spent: Some(started.elapsed().as_secs()),
            ..Default::default()
        }));
        println!("Progress: {:.0}%", sheet.progress(total));
    }

    let answers = session
        .slice::<QuizState>()
        .current_attempt
        .as_ref()
        .map(|a| a.answers.clone())
        .unwrap_or_default();
    session
        .emit(
            SubmitAttemptReq::PATH,
            SubmitAttemptReq {
                quiz_id: quiz.id.clone(),
                attempt_id: attempt.id.clone(),
                answers,
            },
        )
        .await;
    let state = session.slice::<QuizState>();
    check(&state.status)?;
    session.prefs().clear_flags(&quiz.id)?;

    match (output, &state.current_attempt) {
        (Output::Json, Some(a)) => print_json(a)?,
        (_, Some(a)) => match a.score {
            Some(score) => println!("Submitted. Score: {}/{}", score, quiz.total_points),
            None => println!("Submitted ({:?}).", a.status),
        },
        (_, None) => println!("Submitted."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_academic::model::QuestionOption;

    fn question(kind: QuestionType) -> QuizQuestion {
        QuizQuestion {
            id: "1".into(),
            kind,
            options: ["a", "b", "c"]
                .iter()
                .map(|id| QuestionOption {
                    id: id.to_string(),
                    text: id.to_uppercase(),
                    is_correct: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn blank_and_bang_are_commands() {
        let q = question(QuestionType::SingleChoice);
        assert_eq!(parse_reply(&q, "\n").unwrap(), Reply::Skip);
        assert_eq!(parse_reply(&q, " ! ").unwrap(), Reply::Flag);
    }

    #[test]
    fn single_choice_by_id_or_position() {
        let q = question(QuestionType::SingleChoice);
        assert_eq!(parse_reply(&q, "b").unwrap(), Reply::Options(vec!["b".into()]));
        assert_eq!(parse_reply(&q, "3").unwrap(), Reply::Options(vec!["c".into()]));
        assert!(parse_reply(&q, "0").is_err());
        assert!(parse_reply(&q, "z").is_err());
    }

    #[test]
    fn multiple_choice_list() {
        let q = question(QuestionType::MultipleChoice);
        assert_eq!(
            parse_reply(&q, "1, c,").unwrap(),
            Reply::Options(vec!["a".into(), "c".into()])
        );
        assert!(parse_reply(&q, "a,9").is_err());
    }

    #[test]
    fn short_answer_is_text() {
        let q = question(QuestionType::ShortAnswer);
        assert_eq!(parse_reply(&q, "tri fusion\n").unwrap(), Reply::Text("tri fusion".into()));
    }

    #[test]
    fn unrecognized_kind_is_answered_as_text() {
        let q = question(QuestionType::Unknown);
        assert_eq!(parse_reply(&q, "b").unwrap(), Reply::Text("b".into()));
    }
}
