use crate::infra::{build_service, parse_json};
use clap::Args;
use mindcare::config::AppConfig;
use mindcare::error::AppError;
use mindcare::wellness::{AnalysisResult, Questionnaire};
use serde_json::{json, Value};

#[derive(Args, Debug)]
pub(crate) struct ChatArgs {
    /// Message to classify
    pub(crate) message: String,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Assessment kind (`journal` or `phq`)
    #[arg(long)]
    pub(crate) kind: String,
    /// Assessment data as JSON: a string for journals, an array of ratings for PHQ-9
    #[arg(long, value_parser = parse_json)]
    pub(crate) data: Value,
}

pub(crate) fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_service(&config.wellness);
    let classification = service.classify_text(&args.message);

    println!("Category: {}", classification.category);
    println!("Reply: {}", classification.reply);
    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs { kind, data } = args;
    let config = AppConfig::load()?;
    let service = build_service(&config.wellness);

    let result = service.score(&json!({ "type": kind, "data": data }))?;
    render_analysis(&result);
    Ok(())
}

pub(crate) fn run_questionnaire() -> Result<(), AppError> {
    let questionnaire = Questionnaire::phq9();

    println!("PHQ-9 questionnaire");
    println!("{}", questionnaire.instructions);
    for (index, question) in questionnaire.questions.iter().enumerate() {
        println!("  {}. {}", index + 1, question);
    }
    println!("Answer scale:");
    for option in &questionnaire.options {
        println!("  {} = {}", option.value, option.label);
    }
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_service(&config.wellness);

    println!("MindCare analysis demo");

    println!("\nCompanion chat");
    for message in [
        "I feel so anxious and worried",
        "I've been crying all week and feel sad",
        "Work has me stressed and overwhelmed",
        "Had a really good day!",
        "The weather is nice today",
    ] {
        let classification = service.classify_text(message);
        println!("- \"{}\" -> {}", message, classification.category);
        println!("  {}", classification.reply);
    }

    println!("\nPHQ-9 screening");
    for answers in [
        json!([0, 0, 0, 0, 0, 0, 0, 0, 0]),
        json!([1, 1, 1, 1, 1, 1, 1, 1, 1]),
        json!([3, 3, 3, 3, 0, 0, 0, 0, 0]),
        json!([3, 3, 3]),
    ] {
        print!("- {} -> ", answers);
        match service.score(&json!({ "type": "phq", "data": answers })) {
            Ok(result) => render_analysis(&result),
            Err(err) => println!("rejected: {}", err),
        }
    }

    println!("\nJournal analysis");
    for entry in ["I felt happy after talking to a friend", "Long and quiet day"] {
        print!("- \"{}\" -> ", entry);
        match service.score(&json!({ "type": "journal", "data": entry })) {
            Ok(result) => render_analysis(&result),
            Err(err) => println!("rejected: {}", err),
        }
    }

    println!("\nUnrecognized request");
    print!("- voice -> ");
    match service.score(&json!({ "type": "voice", "data": null })) {
        Ok(result) => render_analysis(&result),
        Err(err) => println!("rejected: {}", err),
    }

    Ok(())
}

fn render_analysis(result: &AnalysisResult) {
    match result {
        AnalysisResult::Journal(analysis) => {
            println!("mood {:?} (score {})", analysis.mood, analysis.score)
        }
        AnalysisResult::Screening(outcome) => {
            println!("score {} | severity {}", outcome.score, outcome.severity)
        }
        AnalysisResult::Unrecognized { message } => println!("{}", message),
    }
}
