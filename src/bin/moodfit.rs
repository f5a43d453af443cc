// ABOUTME: MoodFit command-line tool for profiles, daily check-ins, recommendations and evaluations
// ABOUTME: Every command prints JSON on stdout, logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Register a user
//! moodfit register --name 민수 --age 29 --activity 높음 --injury-details 무릎
//!
//! # Record today's condition
//! moodfit checkin --name 민수 --emotions "활력,설렘" --sleep 7 --minutes 90 --venue 실외
//!
//! # Recommend for a date (falls back to the latest earlier check-in)
//! moodfit recommend --name 민수 --date 2025-06-01 --city Seoul
//!
//! # Rate the workout
//! moodfit evaluate --name 민수 --rating 버피=5 --survey 5,4,4,5,3,4,5,4
//!
//! # Catalog summary per purpose and tier
//! moodfit catalog
//! ```

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use moodfit::catalog::ExerciseCatalog;
use moodfit::config::MoodFitConfig;
use moodfit::database::Database;
use moodfit::logging::LoggingConfig;
use moodfit::service::RecommendationService;
use moodfit_core::constants::evaluation::SURVEY_QUESTIONS;
use moodfit_core::models::{DailyStateRecord, Evaluation, UserProfileRecord};
use moodfit_intelligence::normalize_profile;
use serde::Serialize;
use serde_json::json;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "moodfit",
    about = "Emotion-aware workout recommendations",
    long_about = "Register users, record daily condition and get intensity-matched workout recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Exercise catalog CSV override
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Register a new user profile
    Register {
        /// Unique user name
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        gender: Option<String>,
        /// Height in centimetres
        #[arg(long)]
        height: Option<f64>,
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// 낮음 / 보통 / 높음
        #[arg(long)]
        activity: Option<String>,
        /// 없음 / 있음
        #[arg(long)]
        injury: Option<String>,
        /// Comma-separated injured body parts
        #[arg(long)]
        injury_details: Option<String>,
    },

    /// Record a daily check-in
    Checkin {
        #[arg(long)]
        name: String,
        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Comma-separated emotions, first is primary
        #[arg(long)]
        emotions: String,
        /// Hours slept
        #[arg(long)]
        sleep: Option<f64>,
        /// Available minutes
        #[arg(long)]
        minutes: Option<f64>,
        /// 낮음 / 보통 / 높음
        #[arg(long)]
        stress: Option<String>,
        #[arg(long)]
        purpose: Option<String>,
        /// 실내 / 실외
        #[arg(long)]
        venue: Option<String>,
        /// Comma-separated equipment
        #[arg(long)]
        equipment: Option<String>,
    },

    /// Recommend exercises
    Recommend {
        #[arg(long)]
        name: String,
        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Weather city, defaults to MOODFIT_DEFAULT_CITY
        #[arg(long)]
        city: Option<String>,
    },

    /// Submit a post-workout evaluation
    Evaluate {
        #[arg(long)]
        name: String,
        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Per-exercise rating as NAME=SCORE, repeatable
        #[arg(long = "rating", value_parser = parse_rating)]
        ratings: Vec<(String, u8)>,
        /// Eight comma-separated survey answers
        #[arg(long, value_delimiter = ',', required = true)]
        survey: Vec<u8>,
        #[arg(long, default_value = "")]
        liked: String,
        #[arg(long, default_value = "")]
        improvement: String,
    },

    /// Show exercise counts per purpose and tier
    Catalog,
}

fn parse_rating(value: &str) -> std::result::Result<(String, u8), String> {
    let (name, score) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=SCORE, got '{value}'"))?;
    let score = score
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("invalid score in '{value}': {e}"))?;
    Ok((name.trim().to_owned(), score))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let mut config = MoodFitConfig::from_env()?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    if let Some(path) = cli.catalog {
        config.catalog_path = path.into();
    }
    info!(database = %config.database_url, "MoodFit CLI");

    match cli.command {
        Command::Register {
            name,
            age,
            gender,
            height,
            weight,
            activity,
            injury,
            injury_details,
        } => {
            let profile = normalize_profile(&UserProfileRecord {
                name,
                age,
                gender,
                height_cm: height,
                weight_kg: weight,
                activity_level: activity,
                injury_status: injury,
                injury_details,
            })?;
            let database = Database::connect(&config.database_url).await?;
            database.profiles().register(&profile).await?;
            print_json(&profile)
        }
        Command::Checkin {
            name,
            date,
            emotions,
            sleep,
            minutes,
            stress,
            purpose,
            venue,
            equipment,
        } => {
            let record = DailyStateRecord {
                date: date.unwrap_or_else(today),
                emotions: Some(emotions),
                sleep_hours: sleep,
                available_minutes: minutes,
                stress,
                purpose,
                venue,
                equipment,
            };
            let database = Database::connect(&config.database_url).await?;
            let id = database.daily_states().record_daily_state(&name, &record).await?;
            print_json(&json!({ "id": id, "user": name, "record": record }))
        }
        Command::Recommend { name, date, city } => {
            let service = RecommendationService::from_config(&config).await?;
            let outcome = service
                .recommend(&name, date.unwrap_or_else(today), city.as_deref())
                .await?;
            print_json(&outcome)
        }
        Command::Evaluate {
            name,
            date,
            ratings,
            survey,
            liked,
            improvement,
        } => {
            let answers = survey.len();
            let survey: [u8; SURVEY_QUESTIONS] = survey.try_into().map_err(|_| {
                anyhow!("expected {SURVEY_QUESTIONS} survey answers, got {answers}")
            })?;
            let evaluation = Evaluation {
                ratings,
                survey,
                liked,
                improvement,
            };
            let date = date.unwrap_or_else(today);
            let database = Database::connect(&config.database_url).await?;
            let id = database
                .evaluations()
                .save_evaluation(&name, date, &evaluation)
                .await?;
            print_json(&json!({ "id": id, "user": name, "date": date }))
        }
        Command::Catalog => {
            let catalog = ExerciseCatalog::from_csv_path(&config.catalog_path)?;
            print_json(&json!({
                "source": config.catalog_path,
                "exercises": catalog.len(),
                "purposes": catalog.summary(),
            }))
        }
    }
}
