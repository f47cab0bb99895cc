//! Command-line and environment configuration
//!
//! Every knob is settable as a flag or an environment variable; the LLM
//! settings are only consulted by the chat feature.

use clap::Parser;
use std::path::PathBuf;

/// Default OpenAI-compatible chat-completion endpoint
pub const DEFAULT_LLM_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Command-line arguments for sims
#[derive(Parser, Debug, Clone)]
#[command(name = "sims")]
#[command(about = "Student Information Management System server")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3301", env = "SIMS_PORT")]
    pub port: u16,

    /// Path to the student data file
    #[arg(short, long, default_value = "students.json", env = "SIMS_DATA_FILE")]
    pub data_file: PathBuf,

    /// Chat-completion endpoint URL for the LLM analysis feature
    #[arg(long, default_value = DEFAULT_LLM_API_URL, env = "LLM_API_URL")]
    pub llm_api_url: String,

    /// Model identifier sent to the LLM endpoint
    #[arg(long, default_value = "gpt-4o-mini", env = "LLM_MODEL")]
    pub llm_model: String,

    /// API key for the LLM endpoint; chat requests fail with a
    /// configuration error when unset
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub llm_api_key: Option<String>,
}
