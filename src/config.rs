use crate::logs::LogFormat;
use crate::service::DEFAULT_HISTORY_MONTHS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(version, about)]
pub struct Config {
    #[arg(long, env = "LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,

    // JSON file of trend records to serve history from, if not set, will synthesize history per segment
    #[arg(long, env = "HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    // How many months of history a prediction is fitted on
    #[arg(
        long,
        env = "HISTORY_MONTHS",
        default_value_t = DEFAULT_HISTORY_MONTHS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub history_months: u32,

    // Mixed into the synthetic sample size generator
    #[arg(long, env = "HISTORY_SEED", default_value_t = 0)]
    pub seed: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Command {
    /// Print the monthly price series for a segment
    Trends {
        #[arg(long, default_value_t = 1)]
        district: u32,
        #[arg(long, default_value_t = 2)]
        rooms: u32,
        #[arg(long, default_value_t = 12)]
        months: u32,
    },
    /// Print the 6 and 12 month price forecast for a segment
    Predict {
        #[arg(long, default_value_t = 1)]
        district: u32,
        #[arg(long, default_value_t = 2)]
        rooms: u32,
    },
    /// Print forecasts for every known district and room tier
    Districts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["realty-trends", "trends"]).unwrap();

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.history_file, None);
        assert_eq!(config.history_months, DEFAULT_HISTORY_MONTHS);
        assert_eq!(
            config.command,
            Command::Trends {
                district: 1,
                rooms: 2,
                months: 12
            }
        );
    }

    #[test]
    fn test_predict_arguments() {
        let config = Config::try_parse_from([
            "realty-trends",
            "--log-format",
            "pretty",
            "--history-months",
            "24",
            "--history-file",
            "history.json",
            "predict",
            "--district",
            "3",
            "--rooms",
            "1",
        ])
        .unwrap();

        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.history_months, 24);
        assert_eq!(config.history_file, Some(PathBuf::from("history.json")));
        assert_eq!(
            config.command,
            Command::Predict {
                district: 3,
                rooms: 1
            }
        );
    }

    #[test]
    fn test_rejects_zero_history_months() {
        let result =
            Config::try_parse_from(["realty-trends", "--history-months", "0", "districts"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let result = Config::try_parse_from(["realty-trends", "--log-format", "xml", "districts"]);
        assert!(result.is_err());
    }
}
