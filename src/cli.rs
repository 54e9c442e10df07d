//! Command-line interface parsing for cvsearch
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a client configuration plus search options.

use chrono::Duration;
use clap::Parser;
use thiserror::Error;

use crate::client::SearchOptions;
use crate::config::ClientConfig;
use crate::resources::ResourceType;
use crate::response::SearchResponse;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified resource type is not recognized
    #[error("Invalid resource type: '{0}'. Valid resource types: character, issue, location, object, person, publisher, story_arc, team, volume")]
    InvalidResource(String),
}

/// cvsearch - Search the ComicVine database from the terminal
#[derive(Parser, Debug)]
#[command(name = "cvsearch")]
#[command(about = "Search ComicVine for characters, issues, volumes and more")]
#[command(version)]
pub struct Cli {
    /// Search query
    pub query: String,

    /// Index of the first result to return
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,

    /// Number of results to return (at most 10)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub limit: i64,

    /// Restrict results to a resource type; repeat or comma-separate for several
    ///
    /// Valid types: character, issue, location, object, person, publisher,
    /// story_arc, team, volume
    #[arg(short, long = "resource", value_name = "TYPE", value_delimiter = ',')]
    pub resources: Vec<String>,

    /// Bypass the response cache for this search
    #[arg(long)]
    pub no_cache: bool,

    /// ComicVine API key
    #[arg(long, env = "COMICVINE_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Seconds a cached response stays fresh
    #[arg(long, value_name = "SECONDS")]
    pub expire_after: Option<u32>,

    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,
}

/// A search fully resolved from CLI arguments
#[derive(Debug, Clone)]
pub struct SearchCommand {
    pub config: ClientConfig,
    pub query: String,
    pub options: SearchOptions,
    pub json: bool,
}

/// Parses a resource type argument.
///
/// # Returns
/// * `Ok(ResourceType)` if the string is a known resource type
/// * `Err(CliError::InvalidResource)` if it isn't
pub fn parse_resource_arg(s: &str) -> Result<ResourceType, CliError> {
    ResourceType::from_str(s.trim()).ok_or_else(|| CliError::InvalidResource(s.to_string()))
}

impl SearchCommand {
    /// Creates a SearchCommand from parsed CLI arguments.
    ///
    /// Unknown resource types are rejected here, before any request is made.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let resources = cli
            .resources
            .iter()
            .map(|r| parse_resource_arg(r).map(|r| r.as_str().to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut config = ClientConfig::new(cli.api_key.clone());
        if let Some(secs) = cli.expire_after {
            config = config.with_expire_after(Some(Duration::seconds(i64::from(secs))));
        }

        let mut options = SearchOptions::default()
            .offset(cli.offset)
            .limit(cli.limit)
            .use_cache(!cli.no_cache);
        if !resources.is_empty() {
            options = options.resources(resources);
        }

        Ok(SearchCommand {
            config,
            query: cli.query.clone(),
            options,
            json: cli.json,
        })
    }
}

/// Renders a response as human-readable lines
pub fn render_text(response: &SearchResponse) -> String {
    let mut out = format!(
        "{} total results, showing {} from offset {}\n",
        response.number_of_total_results, response.number_of_page_results, response.offset
    );

    for result in &response.results {
        out.push_str(&format!(
            "[{}] {}",
            result.resource_type().unwrap_or("unknown"),
            result.name().unwrap_or("(unnamed)")
        ));
        if let Some(id) = result.id() {
            out.push_str(&format!(" #{}", id));
        }
        if let Some(url) = result.site_detail_url() {
            out.push_str(&format!(" {}", url));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_resource_arg_valid() {
        assert_eq!(parse_resource_arg("issue").unwrap(), ResourceType::Issue);
        assert_eq!(parse_resource_arg("story_arc").unwrap(), ResourceType::StoryArc);
        assert_eq!(parse_resource_arg(" volume ").unwrap(), ResourceType::Volume);
    }

    #[test]
    fn test_parse_resource_arg_invalid() {
        let result = parse_resource_arg("comic");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid resource type"));
        assert!(err.to_string().contains("comic"));
    }

    #[test]
    fn test_cli_parse_query_only() {
        let cli = Cli::parse_from(["cvsearch", "--api-key", "k", "watchmen"]);
        assert_eq!(cli.query, "watchmen");
        assert_eq!(cli.offset, 0);
        assert_eq!(cli.limit, 10);
        assert!(cli.resources.is_empty());
        assert!(!cli.no_cache);
        assert!(!cli.json);
        assert!(cli.expire_after.is_none());
    }

    #[test]
    fn test_cli_parse_all_flags() {
        let cli = Cli::parse_from([
            "cvsearch",
            "saga",
            "--offset",
            "20",
            "--limit",
            "-3",
            "-r",
            "issue,volume",
            "--resource",
            "team",
            "--no-cache",
            "--api-key",
            "secret",
            "--expire-after",
            "60",
            "--json",
        ]);
        assert_eq!(cli.offset, 20);
        assert_eq!(cli.limit, -3);
        assert_eq!(cli.resources, vec!["issue", "volume", "team"]);
        assert!(cli.no_cache);
        assert_eq!(cli.api_key, "secret");
        assert_eq!(cli.expire_after, Some(60));
        assert!(cli.json);
    }

    #[test]
    fn test_search_command_from_cli() {
        let cli = Cli::parse_from([
            "cvsearch", "saga", "--api-key", "k", "-r", "issue", "--no-cache", "--expire-after",
            "5",
        ]);
        let command = SearchCommand::from_cli(&cli).unwrap();

        assert_eq!(command.query, "saga");
        assert_eq!(command.config.api_key, "k");
        assert_eq!(command.config.expire_after, Some(Duration::seconds(5)));
        assert_eq!(command.options.resources, Some(vec!["issue".to_string()]));
        assert!(!command.options.use_cache);
    }

    #[test]
    fn test_search_command_without_resources_has_none() {
        let cli = Cli::parse_from(["cvsearch", "saga", "--api-key", "k"]);
        let command = SearchCommand::from_cli(&cli).unwrap();
        assert!(command.options.resources.is_none());
        assert!(command.options.use_cache);
    }

    #[test]
    fn test_search_command_rejects_unknown_resource() {
        let cli = Cli::parse_from(["cvsearch", "saga", "--api-key", "k", "-r", "issue,comic"]);
        assert!(SearchCommand::from_cli(&cli).is_err());
    }

    #[test]
    fn test_render_text() {
        let response = SearchResponse::from_json(&json!({
            "status_code": 1,
            "number_of_total_results": 42,
            "number_of_page_results": 2,
            "offset": 0,
            "results": [
                {"resource_type": "volume", "name": "Saga", "id": 48000},
                {"resource_type": "issue"}
            ]
        }));

        let text = render_text(&response);
        assert!(text.starts_with("42 total results, showing 2 from offset 0"));
        assert!(text.contains("[volume] Saga #48000"));
        assert!(text.contains("[issue] (unnamed)"));
    }
}
