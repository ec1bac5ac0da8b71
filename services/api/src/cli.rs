use crate::server;
use clap::{Args, Parser, Subcommand};
use support_link::config::{AppConfig, SupportConfig};
use support_link::error::AppError;
use support_link::support::build_support_link;
use support_link::text::NormalizedText;

#[derive(Parser, Debug)]
#[command(
    name = "Support Link Service",
    about = "Serve WhatsApp support links and inspect name normalization from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the normalized form of each input
    Normalize(NormalizeArgs),
    /// Report whether two names are treated as the same place
    Match(MatchArgs),
    /// Print the support link for a session using the configured number
    Link(LinkArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
struct NormalizeArgs {
    /// Raw names to normalize
    #[arg(required = true)]
    text: Vec<String>,
}

#[derive(Args, Debug)]
struct MatchArgs {
    left: String,
    right: String,
}

#[derive(Args, Debug)]
struct LinkArgs {
    /// Session identifier quoted in the pre-filled message
    #[arg(long)]
    session_id: String,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Normalize(args) => {
            for line in normalize_lines(&args.text) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Match(args) => {
            println!("{}", describe_match(&args.left, &args.right));
            Ok(())
        }
        Command::Link(args) => {
            let config = AppConfig::load()?;
            println!("{}", render_link(&config.support, &args.session_id)?);
            Ok(())
        }
    }
}

fn normalize_lines(inputs: &[String]) -> Vec<String> {
    inputs
        .iter()
        .map(|raw| format!("{raw:?} -> {:?}", NormalizedText::new(raw).as_str()))
        .collect()
}

fn describe_match(left: &str, right: &str) -> String {
    let left = NormalizedText::new(left);
    let right = NormalizedText::new(right);
    let verdict = if left.matches(&right) {
        "match"
    } else {
        "no match"
    };
    format!("{:?} vs {:?}: {verdict}", left.as_str(), right.as_str())
}

fn render_link(config: &SupportConfig, session_id: &str) -> Result<String, AppError> {
    Ok(build_support_link(config.business_number(), Some(session_id))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use support_link::support::SupportLinkError;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["support-link-api"]).expect("parses");
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["support-link-api", "serve", "--port", "8080"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(8080)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn normalize_requires_input() {
        assert!(Cli::try_parse_from(["support-link-api", "normalize"]).is_err());
    }

    #[test]
    fn normalize_lines_show_raw_and_normalized_forms() {
        let lines = normalize_lines(&["Bloom_Lounge".to_string(), "".to_string()]);
        assert_eq!(
            lines,
            vec![
                r#""Bloom_Lounge" -> "bloomlounge""#.to_string(),
                r#""" -> """#.to_string(),
            ]
        );
    }

    #[test]
    fn describe_match_reports_verdict() {
        assert_eq!(
            describe_match("Bloom Lounge", "bloom_lounge"),
            "\"bloomlounge\" vs \"bloomlounge\": match"
        );
        assert!(describe_match("Bloom", "Moon").ends_with("no match"));
    }

    #[test]
    fn render_link_surfaces_missing_configuration() {
        let err = render_link(&SupportConfig::default(), "abc123").expect_err("number required");
        assert!(matches!(
            err,
            AppError::Support(SupportLinkError::MissingConfiguration)
        ));

        let link = render_link(&SupportConfig::with_business_number("15551234567"), "abc123")
            .expect("link builds");
        assert!(link.starts_with("https://wa.me/15551234567?text=Merhaba%2C"));
    }
}
