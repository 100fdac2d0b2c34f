mod output;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use najia_config::{NajiaConfig, OutputFormat};
use najia_core::{
    DivinationReport, DivinationRequest, LineStructure, MovingLines, Topic, changed_hexagram_name,
    divine, hexagram_from_lines, interlocking_hexagram,
};
use najia_tables::{Branch, Stem, Trigram, palace_for_trigram};
use najia_time::{parse_date, resolve_day, resolve_void, today};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "najia", version, about = "Na-Jia six-line divination CLI")]
struct Cli {
    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Output format (overrides general.output)
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Day pillar, month branch and void branches
    Day {
        /// Date (YYYY-MM-DD); today when omitted
        #[arg(long)]
        date: Option<String>,
    },
    /// Void branches for a day pillar
    Void {
        /// Day stem (甲 or jia)
        stem: String,
        /// Day branch (子 or zi)
        branch: String,
    },
    /// Hexagram name from six lines
    Name {
        /// Lines bottom first, 0=yin 1=yang, e.g. 1,1,1,1,1,0
        lines: LineStructure,
    },
    /// Changed hexagram from a name and moving lines
    Changed {
        /// Hexagram name, e.g. 乾為天
        name: String,
        /// Moving positions 1-6, e.g. 1,6
        moving: MovingLines,
    },
    /// Interlocking hexagram from six lines
    Interlocking {
        /// Lines bottom first
        lines: LineStructure,
    },
    /// The eight hexagrams of a palace
    Palace {
        /// Heading trigram (乾, 天 or qian)
        trigram: String,
    },
    /// Full Na-Jia analysis
    Analyze {
        /// Lines bottom first
        lines: LineStructure,
        /// Date (YYYY-MM-DD); today when omitted
        #[arg(long)]
        date: Option<String>,
        /// Moving positions 1-6, e.g. 1,6; none when omitted
        #[arg(long)]
        moving: Option<MovingLines>,
        /// Inquiry topic (事業 財運 健康 感情 考試, or English)
        #[arg(long)]
        topic: Option<String>,
    },
}

#[derive(Serialize)]
struct NameOutput<'a> {
    name: &'a str,
    known: bool,
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("NAJIA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{json}");
    Ok(())
}

fn resolve_date(date: Option<&str>, config: &NajiaConfig) -> anyhow::Result<chrono::NaiveDate> {
    match date {
        Some(s) => Ok(parse_date(s)?),
        None => {
            let date =
                today(config.general.utc_offset_hours).context("resolving today's date")?;
            tracing::debug!(%date, offset = ?config.general.utc_offset_hours, "using today");
            Ok(date)
        }
    }
}

/// `--format` when given, else `general.output`.
fn output_format(arg: Option<FormatArg>, config: &NajiaConfig) -> OutputFormat {
    arg.map(OutputFormat::from).unwrap_or(config.general.output)
}

/// `--topic` when given, else `general.default_topic`.
fn resolve_topic(arg: Option<&str>, config: &NajiaConfig) -> anyhow::Result<Option<Topic>> {
    match arg {
        Some(t) => Ok(Some(t.parse::<Topic>()?)),
        None => Ok(config.general.topic()?),
    }
}

fn analyze_request(
    lines: LineStructure,
    date: Option<&str>,
    moving: MovingLines,
    topic: Option<&str>,
    config: &NajiaConfig,
) -> anyhow::Result<DivinationRequest> {
    Ok(DivinationRequest {
        lines,
        date: resolve_date(date, config)?,
        moving,
        topic: resolve_topic(topic, config)?,
    })
}

fn render_report(report: &DivinationReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(output::render_divination(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report).context("serializing output"),
    }
}

fn print_name(name: &str, known: bool, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{name}");
            Ok(())
        }
        OutputFormat::Json => print_json(&NameOutput { name, known }),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.quiet, cli.verbose)?;

    let config = NajiaConfig::load().context("loading configuration")?;
    let format = output_format(cli.format, &config);
    tracing::debug!(?config, ?format, "resolved configuration");

    match cli.command {
        Commands::Day { date } => {
            let day = resolve_day(resolve_date(date.as_deref(), &config)?);
            let voids = resolve_void(day.stem, day.branch)?;
            match format {
                OutputFormat::Text => println!("{}", output::render_day(&day, voids)),
                OutputFormat::Json => {
                    print_json(&serde_json::json!({ "day": day, "voids": voids }))?
                }
            }
        }
        Commands::Void { stem, branch } => {
            let stem: Stem = stem.parse()?;
            let branch: Branch = branch.parse()?;
            let voids = resolve_void(stem, branch)?;
            match format {
                OutputFormat::Text => println!("{}{}", voids[0], voids[1]),
                OutputFormat::Json => print_json(&voids)?,
            }
        }
        Commands::Name { lines } => {
            let found = hexagram_from_lines(lines);
            print_name(found.name(), found.is_known(), format)?;
        }
        Commands::Changed { name, moving } => {
            let found = changed_hexagram_name(&name, &moving);
            print_name(found.name(), found.is_known(), format)?;
        }
        Commands::Interlocking { lines } => {
            let found = interlocking_hexagram(lines);
            print_name(found.name(), found.is_known(), format)?;
        }
        Commands::Palace { trigram } => {
            let trigram: Trigram = trigram.parse()?;
            let palace = palace_for_trigram(trigram);
            match format {
                OutputFormat::Text => print!("{}", output::render_palace(palace)),
                OutputFormat::Json => print_json(&serde_json::json!({
                    "palace": palace.trigram,
                    "element": palace.element(),
                    "members": palace.members,
                }))?,
            }
        }
        Commands::Analyze {
            lines,
            date,
            moving,
            topic,
        } => {
            let request = analyze_request(
                lines,
                date.as_deref(),
                moving.unwrap_or_default(),
                topic.as_deref(),
                &config,
            )?;
            let report = divine(&request)?;
            match format {
                OutputFormat::Text => print!("{}", render_report(&report, format)?),
                OutputFormat::Json => println!("{}", render_report(&report, format)?),
            }
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("najia error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use najia_config::GeneralConfig;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("najia").chain(args.iter().copied()))
            .expect("should parse")
    }

    fn config(general: GeneralConfig) -> NajiaConfig {
        NajiaConfig { general }
    }

    fn request_from(cli: Cli, config: &NajiaConfig) -> anyhow::Result<DivinationRequest> {
        let Commands::Analyze {
            lines,
            date,
            moving,
            topic,
        } = cli.command
        else {
            panic!("expected analyze");
        };
        analyze_request(
            lines,
            date.as_deref(),
            moving.unwrap_or_default(),
            topic.as_deref(),
            config,
        )
    }

    #[test]
    fn analyze_with_moving_line_as_json() {
        let cli = parse(&[
            "analyze",
            "1,1,1,1,1,1",
            "--moving",
            "6",
            "--format",
            "json",
            "--date",
            "2000-01-01",
        ]);
        let config = NajiaConfig::default();
        let format = output_format(cli.format, &config);
        assert_eq!(format, OutputFormat::Json);

        let request = request_from(cli, &config).unwrap();
        assert_eq!(request.moving.to_vec(), vec![6]);
        assert_eq!(request.topic, None);

        let report = divine(&request).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render_report(&report, format).unwrap()).unwrap();
        assert_eq!(json["primary"]["name"], "乾為天");
        assert_eq!(json["changed"]["report"]["name"], "澤天夬");
        assert_eq!(json["moving"], serde_json::json!([6]));
        assert_eq!(json["interactions"]["special"], "六沖卦");
    }

    #[test]
    fn moving_defaults_to_none() {
        let cli = parse(&["analyze", "1,1,1,1,1,1", "--date", "2000-01-01"]);
        let request = request_from(cli, &NajiaConfig::default()).unwrap();
        assert!(request.moving.is_empty());
        assert!(divine(&request).unwrap().changed.is_none());
    }

    #[test]
    fn moving_out_of_range_is_rejected() {
        let err = Cli::try_parse_from(["najia", "analyze", "1,1,1,1,1,1", "--moving", "7"]);
        assert!(err.is_err());
        let err = Cli::try_parse_from(["najia", "changed", "乾為天", "0"]);
        assert!(err.is_err());
    }

    #[test]
    fn bad_lines_are_rejected() {
        assert!(Cli::try_parse_from(["najia", "name", "1,1,1"]).is_err());
        assert!(Cli::try_parse_from(["najia", "analyze", "1,1,2,1,1,1"]).is_err());
    }

    #[test]
    fn topic_falls_back_to_config() {
        let config = config(GeneralConfig {
            default_topic: Some("財運".into()),
            ..Default::default()
        });
        let cli = parse(&["analyze", "1,1,1,1,1,1", "--date", "2000-01-01"]);
        assert_eq!(request_from(cli, &config).unwrap().topic, Some(Topic::Wealth));

        let cli = parse(&[
            "analyze",
            "1,1,1,1,1,1",
            "--date",
            "2000-01-01",
            "--topic",
            "health",
        ]);
        assert_eq!(request_from(cli, &config).unwrap().topic, Some(Topic::Health));
    }

    #[test]
    fn unknown_topic_is_an_error() {
        let cli = parse(&[
            "analyze",
            "1,1,1,1,1,1",
            "--date",
            "2000-01-01",
            "--topic",
            "lottery",
        ]);
        assert!(request_from(cli, &NajiaConfig::default()).is_err());
    }

    #[test]
    fn format_flag_overrides_config() {
        let config = config(GeneralConfig {
            output: OutputFormat::Json,
            ..Default::default()
        });
        let cli = parse(&["--format", "text", "name", "1,1,1,1,1,1"]);
        assert_eq!(output_format(cli.format, &config), OutputFormat::Text);
        let cli = parse(&["name", "1,1,1,1,1,1"]);
        assert_eq!(output_format(cli.format, &config), OutputFormat::Json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["day", "--date", "2024-02-10", "--format", "json", "--quiet"]);
        assert!(cli.quiet);
        assert!(matches!(cli.format, Some(FormatArg::Json)));
        assert!(matches!(cli.command, Commands::Day { date: Some(ref d) } if d == "2024-02-10"));
    }

    #[test]
    fn subcommand_argument_shapes() {
        assert!(matches!(
            parse(&["void", "甲", "子"]).command,
            Commands::Void { ref stem, ref branch } if stem == "甲" && branch == "子"
        ));
        match parse(&["name", "1,1,1,1,1,0"]).command {
            Commands::Name { lines } => assert_eq!(lines.to_string(), "1,1,1,1,1,0"),
            _ => panic!("expected name"),
        }
        match parse(&["changed", "乾為天", "1,6"]).command {
            Commands::Changed { name, moving } => {
                assert_eq!(name, "乾為天");
                assert_eq!(moving.to_vec(), vec![1, 6]);
            }
            _ => panic!("expected changed"),
        }
        assert!(matches!(
            parse(&["interlocking", "1,0,1,0,1,0"]).command,
            Commands::Interlocking { .. }
        ));
        assert!(matches!(
            parse(&["palace", "qian"]).command,
            Commands::Palace { ref trigram } if trigram == "qian"
        ));
        assert!(Cli::try_parse_from(["najia", "changed", "乾為天"]).is_err());
    }

    #[test]
    fn date_flag_is_validated() {
        let config = NajiaConfig::default();
        assert!(resolve_date(Some("2024-02-30"), &config).is_err());
        assert_eq!(
            resolve_date(Some("2024-02-10"), &config).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
        );
    }
}
