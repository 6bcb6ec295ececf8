//! Tandem CLI
//!
//! Command-line access to the site's content and state models:
//! - Show prompts, insights, topics and the session timeline
//! - Inspect chart specs and audience detection
//! - Export the content snapshot and generate a config file

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use tandem::audience::Audience;
use tandem::charts::{ChartId, ChartSpec};
use tandem::config::{generate_default_config, Config};
use tandem::content::topics::timeline;
use tandem::content::{ContentSnapshot, PromptRecord, PromptTopic, TopicKey, TopicRecord};
use tandem::logging::init_tracing;
use tandem::state::{InsightBoard, InsightFilter, PromptSelector, TopicExplorer};

#[derive(Parser)]
#[command(name = "tandem")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Design Tandem site content from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the starter prompt for a topic (senior, ai, portfolio), or list them
    Prompt { topic: Option<String> },

    /// List retrospective insights (all, peak, friction)
    Insights {
        #[arg(default_value = "all")]
        filter: String,
    },

    /// Show one dialogue topic with its sessions, or the topic breakdown
    Topics { key: Option<String> },

    /// All sessions in date order
    Timeline,

    /// Show one chart spec (vision, impact, roles, topics), or list them
    Charts { id: Option<String> },

    /// Show who the retro page addresses for a given URL
    Audience { url: String },

    /// Export the full content snapshot as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct TimelineRow {
    date: chrono::NaiveDate,
    topic: TopicKey,
    title: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, source) = Config::resolve(cli.config.as_deref())?;
    init_tracing(&config.logging);
    source.log();

    let json = cli.format == Format::Json;

    match cli.command {
        Commands::Prompt { topic } => match topic {
            Some(topic) => {
                let topic: PromptTopic = topic.parse()?;
                let mut selector = PromptSelector::new(config.site.timing);
                selector.select_topic(topic);

                if json {
                    print_json(&PromptRecord {
                        key: topic,
                        label: topic.button_label(),
                        prompt: selector.display(),
                    })?;
                } else {
                    println!("{}", topic.button_label());
                    println!();
                    println!("{}", selector.display());
                }
            }
            None => {
                let records: Vec<PromptRecord> = PromptTopic::ALL
                    .into_iter()
                    .map(|key| PromptRecord {
                        key,
                        label: key.button_label(),
                        prompt: key.prompt(),
                    })
                    .collect();

                if json {
                    print_json(&records)?;
                } else {
                    println!("{:<12} {}", "Key", "Button");
                    println!("{}", "-".repeat(40));
                    for record in records {
                        println!("{:<12} {}", record.key.key(), record.label);
                    }
                }
            }
        },

        Commands::Insights { filter } => {
            let filter: InsightFilter = filter.parse()?;
            let mut board = InsightBoard::default();
            board.set_filter(filter);
            let entries: Vec<_> = board.visible().collect();

            if json {
                print_json(&entries)?;
            } else {
                println!("{} ({})", filter.label(), entries.len());
                for entry in entries {
                    println!();
                    println!("#{} [{}] {}", entry.id, entry.category.badge(), entry.title);
                    println!("  Context: {}", entry.context);
                    println!("  Action:  {}", entry.action);
                    println!("  Mindset: {}", entry.mindset);
                }
            }
        }

        Commands::Topics { key } => match key {
            Some(key) => {
                let mut explorer = TopicExplorer::default();
                explorer.select(key.parse()?);
                let record = TopicRecord::for_key(explorer.selected())?;

                if json {
                    print_json(&record)?;
                } else {
                    println!("{} ({} sessions)", record.label, record.detail.count);
                    println!("{}", record.detail.description);
                    println!();
                    for session in &record.sessions {
                        println!("  {}  {}", session.date, session.title);
                    }
                }
            }
            None => {
                let segments = TopicExplorer::segments();

                if json {
                    print_json(&segments)?;
                } else {
                    println!("{:<22} {:<6} {:<7} {}", "Key", "Count", "Share", "Topic");
                    println!("{}", "-".repeat(60));
                    for segment in segments {
                        println!(
                            "{:<22} {:<6} {:<7} {}",
                            segment.key.slug(),
                            segment.count,
                            format!("{:.0}%", segment.share * 100.0),
                            segment.label
                        );
                    }
                }
            }
        },

        Commands::Timeline => {
            let rows: Vec<TimelineRow> = timeline()?
                .into_iter()
                .map(|(topic, session)| TimelineRow {
                    date: session.date,
                    topic,
                    title: session.title,
                })
                .collect();

            if json {
                print_json(&rows)?;
            } else {
                for row in rows {
                    println!("{}  {:<22} {}", row.date, row.topic.slug(), row.title);
                }
            }
        }

        Commands::Charts { id } => match id {
            Some(id) => {
                let id: ChartId = id.parse()?;
                let spec = ChartSpec::for_chart(id)?;

                if json {
                    print_json(&spec)?;
                } else {
                    println!("{} ({:?})", spec.id, spec.kind);
                    println!("{}", "-".repeat(40));
                    for (i, label) in spec.labels.iter().enumerate() {
                        let value = spec
                            .value_label(i)
                            .map(|(text, _)| text)
                            .unwrap_or_else(|| spec.dataset.values[i].to_string());
                        println!("  {:<24} {}", label, value);
                    }
                }
            }
            None => {
                let specs = ChartId::ALL
                    .into_iter()
                    .map(ChartSpec::for_chart)
                    .collect::<Result<Vec<_>, _>>()?;

                if json {
                    print_json(&specs)?;
                } else {
                    println!("{:<10} {:<15} {}", "Id", "Kind", "Items");
                    println!("{}", "-".repeat(40));
                    for spec in specs {
                        println!(
                            "{:<10} {:<15} {}",
                            spec.id,
                            format!("{:?}", spec.kind),
                            spec.labels.len()
                        );
                    }
                }
            }
        },

        Commands::Audience { url } => {
            let audience = Audience::detect_url(&url, &config.site.audience);

            if json {
                print_json(&audience)?;
            } else {
                println!("Mentee:    {}", audience.mentee);
                println!("Mentor:    {}", audience.mentor);
                println!("Spotlight: {}", audience.is_spotlight());
                if let Some(image) = &audience.hero_image {
                    println!("Hero:      {}", image);
                }
                println!();
                println!("{}", audience.role_paragraph());
            }
        }

        Commands::Export { output } => {
            let data = ContentSnapshot::collect()?.to_json_pretty()?;

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &data)?;
                    println!("Exported to {:?}", path);
                }
                None => {
                    println!("{}", data);
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
