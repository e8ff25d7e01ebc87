use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use folio::output;
use folio::query::{compile, QueryMode, SearchQuery};
use folio::searcher::{Searcher, SearcherConfig};
use folio::server::{self, SearchClient, SearchServer, ServerConfig};
use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Regex search and page reader over a single text corpus")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Corpus file to load
    #[arg(long, global = true, default_value = "completeworks.txt")]
    corpus: PathBuf,

    /// Title list (one per line); defaults to the built-in catalog
    #[arg(long, global = true)]
    titles: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the corpus
    Search {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
    /// Print the page of text around an offset
    Page {
        /// Byte offset (negative and out-of-range values clamp)
        #[arg(allow_negative_numbers = true)]
        offset: i64,

        #[command(flatten)]
        format: FormatArgs,
    },
    /// List works with their start offsets
    Titles {
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Show corpus and index statistics
    Stats,
    /// Build the index and serve requests until shut down
    Serve {
        /// Address to listen on (default: 127.0.0.1:$PORT, or port 3001)
        #[arg(short, long)]
        listen: Option<SocketAddr>,

        /// Upper bound on results per search
        #[arg(long, default_value_t = server::daemon::MAX_RESULTS_CAP)]
        max_results: usize,
    },
    /// Search through a running server
    Query {
        /// Server address
        #[arg(short, long)]
        addr: Option<SocketAddr>,

        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
    /// Ask a running server to stop
    Shutdown {
        /// Server address
        #[arg(short, long)]
        addr: Option<SocketAddr>,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// Search text (a regex unless --literal)
    query: String,

    /// Match case exactly
    #[arg(short = 's', long)]
    match_case: bool,

    /// Only match whole words
    #[arg(short, long)]
    whole_word: bool,

    /// Treat the query as literal text
    #[arg(short = 'F', long)]
    literal: bool,

    /// Stop after this many matches
    #[arg(short = 'm', long)]
    max_count: Option<usize>,
}

impl QueryArgs {
    fn to_query(&self) -> SearchQuery {
        let mode = if self.literal {
            QueryMode::Literal
        } else {
            QueryMode::Regex
        };
        SearchQuery::new(self.query.clone())
            .match_case(self.match_case)
            .whole_word(self.whole_word)
            .mode(mode)
    }
}

#[derive(Args)]
struct FormatArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = SearcherConfig {
        corpus_path: cli.corpus,
        titles_path: cli.titles,
    };

    match cli.command {
        Commands::Search { query, format } => {
            let searcher = open_searcher(&config)?;
            let search_query = query.to_query();
            let results = searcher.search_limited(&search_query, query.max_count)?;

            if format.json {
                print_json(&results)?;
            } else {
                let compiled = compile(&search_query)?;
                let mut out = output::stdout(!format.no_color);
                output::print_search_results(
                    &mut out,
                    &results,
                    compiled.regex(),
                    Some(searcher.corpus()),
                )?;
            }
        }
        Commands::Page { offset, format } => {
            let searcher = open_searcher(&config)?;
            let page = searcher.page(offset);
            if format.json {
                print_json(&page)?;
            } else {
                output::print_page(&mut output::stdout(!format.no_color), &page)?;
            }
        }
        Commands::Titles { format } => {
            let searcher = open_searcher(&config)?;
            if format.json {
                print_json(&searcher.titles().entries())?;
            } else {
                output::print_titles(&mut output::stdout(!format.no_color), searcher.titles())?;
            }
        }
        Commands::Stats => {
            let searcher = open_searcher(&config)?;
            output::print_stats(&mut std::io::stdout().lock(), &searcher.stats())?;
        }
        Commands::Serve {
            listen,
            max_results,
        } => {
            let searcher = Arc::new(open_searcher(&config)?);
            let mut server_config = ServerConfig {
                max_results,
                ..ServerConfig::default()
            };
            if let Some(listen) = listen {
                server_config.listen = listen;
            }
            SearchServer::new(searcher, server_config).run()?;
        }
        Commands::Query {
            addr,
            query,
            format,
        } => {
            let addr = addr.unwrap_or_else(server::listen_addr_from_env);
            let mut client = SearchClient::connect(addr)
                .with_context(|| format!("Failed to connect to {}", addr))?;

            let search_query = query.to_query();
            let response = client.search(search_query.clone(), query.max_count)?;

            if format.json {
                print_json(&response)?;
            } else {
                let compiled = compile(&search_query)?;
                let mut out = output::stdout(!format.no_color);
                output::print_search_results(&mut out, &response.results, compiled.regex(), None)?;
                if response.truncated {
                    eprintln!("(results truncated at {})", response.results.len());
                }
            }
        }
        Commands::Shutdown { addr } => {
            let addr = addr.unwrap_or_else(server::listen_addr_from_env);
            let mut client = SearchClient::connect(addr)
                .with_context(|| format!("Failed to connect to {}", addr))?;
            client.shutdown()?;
            println!("Server at {} stopped", addr);
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the default `folio=info`
fn init_tracing() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if std::env::var_os("RUST_LOG").is_none()
        && let Ok(directive) = "folio=info".parse()
    {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_searcher(config: &SearcherConfig) -> Result<Searcher> {
    Searcher::open(config).with_context(|| {
        format!(
            "Failed to build search index from {}",
            config.corpus_path.display()
        )
    })
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_accepts_negative_offset_and_no_color() {
        let cli = Cli::try_parse_from(["folio", "page", "-500", "--no-color"]).unwrap();
        match cli.command {
            Commands::Page { offset, format } => {
                assert_eq!(offset, -500);
                assert!(format.no_color);
                assert!(!format.json);
            }
            _ => panic!("expected the page subcommand"),
        }
    }

    #[test]
    fn test_titles_accepts_format_flags() {
        let cli = Cli::try_parse_from(["folio", "titles", "--no-color", "--json"]).unwrap();
        match cli.command {
            Commands::Titles { format } => {
                assert!(format.no_color);
                assert!(format.json);
            }
            _ => panic!("expected the titles subcommand"),
        }
    }

    #[test]
    fn test_search_flags() {
        let cli = Cli::try_parse_from(["folio", "search", "a.b", "-s", "-w", "-F", "-m", "3"]).unwrap();
        match cli.command {
            Commands::Search { query, format } => {
                let q = query.to_query();
                assert!(q.match_case && q.whole_word);
                assert_eq!(q.mode, QueryMode::Literal);
                assert_eq!(query.max_count, Some(3));
                assert!(!format.no_color);
            }
            _ => panic!("expected the search subcommand"),
        }
    }
}
