use std::{borrow::Cow, fs::File, io::Read, path::PathBuf, process::ExitCode};

use clap::Parser;
use xml2rdf::{FnSink, ObjectKind, ParserOptions, ParserState, RdfXmlParser, Statement};

/// Converts RDF/XML documents to Turtle on standard output.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[arg(value_name = "FILE", required = true)]
    paths: Vec<PathBuf>,

    /// Base IRI for relative references and `rdf:ID`.
    #[arg(long, value_name = "URL")]
    base: Option<url::Url>,

    /// Prefix for generated blank nodes. With several files, each file's blank
    /// nodes are kept apart by an `f<n>_` label prefix.
    #[arg(long, value_name = "PREFIX", default_value = xml2rdf::DEFAULT_BLANK_NODE_PREFIX)]
    blank_node_prefix: String,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut options = ParserOptions::new().with_blank_node_prefix(&args.blank_node_prefix)?;
    let mut serializer = oxttl::TurtleSerializer::new();
    if let Some(base) = &args.base {
        options = options.with_base_iri(base.as_str())?;
        serializer = serializer.with_base_iri(base.as_str())?;
    }

    let mut locked_out = std::io::stdout().lock();
    let mut writer = serializer.for_writer(&mut locked_out);
    let mut buffer = vec![0; xml2rdf::PARSING_CHUNK_SIZE];
    let mut failed = false;

    let relabel = args.paths.len() > 1;
    for (index, path) in args.paths.iter().enumerate() {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                eprintln!("Error: {}: {err}", path.display());
                failed = true;
                continue;
            }
        };

        let mut write_error = None;
        let sink = FnSink::new(|statement: &Statement| {
            if write_error.is_some() {
                return;
            }

            let statement = if relabel {
                Cow::Owned(scope_blank_nodes(statement, index + 1))
            } else {
                Cow::Borrowed(statement)
            };

            match oxrdf::Triple::try_from(statement.as_ref()) {
                Ok(triple) => {
                    if let Err(err) = writer.serialize_triple(&triple) {
                        write_error = Some(err);
                    }
                }
                Err(err) => log::warn!("{}: skipping `{statement}`: {err}", path.display()),
            }
        });

        let mut parser = RdfXmlParser::new(options.clone(), sink);
        let mut read_error = None;
        while parser.state() == ParserState::Running {
            match file.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => parser.parse_chunk(&buffer[..read], false),
                Err(err) => {
                    read_error = Some(err);
                    break;
                }
            }
        }

        let result = parser.finish().map(drop);
        if let Some(err) = write_error {
            // stdout is gone; nothing more can be written
            return Err(err.into());
        }

        if let Some(err) = read_error {
            eprintln!("Error: {}: {err}", path.display());
            failed = true;
        } else if let Err(err) = result {
            eprintln!("Error: {}: {err}", path.display());
            failed = true;
        } else {
            log::info!("{}: done", path.display());
        }
    }

    writer.finish()?;

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Blank node labels only identify a node within one document, so `_:x` from
/// document `n` becomes `_:fn_x` when several documents share one output.
fn scope_blank_nodes(statement: &Statement, document: usize) -> Statement {
    let scope = |label: &str| match label.strip_prefix("_:") {
        Some(label) => format!("_:f{document}_{label}"),
        None => label.to_string(),
    };

    let mut statement = statement.clone();
    statement.subject = scope(&statement.subject);
    if statement.object_kind == ObjectKind::BlankNode {
        statement.object = scope(&statement.object);
    }
    statement
}
