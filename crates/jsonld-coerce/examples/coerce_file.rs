use clap::Parser;
use jsonld_coerce::{Coercer, CoercerConfig, coerce_properties, node_id};
use serde_json::Value;
use std::fs;
use tracing_subscriber::filter;

/// Coerce the typed literals of every node in a JSON-LD document
#[derive(Parser)]
#[command(name = "coerce_file")]
#[command(bin_name = "coerce_file")]
struct Cli {
    /// File name of the (compacted or expanded) JSON-LD document
    #[arg(short, long)]
    file_name: String,

    /// Fail on XSD datatypes without a conversion rule
    #[arg(long)]
    strict: bool,

    /// Recognise `xsd:` compact IRIs
    #[arg(long)]
    compact_iris: bool,
}

fn load_file(file: &str) -> String {
    fs::read_to_string(file).unwrap_or_else(|_| panic!("Failed to read file: {file}"))
}

fn main() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let args = Cli::parse();

    let input = load_file(&args.file_name);
    let document: Value = serde_json::from_str(&input).expect("Couldn't deserialize input");

    let coercer = Coercer::new(
        CoercerConfig::builder()
            .with_strict_datatypes(args.strict)
            .with_compact_iris(args.compact_iris)
            .build(),
    );

    let nodes: Vec<&Value> = match &document {
        Value::Array(nodes) => nodes.iter().collect(),
        Value::Object(obj) => match obj.get("@graph").and_then(Value::as_array) {
            Some(graph) => graph.iter().collect(),
            None => vec![&document],
        },
        _ => Vec::new(),
    };

    for node in nodes {
        println!("{}", node_id(node).unwrap_or("_:anonymous"));
        match coerce_properties(node, &coercer) {
            Ok(properties) => {
                for (property, values) in properties {
                    for value in values {
                        println!("  {property}: {value:?}");
                    }
                }
            }
            Err(e) => println!("  error: {e}"),
        }
    }
}
