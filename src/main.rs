use clap::{Parser, ValueEnum};
use mappoint_rs::{
    GeometryFormat, MapPointError, ParseConfig, format_sequences, parse_csv_column, parse_file,
    parse_with_config,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Wkt,
    Geojson,
    Json,
}

impl From<OutputFormat> for GeometryFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Wkt => GeometryFormat::Wkt,
            OutputFormat::Geojson => GeometryFormat::GeoJson,
            OutputFormat::Json => GeometryFormat::Json,
        }
    }
}

/// Parse WKT-like geometry or a plain coordinate list into lat/lon sequences.
#[derive(Debug, Parser)]
#[command(name = "mappoint", version)]
struct Cli {
    /// Text to parse. Read from stdin when neither this nor --file is given.
    text: Option<String>,

    /// Read the input from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Treat --file as CSV and parse this column of every row
    #[arg(long, requires = "file")]
    csv_column: Option<String>,

    /// Plain lists are `lon lat` instead of `lat lon`
    #[arg(long)]
    longitude_first: bool,

    /// Drop unpaired ordinates and read unparseable ones as 0.0
    #[arg(long)]
    lenient: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Wkt)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, MapPointError> {
    let config = ParseConfig::new()
        .longitude_first(cli.longitude_first)
        .lenient(cli.lenient);

    let sequences = match (&cli.file, &cli.csv_column, &cli.text) {
        (Some(path), Some(column), _) => parse_csv_column(path, column, &config)?,
        (Some(path), None, _) => parse_file(path, &config)?,
        (None, _, Some(text)) => parse_with_config(text, &config)?,
        (None, _, None) => {
            let input = std::io::read_to_string(std::io::stdin())
                .map_err(|e| MapPointError::IoError(e.to_string()))?;
            parse_with_config(&input, &config)?
        }
    };

    format_sequences(&sequences, cli.format.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mappoint").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_run_text_as_json() -> Result<(), MapPointError> {
        let output = run(&cli(&["--format", "json", "POINT (30 10)"]))?;
        assert!(output.contains("\"latitude\":10.0"));
        Ok(())
    }

    #[test]
    fn test_run_error_message_is_readable() {
        let err = run(&cli(&["POLYGON (( herp derp"])).err();
        assert_eq!(
            err.map(|e| e.to_string()),
            Some("Malformed geometry body: 'POLYGON (( herp derp'".to_string())
        );
    }
}
