use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;

use shorthand::config::{MappingConfig, ReverseIndexPolicy};
use shorthand::dictionary::Dictionary;
use shorthand::report::Report;
use shorthand::TextMapper;

trait OutputWriter {
    fn write_report(&mut self, report: Report) -> io::Result<()>;
    fn finish(&mut self) -> io::Result<()>;
}

/// Model lines on stdout, everything else on stderr.
struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_report(&mut self, report: Report) -> io::Result<()> {
        for abbreviation in &report.unfulfilled {
            eprintln!("No words found for: {}", abbreviation);
        }

        eprintln!("Words in corpus: {}", report.corpus_texts);
        for usage in &report.usage {
            eprintln!("{}", usage);
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for entry in &report.entries {
            writeln!(out, "{}", entry)?;
        }
        out.flush()?;

        eprintln!("Total compression: {}", report.total_compression);
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct JsonWriter {
    report: Option<Report>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { report: None }
    }
}

impl OutputWriter for JsonWriter {
    fn write_report(&mut self, report: Report) -> io::Result<()> {
        self.report = Some(report);
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        if let Some(report) = &self.report {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        Ok(())
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "shorthand",
    about = "Generate one- and two-letter text expander abbreviations from a corpus."
)]
struct Opts {
    #[structopt(
        short,
        long = "dictionary",
        parse(from_os_str),
        required = true,
        number_of_values = 1,
        help = "Word list, one word per line (repeatable)"
    )]
    dictionaries: Vec<PathBuf>,

    #[structopt(
        short,
        long,
        parse(from_os_str),
        help = "Model of a previous run (\"abbreviation expansion\" lines)"
    )]
    model: Option<PathBuf>,

    #[structopt(short, long, parse(from_os_str), help = "JSON config file")]
    config: Option<PathBuf>,

    #[structopt(short, long, help = "Cost of remembering one more abbreviation")]
    penalty: Option<f64>,

    #[structopt(
        long = "live-reverse-index",
        help = "Let each committed abbreviation claim its expansion immediately"
    )]
    live_reverse_index: bool,

    #[structopt(
        short,
        long,
        parse(from_os_str),
        help = "Also write the plain model to this file"
    )]
    output: Option<PathBuf>,

    #[structopt(long = "json", help = "Output the report in JSON format")]
    use_json: bool,

    #[structopt(parse(from_os_str), required = true, help = "Corpus files")]
    files: Vec<PathBuf>,
}

fn load_config(opts: &Opts) -> anyhow::Result<MappingConfig> {
    let mut config = match &opts.config {
        Some(path) => MappingConfig::from_path(path)?,
        None => MappingConfig::default(),
    };

    if let Some(v) = opts.penalty {
        config.penalty = v;
    }

    if opts.live_reverse_index {
        config.reverse_index = ReverseIndexPolicy::Live;
    }

    Ok(config)
}

fn run(opts: Opts) -> anyhow::Result<()> {
    let config = load_config(&opts)?;

    let mut dictionary = Dictionary::new();
    for path in &opts.dictionaries {
        dictionary.load_file(path)?;
    }

    let mut mapper = TextMapper::new(config, dictionary);
    if let Some(path) = &opts.model {
        mapper.load_model_file(path)?;
    }
    for path in &opts.files {
        mapper.load_input_file(path)?;
    }

    mapper.compute();
    mapper.augment_model()?;

    let mut writer: Box<dyn OutputWriter> = if opts.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };
    writer.write_report(mapper.report()?)?;
    writer.finish()?;

    if let Some(path) = &opts.output {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        mapper.write_model(&mut out)?;
        out.flush()?;
        log::info!("Wrote model to {}", path.display());
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    run(Opts::from_args())
}
