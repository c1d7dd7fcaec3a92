use anyhow::{bail, Context, Result};
use beandoc::{
    generate_batch, BatchConfig, Config, DescriptorParser, FileSinkProvider, OutputFormat,
    TableLayout,
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn command() -> Command {
    Command::new("beandoc")
        .about("Generate class hierarchy reference documentation from type descriptors")
        .arg(
            Arg::new("input")
                .help("Input JSON file of reflected type descriptors")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output markup")
                .value_parser(clap::value_parser!(OutputFormat))
                .default_value("markdown"),
        )
        .arg(
            Arg::new("batch")
                .long("batch")
                .help("JSON batch file defining named config sets"),
        )
        .arg(
            Arg::new("root-class")
                .long("root-class")
                .help("Qualified name of the root type of a single config"),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .help("Deepest level below the root that is documented")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("included-packages")
                .long("included-packages")
                .help("Colon-separated package substrings a subtree must match"),
        )
        .arg(
            Arg::new("excluded-subtrees")
                .long("excluded-subtrees")
                .help("Colon-separated qualified names of pruned subtrees"),
        )
        .arg(
            Arg::new("table-layout")
                .long("table-layout")
                .value_parser(clap::value_parser!(TableLayout)),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .help("Directory receiving the generated documents"),
        )
        .arg(
            Arg::new("apidoc-url")
                .long("apidoc-url")
                .help("Base URL of the external API documentation"),
        )
        .arg(
            Arg::new("domain-prefix")
                .long("domain-prefix")
                .help("Namespace prefix of types that get documentation links"),
        )
        .arg(
            Arg::new("doclet-options")
                .help("Doclet-style options, e.g. -rootClassName_view org.acme.View")
                .index(2)
                .num_args(0..)
                .last(true)
                .action(ArgAction::Append)
                .allow_hyphen_values(true),
        )
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(':')
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn batch_from_matches(matches: &ArgMatches) -> Result<BatchConfig> {
    let doclet_options: Vec<String> = matches
        .get_many::<String>("doclet-options")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let batch = if let Some(path) = matches.get_one::<String>("batch") {
        BatchConfig::from_file(Path::new(path))
            .with_context(|| format!("Failed to read batch file {}", path))?
    } else if !doclet_options.is_empty() {
        BatchConfig::from_doclet_options(&doclet_options).context("Invalid doclet options")?
    } else if let Some(root) = matches.get_one::<String>("root-class") {
        let mut config = Config::new("default", root.as_str());
        config.max_depth = matches.get_one::<usize>("max-depth").copied();
        config.included_packages = matches
            .get_one::<String>("included-packages")
            .map(|value| split_list(value).into_iter().collect());
        if let Some(value) = matches.get_one::<String>("excluded-subtrees") {
            config.excluded_subtrees = split_list(value).into_iter().collect();
        }
        config.table_layout = matches.get_one::<TableLayout>("table-layout").copied();
        BatchConfig::single(config)
    } else {
        bail!("Nothing to generate: pass --root-class, --batch or doclet options");
    };

    // Global flags override whatever the batch source said.
    let output_dir = matches.get_one::<String>("output-dir").map(PathBuf::from);
    let apidoc_url = matches.get_one::<String>("apidoc-url");
    let domain_prefix = matches.get_one::<String>("domain-prefix");

    let mut overridden = BatchConfig::default();
    for config in batch.configs() {
        let mut config = config.clone();
        if let Some(dir) = &output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(url) = apidoc_url {
            config.apidoc_url = Some(url.clone());
        }
        if let Some(prefix) = domain_prefix {
            config.domain_prefix = Some(prefix.clone());
        }
        overridden.insert(config);
    }
    Ok(overridden)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("beandoc=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = command().get_matches();

    let input_file = matches
        .get_one::<String>("input")
        .context("Missing input file")?;
    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(OutputFormat::Markdown);

    let types = DescriptorParser::parse_file(Path::new(input_file))
        .with_context(|| format!("Failed to load type descriptors from {}", input_file))?;
    let batch = batch_from_matches(&matches)?;

    let report = generate_batch(&types, &batch, format, &mut FileSinkProvider);
    for outcome in &report.outcomes {
        if let Ok((path, _)) = &outcome.result {
            println!("{}", path.display());
        }
    }

    if !report.is_success() {
        let failed: Vec<&str> = report.failures().map(|(name, _)| name).collect();
        bail!("{} config set(s) failed: {}", failed.len(), failed.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn test_single_config_from_flags() {
        let matches = command().get_matches_from([
            "beandoc",
            "types.json",
            "--root-class",
            "org.acme.View",
            "--max-depth",
            "2",
            "--excluded-subtrees",
            "org.acme.A:org.acme.B",
            "--output-dir",
            "docs",
        ]);
        let batch = batch_from_matches(&matches).unwrap();
        let config = batch.get("default").unwrap();
        assert_eq!(config.max_depth, Some(2));
        assert_eq!(config.excluded_subtrees.len(), 2);
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(config.included_packages, None);
    }

    #[test]
    fn test_doclet_options_after_separator() {
        let matches = command().get_matches_from([
            "beandoc",
            "types.json",
            "--format",
            "docbook",
            "--",
            "-rootClassName_view",
            "org.acme.View",
            "-maxDepth_view",
            "1",
        ]);
        assert_eq!(
            matches.get_one::<OutputFormat>("format").copied(),
            Some(OutputFormat::Docbook)
        );
        let batch = batch_from_matches(&matches).unwrap();
        assert_eq!(batch.get("view").unwrap().max_depth, Some(1));
    }

    #[test]
    fn test_nothing_to_generate_is_an_error() {
        let matches = command().get_matches_from(["beandoc", "types.json"]);
        assert!(batch_from_matches(&matches).is_err());
    }
}
