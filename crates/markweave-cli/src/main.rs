use anyhow::{Context, Result, bail};
use markweave_config::Config;
use markweave_engine::{convert, io};
use std::{env, path::PathBuf, process};

const USAGE: &str = "usage: markweave <input.md> [-o <output.html>] [--full-page]";

struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
    full_page: bool,
}

fn main() {
    if let Err(err) = run(env::args().skip(1).collect()) {
        eprintln!("markweave: {err:#}");
        process::exit(1);
    }
}

fn run(raw: Vec<String>) -> Result<()> {
    let args = parse_args(raw)?;
    let config = Config::load()
        .context("failed to load config")?
        .unwrap_or_default();

    let full_page = args.full_page || config.full_page;
    let source = io::read_markdown(&args.input)?;
    let html = convert(&source, full_page)
        .with_context(|| format!("failed to convert '{}'", args.input.display()))?;

    let output = args.output.or_else(|| {
        let dir = config.output_dir.as_ref()?;
        let stem = args.input.file_stem()?;
        Some(dir.join(stem).with_extension("html"))
    });

    match output {
        Some(path) => io::write_html(&path, &html)
            .with_context(|| format!("failed to write '{}'", path.display()))?,
        None => print!("{html}"),
    }
    Ok(())
}

fn parse_args(raw: Vec<String>) -> Result<Args> {
    let mut input = None;
    let mut output = None;
    let mut full_page = false;

    let mut iter = raw.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let Some(path) = iter.next() else {
                    bail!("{arg} requires a path\n{USAGE}");
                };
                output = Some(PathBuf::from(path));
            }
            "--full-page" => full_page = true,
            _ if arg.starts_with('-') => bail!("unknown option '{arg}'\n{USAGE}"),
            _ => {
                if input.is_some() {
                    bail!("multiple input files given\n{USAGE}");
                }
                input = Some(PathBuf::from(arg));
            }
        }
    }

    let Some(input) = input else {
        bail!("{USAGE}");
    };
    Ok(Args {
        input,
        output,
        full_page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        parse_args(args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn input_only() {
        let args = parse(&["doc.md"]).unwrap();
        assert_eq!(args.input, PathBuf::from("doc.md"));
        assert!(args.output.is_none());
        assert!(!args.full_page);
    }

    #[test]
    fn output_and_full_page_flags() {
        let args = parse(&["doc.md", "-o", "out.html", "--full-page"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert!(args.full_page);
    }

    #[test]
    fn missing_input_is_an_error() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn dangling_output_flag_is_an_error() {
        assert!(parse(&["doc.md", "-o"]).is_err());
    }

    #[test]
    fn unknown_option_is_an_error() {
        assert!(parse(&["doc.md", "--fast"]).is_err());
    }
}
