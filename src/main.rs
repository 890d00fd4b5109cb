use clap::{App, Arg, ArgMatches};
use timediff::{FormatKind, Instant, Span};

type Res<T> = anyhow::Result<T>;

fn main() -> Res<()> {
    timediff::logging::init_tracing();

    let matches = cli().get_matches();
    for line in run(&matches, atty::is(atty::Stream::Stdout))? {
        println!("{}", line);
    }
    Ok(())
}

fn cli() -> App<'static> {
    App::new("timediff")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Dan Farino")
        .about("Shows the time between two timestamps")
        .arg(
            Arg::new("first")
                .value_name("FIRST")
                .help("First timestamp, e.g. 2024-01-01T00:00:00Z")
                .required(true),
        )
        .arg(
            Arg::new("second")
                .value_name("SECOND")
                .help("Second timestamp [default: now]"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("TAG")
                .help("One of: sec, min, hr, day, wk, mon, yr, dhms, detail")
                .takes_value(true)
                .env("TIMEDIFF_FORMAT")
                .default_value("sec"),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .help("Print the difference in every format"),
        )
}

fn run(matches: &ArgMatches, ansi_colors: bool) -> Res<Vec<String>> {
    let span = span_from_args(matches);

    if matches.is_present("all") {
        return Ok(table_rows(&span, ansi_colors));
    }

    let kind: FormatKind = matches.value_of("format").unwrap_or("sec").parse()?;
    Ok(vec![span.render(kind).to_string()])
}

fn span_from_args(matches: &ArgMatches) -> Span {
    let first = Instant::parse(matches.value_of("first").unwrap_or_default());
    let second = match matches.value_of("second") {
        Some(s) => Instant::parse(s),
        None => Instant::now(),
    };
    tracing::debug!(%first, %second, "comparing instants");
    Span::between(first, second)
}

fn table_rows(span: &Span, ansi_colors: bool) -> Vec<String> {
    let col1 = FormatKind::ALL.iter().map(|k| k.tag().len()).max().unwrap_or(0);

    let (ansi1, ansi2) = if ansi_colors {
        ("\x1b[32;1m", "\x1b[m")
    } else {
        ("", "")
    };

    FormatKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "{}{:col1$}{}   {}",
                ansi1,
                kind.tag(),
                ansi2,
                span.render(*kind),
                col1 = col1
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: &str = "2024-01-01T00:00:00Z";
    const T1: &str = "2024-01-03T01:02:03Z";

    fn run_with(args: &[&str]) -> Res<Vec<String>> {
        let mut argv = vec!["timediff"];
        argv.extend_from_slice(args);
        run(&cli().try_get_matches_from(argv)?, false)
    }

    #[test]
    fn all_lists_every_format_aligned() {
        let rows = run_with(&[T0, T1, "--all"]).unwrap();
        assert_eq!(
            rows,
            vec![
                "sec      176523",
                "min      2942",
                "hr       49",
                "day      2",
                "wk       0",
                "mon      0",
                "yr       0",
                "dhms     2 Days, 1 Hour, 2 Minutes, 3 Seconds",
                "detail   2 Days, 1 Hour, 2 Minutes, 3 Seconds",
            ]
        );
    }

    #[test]
    fn table_tags_colored_for_terminals() {
        let span = Span::between(Instant::parse(T0), Instant::parse(T1));
        let rows = table_rows(&span, true);
        assert_eq!(rows.len(), FormatKind::ALL.len());
        assert_eq!(rows[0], "\x1b[32;1msec   \x1b[m   176523");
    }

    #[test]
    fn explicit_format_flag() {
        assert_eq!(run_with(&[T0, T1, "-f", "hr"]).unwrap(), vec!["49"]);
        assert_eq!(run_with(&[T1, T0, "--format", "min"]).unwrap(), vec!["2942"]);
    }

    #[test]
    fn format_falls_back_to_env_var() {
        std::env::set_var("TIMEDIFF_FORMAT", "dhms");
        let rows = run_with(&[T0, T1]);
        std::env::remove_var("TIMEDIFF_FORMAT");
        assert_eq!(rows.unwrap(), vec!["2 Days, 1 Hour, 2 Minutes, 3 Seconds"]);
    }

    #[test]
    fn second_timestamp_defaults_to_now() {
        let rows = run_with(&["2000-01-01T00:00:00Z", "-f", "yr"]).unwrap();
        let years: f64 = rows[0].parse().unwrap();
        assert!(years >= 26., "{}", years);
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = run_with(&[T0, T1, "-f", "zzz"]).unwrap_err();
        assert!(err.to_string().contains("invalid format \"zzz\""));
    }

    #[test]
    fn first_timestamp_is_required() {
        assert!(cli().try_get_matches_from(vec!["timediff"]).is_err());
    }
}
