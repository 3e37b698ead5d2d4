//! Shared plumbing for the command-line tools.

use std::fmt::Display;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, raised to
/// `info` by one `-v` and to `debug` by two or more.
pub fn init_logging(verbosity: u8) {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_directive(verbosity)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Print a failed run as a single `error:` line on stdout.
pub fn exit_with<E: Display>(result: Result<(), E>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

fn error_line(err: &impl Display) -> String {
    format!("error: {err}")
}

/// Parse a named option value with `from_name`, for use as a clap value
/// parser.
pub fn parse_named<T>(
    option: &'static str,
    from_name: fn(&str) -> Option<T>,
) -> impl Fn(&str) -> Result<T, String> + Clone + Send + Sync + 'static
where
    T: 'static,
{
    move |value: &str| {
        from_name(value)
            .ok_or_else(|| iconsheet_style::Error::invalid_option(option, value).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconsheet_style::options::StyleVariant;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(5), "debug");
    }

    #[test]
    fn error_lines() {
        let err = iconsheet_core::Error::empty_argument("srcDir");
        assert_eq!(error_line(&err), "error: Argument 'srcDir' is empty.");
    }

    #[test]
    fn named_values() {
        let parse = parse_named("variant", StyleVariant::from_name);
        assert_eq!(parse("mask"), Ok(StyleVariant::Mask));
        assert_eq!(
            parse("stripes"),
            Err("Invalid value 'stripes' for option 'variant'".to_string())
        );
    }
}
