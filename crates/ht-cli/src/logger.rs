use std::io::Write;

use color_print::cformat;
use log::{Level, LevelFilter};

/// Install the stderr logger. Zero verbosity shows warnings and errors only;
/// `RUST_LOG` overrides the level.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}: {}", label(record.level()), record.args()))
        .try_init();
    if let Err(err) = result {
        eprintln!("failed to install logger: {err}");
    }
}

/// The colored prefix for a record.
fn label(level: Level) -> String {
    match level {
        Level::Error => cformat!("<red,bold>error</>"),
        Level::Warn => cformat!("<yellow,bold>warning</>"),
        Level::Info => cformat!("<green,bold>info</>"),
        Level::Debug => cformat!("<blue>debug</>"),
        Level::Trace => cformat!("<dim>trace</>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_name_the_level() {
        assert!(label(Level::Error).contains("error"));
        assert!(label(Level::Warn).contains("warning"));
        assert!(label(Level::Trace).contains("trace"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(2);
        init(0);
        assert!(log::log_enabled!(Level::Debug) || std::env::var_os("RUST_LOG").is_some());
    }
}
