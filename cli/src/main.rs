//! Print the stretched digest of a file, stdin, or hex string.
//!
//! # Usage
//!
//! Stretch the SHA-256 digest of a file by a factor of 2 (producing a 128-byte digest):
//!
//! ```sh
//! cargo run --release --bin stretchy -- --algorithm sha256 --stretch 2 Cargo.toml
//! ```
//!
//! Stretch the BLAKE3 digest of some hex-encoded bytes:
//!
//! ```sh
//! cargo run --release --bin stretchy -- --algorithm blake3 --stretch 1 --hex 0x68656c6c6f
//! ```
//!
//! Print the size of a stretched digest without hashing anything:
//!
//! ```sh
//! cargo run --release --bin stretchy -- --algorithm sha512 --stretch 4 --size
//! ```
//!
//! With neither `--hex` nor a file, input is read from stdin.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::{fs::File, io, path::PathBuf, process};
use stretchy_cryptography::{Algorithm, Error, Hasher, Registry};
use stretchy_utils::{from_hex_formatted, hex};
use tracing::{debug, error, Level};

/// Source of the bytes to hash.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Input {
    Hex(Vec<u8>),
    File(PathBuf),
    Stdin,
}

/// Configuration assembled from command line arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Config {
    /// Base hash algorithm.
    algorithm: Algorithm,

    /// Stretch factor (validated when the hasher is created).
    stretch: u8,

    /// Bytes to hash.
    input: Input,

    /// Print the digest size instead of the digest.
    size: bool,

    /// Log at debug level.
    verbose: bool,
}

fn main() {
    let config = config(&command().get_matches());

    // Initialize logging (stdout is reserved for the digest)
    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(&config, &Registry::standard()) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            error!(?err, "failed to stretch digest");
            process::exit(1);
        }
    }
}

/// Command line interface.
fn command() -> Command {
    Command::new("stretchy")
        .about("print the stretched digest of a file, stdin, or hex string")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .required(false)
                .default_value("sha256")
                .value_parser(|s: &str| s.parse::<Algorithm>())
                .help("Base hash algorithm (sha256, sha512, or blake3)"),
        )
        .arg(
            Arg::new("stretch")
                .long("stretch")
                .required(false)
                .default_value("1")
                .value_parser(value_parser!(u8))
                .help("Stretch factor (1 to 4)"),
        )
        .arg(
            Arg::new("hex")
                .long("hex")
                .required(false)
                .conflicts_with("file")
                .value_parser(|s: &str| from_hex_formatted(s).ok_or("invalid hex"))
                .help("Hash these hex-encoded bytes"),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .required(false)
                .action(ArgAction::SetTrue)
                .help("Print the digest size in bytes without hashing"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .required(false)
                .action(ArgAction::SetTrue)
                .help("Log at debug level"),
        )
        .arg(
            Arg::new("file")
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("Hash the contents of this file (stdin if omitted)"),
        )
}

/// Assemble a [Config] from parsed arguments.
fn config(matches: &ArgMatches) -> Config {
    let algorithm = *matches
        .get_one::<Algorithm>("algorithm")
        .expect("algorithm has a default");
    let stretch = *matches
        .get_one::<u8>("stretch")
        .expect("stretch has a default");
    let input = match (
        matches.get_one::<Vec<u8>>("hex"),
        matches.get_one::<PathBuf>("file"),
    ) {
        (Some(data), _) => Input::Hex(data.clone()),
        (None, Some(path)) => Input::File(path.clone()),
        (None, None) => Input::Stdin,
    };
    Config {
        algorithm,
        stretch,
        input,
        size: matches.get_flag("size"),
        verbose: matches.get_flag("verbose"),
    }
}

/// Hash the configured input and return the hex-encoded stretched digest (or its size).
fn run(config: &Config, registry: &Registry) -> Result<String, Error> {
    let mut hasher = registry.stretchy(config.algorithm, config.stretch)?;
    if config.size {
        return Ok(hasher.size().to_string());
    }

    let read = match &config.input {
        Input::Hex(data) => hasher.update(data)? as u64,
        Input::File(path) => io::copy(&mut File::open(path)?, &mut hasher)?,
        Input::Stdin => io::copy(&mut io::stdin().lock(), &mut hasher)?,
    };
    debug!(
        algorithm = %config.algorithm,
        stretch = config.stretch,
        read,
        size = hasher.size(),
        "hashed input"
    );
    Ok(hex(&hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Write};
    use stretchy_cryptography::{Sha256, Stretchy};

    fn parse(args: &[&str]) -> Config {
        let matches = command()
            .try_get_matches_from(std::iter::once("stretchy").chain(args.iter().copied()))
            .unwrap();
        config(&matches)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(
            config,
            Config {
                algorithm: Algorithm::Sha256,
                stretch: 1,
                input: Input::Stdin,
                size: false,
                verbose: false,
            }
        );
    }

    #[test]
    fn test_parse() {
        let config = parse(&[
            "--algorithm",
            "blake3",
            "--stretch",
            "3",
            "--hex",
            "0x0102",
            "--verbose",
        ]);
        assert_eq!(config.algorithm, Algorithm::Blake3);
        assert_eq!(config.stretch, 3);
        assert_eq!(config.input, Input::Hex(vec![0x01, 0x02]));
        assert!(config.verbose);

        let config = parse(&["--size", "input.bin"]);
        assert!(config.size);
        assert_eq!(config.input, Input::File(PathBuf::from("input.bin")));
    }

    #[test]
    fn test_parse_invalid() {
        let args = ["stretchy", "--algorithm", "md5"];
        assert!(command().try_get_matches_from(args).is_err());

        let args = ["stretchy", "--hex", "0g"];
        assert!(command().try_get_matches_from(args).is_err());

        let args = ["stretchy", "--hex", "00", "input.bin"];
        assert!(command().try_get_matches_from(args).is_err());
    }

    #[test]
    fn test_run_hex() {
        let config = parse(&["--stretch", "2", "--hex", "68656c6c6f20776f726c64"]);
        let output = run(&config, &Registry::standard()).unwrap();

        let mut expected = Stretchy::<Sha256>::new(2).unwrap();
        expected.update(b"hello world").unwrap();
        assert_eq!(output, hex(&expected.finalize()));
    }

    #[test]
    fn test_run_size() {
        let config = parse(&["--algorithm", "sha512", "--stretch", "4", "--size"]);
        assert_eq!(run(&config, &Registry::standard()).unwrap(), "262144");
    }

    #[test]
    fn test_run_file() {
        let path = std::env::temp_dir().join(format!("stretchy-{}.txt", process::id()));
        fs::File::create(&path)
            .unwrap()
            .write_all(b"hello world")
            .unwrap();

        let config = parse(&["--algorithm", "blake3", path.to_str().unwrap()]);
        let output = run(&config, &Registry::standard()).unwrap();
        fs::remove_file(&path).unwrap();

        let config = parse(&["--algorithm", "blake3", "--hex", "68656c6c6f20776f726c64"]);
        assert_eq!(output, run(&config, &Registry::standard()).unwrap());
    }

    #[test]
    fn test_run_errors() {
        let config = parse(&["--stretch", "5", "--hex", "00"]);
        assert!(matches!(
            run(&config, &Registry::standard()),
            Err(Error::StretchTooLarge(5))
        ));

        let config = parse(&["--hex", "00"]);
        assert!(matches!(
            run(&config, &Registry::new()),
            Err(Error::UnregisteredAlgorithm(Algorithm::Sha256))
        ));

        let config = parse(&["/nonexistent/stretchy/input"]);
        assert!(matches!(
            run(&config, &Registry::standard()),
            Err(Error::Io(_))
        ));
    }
}
