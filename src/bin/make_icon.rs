use clap::{App, Arg, ErrorKind};
use std::process;

//===========================================================================//

// Exit code for bad command-line usage.
const USAGE_EXIT_CODE: i32 = 2;

fn main() {
    let matches = App::new("make_icon")
        .version(clap::crate_version!())
        .about("Packs PNG images into a multi-resolution ICO file")
        .arg(
            Arg::with_name("dry-run")
                .short("n")
                .long("dry-run")
                .help("Prints the icon directory without writing anything"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Logs more detail (repeat for debug output)"),
        )
        .arg(
            Arg::with_name("output")
                .value_name("OUT_PATH")
                .required(true)
                .help("Path of the ICO file to write"),
        )
        .arg(
            Arg::with_name("image")
                .value_name("IN")
                .required(true)
                .multiple(true)
                .help("PNG files to embed"),
        )
        .get_matches_safe();
    let matches = match matches {
        Ok(matches) => matches,
        Err(error) => match error.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => {
                error.exit()
            }
            _ => {
                eprintln!("{}", error.message);
                process::exit(USAGE_EXIT_CODE);
            }
        },
    };

    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level),
    )
    .init();

    // Both are required, so clap guarantees they're present.
    let out_path = matches.value_of_os("output").unwrap_or_default();
    let in_paths: Vec<_> = matches
        .values_of_os("image")
        .map(|paths| paths.collect())
        .unwrap_or_default();

    let result = if matches.is_present("dry-run") {
        dry_run(&in_paths)
    } else {
        icopack::write_icon_file(out_path, &in_paths).map(|_| ())
    };
    if let Err(error) = result {
        eprintln!("make_icon: {}", error);
        process::exit(1);
    }
}

fn dry_run(in_paths: &[&std::ffi::OsStr]) -> icopack::Result<()> {
    let sources = in_paths
        .iter()
        .map(icopack::SourceImage::from_file)
        .collect::<icopack::Result<Vec<_>>>()?;
    let icondir = icopack::build_icon_dir(sources)?;
    for (index, record) in icondir.directory()?.iter().enumerate() {
        println!(
            "{:5}: {}x{} (stored {}x{}), {} bytes at offset {}",
            index,
            record.width(),
            record.height(),
            record.stored_width(),
            record.stored_height(),
            record.data_size(),
            record.data_offset()
        );
    }
    println!("Total: {} bytes", icondir.encoded_len()?);
    Ok(())
}

//===========================================================================//
