use tracing::Level;

const USAGE: &str = "usage: draw-pitch <word> <pattern>";

/// Draw a pitch accent diagram as SVG.
///
/// Examples: はし HLL (箸), はし LHL (橋), はし LHH (端)
#[derive(Debug, clap::Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Word in kana
    #[arg(allow_hyphen_values = true)]
    word: String,
    /// Accent pattern, one symbol per mora plus one (H/L, h/l, 1/2/0)
    #[arg(allow_hyphen_values = true)]
    pattern: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let Ok(args) = <Args as clap::Parser>::try_parse() else {
        println!("{USAGE}");
        return;
    };

    println!("{}", pitchlib::render(&args.word, &args.pattern, true));
}
