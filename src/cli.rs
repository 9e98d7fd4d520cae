use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;

const ABOUT: &str = "Terminal weather lookup";

const LONG_ABOUT: &str = "
Asks for a location and shows the current conditions and today's hourly forecast from
weatherapi.com. Hours with a 40% or higher chance of rain are highlighted in red.

The API key is read from the API_KEY environment variable, which may also be set in a .env file
in the current directory. An empty answer looks up Lima.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(short, long, help = "Plain prompt and printed output instead of the full-screen view")]
    pub plain: bool,
}
