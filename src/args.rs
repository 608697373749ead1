use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "country-picker", version)]
#[command(about = "Country Picker GUI", long_about = None)]
pub struct Cli {
    /// Pre-select a country by name (e.g., "Switzerland")
    #[arg(long, value_name = "COUNTRY")]
    pub select: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_is_optional() {
        let cli = Cli::try_parse_from(["country-picker"]).unwrap();
        assert_eq!(cli.select, None);
    }

    #[test]
    fn select_takes_a_country() {
        let cli = Cli::try_parse_from(["country-picker", "--select", "Switzerland"]).unwrap();
        assert_eq!(cli.select.as_deref(), Some("Switzerland"));

        let cli = Cli::try_parse_from(["country-picker", "--select=New Zealand"]).unwrap();
        assert_eq!(cli.select.as_deref(), Some("New Zealand"));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["country-picker", "--country", "Chile"]).is_err());
        assert!(Cli::try_parse_from(["country-picker", "--select"]).is_err());
    }
}
