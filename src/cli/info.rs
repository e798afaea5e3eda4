use clap::Parser;

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Module name (e.g., panel, forms, tables)
    pub module: String,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_info() {
        let cli = super::super::Cli::try_parse_from(["viltkit", "info", "panel"])
            .unwrap_or_else(|e| {
                panic!("Failed to parse CLI arguments: {}", e);
            });
        match cli.command {
            super::super::Commands::Info(args) => {
                assert_eq!(args.module, "panel");
            }
            _ => panic!("Expected Info command"),
        }
    }

    #[test]
    fn test_cli_parsing_info_requires_module() {
        assert!(super::super::Cli::try_parse_from(["viltkit", "info"]).is_err());
    }
}
