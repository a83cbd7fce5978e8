use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "adboard",
    bin_name = "adboard",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Query and manage a classified-ads board", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding ads.json, users.json and adboard.toml
    #[arg(long, global = true, env = "ADBOARD_DATA", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filtered, sorted and paginated listing
    List {
        /// Case-insensitive text searched in title and description
        #[arg(long)]
        q: Option<String>,

        /// Owner state (location code)
        #[arg(long)]
        state: Option<String>,

        /// Category slug
        #[arg(long)]
        cat: Option<String>,

        /// "desc" (default) for newest first, anything else for store order
        #[arg(long)]
        sort: Option<String>,

        /// Page size
        #[arg(long)]
        limit: Option<String>,

        /// 1-based page number
        #[arg(long)]
        page: Option<String>,
    },

    /// Show one ad and count the view
    Item {
        /// Ad id
        id: String,

        /// Include the seller's card and their other ads
        #[arg(long)]
        other: bool,
    },

    /// Every ad whose owner lives in the given state
    #[command(name = "by-state")]
    ByState {
        /// State (location code)
        state: Option<String>,
    },

    /// Unpaginated listing in store order
    Browse {
        #[arg(long)]
        q: Option<String>,

        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        cat: Option<String>,
    },

    /// Create an ad
    Add {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        price: Option<String>,

        /// Price is negotiable (no fixed value)
        #[arg(long)]
        negotiable: bool,

        #[arg(long)]
        desc: Option<String>,

        #[arg(long)]
        cat: Option<String>,

        /// Image URL, repeatable, kept in the given order
        #[arg(long = "img", value_name = "URL")]
        images: Vec<String>,

        /// Session token of the owner
        #[arg(long, env = "ADBOARD_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Show the signed-in user's profile and ads
    Me {
        /// Session token
        #[arg(long, env = "ADBOARD_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Sign in and print a new session token
    Signin {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

/// Turns a bare token into the `Authorization` header value the API expects.
pub fn authorization(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {}", t))
}

/// Flags are passed to the API in their raw query form.
pub fn raw_flag(set: bool) -> Option<String> {
    set.then(|| "true".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_options() {
        let cli = Cli::try_parse_from(["adboard", "list", "--q", "bike", "--limit", "3"]).unwrap();
        match cli.command {
            Commands::List { q, limit, page, .. } => {
                assert_eq!(q.as_deref(), Some("bike"));
                assert_eq!(limit.as_deref(), Some("3"));
                assert!(page.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_repeated_images_in_order() {
        let cli = Cli::try_parse_from([
            "adboard", "add", "--title", "Bike", "--price", "10", "--img", "a.jpg", "--img",
            "b.jpg",
        ])
        .unwrap();
        match cli.command {
            Commands::Add { images, .. } => assert_eq!(images, vec!["a.jpg", "b.jpg"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_by_state_argument_is_optional() {
        let cli = Cli::try_parse_from(["adboard", "by-state"]).unwrap();
        assert!(matches!(cli.command, Commands::ByState { state: None }));
    }

    #[test]
    fn test_global_data_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["adboard", "browse", "--data", "/tmp/x"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_helpers() {
        assert_eq!(authorization(Some("abc")).as_deref(), Some("Bearer abc"));
        assert_eq!(authorization(None), None);
        assert_eq!(raw_flag(true).as_deref(), Some("true"));
        assert_eq!(raw_flag(false), None);
    }
}
