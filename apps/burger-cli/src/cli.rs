//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "burgers")]
#[command(version)]
#[command(about = "Stellar Burgers: build a burger, place an order, watch the feed")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config.toml (default: platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API root URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Print the resulting state as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the ingredient catalog
    Ingredients,

    /// Show the public order feed
    Feed,

    /// Show or place an order
    Order {
        #[command(subcommand)]
        command: OrderCommand,
    },

    /// List your orders (requires login)
    Orders,

    /// Log in and remember the session
    Login(LoginArgs),

    /// Create an account and remember the session
    Register(RegisterArgs),

    /// Log out and forget the session
    Logout,

    /// Show or edit your profile (requires login)
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommand>,
    },

    /// Email a password reset code
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Set a new password with the emailed code
    ResetPassword {
        #[arg(long)]
        password: String,
        /// Code from the reset email
        #[arg(long)]
        token: String,
    },

    /// Resolve a path against the route table and show what it renders
    Route {
        /// e.g. /feed/1234 or /profile/orders
        path: String,
        /// The list the link was opened from (makes modal routes overlay it)
        #[arg(long, value_name = "PATH")]
        background: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// Show one order with its ingredients and total
    Show { number: u64 },

    /// Build a burger from catalog ids and order it
    Place {
        /// Catalog id of the bun
        #[arg(long)]
        bun: String,
        /// Catalog id of a filling or sauce (repeatable, top to bottom)
        #[arg(long = "add", value_name = "ID")]
        fillings: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Change name, email or password
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}
