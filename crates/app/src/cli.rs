use clap::{Parser, Subcommand};

use candyworld_catalog::{Category, ProductId};

#[derive(Debug, Parser)]
#[command(
    name = "candyworld",
    about = "Query the confectionery catalog and print the result as JSON",
    version
)]
pub struct Cli {
    /// Defaults to `categories`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Categories)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every category with its products
    Categories,
    /// List the products of one category (candy, dessert, drink)
    Category { category: Category },
    /// List the products from one country (exact, case-sensitive)
    Country { name: String },
    /// Show a single product by id
    Product { id: ProductId },
}
