use clap::{Parser, Subcommand};
use mailsyntax_lib::{ValidationRequest, ValidatorOptions};

#[derive(Parser, Debug)]
#[command(name = "mailsyntax-cli", version, about = "Contrôle syntaxique d'adresses e-mail")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (rendu selon --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// accepte les caractères non ASCII (RFC 6531)
    #[arg(long)]
    pub international: bool,

    /// refuse les domaines à un seul label (ex. user@localhost)
    #[arg(long)]
    pub no_top_level_domains: bool,

    /// ignore les espaces en début/fin (l'adresse est trimée avant validation)
    #[arg(long)]
    pub trim: bool,

    /// logs de debug sur stderr (RUST_LOG prend le pas)
    #[cfg(feature = "with-tracing")]
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Validate {
        /// adresse à valider
        email: String,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn options(&self) -> ValidatorOptions {
        ValidatorOptions::default()
            .with_international(self.international)
            .with_top_level_domains(!self.no_top_level_domains)
    }

    pub fn request<'a>(&self, email: &'a str) -> ValidationRequest<'a> {
        ValidationRequest::new(email)
            .with_whitespace(self.trim)
            .with_options(self.options())
    }
}
