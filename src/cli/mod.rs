use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::{self, ThemeDescriptor};

/// Catalog themes as CLI values; each maps onto a `ThemeDescriptor` key.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeArg {
    WorkplaceWins,
    TravelTriumphs,
    DailyDelights,
    SocialSerendipity,
    CreativeBreakthroughs,
    FinancialFortune,
    TechSuccess,
    FoodieFortune,
    PetPals,
    NaturesLuck,
    HobbyHappiness,
    ComplexConundrums,
    Custom,
}

impl ThemeArg {
    pub fn key(self) -> &'static str {
        match self {
            ThemeArg::WorkplaceWins => "workplace_wins",
            ThemeArg::TravelTriumphs => "travel_triumphs",
            ThemeArg::DailyDelights => "daily_delights",
            ThemeArg::SocialSerendipity => "social_serendipity",
            ThemeArg::CreativeBreakthroughs => "creative_breakthroughs",
            ThemeArg::FinancialFortune => "financial_fortune",
            ThemeArg::TechSuccess => "tech_success",
            ThemeArg::FoodieFortune => "foodie_fortune",
            ThemeArg::PetPals => "pet_pals",
            ThemeArg::NaturesLuck => "natures_luck",
            ThemeArg::HobbyHappiness => "hobby_happiness",
            ThemeArg::ComplexConundrums => catalog::COMPLEX_THEME_KEY,
            ThemeArg::Custom => catalog::CUSTOM_THEME_KEY,
        }
    }

    pub fn descriptor(self) -> Option<&'static ThemeDescriptor> {
        catalog::find(self.key())
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountArg {
    #[value(name = "2")]
    Two,
    #[value(name = "3")]
    Three,
    #[value(name = "4")]
    Four,
    #[value(name = "5")]
    Five,
}

impl CountArg {
    pub fn get(self) -> u32 {
        match self {
            CountArg::Two => 2,
            CountArg::Three => 3,
            CountArg::Four => 4,
            CountArg::Five => 5,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "scenario-deck", version, about = "Deal a hand of best-case scenario cards")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// TOML file with model/api_base/timeout_secs.
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true)]
    pub model: Option<String>,

    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a hand of cards (default).
    Generate(GenerateArgs),
    /// List themes and allowed card counts.
    Themes(ThemesArgs),
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ThemesArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(long, value_enum, default_value_t = ThemeArg::WorkplaceWins)]
    pub theme: ThemeArg,

    #[arg(long, value_enum, default_value_t = CountArg::Two)]
    pub count: CountArg,

    /// Free-text theme, used with `--theme custom`.
    #[arg(long)]
    pub custom: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Never prompt for a key; fail when none is configured.
    #[arg(long, default_value_t = false)]
    pub no_prompt: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            theme: ThemeArg::WorkplaceWins,
            count: CountArg::Two,
            custom: None,
            format: OutputFormat::Text,
            no_prompt: false,
        }
    }
}
