use crate::catalog::Variant;

/// Prompt text plus the variant it was written for. The engine keeps the
/// variant around so it knows how to read the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPrompt {
    pub text: String,
    pub variant: Variant,
    pub theme_name: String,
}

fn game_intro() -> &'static str {
    r#"You are a creative assistant for a game called "Best-Case Scenario"."#
}

fn tone() -> &'static str {
    "The tone should be lighthearted, optimistic, and suitable for a fun team-building activity."
}

fn simple_style_examples() -> &'static str {
r#"Here are some examples of the style I'm looking for:
- "Miss your bus, but get cast in a movie shooting on the street."
- "Get invited to an apple pie eating contest."
- "Find a secret, beautiful garden in your neighborhood."
- "A barista gives you a free coffee because you have a nice smile.""#
}

fn complex_style_example() -> &'static str {
r#"Here is an example of the style I'm looking for:
{
  "setup": "You find a dusty old lamp in an antique shop. You rub it, and a friendly, but low-key, genie appears. They offer you one of three permanent, personal enhancements.",
  "options": [
    "The ability to have the perfect, witty comeback for any situation, but only after a 5-second delay.",
    "The skill to instantly master any musical instrument you pick up, but you can only play songs from the 1990s.",
    "The power to always find the best parking spot, no matter how crowded the lot is."
  ]
}"#
}

/// Human-readable theme name. Non-blank custom text wins (trimmed);
/// otherwise the key is split on separators and each word capitalised.
pub fn theme_name(theme_key: &str, custom_text: Option<&str>) -> String {
    if let Some(custom) = custom_text.map(str::trim).filter(|s| !s.is_empty()) {
        return custom.to_string();
    }
    let derived = theme_key
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");
    // Keys made only of separators have no words to title-case.
    if derived.is_empty() {
        theme_key.to_string()
    } else {
        derived
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn simple_prompt(count: u32, theme: &str) -> String {
    format!(
"{intro}
Your task is to generate exactly {count} unique, interesting, and direct positive scenarios based on the theme of \"{theme}\".
Each scenario should be a short, single statement that describes a lucky, interesting, favorable, or fun outcome. {tone}
Think of them as small, delightful moments.
{examples}
Now, generate the scenarios.",
        intro = game_intro(),
        count = count,
        theme = theme,
        tone = tone(),
        examples = simple_style_examples(),
    )
}

pub fn complex_prompt(count: u32, theme: &str) -> String {
    format!(
"{intro}
Your task is to generate exactly {count} unique, complex, positive scenarios based on the theme of \"{theme}\".
Each scenario must have two parts:
1. A \"setup\": A brief description of a situation.
2. A list of exactly 3 \"options\": These should all be favorable, but distinct, resolutions to the setup. Each option should appeal to a different kind of personality or value (e.g., adventure vs. comfort, creativity vs. financial gain, social connection vs. personal achievement). The goal is to make the choice interesting and revealing about the person choosing, sparking conversation. {tone}

{example}
Now, generate the scenarios.",
        intro = game_intro(),
        count = count,
        theme = theme,
        tone = tone(),
        example = complex_style_example(),
    )
}

pub fn build_prompt(theme_key: &str, custom_text: Option<&str>, count: u32) -> BuiltPrompt {
    let theme_name = theme_name(theme_key, custom_text);
    let variant = Variant::for_key(theme_key);
    let text = match variant {
        Variant::Simple => simple_prompt(count, &theme_name),
        Variant::Complex => complex_prompt(count, &theme_name),
    };
    BuiltPrompt { text, variant, theme_name }
}
