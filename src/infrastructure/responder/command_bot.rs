//! Built-in room assistant.
//!
//! Implements the `MessageResponder` port with a fixed command set plus a
//! keyword-driven fallback for general chat. Commands are an enumerated
//! variant set dispatched with a match, not a table of callbacks.

use async_trait::async_trait;
use rand::Rng;

use crate::common::time::get_utc_timestamp;
use crate::domain::{BotReply, MessageResponder, RoomId, Username};

const BOT_NAME: &str = "Khalid Bot";

const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "What do you call a bear with no teeth? A gummy bear!",
    "Why did the math book look so sad? Because it had too many problems!",
    "What do you call a fake noodle? An impasta!",
    "Why don't eggs tell jokes? They'd crack each other up!",
];

const QUOTES: &[&str] = &[
    "The expert in anything was once a beginner. - Helen Hayes",
    "Education is the most powerful weapon to change the world. - Nelson Mandela",
    "Live as if you were to die tomorrow. Learn as if you were to live forever. - Gandhi",
    "The beautiful thing about learning is that no one can take it away from you. - B.B. King",
    "Education is not preparation for life; education is life itself. - John Dewey",
];

const FACTS: &[&str] = &[
    "Honey never spoils. Archaeologists found 3000-year-old honey in Egyptian tombs!",
    "A day on Venus is longer than a year on Venus.",
    "Bananas are berries, but strawberries aren't!",
    "Octopuses have three hearts and blue blood!",
    "The Eiffel Tower can be 15 cm taller during summer due to thermal expansion.",
];

const MOTIVATIONS: &[&str] = &[
    "You're doing great! Keep pushing forward!",
    "Every expert was once a beginner. Keep learning!",
    "Your potential is limitless. Believe in yourself!",
    "Mistakes are proof that you're trying. Keep going!",
    "Today is a great day to learn something new!",
];

const GENERAL_RESPONSES: &[&str] = &[
    "That's interesting! Tell me more about that.",
    "I understand. How can I help you with that?",
    "Great point! Have you considered other perspectives?",
    "I'm here to help! What else would you like to know?",
    "Learning is a journey. Keep asking questions!",
    "Excellent question! Let me think about that...",
];

/// The bot's enumerated command set.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ping,
    Help,
    Time,
    Date,
    Weather { city: String },
    Joke,
    Quote,
    Fact,
    Motivate,
    Calculate { args: String },
    Unknown { name: String },
    /// Text addressed to the bot without the command prefix.
    GeneralChat { text: String },
}

impl Command {
    /// Split `text` into a command and its argument tail.
    fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if !trimmed.starts_with('.') {
            return Command::GeneralChat {
                text: trimmed.to_string(),
            };
        }

        let (head, tail) = match trimmed.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (trimmed, ""),
        };

        match head.to_ascii_lowercase().as_str() {
            ".ping" => Command::Ping,
            ".help" => Command::Help,
            ".time" => Command::Time,
            ".date" => Command::Date,
            ".weather" => Command::Weather {
                city: tail.to_string(),
            },
            ".joke" => Command::Joke,
            ".quote" => Command::Quote,
            ".fact" => Command::Fact,
            ".motivate" => Command::Motivate,
            ".calculate" | ".math" => Command::Calculate {
                args: tail.to_string(),
            },
            other => Command::Unknown {
                name: other.to_string(),
            },
        }
    }
}

/// `MessageResponder` with the built-in command set.
pub struct CommandBot;

impl CommandBot {
    pub fn new() -> Self {
        Self
    }

    fn pick(options: &[&str]) -> String {
        let idx = rand::thread_rng().gen_range(0..options.len());
        options[idx].to_string()
    }

    fn help_text() -> String {
        [
            "Khalid Bot commands:",
            ".ping - check bot response",
            ".time - current time",
            ".date - today's date",
            ".weather <city> - weather info (demo)",
            ".joke - a random joke",
            ".quote - an inspirational quote",
            ".fact - a random fact",
            ".motivate - a motivational message",
            ".calculate <a> <op> <b> - simple calculator (alias: .math)",
            "Regular messages get a reply too!",
        ]
        .join("\n")
    }

    fn weather(city: &str) -> String {
        if city.is_empty() {
            return "Please specify a city: .weather <city name>".to_string();
        }
        let conditions = ["Sunny", "Cloudy", "Rainy", "Windy", "Snowy"];
        let mut rng = rand::thread_rng();
        let condition = conditions[rng.gen_range(0..conditions.len())];
        let temp = rng.gen_range(10..40);
        format!("Weather in {}: {}, {}°C", city, condition, temp)
    }

    fn calculate(args: &str) -> String {
        let parts: Vec<&str> = args.split_whitespace().collect();
        if parts.len() != 3 {
            return "Usage: .calculate <num1> <operator> <num2> (e.g., .calculate 5 + 3)"
                .to_string();
        }

        let (num1, op, num2) = (parts[0], parts[1], parts[2]);
        let (Ok(a), Ok(b)) = (num1.parse::<f64>(), num2.parse::<f64>()) else {
            return "Please provide valid numbers".to_string();
        };

        let result = match op {
            "+" => a + b,
            "-" => a - b,
            "*" => a * b,
            "/" => {
                if b == 0.0 {
                    return "Cannot divide by zero".to_string();
                }
                a / b
            }
            _ => return "Supported operators: +, -, *, /".to_string(),
        };

        format!("{} {} {} = {}", a, op, b, result)
    }

    fn general_chat(sender: &Username, text: &str) -> String {
        let lower = text.to_lowercase();

        if lower.contains("hello") || lower.contains("hi") {
            return format!("Hello {}! How can I assist you today?", sender);
        }
        if lower.contains("how are you") {
            return format!("I'm doing great, {}! Ready to help!", sender);
        }
        if lower.contains("thank") {
            return format!("You're welcome, {}! Always happy to help!", sender);
        }
        if lower.contains("bye") || lower.contains("goodbye") {
            return format!("Goodbye, {}! Keep learning and growing!", sender);
        }
        if lower.contains("what is") || lower.contains("what are") {
            return format!(
                "That's a great question, {}! What specific aspect would you like to know?",
                sender
            );
        }
        if lower.contains("how to") {
            return format!(
                "Learning new things is exciting! Happy to guide you through that, {}.",
                sender
            );
        }

        Self::pick(GENERAL_RESPONSES)
    }
}

impl Default for CommandBot {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageResponder for CommandBot {
    fn display_name(&self) -> &str {
        BOT_NAME
    }

    async fn respond(&self, room_id: &RoomId, sender: &Username, text: &str) -> Vec<BotReply> {
        tracing::debug!("Bot handling message from '{}' in room '{}'", sender, room_id);

        let reply = match Command::parse(text) {
            Command::Ping => {
                let latency = rand::thread_rng().gen_range(50..150);
                format!("Pong! Response time: {}ms", latency)
            }
            Command::Help => Self::help_text(),
            Command::Time => {
                let now = crate::common::time::timestamp_to_rfc3339(get_utc_timestamp());
                format!("Current time: {}", now)
            }
            Command::Date => {
                let now = chrono::Utc::now().date_naive();
                format!("Today's date: {}", now)
            }
            Command::Weather { city } => Self::weather(&city),
            Command::Joke => Self::pick(JOKES),
            Command::Quote => Self::pick(QUOTES),
            Command::Fact => Self::pick(FACTS),
            Command::Motivate => Self::pick(MOTIVATIONS),
            Command::Calculate { args } => Self::calculate(&args),
            Command::Unknown { name } => format!(
                "Unknown command: {}. Try .help for available commands.",
                name
            ),
            Command::GeneralChat { text } => Self::general_chat(sender, &text),
        };

        vec![BotReply::new(reply)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_id() -> RoomId {
        RoomId::new("room0001".to_string()).unwrap()
    }

    fn sender() -> Username {
        Username::new("alice".to_string()).unwrap()
    }

    #[test]
    fn test_parse_command_with_arguments() {
        // when / then:
        assert_eq!(Command::parse(".ping"), Command::Ping);
        assert_eq!(
            Command::parse(".weather Tokyo"),
            Command::Weather {
                city: "Tokyo".to_string()
            }
        );
        assert_eq!(
            Command::parse(".calculate 5 + 3"),
            Command::Calculate {
                args: "5 + 3".to_string()
            }
        );
        assert_eq!(
            Command::parse(".frobnicate"),
            Command::Unknown {
                name: ".frobnicate".to_string()
            }
        );
        assert_eq!(
            Command::parse("hello there"),
            Command::GeneralChat {
                text: "hello there".to_string()
            }
        );
    }

    #[test]
    fn test_parse_command_is_case_insensitive() {
        // when / then:
        assert_eq!(Command::parse(".PING"), Command::Ping);
        assert_eq!(Command::parse(".Help"), Command::Help);
    }

    #[tokio::test]
    async fn test_ping_returns_single_reply() {
        // given:
        let bot = CommandBot::new();

        // when:
        let replies = bot.respond(&room_id(), &sender(), ".ping").await;

        // then:
        assert_eq!(replies.len(), 1);
        assert!(replies[0].text.starts_with("Pong!"));
    }

    #[tokio::test]
    async fn test_calculate_operations() {
        // given:
        let bot = CommandBot::new();

        // when / then:
        let replies = bot.respond(&room_id(), &sender(), ".calculate 5 + 3").await;
        assert_eq!(replies[0].text, "5 + 3 = 8");

        let replies = bot.respond(&room_id(), &sender(), ".calculate 10 / 0").await;
        assert_eq!(replies[0].text, "Cannot divide by zero");

        let replies = bot.respond(&room_id(), &sender(), ".calculate one + two").await;
        assert_eq!(replies[0].text, "Please provide valid numbers");

        let replies = bot.respond(&room_id(), &sender(), ".calculate 1 ^ 2").await;
        assert_eq!(replies[0].text, "Supported operators: +, -, *, /");
    }

    #[tokio::test]
    async fn test_math_is_a_calculate_alias() {
        // given:
        let bot = CommandBot::new();

        // when:
        let replies = bot.respond(&room_id(), &sender(), ".math 6 * 7").await;

        // then:
        assert_eq!(replies[0].text, "6 * 7 = 42");
    }

    #[tokio::test]
    async fn test_unknown_command_suggests_help() {
        // given:
        let bot = CommandBot::new();

        // when:
        let replies = bot.respond(&room_id(), &sender(), ".dance").await;

        // then:
        assert!(replies[0].text.contains(".dance"));
        assert!(replies[0].text.contains(".help"));
    }

    #[tokio::test]
    async fn test_general_chat_greets_by_name() {
        // given:
        let bot = CommandBot::new();

        // when:
        let replies = bot.respond(&room_id(), &sender(), "hello bot").await;

        // then:
        assert!(replies[0].text.contains("alice"));
    }

    #[tokio::test]
    async fn test_weather_requires_city() {
        // given:
        let bot = CommandBot::new();

        // when:
        let replies = bot.respond(&room_id(), &sender(), ".weather").await;

        // then:
        assert!(replies[0].text.starts_with("Please specify a city"));
    }
}
