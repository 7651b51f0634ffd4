//! Arity rules hold for arbitrary argument words.

use proptest::prelude::*;
use shutils::cli::validate;
use shutils::command::{CommandContext, CommandName, CommandParams};
use shutils::error::ToolError;
use std::path::PathBuf;

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./-]{1,12}"
}

fn with_command(command: &str, rest: &[String]) -> Vec<String> {
    let mut args = vec![command.to_string()];
    args.extend(rest.iter().cloned());
    args
}

fn is_arity(result: Result<CommandContext, ToolError>, expected: CommandName) -> bool {
    matches!(result, Err(ToolError::InvalidArity { command }) if command == expected)
}

proptest! {
    #[test]
    fn echo_joins_any_nonempty_words(words in prop::collection::vec(word(), 1..8)) {
        let ctx = validate(&with_command("echo", &words)).unwrap();
        prop_assert_eq!(ctx.name(), CommandName::Echo);
        prop_assert_eq!(ctx.params(), &CommandParams::Echo { text: words.join(" ") });
    }

    #[test]
    fn cat_preserves_paths_in_order(words in prop::collection::vec(word(), 1..8)) {
        let ctx = validate(&with_command("cat", &words)).unwrap();
        let expected: Vec<PathBuf> = words.iter().map(PathBuf::from).collect();
        prop_assert_eq!(ctx.params(), &CommandParams::Cat { paths: expected });
    }

    #[test]
    fn ls_rejects_any_argument(words in prop::collection::vec(word(), 1..5)) {
        prop_assert!(is_arity(validate(&with_command("ls", &words)), CommandName::Ls));
    }

    #[test]
    fn find_accepts_exactly_one(words in prop::collection::vec(word(), 0..5)) {
        let result = validate(&with_command("find", &words));
        if words.len() == 1 {
            let validated = result.unwrap();
            prop_assert_eq!(
                validated.params(),
                &CommandParams::Find { name: words[0].clone() }
            );
        } else {
            prop_assert!(is_arity(result, CommandName::Find));
        }
    }

    #[test]
    fn grep_accepts_exactly_two(words in prop::collection::vec(word(), 0..5)) {
        let result = validate(&with_command("grep", &words));
        if words.len() == 2 {
            let validated = result.unwrap();
            prop_assert_eq!(
                validated.params(),
                &CommandParams::Grep {
                    pattern: words[0].clone(),
                    path: PathBuf::from(&words[1]),
                }
            );
        } else {
            prop_assert!(is_arity(result, CommandName::Grep));
        }
    }

    #[test]
    fn unknown_words_are_rejected(first in "[a-z]{1,8}", rest in prop::collection::vec(word(), 0..3)) {
        prop_assume!(first.parse::<CommandName>().is_err());
        let result = validate(&with_command(&first, &rest));
        prop_assert!(matches!(result, Err(ToolError::UnknownCommand(ref w)) if *w == first));
    }
}
