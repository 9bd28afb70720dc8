//! Interactive password strength assessment tool.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use pwd_assess::{assess_password_strength, reporter, tips};
use secrecy::SecretString;

const RULE_WIDTH: usize = 70;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let rule = "=".repeat(RULE_WIDTH);
    println!("{rule}");
    println!("{}", "PASSWORD STRENGTH ASSESSMENT TOOL".bold());
    println!("{rule}");

    loop {
        print_menu(&rule);
        let Some(choice) = prompt(&mut input, "\nEnter your choice (1/2/3): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                println!("\n{}", "-".repeat(RULE_WIDTH));
                let Some(password) = prompt(&mut input, "Enter a password to assess: ")? else {
                    break;
                };
                if password.is_empty() {
                    println!("⚠ Password cannot be empty!");
                    continue;
                }

                let password = SecretString::new(password.into());
                let assessment = assess_password_strength(&password);
                print!("{}", reporter::render(&assessment));
            }
            "2" => print_tips(&rule),
            "3" => {
                println!("\n{rule}");
                println!("Thank you for using Password Strength Assessment Tool!");
                println!("Stay secure! 🔒");
                println!("{rule}");
                break;
            }
            _ => println!("\n⚠ Invalid choice! Please enter 1, 2, or 3."),
        }
    }

    Ok(())
}

/// Prints the prompt, then reads and trims one line.
/// Returns `None` at end of input so piped sessions terminate cleanly.
fn prompt(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_menu(rule: &str) {
    println!("\n{rule}");
    println!("MENU");
    println!("{rule}");
    println!("1. Check password strength");
    println!("2. View password strength tips");
    println!("3. Exit");
}

fn print_tips(rule: &str) {
    let minor = "-".repeat(RULE_WIDTH);

    println!("\n{rule}");
    println!("PASSWORD STRENGTH TIPS");
    println!("{rule}");
    for suggestion in tips::SUGGESTIONS {
        println!("\n{suggestion}");
    }

    println!("\n{minor}");
    println!("EXAMPLES OF STRONG PASSWORDS:");
    println!("{minor}");
    for (i, example) in tips::STRONG_EXAMPLES.iter().enumerate() {
        println!("{}. {}", i + 1, example);
    }

    println!("\n{minor}");
    println!("WHAT TO AVOID:");
    println!("{minor}");
    for item in tips::AVOID {
        println!("  {item}");
    }
    println!("{rule}");
}
