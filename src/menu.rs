//! Terminal text
//!
//! Menus shown by the client and colored status lines for both binaries.

use std::io::{self, Write};

use crossterm::style::{StyledContent, Stylize};

/// Prompt printed before every input line
pub const PASSWORD_MENU: &str = "\
Insert the type of password and its length (between 6 and 32):
  n: numeric password (only digits)
  a: alphabetic password (only lowercase letters)
  m: mixed password (lowercase letters and digits)
  s: secure password (uppercase letters, lowercase letters, digits, and symbols)
  u: unambiguous secure password (no similar-looking characters)
  h: help menu
  q: quit application
? ";

/// Shown on `h`
pub const HELP_MENU: &str = "
Password Generator Help Menu
Commands:
 h        : show this help menu
 n LENGTH : generate numeric password (digits only)
 a LENGTH : generate alphabetic password (lowercase letters)
 m LENGTH : generate mixed password (lowercase letters and numbers)
 s LENGTH : generate secure password (uppercase, lowercase, numbers, symbols)
 u LENGTH : generate unambiguous secure password (no similar-looking characters)
 q        : quit application

 LENGTH must be between 6 and 32 characters

 Ambiguous characters excluded in 'u' option:
 0 O o (zero and letters O)
 1 l I i (one and letters l, I)
 2 Z z (two and letter Z)
 5 S s (five and letter S)
 8 B (eight and letter B)

If the length is absent, a default value is used: 8
";

/// The prompt menu as printed, in yellow
pub fn menu_prompt() -> StyledContent<&'static str> {
    PASSWORD_MENU.yellow()
}

/// Print the prompt menu without a trailing newline
pub fn print_menu() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", menu_prompt())?;
    stdout.flush()
}

pub fn print_help() {
    println!("{}", HELP_MENU.cyan());
}

/// Input the user can fix by typing again
pub fn print_error(message: &str) {
    println!("{}", message.red());
}

/// Socket or server failure
pub fn print_failure(message: &str) {
    eprintln!("{}", message.magenta());
}

pub fn print_password(password: &str) {
    println!("{}{}\n", "Password generated: ".green(), password.green().bold());
}

pub fn print_listening(addr: &str) {
    println!("{} {}\n", "Server listening...".blue(), addr.yellow());
}
