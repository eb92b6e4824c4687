use crate::layout::NEXT_STEPS;
use colored::Colorize;
use std::path::Path;

pub fn print_banner() {
    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Creating Smart Barangay System structure...".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);
}

/// Prints where the skeleton ended up followed by the numbered manual steps.
pub fn print_success(root: &Path) {
    let fancy_prompt = format!(
        "\n{} {} {}\n",
        "└─".bold().bright_blue(),
        "Structure created successfully at:".bright_green(),
        root.display()
    );

    println!("{}", fancy_prompt);

    println!("{}", "Next steps:".bold());

    for (i, step) in NEXT_STEPS.iter().enumerate() {
        println!("{}. {}", i + 1, step);
    }
}
